// ABOUTME: Kinematic swing measurement models consumed by the scoring engines
// ABOUTME: SwingMetrics summary, MomentumFrame time-series sample, BattedBall outcome row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

use crate::constants::numeric::ZERO_EPSILON;
use serde::{Deserialize, Serialize};

/// Kinetic-chain segment, listed in canonical ground-up firing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Hips
    Pelvis,
    /// Trunk
    Torso,
    /// Lead and trail arms
    Arms,
    /// The bat itself
    Bat,
}

impl Segment {
    /// Ground-up order energy should travel through the chain
    pub const KINETIC_CHAIN: [Self; 4] = [Self::Pelvis, Self::Torso, Self::Arms, Self::Bat];

    /// Angular momentum of this segment in a frame
    #[must_use]
    pub const fn momentum(&self, frame: &MomentumFrame) -> f64 {
        match self {
            Self::Pelvis => frame.pelvis_momentum,
            Self::Torso => frame.torso_momentum,
            Self::Arms => frame.arms_momentum,
            Self::Bat => frame.bat_momentum,
        }
    }

    /// Kinetic energy of this segment in a frame, when recorded
    #[must_use]
    pub const fn energy(&self, frame: &MomentumFrame) -> Option<f64> {
        match self {
            Self::Pelvis => frame.pelvis_energy,
            Self::Torso => frame.torso_energy,
            Self::Arms => frame.arms_energy,
            Self::Bat => frame.bat_energy,
        }
    }
}

/// Per-swing or per-session kinematic summary
///
/// Every field is optional: a session recorded with only a bat sensor still
/// scores, with the missing categories resolving to documented fallbacks.
/// Frames may be sample indices or seconds as long as one swing uses one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwingMetrics {
    /// Peak absolute angular momentum of the pelvis
    pub pelvis_momentum_peak: Option<f64>,
    /// Peak absolute angular momentum of the torso
    pub torso_momentum_peak: Option<f64>,
    /// Peak absolute angular momentum of the arms
    pub arms_momentum_peak: Option<f64>,
    /// Peak absolute angular momentum of the bat
    pub bat_momentum_peak: Option<f64>,

    /// Frame/time of the pelvis peak
    pub pelvis_peak_frame: Option<f64>,
    /// Frame/time of the torso peak
    pub torso_peak_frame: Option<f64>,
    /// Frame/time of the arms peak
    pub arms_peak_frame: Option<f64>,
    /// Frame/time of the bat peak
    pub bat_peak_frame: Option<f64>,
    /// Frame/time of ball contact
    pub contact_frame: Option<f64>,

    /// Percentage the pelvis slowed from its peak by contact
    pub pelvis_decel_pct: Option<f64>,
    /// Percentage the torso slowed from its peak by contact
    pub torso_decel_pct: Option<f64>,
    /// When forward drift stops relative to stride landing (1.0 = on time)
    pub drift_timing_ratio: Option<f64>,
    /// Standard deviation of bat direction across swings (degrees)
    pub bat_direction_std_deg: Option<f64>,
    /// Peak torso rotational velocity (deg/s)
    pub torso_velocity_peak_deg_s: Option<f64>,

    /// Average exit velocity (mph)
    pub exit_velocity_avg_mph: Option<f64>,
    /// Maximum exit velocity (mph)
    pub exit_velocity_max_mph: Option<f64>,
    /// Coefficient of variation of exit velocity (percent)
    pub exit_velocity_cv_pct: Option<f64>,
    /// Share of balls that were barrels (percent)
    pub barrel_rate_pct: Option<f64>,
    /// Share of balls that were hard-hit (percent)
    pub hard_hit_rate_pct: Option<f64>,
    /// Share of swings that were mishits (percent)
    pub mishit_rate_pct: Option<f64>,
}

impl SwingMetrics {
    /// Torso peak over pelvis peak, `None` when the pelvis peak is absent or zero
    #[must_use]
    pub fn torso_pelvis_ratio(&self) -> Option<f64> {
        safe_ratio(self.torso_momentum_peak?, self.pelvis_momentum_peak?)
    }

    /// Arms peak over torso peak, `None` when the torso peak is absent or zero
    #[must_use]
    pub fn arms_torso_ratio(&self) -> Option<f64> {
        safe_ratio(self.arms_momentum_peak?, self.torso_momentum_peak?)
    }

    /// Pelvis-to-torso peak delay as a percentage of time to contact
    #[must_use]
    pub fn timing_gap_pct(&self) -> Option<f64> {
        let gap = self.torso_peak_frame? - self.pelvis_peak_frame?;
        safe_ratio(gap, self.contact_frame?).map(|ratio| ratio * 100.0)
    }

    /// Fill every absent field from `fallback`, keeping values already present
    #[must_use]
    pub fn fill_missing_from(self, fallback: &Self) -> Self {
        Self {
            pelvis_momentum_peak: self.pelvis_momentum_peak.or(fallback.pelvis_momentum_peak),
            torso_momentum_peak: self.torso_momentum_peak.or(fallback.torso_momentum_peak),
            arms_momentum_peak: self.arms_momentum_peak.or(fallback.arms_momentum_peak),
            bat_momentum_peak: self.bat_momentum_peak.or(fallback.bat_momentum_peak),
            pelvis_peak_frame: self.pelvis_peak_frame.or(fallback.pelvis_peak_frame),
            torso_peak_frame: self.torso_peak_frame.or(fallback.torso_peak_frame),
            arms_peak_frame: self.arms_peak_frame.or(fallback.arms_peak_frame),
            bat_peak_frame: self.bat_peak_frame.or(fallback.bat_peak_frame),
            contact_frame: self.contact_frame.or(fallback.contact_frame),
            pelvis_decel_pct: self.pelvis_decel_pct.or(fallback.pelvis_decel_pct),
            torso_decel_pct: self.torso_decel_pct.or(fallback.torso_decel_pct),
            drift_timing_ratio: self.drift_timing_ratio.or(fallback.drift_timing_ratio),
            bat_direction_std_deg: self.bat_direction_std_deg.or(fallback.bat_direction_std_deg),
            torso_velocity_peak_deg_s: self
                .torso_velocity_peak_deg_s
                .or(fallback.torso_velocity_peak_deg_s),
            exit_velocity_avg_mph: self.exit_velocity_avg_mph.or(fallback.exit_velocity_avg_mph),
            exit_velocity_max_mph: self.exit_velocity_max_mph.or(fallback.exit_velocity_max_mph),
            exit_velocity_cv_pct: self.exit_velocity_cv_pct.or(fallback.exit_velocity_cv_pct),
            barrel_rate_pct: self.barrel_rate_pct.or(fallback.barrel_rate_pct),
            hard_hit_rate_pct: self.hard_hit_rate_pct.or(fallback.hard_hit_rate_pct),
            mishit_rate_pct: self.mishit_rate_pct.or(fallback.mishit_rate_pct),
        }
    }
}

/// Divide, returning `None` for zero, near-zero or non-finite inputs
fn safe_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if !numerator.is_finite() || !denominator.is_finite() || denominator.abs() < ZERO_EPSILON {
        return None;
    }
    Some(numerator / denominator)
}

/// One sample of the full-body momentum/energy time series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MomentumFrame {
    /// Pelvis angular momentum
    pub pelvis_momentum: f64,
    /// Torso angular momentum
    pub torso_momentum: f64,
    /// Arms angular momentum
    pub arms_momentum: f64,
    /// Bat angular momentum
    pub bat_momentum: f64,
    /// Pelvis rotation angle (degrees)
    #[serde(default)]
    pub pelvis_rotation_deg: Option<f64>,
    /// Torso rotation angle (degrees)
    #[serde(default)]
    pub torso_rotation_deg: Option<f64>,
    /// Time relative to peak hand speed; negative before, non-negative after
    #[serde(default)]
    pub time_from_max_hand: Option<f64>,
    /// Pelvis kinetic energy
    #[serde(default)]
    pub pelvis_energy: Option<f64>,
    /// Torso kinetic energy
    #[serde(default)]
    pub torso_energy: Option<f64>,
    /// Arms kinetic energy
    #[serde(default)]
    pub arms_energy: Option<f64>,
    /// Bat kinetic energy
    #[serde(default)]
    pub bat_energy: Option<f64>,
}

/// One launch-monitor row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattedBall {
    /// Exit velocity (mph)
    pub exit_velocity_mph: f64,
    /// Vertical launch angle (degrees)
    #[serde(default)]
    pub launch_angle_deg: Option<f64>,
    /// Projected distance (feet)
    #[serde(default)]
    pub distance_ft: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios_guard_zero_denominators() {
        let metrics = SwingMetrics {
            pelvis_momentum_peak: Some(0.0),
            torso_momentum_peak: Some(12.0),
            arms_momentum_peak: Some(18.0),
            ..SwingMetrics::default()
        };
        assert_eq!(metrics.torso_pelvis_ratio(), None);
        assert_eq!(metrics.arms_torso_ratio(), Some(1.5));
    }

    #[test]
    fn test_timing_gap_pct() {
        let metrics = SwingMetrics {
            pelvis_peak_frame: Some(40.0),
            torso_peak_frame: Some(56.0),
            contact_frame: Some(100.0),
            ..SwingMetrics::default()
        };
        let gap = metrics.timing_gap_pct().unwrap();
        assert!((gap - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_fill_missing_keeps_present_values() {
        let primary = SwingMetrics {
            exit_velocity_avg_mph: Some(80.0),
            ..SwingMetrics::default()
        };
        let fallback = SwingMetrics {
            exit_velocity_avg_mph: Some(70.0),
            barrel_rate_pct: Some(12.0),
            ..SwingMetrics::default()
        };
        let merged = primary.fill_missing_from(&fallback);
        assert_eq!(merged.exit_velocity_avg_mph, Some(80.0));
        assert_eq!(merged.barrel_rate_pct, Some(12.0));
    }
}
