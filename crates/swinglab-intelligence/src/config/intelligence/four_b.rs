// ABOUTME: 4B (Brain/Body/Bat/Ball) scorer configuration: band tables, weights and leak thresholds
// ABOUTME: Defaults encode the reference scoring windows used for youth through pro hitters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! 4B Scorer Configuration
//!
//! Every banded sub-score, category weight and flag threshold of the 4B scorer.

use super::error::ConfigError;
use crate::bands::{BandTable, Interval};
use serde::{Deserialize, Serialize};
use swinglab_core::constants::numeric::WEIGHT_SUM_TOLERANCE;

/// 4B scorer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FourBConfig {
    /// Band tables per measured input
    pub bands: FourBBands,
    /// Category and composite weights
    pub weights: FourBWeights,
    /// Scores used when an input is missing or unusable
    pub fallbacks: FourBFallbacks,
    /// Penalty and baseline constants
    pub adjustments: FourBAdjustments,
    /// Leak flag thresholds
    pub leak_thresholds: LeakThresholds,
}

impl FourBConfig {
    /// Validate tables, weights and thresholds
    ///
    /// # Errors
    /// Returns `ConfigError` naming the first inconsistent value
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bands.validate()?;
        self.weights.validate()?;
        let leaks = &self.leak_thresholds;
        if leaks.arm_drag_ratio >= leaks.torso_bypass_ratio {
            return Err(ConfigError::InvalidRange(
                "four_b: arm_drag_ratio must be < torso_bypass_ratio",
            ));
        }
        if leaks.simultaneous_gap_pct >= leaks.over_separated_gap_pct {
            return Err(ConfigError::InvalidRange(
                "four_b: simultaneous_gap_pct must be < over_separated_gap_pct",
            ));
        }
        if self.leak_thresholds.early_drift_ratio >= self.leak_thresholds.late_legs_ratio {
            return Err(ConfigError::InvalidRange(
                "four_b: early_drift_ratio must be < late_legs_ratio",
            ));
        }
        Ok(())
    }
}

/// Band tables for each measured 4B input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourBBands {
    /// Arms peak / torso peak momentum
    pub arms_torso_ratio: BandTable,
    /// Torso peak / pelvis peak momentum
    pub torso_pelvis_ratio: BandTable,
    /// Pelvis-to-torso peak gap as percent of time to contact
    pub timing_gap_pct: BandTable,
    /// Torso deceleration before contact (percent)
    pub torso_decel_pct: BandTable,
    /// Bat direction standard deviation (degrees)
    pub bat_direction_std_deg: BandTable,
    /// Average exit velocity as percent of the bracket cap
    pub exit_velocity_pct_of_cap: BandTable,
    /// Barrel rate (percent)
    pub barrel_rate_pct: BandTable,
    /// Hard-hit rate (percent)
    pub hard_hit_rate_pct: BandTable,
    /// Drift timing ratio, scored as a penalty
    pub drift_penalty: BandTable,
}

impl FourBBands {
    fn validate(&self) -> Result<(), ConfigError> {
        self.arms_torso_ratio.validate("four_b.arms_torso_ratio")?;
        self.torso_pelvis_ratio.validate("four_b.torso_pelvis_ratio")?;
        self.timing_gap_pct.validate("four_b.timing_gap_pct")?;
        self.torso_decel_pct.validate("four_b.torso_decel_pct")?;
        self.bat_direction_std_deg.validate("four_b.bat_direction_std_deg")?;
        self.exit_velocity_pct_of_cap.validate("four_b.exit_velocity_pct_of_cap")?;
        self.barrel_rate_pct.validate("four_b.barrel_rate_pct")?;
        self.hard_hit_rate_pct.validate("four_b.hard_hit_rate_pct")?;
        self.drift_penalty.validate("four_b.drift_penalty")
    }
}

impl Default for FourBBands {
    fn default() -> Self {
        Self {
            arms_torso_ratio: BandTable::with_default(65.0, "Developing")
                .band(Interval::closed(1.5, 1.8), 95.0, "Elite")
                .band(Interval::closed_open(1.3, 1.5), 80.0, "Good")
                .band(Interval::open_closed(1.8, 2.0), 80.0, "Good")
                .band(Interval::below(1.1), 45.0, "Poor"),
            torso_pelvis_ratio: BandTable::with_default(60.0, "Developing")
                .band(Interval::closed(1.4, 1.8), 95.0, "Elite")
                .band(Interval::closed_open(1.2, 1.4), 80.0, "Good")
                .band(Interval::open_closed(1.8, 2.1), 80.0, "Good")
                .band(Interval::closed_open(1.0, 1.2), 65.0, "Developing")
                .band(Interval::below(1.0), 45.0, "Poor"),
            timing_gap_pct: BandTable::with_default(42.0, "Poor")
                .band(Interval::closed(12.0, 20.0), 95.0, "Elite")
                .band(Interval::closed_open(8.0, 12.0), 78.0, "Good")
                .band(Interval::open_closed(20.0, 25.0), 78.0, "Good")
                .band(Interval::closed_open(4.0, 8.0), 60.0, "Developing")
                .band(Interval::open_closed(25.0, 32.0), 60.0, "Developing"),
            torso_decel_pct: BandTable::with_default(40.0, "Poor")
                .band(Interval::closed(30.0, 50.0), 95.0, "Elite")
                .band(Interval::closed_open(20.0, 30.0), 80.0, "Good")
                .band(Interval::open_closed(50.0, 60.0), 80.0, "Good")
                .band(Interval::closed_open(10.0, 20.0), 60.0, "Developing"),
            bat_direction_std_deg: BandTable::with_default(45.0, "Poor")
                .band(Interval::at_most(4.0), 95.0, "Elite")
                .band(Interval::open_closed(4.0, 6.0), 85.0, "Good")
                .band(Interval::open_closed(6.0, 8.0), 72.0, "Working")
                .band(Interval::open_closed(8.0, 11.0), 58.0, "Developing"),
            exit_velocity_pct_of_cap: BandTable::with_default(40.0, "Poor")
                .band(Interval::at_least(95.0), 95.0, "Elite")
                .band(Interval::closed_open(85.0, 95.0), 85.0, "Good")
                .band(Interval::closed_open(75.0, 85.0), 70.0, "Working")
                .band(Interval::closed_open(65.0, 75.0), 55.0, "Developing"),
            barrel_rate_pct: BandTable::with_default(40.0, "Poor")
                .band(Interval::at_least(15.0), 95.0, "Elite")
                .band(Interval::closed_open(10.0, 15.0), 85.0, "Good")
                .band(Interval::closed_open(6.0, 10.0), 70.0, "Working")
                .band(Interval::closed_open(3.0, 6.0), 55.0, "Developing"),
            hard_hit_rate_pct: BandTable::with_default(40.0, "Poor")
                .band(Interval::at_least(50.0), 95.0, "Elite")
                .band(Interval::closed_open(40.0, 50.0), 85.0, "Good")
                .band(Interval::closed_open(30.0, 40.0), 70.0, "Working")
                .band(Interval::closed_open(20.0, 30.0), 55.0, "Developing"),
            drift_penalty: BandTable::with_default(35.0, "Off-time")
                .band(Interval::closed(0.85, 1.15), 0.0, "On time")
                .band(Interval::closed_open(0.70, 0.85), 10.0, "Slightly early")
                .band(Interval::open_closed(1.15, 1.30), 10.0, "Slightly late")
                .band(Interval::closed_open(0.55, 0.70), 20.0, "Early")
                .band(Interval::open_closed(1.30, 1.50), 20.0, "Late"),
        }
    }
}

/// Weights of sub-scores within categories and of categories in the composite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourBWeights {
    /// Body: transfer efficiency
    pub body_transfer: f64,
    /// Body: stability
    pub body_stability: f64,
    /// Body: segment velocity percentile
    pub body_velocity: f64,
    /// Brain: timing gap
    pub brain_timing: f64,
    /// Brain: contact consistency
    pub brain_consistency: f64,
    /// Bat: arms/torso transfer
    pub bat_arms_torso: f64,
    /// Bat: torso deceleration
    pub bat_decel: f64,
    /// Bat: path consistency
    pub bat_path: f64,
    /// Ball: exit velocity
    pub ball_exit_velocity: f64,
    /// Ball: barrel rate
    pub ball_barrel: f64,
    /// Ball: hard-hit rate
    pub ball_hard_hit: f64,
    /// Composite: Body
    pub composite_body: f64,
    /// Composite: Brain
    pub composite_brain: f64,
    /// Composite: Bat
    pub composite_bat: f64,
    /// Composite: Ball
    pub composite_ball: f64,
}

impl FourBWeights {
    fn validate(&self) -> Result<(), ConfigError> {
        let groups: [(&'static str, f64); 5] = [
            (
                "four_b body weights must sum to 1.0",
                self.body_transfer + self.body_stability + self.body_velocity,
            ),
            (
                "four_b brain weights must sum to 1.0",
                self.brain_timing + self.brain_consistency,
            ),
            (
                "four_b bat weights must sum to 1.0",
                self.bat_arms_torso + self.bat_decel + self.bat_path,
            ),
            (
                "four_b ball weights must sum to 1.0",
                self.ball_exit_velocity + self.ball_barrel + self.ball_hard_hit,
            ),
            (
                "four_b composite weights must sum to 1.0",
                self.composite_body
                    + self.composite_brain
                    + self.composite_bat
                    + self.composite_ball,
            ),
        ];
        for (message, sum) in groups {
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(ConfigError::InvalidWeights(message));
            }
        }
        Ok(())
    }
}

impl Default for FourBWeights {
    fn default() -> Self {
        Self {
            body_transfer: 0.50,
            body_stability: 0.35,
            body_velocity: 0.15,
            brain_timing: 0.50,
            brain_consistency: 0.50,
            bat_arms_torso: 0.40,
            bat_decel: 0.30,
            bat_path: 0.30,
            ball_exit_velocity: 0.40,
            ball_barrel: 0.30,
            ball_hard_hit: 0.30,
            composite_body: 0.30,
            composite_brain: 0.20,
            composite_bat: 0.30,
            composite_ball: 0.20,
        }
    }
}

/// Scores assigned when an input cannot be computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourBFallbacks {
    /// Transfer ratio with zero or absent denominator
    pub missing_ratio_score: f64,
    /// Timing gap unavailable
    pub missing_timing_score: f64,
    /// Decel, path, exit velocity, barrel or hard-hit unavailable
    pub missing_component_score: f64,
    /// Velocity percentile when no segment velocity was recorded
    pub missing_velocity_percentile: f64,
    /// Contact consistency when no exit velocity spread was recorded
    pub missing_consistency_score: f64,
}

impl Default for FourBFallbacks {
    fn default() -> Self {
        Self {
            missing_ratio_score: 40.0,
            missing_timing_score: 60.0,
            missing_component_score: 50.0,
            missing_velocity_percentile: 75.0,
            missing_consistency_score: 75.0,
        }
    }
}

/// Penalty curves and floors used while composing categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourBAdjustments {
    /// Stability never drops below this
    pub stability_floor: f64,
    /// Exit velocity CV (percent) above which stability is penalised
    pub volatility_cv_baseline: f64,
    /// Stability penalty per CV point over the baseline
    pub volatility_per_cv_point: f64,
    /// Maximum volatility penalty
    pub volatility_max_penalty: f64,
    /// Exit velocity CV (percent) above which consistency is penalised
    pub consistency_cv_baseline: f64,
    /// CV span over which the consistency penalty ramps to its maximum
    pub consistency_cv_span: f64,
    /// Maximum consistency penalty
    pub consistency_max_penalty: f64,
    /// Ball category never drops below this
    pub ball_floor: f64,
    /// Mishit rate (percent) above which Ball is penalised
    pub mishit_baseline_pct: f64,
    /// Ball penalty per mishit point over the baseline
    pub mishit_penalty_per_point: f64,
}

impl Default for FourBAdjustments {
    fn default() -> Self {
        Self {
            stability_floor: 30.0,
            volatility_cv_baseline: 10.0,
            volatility_per_cv_point: 1.25,
            volatility_max_penalty: 25.0,
            consistency_cv_baseline: 12.0,
            consistency_cv_span: 30.0,
            consistency_max_penalty: 35.0,
            ball_floor: 30.0,
            mishit_baseline_pct: 15.0,
            mishit_penalty_per_point: 0.5,
        }
    }
}

/// Thresholds that raise 4B leak flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeakThresholds {
    /// Torso/pelvis score at or below this raises weak transfer
    pub weak_transfer_max_score: f64,
    /// Arms/torso ratio below this raises arm drag
    pub arm_drag_ratio: f64,
    /// Arms/torso ratio above this raises torso bypass
    pub torso_bypass_ratio: f64,
    /// Timing gap below this raises simultaneous
    pub simultaneous_gap_pct: f64,
    /// Timing gap above this raises over-separated
    pub over_separated_gap_pct: f64,
    /// Torso decel below this raises no brake
    pub no_brake_decel_pct: f64,
    /// Drift ratio below this raises early drift
    pub early_drift_ratio: f64,
    /// Drift ratio above this raises late legs
    pub late_legs_ratio: f64,
    /// Direction std above this raises casting
    pub casting_direction_std_deg: f64,
    /// Exit velocity CV above this raises inconsistent contact
    pub inconsistent_contact_cv_pct: f64,
    /// Mishit rate above this raises mishits
    pub mishit_rate_pct: f64,
}

impl Default for LeakThresholds {
    fn default() -> Self {
        Self {
            weak_transfer_max_score: 65.0,
            arm_drag_ratio: 1.1,
            torso_bypass_ratio: 2.0,
            simultaneous_gap_pct: 8.0,
            over_separated_gap_pct: 25.0,
            no_brake_decel_pct: 20.0,
            early_drift_ratio: 0.70,
            late_legs_ratio: 1.30,
            casting_direction_std_deg: 8.0,
            inconsistent_contact_cv_pct: 20.0,
            mishit_rate_pct: 25.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FourBConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unbalanced_composite_weights_rejected() {
        let mut config = FourBConfig::default();
        config.weights.composite_ball = 0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_default_arms_torso_band_edges() {
        let bands = FourBBands::default();
        assert!((bands.arms_torso_ratio.evaluate(1.8).score - 95.0).abs() < f64::EPSILON);
        assert!((bands.arms_torso_ratio.evaluate(1.95).score - 80.0).abs() < f64::EPSILON);
        assert!((bands.arms_torso_ratio.evaluate(1.2).score - 65.0).abs() < f64::EPSILON);
        assert!((bands.arms_torso_ratio.evaluate(2.4).score - 65.0).abs() < f64::EPSILON);
    }
}
