// ABOUTME: Kinetic fingerprint configuration: component weights, band tables and flag thresholds
// ABOUTME: Scores a full momentum/energy time series independently of the 4B scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

use super::error::ConfigError;
use crate::bands::{BandTable, Interval};
use serde::{Deserialize, Serialize};
use swinglab_core::constants::numeric::WEIGHT_SUM_TOLERANCE;

/// Kinetic fingerprint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KineticConfig {
    /// Component weights
    pub weights: KineticWeights,
    /// Band tables for the continuous components
    pub bands: KineticBands,
    /// Scores for the count-based components
    pub counts: KineticCountScores,
    /// Score used when a component has no data
    pub missing_data_score: f64,
    /// Flag thresholds
    pub flags: KineticFlagThresholds,
}

impl Default for KineticConfig {
    fn default() -> Self {
        Self {
            weights: KineticWeights::default(),
            bands: KineticBands::default(),
            counts: KineticCountScores::default(),
            missing_data_score: 40.0,
            flags: KineticFlagThresholds::default(),
        }
    }
}

impl KineticConfig {
    /// Validate weights, tables and count scores
    ///
    /// # Errors
    /// Returns `ConfigError` naming the first inconsistent value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.weights.transfer_ratio
            + self.weights.timing_gap
            + self.weights.deceleration
            + self.weights.sequence_order
            + self.weights.energy_delivery
            + self.weights.x_factor;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "kinetic component weights must sum to 1.0",
            ));
        }
        self.bands.transfer_ratio.validate("kinetic.transfer_ratio")?;
        self.bands.timing_gap_pct.validate("kinetic.timing_gap_pct")?;
        self.bands.energy_delivery_pct.validate("kinetic.energy_delivery_pct")?;
        self.bands.x_factor_deg.validate("kinetic.x_factor_deg")?;
        let counts_ok = self
            .counts
            .decel_scores
            .iter()
            .chain(self.counts.inversion_scores.iter())
            .all(|score| (0.0..=100.0).contains(score));
        if !counts_ok || !(0.0..=100.0).contains(&self.missing_data_score) {
            return Err(ConfigError::ValueOutOfRange(
                "kinetic count scores must lie in [0, 100]",
            ));
        }
        if self.flags.low_separation_deg >= self.flags.over_rotation_deg {
            return Err(ConfigError::InvalidRange(
                "kinetic: low_separation_deg must be < over_rotation_deg",
            ));
        }
        Ok(())
    }
}

/// Weight of each fingerprint component in the total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KineticWeights {
    /// Torso/pelvis momentum ratio
    pub transfer_ratio: f64,
    /// Pelvis-to-torso peak gap
    pub timing_gap: f64,
    /// Segments braking before contact
    pub deceleration: f64,
    /// Proximal-to-distal firing order
    pub sequence_order: f64,
    /// Share of energy in the bat at contact
    pub energy_delivery: f64,
    /// Maximum hip/shoulder separation
    pub x_factor: f64,
}

impl Default for KineticWeights {
    fn default() -> Self {
        Self {
            transfer_ratio: 0.25,
            timing_gap: 0.20,
            deceleration: 0.20,
            sequence_order: 0.15,
            energy_delivery: 0.10,
            x_factor: 0.10,
        }
    }
}

/// Band tables for continuous fingerprint components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KineticBands {
    /// Torso/pelvis peak momentum ratio
    pub transfer_ratio: BandTable,
    /// Peak gap as percent of contact time
    pub timing_gap_pct: BandTable,
    /// Bat energy as percent of total at contact
    pub energy_delivery_pct: BandTable,
    /// Maximum torso/pelvis rotation difference (degrees)
    pub x_factor_deg: BandTable,
}

impl Default for KineticBands {
    fn default() -> Self {
        Self {
            transfer_ratio: BandTable::with_default(30.0, "Poor")
                .band(Interval::closed(1.50, 1.80), 100.0, "Elite")
                .band(Interval::closed_open(1.30, 1.50), 85.0, "Good")
                .band(Interval::open_closed(1.80, 2.00), 85.0, "Good")
                .band(Interval::closed_open(1.10, 1.30), 65.0, "Working")
                .band(Interval::open_closed(2.00, 2.30), 65.0, "Working")
                .band(Interval::closed_open(0.90, 1.10), 50.0, "Developing"),
            timing_gap_pct: BandTable::with_default(40.0, "Poor")
                .band(Interval::closed(14.0, 18.0), 100.0, "Elite")
                .band(Interval::closed_open(10.0, 14.0), 80.0, "Good")
                .band(Interval::open_closed(18.0, 22.0), 80.0, "Good")
                .band(Interval::closed_open(6.0, 10.0), 60.0, "Working")
                .band(Interval::open_closed(22.0, 26.0), 60.0, "Working"),
            energy_delivery_pct: BandTable::with_default(40.0, "Poor")
                .band(Interval::above(45.0), 100.0, "Elite")
                .band(Interval::open_closed(40.0, 45.0), 85.0, "Good")
                .band(Interval::open_closed(35.0, 40.0), 70.0, "Working")
                .band(Interval::closed(30.0, 35.0), 55.0, "Developing"),
            x_factor_deg: BandTable::with_default(40.0, "Poor")
                .band(Interval::closed(50.0, 60.0), 100.0, "Elite")
                .band(Interval::closed_open(45.0, 50.0), 85.0, "Good")
                .band(Interval::open_closed(60.0, 65.0), 85.0, "Good")
                .band(Interval::above(65.0), 55.0, "Over-rotation")
                .band(Interval::closed_open(35.0, 45.0), 65.0, "Working"),
        }
    }
}

/// Scores for count-based components, indexed by count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KineticCountScores {
    /// Score by number of braking segments (index 0..=3)
    pub decel_scores: [f64; 4],
    /// Score by number of out-of-order pairs (index 0..=3, last entry covers 3+)
    pub inversion_scores: [f64; 4],
}

impl KineticCountScores {
    /// Score for a number of segments that braked before contact
    #[must_use]
    pub fn decel_score(&self, count: usize) -> f64 {
        self.decel_scores[count.min(self.decel_scores.len() - 1)]
    }

    /// Score for a number of out-of-order segment pairs
    #[must_use]
    pub fn inversion_score(&self, inversions: usize) -> f64 {
        self.inversion_scores[inversions.min(self.inversion_scores.len() - 1)]
    }
}

impl Default for KineticCountScores {
    fn default() -> Self {
        Self {
            decel_scores: [20.0, 40.0, 70.0, 100.0],
            inversion_scores: [100.0, 70.0, 40.0, 20.0],
        }
    }
}

/// Thresholds that raise fingerprint leak flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KineticFlagThresholds {
    /// Transfer score at or below this raises weak transfer
    pub weak_transfer_max_score: f64,
    /// Gap below this raises simultaneous
    pub simultaneous_gap_pct: f64,
    /// Gap above this raises over-separated
    pub over_separated_gap_pct: f64,
    /// Braking count at or below this raises no brake
    pub no_brake_max_count: usize,
    /// Inversions at or above this raise no sequence
    pub no_sequence_min_inversions: usize,
    /// Energy score at or below this raises energy leak
    pub energy_leak_max_score: f64,
    /// X-factor below this raises low separation
    pub low_separation_deg: f64,
    /// X-factor above this raises over-rotation
    pub over_rotation_deg: f64,
}

impl Default for KineticFlagThresholds {
    fn default() -> Self {
        Self {
            weak_transfer_max_score: 65.0,
            simultaneous_gap_pct: 10.0,
            over_separated_gap_pct: 20.0,
            no_brake_max_count: 1,
            no_sequence_min_inversions: 2,
            energy_leak_max_score: 55.0,
            low_separation_deg: 35.0,
            over_rotation_deg: 65.0,
        }
    }
}
