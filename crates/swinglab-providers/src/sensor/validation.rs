// ABOUTME: Plausibility thresholds and validation rules for normalized sensor swings
// ABOUTME: First failing rule rejects the swing; hand-speed ratio raises a non-fatal warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use swinglab_core::constants::env_config;
use swinglab_core::errors::{AppError, AppResult};
use swinglab_core::models::{InvalidReason, SensorMeasurements, SwingWarning, ValidationVerdict};
use tracing::info;

/// Sensor plausibility thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorValidationConfig {
    /// Slowest plausible bat speed (mph)
    pub min_bat_speed_mph: f64,
    /// Fastest plausible bat speed (mph)
    pub max_bat_speed_mph: f64,
    /// Shortest plausible time to contact (seconds)
    pub min_time_to_contact_s: f64,
    /// Longest time to contact for a competitive swing (seconds)
    pub max_time_to_contact_s: f64,
    /// Hand/bat speed ratio below which a warning is raised
    pub min_hand_to_bat_ratio: f64,
}

impl Default for SensorValidationConfig {
    fn default() -> Self {
        Self {
            min_bat_speed_mph: 25.0,
            max_bat_speed_mph: 120.0,
            min_time_to_contact_s: 0.08,
            max_time_to_contact_s: 0.40,
            min_hand_to_bat_ratio: 0.20,
        }
    }
}

impl SensorValidationConfig {
    /// Defaults, or the file named by `SWINGLAB_SENSOR_CONFIG` when set
    ///
    /// # Errors
    /// Returns an error if the configured file cannot be read, parsed or validated
    pub fn load() -> AppResult<Self> {
        match env::var(env_config::SENSOR_CONFIG) {
            Ok(path) if !path.trim().is_empty() => Self::from_json_file(path.trim()),
            _ => Ok(Self::default()),
        }
    }

    /// Read thresholds from a JSON file; absent fields keep their defaults
    ///
    /// # Errors
    /// Returns `ConfigMissing`/`IoError` on read failure, `SerializationError` on bad JSON,
    /// or `ConfigInvalid` when thresholds are inconsistent
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        info!(config.path = %path.display(), "Loaded sensor validation config");
        Ok(config)
    }

    /// Minimums must be below maximums and all thresholds positive
    ///
    /// # Errors
    /// Returns `ConfigInvalid` describing the inconsistent threshold
    pub fn validate(&self) -> AppResult<()> {
        if !(self.min_bat_speed_mph > 0.0 && self.min_bat_speed_mph < self.max_bat_speed_mph) {
            return Err(AppError::config_invalid(
                "min_bat_speed_mph must be positive and below max_bat_speed_mph",
            ));
        }
        if !(self.min_time_to_contact_s > 0.0
            && self.min_time_to_contact_s < self.max_time_to_contact_s)
        {
            return Err(AppError::config_invalid(
                "min_time_to_contact_s must be positive and below max_time_to_contact_s",
            ));
        }
        if self.min_hand_to_bat_ratio < 0.0 {
            return Err(AppError::config_invalid(
                "min_hand_to_bat_ratio must not be negative",
            ));
        }
        Ok(())
    }

    /// Validate one swing's measurements; the first failing rule wins
    #[must_use]
    pub fn verdict(&self, measurements: &SensorMeasurements) -> ValidationVerdict {
        match self.rejection(measurements) {
            Some(reason) => ValidationVerdict::Rejected { reason },
            None => ValidationVerdict::Accepted {
                warnings: self.warnings(measurements),
            },
        }
    }

    fn rejection(&self, measurements: &SensorMeasurements) -> Option<InvalidReason> {
        let Some(bat_speed) = measurements.bat_speed_mph else {
            return Some(InvalidReason::MissingBatSpeed);
        };
        if bat_speed < self.min_bat_speed_mph {
            return Some(InvalidReason::BelowSpeedThreshold);
        }
        if bat_speed > self.max_bat_speed_mph {
            return Some(InvalidReason::AboveSpeedThreshold);
        }
        match measurements.time_to_contact_s {
            Some(ttc) if ttc < self.min_time_to_contact_s => Some(InvalidReason::TimingTooFast),
            Some(ttc) if ttc > self.max_time_to_contact_s => Some(InvalidReason::TimingTooSlow),
            _ => None,
        }
    }

    fn warnings(&self, measurements: &SensorMeasurements) -> Vec<SwingWarning> {
        measurements
            .hand_to_bat_ratio
            .filter(|ratio| *ratio < self.min_hand_to_bat_ratio)
            .map(|_| SwingWarning::HandSpeedLow)
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurements(bat: Option<f64>, ttc: Option<f64>) -> SensorMeasurements {
        SensorMeasurements {
            bat_speed_mph: bat,
            time_to_contact_s: ttc,
            ..SensorMeasurements::default()
        }
    }

    #[test]
    fn test_rules_apply_in_order() {
        let config = SensorValidationConfig::default();
        let reject = |m: &SensorMeasurements| match config.verdict(m) {
            ValidationVerdict::Rejected { reason } => Some(reason),
            ValidationVerdict::Accepted { .. } => None,
        };
        let cases = [
            (measurements(None, Some(0.01)), Some(InvalidReason::MissingBatSpeed)),
            (measurements(Some(20.0), Some(0.01)), Some(InvalidReason::BelowSpeedThreshold)),
            (measurements(Some(121.0), None), Some(InvalidReason::AboveSpeedThreshold)),
            (measurements(Some(70.0), Some(0.05)), Some(InvalidReason::TimingTooFast)),
            (measurements(Some(70.0), Some(0.45)), Some(InvalidReason::TimingTooSlow)),
            (measurements(Some(70.0), Some(0.15)), None),
        ];
        for (input, expected) in cases {
            assert_eq!(reject(&input), expected);
        }
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let config = SensorValidationConfig::default();
        assert!(matches!(
            config.verdict(&measurements(Some(25.0), Some(0.08))),
            ValidationVerdict::Accepted { .. }
        ));
        assert!(matches!(
            config.verdict(&measurements(Some(120.0), Some(0.40))),
            ValidationVerdict::Accepted { .. }
        ));
    }

    #[test]
    fn test_low_hand_ratio_warns() {
        let config = SensorValidationConfig::default();
        let swing = SensorMeasurements {
            bat_speed_mph: Some(70.0),
            hand_speed_mph: Some(10.0),
            hand_to_bat_ratio: Some(0.143),
            ..SensorMeasurements::default()
        };
        assert_eq!(
            config.verdict(&swing),
            ValidationVerdict::Accepted {
                warnings: vec![SwingWarning::HandSpeedLow]
            }
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sensor.json");
        fs::write(&path, r#"{ "max_bat_speed_mph": 100.0 }"#).unwrap();
        let config = SensorValidationConfig::from_json_file(&path).unwrap();
        assert!((config.max_bat_speed_mph - 100.0).abs() < f64::EPSILON);
        assert!((config.min_bat_speed_mph - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let config = SensorValidationConfig {
            min_time_to_contact_s: 0.5,
            ..SensorValidationConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
