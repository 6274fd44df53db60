// ABOUTME: Grade ladder, rating buckets and scout-scale configuration
// ABOUTME: Maps 0-100 scores to letter grades, colors and the 20-80 scouting scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Grading configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingConfig {
    /// Composite grade ladder
    pub grade_ladder: GradeLadder,
    /// Cut-offs for 4B category rating buckets
    pub category_buckets: RatingBuckets,
    /// Cut-offs for the kinetic fingerprint rating
    pub fingerprint_buckets: RatingBuckets,
    /// Scout scale mapping
    pub scout_scale: ScoutScale,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            grade_ladder: GradeLadder::default(),
            category_buckets: RatingBuckets {
                elite: 85.0,
                good: 70.0,
                working: 55.0,
            },
            fingerprint_buckets: RatingBuckets {
                elite: 90.0,
                good: 80.0,
                working: 60.0,
            },
            scout_scale: ScoutScale::default(),
        }
    }
}

impl GradingConfig {
    /// Validate ladder ordering and bucket ordering
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidRange` when thresholds are not descending
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grade_ladder.validate()?;
        self.category_buckets.validate("category rating buckets must be descending")?;
        self.fingerprint_buckets
            .validate("fingerprint rating buckets must be descending")?;
        if self.scout_scale.floor >= self.scout_scale.ceiling || self.scout_scale.step <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "scout scale floor must be < ceiling with a positive step",
            ));
        }
        Ok(())
    }
}

/// Minimum score for each grade; below `below_average` the grade is Developing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeLadder {
    /// Plus-Plus
    pub plus_plus: f64,
    /// Plus
    pub plus: f64,
    /// Above Average
    pub above_average: f64,
    /// Average
    pub average: f64,
    /// Below Average
    pub below_average: f64,
}

impl GradeLadder {
    fn validate(&self) -> Result<(), ConfigError> {
        let descending = self.plus_plus > self.plus
            && self.plus > self.above_average
            && self.above_average > self.average
            && self.average > self.below_average;
        if descending {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange("grade ladder must be descending"))
        }
    }
}

impl Default for GradeLadder {
    fn default() -> Self {
        Self {
            plus_plus: 80.0,
            plus: 70.0,
            above_average: 60.0,
            average: 50.0,
            below_average: 40.0,
        }
    }
}

/// Minimum score for each rating bucket; below `working` the bucket is Priority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingBuckets {
    /// Elite
    pub elite: f64,
    /// Good
    pub good: f64,
    /// Working
    pub working: f64,
}

impl RatingBuckets {
    fn validate(&self, message: &'static str) -> Result<(), ConfigError> {
        if self.elite > self.good && self.good > self.working {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange(message))
        }
    }
}

/// Linear mapping from 0-100 onto the 20-80 scouting scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoutScale {
    /// Lowest grade
    pub floor: f64,
    /// Highest grade
    pub ceiling: f64,
    /// Grade points per score point
    pub slope: f64,
    /// Grades are rounded to a multiple of this
    pub step: f64,
}

impl Default for ScoutScale {
    fn default() -> Self {
        Self {
            floor: 20.0,
            ceiling: 80.0,
            slope: 0.6,
            step: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grading_is_valid() {
        assert!(GradingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_ladder_out_of_order_rejected() {
        let mut config = GradingConfig::default();
        config.grade_ladder.plus = 85.0;
        assert!(config.validate().is_err());
    }
}
