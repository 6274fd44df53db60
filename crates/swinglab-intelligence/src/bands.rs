// ABOUTME: Piecewise banded scoring tables evaluated top-to-bottom with a default arm
// ABOUTME: Encodes elite/good/developing/poor windows as auditable interval rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! # Banded Scoring
//!
//! Biomechanical quality is not a smooth curve: a torso/pelvis ratio of 1.6 is
//! elite, 1.9 is merely good and 2.5 is a different problem entirely. Every such
//! rule is a `BandTable`: an ordered list of `(interval, score, label)` rows and a
//! mandatory default row. The first interval containing the value wins.
//!
//! Non-finite inputs never match an interval and fall to the default row.

use crate::config::intelligence::ConfigError;
use serde::{Deserialize, Serialize};

/// One end of an interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Bound {
    /// No limit on this side
    Unbounded,
    /// Limit included in the interval
    Inclusive(f64),
    /// Limit excluded from the interval
    Exclusive(f64),
}

/// Range of input values a band covers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Lower end
    pub lower: Bound,
    /// Upper end
    pub upper: Bound,
}

impl Interval {
    /// `[min, max]`
    #[must_use]
    pub const fn closed(min: f64, max: f64) -> Self {
        Self {
            lower: Bound::Inclusive(min),
            upper: Bound::Inclusive(max),
        }
    }

    /// `[min, max)`
    #[must_use]
    pub const fn closed_open(min: f64, max: f64) -> Self {
        Self {
            lower: Bound::Inclusive(min),
            upper: Bound::Exclusive(max),
        }
    }

    /// `(min, max]`
    #[must_use]
    pub const fn open_closed(min: f64, max: f64) -> Self {
        Self {
            lower: Bound::Exclusive(min),
            upper: Bound::Inclusive(max),
        }
    }

    /// `[min, +inf)`
    #[must_use]
    pub const fn at_least(min: f64) -> Self {
        Self {
            lower: Bound::Inclusive(min),
            upper: Bound::Unbounded,
        }
    }

    /// `(min, +inf)`
    #[must_use]
    pub const fn above(min: f64) -> Self {
        Self {
            lower: Bound::Exclusive(min),
            upper: Bound::Unbounded,
        }
    }

    /// `(-inf, max)`
    #[must_use]
    pub const fn below(max: f64) -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Exclusive(max),
        }
    }

    /// `(-inf, max]`
    #[must_use]
    pub const fn at_most(max: f64) -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Inclusive(max),
        }
    }

    /// Whether `value` lies inside the interval
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let lower_ok = match self.lower {
            Bound::Unbounded => true,
            Bound::Inclusive(min) => value >= min,
            Bound::Exclusive(min) => value > min,
        };
        let upper_ok = match self.upper {
            Bound::Unbounded => true,
            Bound::Inclusive(max) => value <= max,
            Bound::Exclusive(max) => value < max,
        };
        lower_ok && upper_ok
    }
}

/// One row of a band table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Inputs this row applies to
    pub interval: Interval,
    /// Score awarded
    pub score: f64,
    /// Qualitative label
    pub label: String,
}

/// Score and label selected by a band table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScore<'a> {
    /// Score awarded
    pub score: f64,
    /// Qualitative label
    pub label: &'a str,
}

/// Ordered band rows plus the mandatory default row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandTable {
    /// Rows evaluated top to bottom
    pub bands: Vec<Band>,
    /// Score when no row matches
    pub default_score: f64,
    /// Label when no row matches
    pub default_label: String,
}

impl BandTable {
    /// Start a table with its default row
    #[must_use]
    pub fn with_default(score: f64, label: &str) -> Self {
        Self {
            bands: Vec::new(),
            default_score: score,
            default_label: label.to_owned(),
        }
    }

    /// Append a row
    #[must_use]
    pub fn band(mut self, interval: Interval, score: f64, label: &str) -> Self {
        self.bands.push(Band {
            interval,
            score,
            label: label.to_owned(),
        });
        self
    }

    /// Score a value; the first matching row wins
    #[must_use]
    pub fn evaluate(&self, value: f64) -> BandScore<'_> {
        self.bands
            .iter()
            .find(|band| band.interval.contains(value))
            .map_or(
                BandScore {
                    score: self.default_score,
                    label: &self.default_label,
                },
                |band| BandScore {
                    score: band.score,
                    label: &band.label,
                },
            )
    }

    /// Check every score lies in `[0, 100]`
    ///
    /// # Errors
    /// Returns `ConfigError::ValueOutOfRange` naming the table when a score is out of range
    pub fn validate(&self, table: &'static str) -> Result<(), ConfigError> {
        let in_range = |score: f64| (0.0..=100.0).contains(&score);
        if in_range(self.default_score) && self.bands.iter().all(|band| in_range(band.score)) {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(table))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BandTable {
        BandTable::with_default(10.0, "Poor")
            .band(Interval::closed(1.0, 2.0), 90.0, "Elite")
            .band(Interval::closed_open(0.5, 1.0), 60.0, "Good")
            .band(Interval::open_closed(2.0, 3.0), 60.0, "Good")
    }

    #[test]
    fn test_closed_bounds_are_inclusive() {
        let table = sample();
        assert!((table.evaluate(1.0).score - 90.0).abs() < f64::EPSILON);
        assert!((table.evaluate(2.0).score - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_open_bounds_fall_through() {
        let table = sample();
        assert_eq!(table.evaluate(2.5).label, "Good");
        assert_eq!(table.evaluate(0.4).label, "Poor");
        assert_eq!(table.evaluate(3.01).label, "Poor");
    }

    #[test]
    fn test_non_finite_values_use_default() {
        let table = sample();
        assert_eq!(table.evaluate(f64::NAN).label, "Poor");
        assert_eq!(table.evaluate(f64::INFINITY).label, "Poor");
    }

    #[test]
    fn test_validate_rejects_out_of_range_scores() {
        let table = BandTable::with_default(120.0, "Broken");
        assert!(table.validate("broken").is_err());
        assert!(sample().validate("sample").is_ok());
    }
}
