// ABOUTME: Score newtype, letter grades, rating buckets and 20-80 scout grades
// ABOUTME: Total over all floats: non-finite input maps to the lowest grade and bucket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! # Grading
//!
//! Scores are carried as [`Score`], a 0-100 value that can never be NaN or
//! infinite. Grades, rating buckets and scout grades are derived from it using
//! the thresholds in [`GradingConfig`].

use crate::config::intelligence::{GradingConfig, RatingBuckets};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score on the 0-100 scale
///
/// Out-of-range values are clamped; NaN and infinities become 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Lowest score
    pub const MIN: Self = Self(0.0);

    /// Create a score, clamping to `[0, 100]`
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 100.0))
        } else {
            Self::MIN
        }
    }

    /// Raw value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Value rounded to one decimal place, for display
    #[must_use]
    pub fn rounded(self) -> f64 {
        (self.0 * 10.0).round() / 10.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Letter grade for a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// Lowest grade
    #[serde(rename = "Developing")]
    Developing,
    /// Below average
    #[serde(rename = "Below Average")]
    BelowAverage,
    /// Average
    #[serde(rename = "Average")]
    Average,
    /// Above average
    #[serde(rename = "Above Average")]
    AboveAverage,
    /// Plus
    #[serde(rename = "Plus")]
    Plus,
    /// Plus-plus
    #[serde(rename = "Plus-Plus")]
    PlusPlus,
}

impl Grade {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Developing => "Developing",
            Self::BelowAverage => "Below Average",
            Self::Average => "Average",
            Self::AboveAverage => "Above Average",
            Self::Plus => "Plus",
            Self::PlusPlus => "Plus-Plus",
        }
    }

    /// Hex display color
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::PlusPlus => "#16a34a",
            Self::Plus => "#22c55e",
            Self::AboveAverage => "#84cc16",
            Self::Average => "#eab308",
            Self::BelowAverage => "#f97316",
            Self::Developing => "#ef4444",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Four-level rating used for categories and the kinetic fingerprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RatingBucket {
    /// Needs immediate work
    Priority,
    /// In progress
    Working,
    /// Good
    Good,
    /// Elite
    Elite,
}

impl RatingBucket {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Priority => "Priority",
            Self::Working => "Working",
            Self::Good => "Good",
            Self::Elite => "Elite",
        }
    }

    /// Hex display color
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Elite => "#16a34a",
            Self::Good => "#3b82f6",
            Self::Working => "#eab308",
            Self::Priority => "#ef4444",
        }
    }
}

impl fmt::Display for RatingBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grade on the 20-80 scouting scale, in steps of 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoutGrade(u8);

impl ScoutGrade {
    /// Numeric grade
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ScoutGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps scores to grades, buckets and scout grades
#[derive(Debug, Clone, Copy)]
pub struct Grader<'a> {
    config: &'a GradingConfig,
}

impl<'a> Grader<'a> {
    /// Grader over `config`
    #[must_use]
    pub const fn new(config: &'a GradingConfig) -> Self {
        Self { config }
    }

    /// Letter grade for a composite score
    #[must_use]
    pub fn grade(&self, score: Score) -> Grade {
        let ladder = &self.config.grade_ladder;
        let value = score.value();
        if value >= ladder.plus_plus {
            Grade::PlusPlus
        } else if value >= ladder.plus {
            Grade::Plus
        } else if value >= ladder.above_average {
            Grade::AboveAverage
        } else if value >= ladder.average {
            Grade::Average
        } else if value >= ladder.below_average {
            Grade::BelowAverage
        } else {
            Grade::Developing
        }
    }

    /// Rating bucket for a 4B category score
    #[must_use]
    pub fn category_bucket(&self, score: Score) -> RatingBucket {
        bucket(&self.config.category_buckets, score)
    }

    /// Rating bucket for a kinetic fingerprint total
    #[must_use]
    pub fn fingerprint_bucket(&self, score: Score) -> RatingBucket {
        bucket(&self.config.fingerprint_buckets, score)
    }

    /// Scout grade: `floor + score * slope`, rounded to the nearest step and clamped
    #[must_use]
    pub fn scout_grade(&self, score: Score) -> ScoutGrade {
        let scale = &self.config.scout_scale;
        let raw = score.value().mul_add(scale.slope, scale.floor);
        let stepped = (raw / scale.step).round() * scale.step;
        ScoutGrade(stepped.clamp(scale.floor, scale.ceiling) as u8)
    }
}

fn bucket(buckets: &RatingBuckets, score: Score) -> RatingBucket {
    let value = score.value();
    if value >= buckets.elite {
        RatingBucket::Elite
    } else if value >= buckets.good {
        RatingBucket::Good
    } else if value >= buckets.working {
        RatingBucket::Working
    } else {
        RatingBucket::Priority
    }
}
