// ABOUTME: Age/level bracket enumeration used to scale velocity expectations
// ABOUTME: Parses caller-supplied keys leniently and falls back to high school
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Competitive level of the hitter
///
/// Scores are always computed relative to the bracket's expected fraction of
/// professional output; only `Pro` compares against the adult baseline directly.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum AgeBracket {
    /// 10 and under
    #[serde(rename = "10U")]
    U10,
    /// 12 and under
    #[serde(rename = "12U")]
    U12,
    /// 14 and under
    #[serde(rename = "14U")]
    U14,
    /// High school
    #[default]
    #[serde(rename = "HS")]
    HighSchool,
    /// College
    #[serde(rename = "College")]
    College,
    /// Professional / adult
    #[serde(rename = "Pro")]
    Pro,
}

impl AgeBracket {
    /// All brackets from youngest to oldest
    pub const ALL: [Self; 6] = [
        Self::U10,
        Self::U12,
        Self::U14,
        Self::HighSchool,
        Self::College,
        Self::Pro,
    ];

    /// Canonical key for this bracket
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::U10 => "10U",
            Self::U12 => "12U",
            Self::U14 => "14U",
            Self::HighSchool => "HS",
            Self::College => "College",
            Self::Pro => "Pro",
        }
    }

    /// Parse a bracket key, falling back to the default bracket on unknown input
    ///
    /// The fallback is logged so typos in caller data stay visible without
    /// interrupting the scoring pipeline.
    #[must_use]
    pub fn parse_or_default(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            warn!(
                bracket.key = %key,
                bracket.fallback = %Self::default(),
                "Unknown age bracket, using default"
            );
            Self::default()
        })
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeBracket {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "10u" | "u10" => Ok(Self::U10),
            "12u" | "u12" => Ok(Self::U12),
            "14u" | "u14" => Ok(Self::U14),
            "hs" | "high_school" | "highschool" | "16u" | "18u" => Ok(Self::HighSchool),
            "college" | "ncaa" => Ok(Self::College),
            "pro" | "mlb" | "adult" => Ok(Self::Pro),
            other => Err(AppError::invalid_input(format!(
                "Unknown age bracket: '{other}'. Valid options: 10U, 12U, 14U, HS, College, Pro"
            ))),
        }
    }
}
