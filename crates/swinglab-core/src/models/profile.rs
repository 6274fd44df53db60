// ABOUTME: Motor profile classification of a hitter's power-generation style
// ABOUTME: Drives drill filtering; parses leniently and defaults to Spinner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Coarse classification of how a hitter naturally generates power
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MotorProfile {
    /// Rotational, stays closed and turns hard around a fixed axis
    #[default]
    Spinner,
    /// Hands-and-barrel dominant, relies on lag and late whip
    Whipper,
    /// Stretch-and-recoil hitter with big separation and linear move
    Slingshotter,
    /// Strength-dominant hitter with heavy ground force
    Titan,
}

impl MotorProfile {
    /// All profiles
    pub const ALL: [Self; 4] = [Self::Spinner, Self::Whipper, Self::Slingshotter, Self::Titan];

    /// Canonical token for this profile
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spinner => "SPINNER",
            Self::Whipper => "WHIPPER",
            Self::Slingshotter => "SLINGSHOTTER",
            Self::Titan => "TITAN",
        }
    }

    /// Parse a profile token, falling back to the default profile on unknown input
    #[must_use]
    pub fn parse_or_default(token: &str) -> Self {
        token.parse().unwrap_or_else(|_| {
            warn!(
                profile.token = %token,
                profile.fallback = %Self::default(),
                "Unknown motor profile, using default"
            );
            Self::default()
        })
    }
}

impl fmt::Display for MotorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotorProfile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SPINNER" => Ok(Self::Spinner),
            "WHIPPER" => Ok(Self::Whipper),
            "SLINGSHOTTER" | "SLINGSHOT" => Ok(Self::Slingshotter),
            "TITAN" => Ok(Self::Titan),
            other => Err(AppError::invalid_input(format!(
                "Unknown motor profile: '{other}'. \
                 Valid options: SPINNER, WHIPPER, SLINGSHOTTER, TITAN"
            ))),
        }
    }
}
