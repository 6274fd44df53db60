// ABOUTME: Age/level bracket scaling of professional reference outputs
// ABOUTME: Resolves a bracket into concrete velocity caps and batted-ball floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use swinglab_core::constants::pro_reference;
use swinglab_core::models::AgeBracket;

/// Fractions of professional output expected at each bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBracketConfig {
    /// 10U
    pub u10: f64,
    /// 12U
    pub u12: f64,
    /// 14U
    pub u14: f64,
    /// High school
    pub high_school: f64,
    /// College
    pub college: f64,
    /// Pro
    pub pro: f64,
    /// Professional reference outputs
    pub reference: ProReference,
}

impl Default for AgeBracketConfig {
    fn default() -> Self {
        Self {
            u10: 0.62,
            u12: 0.70,
            u14: 0.78,
            high_school: 0.86,
            college: 0.94,
            pro: 1.00,
            reference: ProReference::default(),
        }
    }
}

impl AgeBracketConfig {
    /// Fraction of professional output expected at `bracket`
    #[must_use]
    pub const fn fraction(&self, bracket: AgeBracket) -> f64 {
        match bracket {
            AgeBracket::U10 => self.u10,
            AgeBracket::U12 => self.u12,
            AgeBracket::U14 => self.u14,
            AgeBracket::HighSchool => self.high_school,
            AgeBracket::College => self.college,
            AgeBracket::Pro => self.pro,
        }
    }

    /// Concrete expectations for `bracket`
    #[must_use]
    pub fn expectations(&self, bracket: AgeBracket) -> BracketExpectations {
        let fraction = self.fraction(bracket);
        BracketExpectations {
            bracket,
            fraction,
            exit_velocity_cap_mph: self.reference.exit_velocity_cap_mph * fraction,
            torso_velocity_deg_s: self.reference.torso_velocity_deg_s * fraction,
            hard_hit_floor_mph: self.reference.hard_hit_floor_mph * fraction,
            barrel_floor_mph: self.reference.barrel_floor_mph * fraction,
            mishit_ceiling_mph: self.reference.mishit_ceiling_mph * fraction,
        }
    }

    /// Fractions must be in (0, 1] and non-decreasing from 10U to Pro
    ///
    /// # Errors
    /// Returns `ConfigError` when a fraction is out of range or out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fractions = AgeBracket::ALL.map(|bracket| self.fraction(bracket));
        if fractions.iter().any(|f| !(*f > 0.0 && *f <= 1.0)) {
            return Err(ConfigError::ValueOutOfRange(
                "age bracket fractions must lie in (0, 1]",
            ));
        }
        if fractions.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::InvalidRange(
                "age bracket fractions must not decrease with age",
            ));
        }
        self.reference.validate()
    }
}

/// Professional-level reference outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProReference {
    /// Exit velocity cap (mph)
    pub exit_velocity_cap_mph: f64,
    /// Peak torso rotational velocity (deg/s)
    pub torso_velocity_deg_s: f64,
    /// Hard-hit floor (mph)
    pub hard_hit_floor_mph: f64,
    /// Barrel floor (mph)
    pub barrel_floor_mph: f64,
    /// Mishit ceiling (mph)
    pub mishit_ceiling_mph: f64,
}

impl ProReference {
    fn validate(&self) -> Result<(), ConfigError> {
        let all_positive = [
            self.exit_velocity_cap_mph,
            self.torso_velocity_deg_s,
            self.hard_hit_floor_mph,
            self.barrel_floor_mph,
            self.mishit_ceiling_mph,
        ]
        .iter()
        .all(|value| *value > 0.0);
        if all_positive {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(
                "professional reference values must be positive",
            ))
        }
    }
}

impl Default for ProReference {
    fn default() -> Self {
        Self {
            exit_velocity_cap_mph: pro_reference::EXIT_VELOCITY_CAP_MPH,
            torso_velocity_deg_s: pro_reference::TORSO_VELOCITY_DEG_S,
            hard_hit_floor_mph: pro_reference::HARD_HIT_FLOOR_MPH,
            barrel_floor_mph: pro_reference::BARREL_FLOOR_MPH,
            mishit_ceiling_mph: pro_reference::MISHIT_CEILING_MPH,
        }
    }
}

/// Reference outputs scaled to one bracket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BracketExpectations {
    /// Bracket these expectations belong to
    pub bracket: AgeBracket,
    /// Fraction of professional output
    pub fraction: f64,
    /// Exit velocity cap (mph)
    pub exit_velocity_cap_mph: f64,
    /// Peak torso rotational velocity (deg/s)
    pub torso_velocity_deg_s: f64,
    /// Hard-hit floor (mph)
    pub hard_hit_floor_mph: f64,
    /// Barrel floor (mph)
    pub barrel_floor_mph: f64,
    /// Mishit ceiling (mph)
    pub mishit_ceiling_mph: f64,
}
