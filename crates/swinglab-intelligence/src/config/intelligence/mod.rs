// ABOUTME: Scoring engine configuration root with unified validation and loading
// ABOUTME: Groups the scoring, grading, bracket and prescription configs behind a global default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! Intelligence Configuration Module
//!
//! Every tunable number the scorers use lives here so a coaching staff can
//! replace band tables or weights from a JSON file without touching code.
//!
//! # Module Structure
//!
//! - `four_b` - 4B band tables, category weights, fallbacks and leak thresholds
//! - `kinetic` - Kinetic fingerprint weights, bands and flag thresholds
//! - `grading` - Grade ladder, rating buckets and scout scale
//! - `age_brackets` - Bracket fractions of professional reference output
//! - `prescription` - Drill catalog and motor-profile restrictions

pub mod age_brackets;
pub mod error;
pub mod four_b;
pub mod grading;
pub mod kinetic;
pub mod prescription;

pub use age_brackets::{AgeBracketConfig, BracketExpectations, ProReference};
pub use error::ConfigError;
pub use four_b::{
    FourBAdjustments, FourBBands, FourBConfig, FourBFallbacks, FourBWeights, LeakThresholds,
};
pub use grading::{GradeLadder, GradingConfig, RatingBuckets, ScoutScale};
pub use kinetic::{
    KineticBands, KineticConfig, KineticCountScores, KineticFlagThresholds, KineticWeights,
};
pub use prescription::{DrillDefinition, FitLevel, PrescriptionConfig, ProfileFit};

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use swinglab_core::constants::env_config;
use tracing::{info, warn};

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Configuration for every scoring engine
///
/// Missing sections in a JSON override fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntelligenceConfig {
    /// 4B scorer
    pub four_b: FourBConfig,
    /// Kinetic fingerprint scorer
    pub kinetic: KineticConfig,
    /// Grades and rating buckets
    pub grading: GradingConfig,
    /// Age bracket scaling
    pub age_brackets: AgeBracketConfig,
    /// Drill prescription
    pub prescription: PrescriptionConfig,
}

impl IntelligenceConfig {
    /// Process-wide configuration
    ///
    /// Loaded once from `SWINGLAB_INTELLIGENCE_CONFIG` when set; any load or
    /// validation failure is logged and the defaults are used instead.
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load defaults, apply the file override if configured, then validate
    ///
    /// # Errors
    /// Returns `ConfigError` if the override file cannot be read or parsed, or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = match env::var(env_config::INTELLIGENCE_CONFIG) {
            Ok(path) if !path.trim().is_empty() => Self::from_json_file(path.trim())?,
            _ => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration document; absent sections keep their defaults
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` on malformed JSON or `ConfigError` from validation
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file
    ///
    /// # Errors
    /// Returns `ConfigError::Io` when the file cannot be read, otherwise as `from_json_str`
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!(config.path = %path.display(), "Loaded intelligence config override");
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.four_b.validate()?;
        self.kinetic.validate()?;
        self.grading.validate()?;
        self.age_brackets.validate()?;
        self.prescription.validate()
    }
}
