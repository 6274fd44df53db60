// ABOUTME: Environment configuration for the scoring engine and CLI
// ABOUTME: Resolves default bracket/profile and optional scoring and sensor config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! Environment-based configuration
//!
//! | Variable | Effect |
//! |---|---|
//! | `SWINGLAB_DEFAULT_AGE_BRACKET` | Bracket for sessions that do not name one (default `hs`) |
//! | `SWINGLAB_DEFAULT_MOTOR_PROFILE` | Profile for unlabeled sessions (default `SPINNER`) |
//! | `SWINGLAB_INTELLIGENCE_CONFIG` | JSON file replacing scoring tables and the drill catalog |
//! | `SWINGLAB_SENSOR_CONFIG` | JSON file replacing sensor validation thresholds |

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use swinglab_core::constants::env_config;
use swinglab_core::errors::AppError;
use swinglab_core::models::{AgeBracket, MotorProfile};
use swinglab_intelligence::IntelligenceConfig;
use swinglab_providers::SensorValidationConfig;
use tracing::info;

/// Engine settings shared by the pipeline and CLI
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Bracket used when a session does not name one
    pub default_age_bracket: AgeBracket,
    /// Profile used when a session does not name one
    pub default_motor_profile: MotorProfile,
    /// Scoring override file, when configured
    pub intelligence_config_path: Option<PathBuf>,
    /// Sensor threshold override file, when configured
    pub sensor_config_path: Option<PathBuf>,
    /// Scoring tables and drill catalog
    pub intelligence: IntelligenceConfig,
    /// Sensor validation thresholds
    pub sensor: SensorValidationConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// Unknown bracket or profile tokens fall back with a warning. Unlike the
    /// process-wide defaults, a configured override file that fails to load is
    /// an error here.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured override file cannot be read, parsed or validated
    pub fn from_env() -> Result<Self> {
        let default_age_bracket = env_var_opt(env_config::DEFAULT_AGE_BRACKET)
            .map_or_else(AgeBracket::default, |key| AgeBracket::parse_or_default(&key));
        let default_motor_profile = env_var_opt(env_config::DEFAULT_MOTOR_PROFILE)
            .map_or_else(MotorProfile::default, |token| {
                MotorProfile::parse_or_default(&token)
            });
        let intelligence_config_path =
            env_var_opt(env_config::INTELLIGENCE_CONFIG).map(PathBuf::from);
        let sensor_config_path = env_var_opt(env_config::SENSOR_CONFIG).map(PathBuf::from);

        let intelligence = intelligence_config_path
            .as_deref()
            .map_or_else(|| Ok(IntelligenceConfig::default()), load_intelligence)?;
        let sensor = sensor_config_path
            .as_deref()
            .map_or_else(|| Ok(SensorValidationConfig::default()), load_sensor)?;

        let config = Self {
            default_age_bracket,
            default_motor_profile,
            intelligence_config_path,
            sensor_config_path,
            intelligence,
            sensor,
        };
        info!(
            age_bracket = %config.default_age_bracket,
            motor_profile = %config.default_motor_profile,
            intelligence_override = config.intelligence_config_path.is_some(),
            sensor_override = config.sensor_config_path.is_some(),
            "Engine configuration loaded"
        );
        Ok(config)
    }

    /// Replace the scoring tables
    #[must_use]
    pub fn with_intelligence(mut self, intelligence: IntelligenceConfig) -> Self {
        self.intelligence = intelligence;
        self
    }

    /// Replace the sensor thresholds
    #[must_use]
    pub fn with_sensor(mut self, sensor: SensorValidationConfig) -> Self {
        self.sensor = sensor;
        self
    }

    /// Validate both configuration sections
    ///
    /// # Errors
    ///
    /// Returns the first validation failure
    pub fn validate(&self) -> Result<()> {
        self.intelligence
            .validate()
            .map_err(AppError::from)
            .context("Invalid intelligence configuration")?;
        self.sensor
            .validate()
            .context("Invalid sensor validation configuration")?;
        Ok(())
    }

    /// One-line summary for logs and `--verbose` output
    #[must_use]
    pub fn summary(&self) -> String {
        let source = |path: Option<&PathBuf>| {
            path.map_or_else(|| "defaults".to_owned(), |p| p.display().to_string())
        };
        format!(
            "age_bracket={} motor_profile={} intelligence={} sensor={}",
            self.default_age_bracket,
            self.default_motor_profile,
            source(self.intelligence_config_path.as_ref()),
            source(self.sensor_config_path.as_ref()),
        )
    }
}

fn env_var_opt(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn load_intelligence(path: &Path) -> Result<IntelligenceConfig> {
    IntelligenceConfig::from_json_file(path)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to load intelligence config from {}", path.display()))
}

fn load_sensor(path: &Path) -> Result<SensorValidationConfig> {
    SensorValidationConfig::from_json_file(path)
        .with_context(|| format!("Failed to load sensor config from {}", path.display()))
}
