// ABOUTME: Configuration error types for scoring table validation
// ABOUTME: Defines error variants for invalid ranges, weights and catalog inconsistencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! Configuration error types for scoring table validation.

use std::io;
use swinglab_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Band bounds or thresholds out of order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required table is empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Override document is not valid JSON for the section
    #[error("Parse error: {0}")]
    Parse(String),

    /// Component weights do not sum to 1
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Score, fraction or limit outside its valid range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Drill catalog references something that does not exist
    #[error("Inconsistent drill catalog: {0}")]
    Catalog(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}
