// ABOUTME: Sensor vendor ingestion for the SwingLab scoring engine
// ABOUTME: Reconciles vendor field layouts into canonical swings with validity verdicts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

#![deny(unsafe_code)]

//! Sensor vendor ingestion.
//!
//! Bat-sensor SDKs disagree on field names, nesting and units. This crate
//! resolves each physical quantity through a priority-ordered alias list and
//! produces [`swinglab_core::models::CanonicalSwing`] values.

// Re-export swinglab-core modules so callers can reach shared types through this crate
pub use swinglab_core::constants;
pub use swinglab_core::errors;
pub use swinglab_core::models;

/// Bat-sensor normalization
pub mod sensor;

pub use sensor::{BatchNormalization, NormalizeOptions, SensorNormalizer, SensorValidationConfig};
