// ABOUTME: Bat-sensor ingestion module: aliases, timestamps, validation and normalization
// ABOUTME: Public surface is SensorNormalizer with its options, thresholds and batch result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

/// Vendor field alias tables and numeric coercion
pub mod aliases;
/// Canonical swing construction and batch partitioning
pub mod normalizer;
/// Timestamp resolution
pub mod timestamp;
/// Plausibility thresholds and rules
pub mod validation;

pub use normalizer::{BatchNormalization, NormalizeOptions, SensorNormalizer};
pub use timestamp::ResolvedTimestamp;
pub use validation::SensorValidationConfig;
