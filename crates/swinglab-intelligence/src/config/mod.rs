// ABOUTME: Configuration module for swinglab-intelligence crate
// ABOUTME: Re-exports scoring, grading, bracket and prescription configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

/// Scoring engine configuration (band tables, weights, catalogs)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
