// ABOUTME: Core types and constants for the SwingLab biomechanical scoring engine
// ABOUTME: Foundation crate with error handling, swing models, and reference constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

#![deny(unsafe_code)]

//! # SwingLab Core
//!
//! Foundation crate providing shared types and constants for the SwingLab
//! swing-analysis engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Reference values (pro baselines, reason codes, service names)
//! - **models**: Swing measurements, canonical sensor swings, brackets, profiles, flags

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`SwingMetrics`, `CanonicalSwing`, `AgeBracket`, `LeakFlag`, etc.)
pub mod models;
