// ABOUTME: Main library entry point for the SwingLab swing-analysis engine
// ABOUTME: Session pipeline, logging and environment configuration over the workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

#![deny(unsafe_code)]

//! # SwingLab
//!
//! Biomechanical scoring for baseball swings.
//!
//! ## Features
//!
//! - **Sensor normalization**: vendor bat-sensor JSON into canonical swings with validity verdicts
//! - **4B scoring**: Brain, Body, Bat and Ball category scores, composite grade and leak flags
//! - **Kinetic fingerprint**: six-component score of a full-body momentum series
//! - **Drill prescription**: leak flags into drills filtered by motor profile
//! - **Session pipeline**: all of the above for one player session, or many in parallel
//!
//! ## Architecture
//!
//! - **`swinglab-core`**: errors, constants and shared models
//! - **`swinglab-intelligence`**: scoring engines, grading and the drill catalog
//! - **`swinglab-providers`**: sensor vendor ingestion
//! - **this crate**: pipeline, logging, environment configuration and the `swinglab` CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use swinglab::pipeline::{ScoringPipeline, SessionInput};
//! use swinglab::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let pipeline = ScoringPipeline::new();
//!     let report = pipeline.score_session(&SessionInput::default())?;
//!     println!("{} ({})", report.four_b.composite, report.four_b.grade);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Session scoring pipeline
pub mod pipeline;

// Re-export workspace crates so binaries and tests can use one import root
pub use swinglab_core::{constants, errors, models};
pub use swinglab_intelligence as intelligence;
pub use swinglab_providers as providers;
