// ABOUTME: Biomechanical scoring engines for the SwingLab swing-analysis platform
// ABOUTME: 4B scorer, kinetic fingerprint, session aggregation and drill prescription
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

#![deny(unsafe_code)]

//! # SwingLab Intelligence
//!
//! Pure, synchronous scoring engines. Every engine is built from an
//! [`IntelligenceConfig`]: `new()` reads the process-wide default and
//! `with_config()` accepts an injected one, so tests and tenants can swap
//! band tables without global state.
//!
//! ## Modules
//!
//! - **bands**: Ordered interval tables with a default row
//! - **config**: Scoring tables, weights, grade ladder, drill catalog
//! - **grading**: Score newtype, letter grades, rating buckets, scout grades
//! - **kinematics**: Peak, contact and deceleration extraction from a momentum series
//! - **four_b_scorer**: Brain/Body/Bat/Ball scoring
//! - **kinetic_fingerprint**: Six-component momentum fingerprint
//! - **session_aggregator**: Batted-ball and path-consistency aggregation
//! - **prescription**: Leak flags to profile-safe drills

/// Banded scoring tables
pub mod bands;

/// Scoring engine configuration
pub mod config;

/// 4B (Brain/Body/Bat/Ball) scorer
pub mod four_b_scorer;

/// Grades, rating buckets and scout grades
pub mod grading;

/// Kinematic extraction from momentum time series
pub mod kinematics;

/// Kinetic fingerprint scorer
pub mod kinetic_fingerprint;

/// Drill prescription resolver
pub mod prescription;

/// Session-level outcome aggregation
pub mod session_aggregator;

pub use config::IntelligenceConfig;
pub use four_b_scorer::{Category, CategoryScore, FourBScorer, FourBScores, SubScore};
pub use grading::{Grade, RatingBucket, Score, ScoutGrade};
pub use kinematics::{ContactFrame, ContactMethod, MomentumSeries};
pub use kinetic_fingerprint::{
    FingerprintComponent, KineticFingerprintResult, KineticFingerprintScorer,
};
pub use prescription::{CautionNote, PrescribedDrill, Prescription, PrescriptionResolver};
pub use session_aggregator::{path_consistency_from_swings, OutcomeSummary, SessionAggregator};
