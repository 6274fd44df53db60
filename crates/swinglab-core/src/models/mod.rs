// ABOUTME: Core data models for swing measurement, classification, and sensor ingestion
// ABOUTME: Re-exports SwingMetrics, CanonicalSwing, AgeBracket, MotorProfile and LeakFlag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! # Data Models
//!
//! Value objects flowing between the three engine stages:
//!
//! - `CanonicalSwing`: vendor-independent output of the sensor normalizer
//! - `SwingMetrics`: per-swing or per-session kinematic summary fed to the scorers
//! - `MomentumFrame`: one sample of the full-body momentum/energy time series
//! - `BattedBall`: one launch-monitor row
//! - `AgeBracket`, `MotorProfile`, `LeakFlag`: closed enumerations with lenient parsing
//!
//! ## Design Principles
//!
//! - **Immutable**: models are plain values; stages build new ones instead of mutating
//! - **Optional by default**: partial sessions degrade to fallbacks instead of failing
//! - **Serializable**: every model round-trips through JSON for the CLI and callers

mod bracket;
mod flags;
mod profile;
mod sensor;
mod swing;

pub use bracket::AgeBracket;
pub use flags::LeakFlag;
pub use profile::MotorProfile;
pub use sensor::{
    CanonicalSwing, InvalidReason, SensorMeasurements, SwingProvenance, SwingWarning,
    TimestampSource, ValidationVerdict,
};
pub use swing::{BattedBall, MomentumFrame, Segment, SwingMetrics};
