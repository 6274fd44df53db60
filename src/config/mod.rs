// ABOUTME: Configuration module for the SwingLab engine and CLI
// ABOUTME: Re-exports environment-driven engine settings and the scoring/sensor config types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! Configuration for the SwingLab engine
//!
//! - **Environment**: default bracket/profile and config-file overrides from env vars
//! - **Intelligence**: scoring tables and drill catalog (`swinglab-intelligence`)
//! - **Sensor**: normalizer thresholds (`swinglab-providers`)

/// Environment-driven engine configuration
pub mod environment;

pub use environment::EngineConfig;
pub use swinglab_intelligence::config::intelligence::ConfigError;
pub use swinglab_intelligence::IntelligenceConfig;
pub use swinglab_providers::SensorValidationConfig;
