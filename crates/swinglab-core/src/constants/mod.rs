// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Reference baselines, validation reason codes, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.
//! Anything a coach might want to tune (band tables, weights, thresholds) lives in
//! the injectable configuration types instead; these are the fixed reference points.

/// Service identifiers used in structured logging
pub mod service_names {
    /// Default service name reported by the logging layer
    pub const SWINGLAB_ENGINE: &str = "swinglab-engine";
    /// Command-line front end
    pub const SWINGLAB_CLI: &str = "swinglab-cli";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Age bracket used when a session does not name one
    pub const DEFAULT_AGE_BRACKET: &str = "SWINGLAB_DEFAULT_AGE_BRACKET";
    /// Motor profile used when a session does not name one
    pub const DEFAULT_MOTOR_PROFILE: &str = "SWINGLAB_DEFAULT_MOTOR_PROFILE";
    /// Path to a JSON file replacing the default scoring tables
    pub const INTELLIGENCE_CONFIG: &str = "SWINGLAB_INTELLIGENCE_CONFIG";
    /// Path to a JSON file replacing the default sensor validation thresholds
    pub const SENSOR_CONFIG: &str = "SWINGLAB_SENSOR_CONFIG";
}

/// Professional-level reference outputs that age brackets scale down from
pub mod pro_reference {
    /// Age-adjusted exit velocity cap at the professional level (mph)
    pub const EXIT_VELOCITY_CAP_MPH: f64 = 105.0;
    /// Peak torso rotational velocity at the professional level (deg/s)
    pub const TORSO_VELOCITY_DEG_S: f64 = 900.0;
    /// Exit velocity at or above which a ball counts as hard-hit (mph)
    pub const HARD_HIT_FLOOR_MPH: f64 = 95.0;
    /// Exit velocity at or above which a ball is barrel-eligible (mph)
    pub const BARREL_FLOOR_MPH: f64 = 98.0;
    /// Exit velocity below which contact is treated as a mishit (mph)
    pub const MISHIT_CEILING_MPH: f64 = 50.0;
}

/// Launch angle windows used when classifying batted balls (degrees)
pub mod launch_angle {
    /// Lowest launch angle inside the barrel window
    pub const BARREL_MIN_DEG: f64 = 8.0;
    /// Highest launch angle inside the barrel window
    pub const BARREL_MAX_DEG: f64 = 32.0;
    /// Below this the ball was topped into the ground
    pub const TOPPED_BELOW_DEG: f64 = -10.0;
    /// Above this the ball was popped up
    pub const POPUP_ABOVE_DEG: f64 = 50.0;
}

/// Reason codes emitted by the sensor normalizer
pub mod validation_reasons {
    /// No bat speed under any known alias
    pub const MISSING_BAT_SPEED: &str = "missing_bat_speed";
    /// Bat speed below the plausible minimum
    pub const BELOW_SPEED_THRESHOLD: &str = "below_speed_threshold";
    /// Bat speed above the plausible maximum
    pub const ABOVE_SPEED_THRESHOLD: &str = "above_speed_threshold";
    /// Time to contact shorter than physically plausible
    pub const TIMING_TOO_FAST: &str = "timing_too_fast";
    /// Time to contact longer than a competitive swing
    pub const TIMING_TOO_SLOW: &str = "timing_too_slow";
    /// Warning: hands slow relative to the barrel
    pub const HAND_SPEED_LOW: &str = "hand_speed_low";
}

/// Rating labels shared by scorers when data is unavailable
pub mod rating_labels {
    /// Rating used whenever a component could not be computed
    pub const NO_DATA: &str = "No data";
}

/// Numeric tolerances
pub mod numeric {
    /// Denominators with an absolute value below this are treated as zero
    pub const ZERO_EPSILON: f64 = 1e-9;
    /// Allowed drift when checking that weights sum to one
    pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;
    /// Epoch values at or above this magnitude are milliseconds
    pub const EPOCH_MILLIS_THRESHOLD: f64 = 1e12;
}
