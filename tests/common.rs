// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet tracing init plus swing metrics, momentum series and sensor record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_precision_loss
)]
//! Shared test utilities for `swinglab`

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::env;
use std::sync::Once;
use swinglab::models::{MomentumFrame, SwingMetrics};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };
        // A subscriber may already be installed by another test helper
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed fallback time so normalization is reproducible
pub fn received_at() -> DateTime<Utc> {
    DateTime::from_timestamp(1_714_000_000, 0).unwrap()
}

/// Metrics of a well-sequenced high-school hitter with good outcomes
pub fn elite_metrics() -> SwingMetrics {
    SwingMetrics {
        pelvis_momentum_peak: Some(10.0),
        torso_momentum_peak: Some(16.0),
        arms_momentum_peak: Some(26.0),
        bat_momentum_peak: Some(40.0),
        pelvis_peak_frame: Some(30.0),
        torso_peak_frame: Some(46.0),
        arms_peak_frame: Some(60.0),
        bat_peak_frame: Some(75.0),
        contact_frame: Some(100.0),
        pelvis_decel_pct: Some(45.0),
        torso_decel_pct: Some(40.0),
        drift_timing_ratio: Some(1.0),
        bat_direction_std_deg: Some(3.5),
        torso_velocity_peak_deg_s: Some(800.0),
        exit_velocity_avg_mph: Some(88.0),
        exit_velocity_max_mph: Some(95.0),
        exit_velocity_cv_pct: Some(8.0),
        barrel_rate_pct: Some(16.0),
        hard_hit_rate_pct: Some(52.0),
        mishit_rate_pct: Some(5.0),
    }
}

fn bump(frame: usize, peak_frame: usize, peak: f64) -> f64 {
    let distance = frame.abs_diff(peak_frame) as f64;
    peak * (1.0 - 0.15 * distance).max(0.1)
}

/// Ten-frame series peaking pelvis@3, torso@4, arms@5, bat@7 with contact at frame 8
///
/// Torso/pelvis ratio 1.6, timing gap 12.5 %, bat energy share 50 %, x-factor 55 degrees.
pub fn ordered_series() -> Vec<MomentumFrame> {
    series_with_peaks([3, 4, 5, 7])
}

/// Ten-frame series with the given pelvis/torso/arms/bat peak frames and contact at frame 8
pub fn series_with_peaks(peaks: [usize; 4]) -> Vec<MomentumFrame> {
    let [pelvis, torso, arms, bat] = peaks;
    (0..10)
        .map(|i| MomentumFrame {
            pelvis_momentum: bump(i, pelvis, 10.0),
            torso_momentum: bump(i, torso, 16.0),
            arms_momentum: bump(i, arms, 22.0),
            bat_momentum: bump(i, bat, 30.0),
            pelvis_rotation_deg: Some(10.0),
            torso_rotation_deg: Some(10.0 + if i == torso { 55.0 } else { 30.0 }),
            time_from_max_hand: Some((i as f64 - 8.0) * 0.01),
            pelvis_energy: Some(10.0),
            torso_energy: Some(20.0),
            arms_energy: Some(20.0),
            bat_energy: Some(50.0),
        })
        .collect()
}

/// Raw vendor record with the common top-level field names
pub fn raw_swing(bat_speed: f64, hand_speed: f64, time_to_contact_ms: f64) -> Value {
    json!({
        "speedBarrelMax": bat_speed,
        "speedHandsMax": hand_speed,
        "timeToContactMs": time_to_contact_ms,
        "attackAngle": 10.0,
        "timestamp": "2024-04-25T18:30:00Z"
    })
}
