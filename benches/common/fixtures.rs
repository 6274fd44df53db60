// ABOUTME: Benchmark fixtures generating realistic swing, sensor and session data
// ABOUTME: Deterministic generators so repeated runs measure identical workloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! Benchmark fixtures for swing scoring.
//!
//! Every generator is a pure function of its index, so repeated runs measure
//! identical workloads.

use serde_json::{json, Value};
use swinglab::models::{BattedBall, MomentumFrame, SwingMetrics};
use swinglab::pipeline::SessionInput;
use uuid::Uuid;

const PROFILE_TOKENS: [&str; 4] = ["spinner", "whipper", "slingshotter", "titan"];

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum SwingBatchSize {
    /// One bullpen round
    Small,
    /// A full practice session
    Medium,
    /// A week of sessions for one team
    Large,
}

impl SwingBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
            Self::Large => 1_000,
        }
    }
}

/// Small deterministic wobble in `[-1, 1]` keyed on the index
#[allow(clippy::cast_precision_loss)]
fn wobble(index: usize, period: usize) -> f64 {
    let phase = (index % period) as f64 / period as f64;
    phase.mul_add(2.0, -1.0)
}

/// Summary metrics for one swing
#[must_use]
pub fn generate_metrics(index: usize) -> SwingMetrics {
    let jitter = wobble(index, 7);
    SwingMetrics {
        pelvis_momentum_peak: Some(10.0),
        torso_momentum_peak: Some(jitter.mul_add(2.0, 16.0)),
        arms_momentum_peak: Some(jitter.mul_add(3.0, 24.0)),
        bat_momentum_peak: Some(30.0),
        pelvis_peak_frame: Some(40.0),
        torso_peak_frame: Some(jitter.mul_add(6.0, 55.0)),
        arms_peak_frame: Some(70.0),
        bat_peak_frame: Some(80.0),
        contact_frame: Some(100.0),
        pelvis_decel_pct: Some(jitter.mul_add(15.0, 40.0)),
        torso_decel_pct: Some(jitter.mul_add(15.0, 35.0)),
        drift_timing_ratio: Some(jitter.mul_add(0.3, 1.0)),
        bat_direction_std_deg: Some(jitter.mul_add(3.0, 5.0)),
        torso_velocity_peak_deg_s: Some(jitter.mul_add(80.0, 800.0)),
        exit_velocity_avg_mph: Some(jitter.mul_add(8.0, 85.0)),
        exit_velocity_max_mph: Some(jitter.mul_add(8.0, 95.0)),
        exit_velocity_cv_pct: Some(jitter.mul_add(6.0, 12.0)),
        barrel_rate_pct: Some(jitter.mul_add(5.0, 10.0)),
        hard_hit_rate_pct: Some(jitter.mul_add(10.0, 40.0)),
        mishit_rate_pct: Some(jitter.mul_add(10.0, 20.0)),
    }
}

/// Momentum time series with a bell-shaped peak per segment
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_momentum_series(frames: usize) -> Vec<MomentumFrame> {
    let frames = frames.max(4);
    let bell = |frame: usize, peak: f64, height: f64| {
        let distance = (frame as f64 - peak) / (frames as f64 / 8.0);
        height * (-distance * distance).exp()
    };
    let span = frames as f64;
    let hand_peak = span * 0.8;
    (0..frames)
        .map(|frame| {
            let position = frame as f64;
            let progress = position / span;
            MomentumFrame {
                pelvis_momentum: bell(frame, span * 0.35, 10.0),
                torso_momentum: bell(frame, span * 0.5, 16.0),
                arms_momentum: bell(frame, span * 0.65, 26.0),
                bat_momentum: bell(frame, span * 0.78, 32.0),
                pelvis_rotation_deg: Some(progress * 90.0),
                torso_rotation_deg: Some(progress * 45.0),
                time_from_max_hand: Some((position - hand_peak) / 1000.0),
                pelvis_energy: Some(bell(frame, span * 0.35, 100.0)),
                torso_energy: Some(bell(frame, span * 0.5, 150.0)),
                arms_energy: Some(bell(frame, span * 0.65, 250.0)),
                bat_energy: Some(bell(frame, span * 0.78, 400.0)),
            }
        })
        .collect()
}

/// Raw bat-sensor records alternating the flat and nested field layouts
#[must_use]
pub fn generate_raw_swings(count: usize) -> Vec<Value> {
    (0..count)
        .map(|index| {
            let jitter = wobble(index, 9);
            let bat_speed = jitter.mul_add(10.0, 68.0);
            let hand_speed = jitter.mul_add(3.0, 22.0);
            let time_to_contact = jitter.mul_add(0.02, 0.15);
            let timestamp = 1_714_069_800 + i64::try_from(index).unwrap_or(0) * 20;
            if index % 2 == 0 {
                json!({
                    "id": format!("swing-{index}"),
                    "speedBarrelMax": bat_speed,
                    "speedHandsMax": hand_speed,
                    "timeToContact": time_to_contact,
                    "attackAngle": jitter.mul_add(4.0, 9.0),
                    "timestamp": timestamp,
                })
            } else {
                json!({
                    "id": format!("swing-{index}"),
                    "metrics": {
                        "speedBarrelMax": bat_speed,
                        "speedHandsMax": hand_speed,
                        "timeToContact": time_to_contact,
                        "attackAngle": jitter.mul_add(4.0, 9.0),
                        "timestamp": timestamp * 1_000,
                    }
                })
            }
        })
        .collect()
}

/// Launch-monitor rows for one session
#[must_use]
pub fn generate_batted_balls(count: usize) -> Vec<BattedBall> {
    (0..count)
        .map(|index| BattedBall {
            exit_velocity_mph: wobble(index, 11).mul_add(12.0, 86.0),
            launch_angle_deg: Some(wobble(index, 5).mul_add(15.0, 14.0)),
            distance_ft: None,
        })
        .collect()
}

/// Complete session inputs
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn generate_sessions(count: usize) -> Vec<SessionInput> {
    (0..count)
        .map(|index| SessionInput {
            session_id: Uuid::from_u128(index as u128 + 1),
            age_bracket: Some("hs".to_owned()),
            motor_profile: Some(PROFILE_TOKENS[index % PROFILE_TOKENS.len()].to_owned()),
            raw_swings: generate_raw_swings(20),
            batted_balls: generate_batted_balls(20),
            momentum_series: generate_momentum_series(120),
            ..SessionInput::default()
        })
        .collect()
}
