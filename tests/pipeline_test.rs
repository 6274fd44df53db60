// ABOUTME: Integration tests for the session scoring pipeline
// ABOUTME: Metric precedence, path consistency, flag merging, defaults and batch ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, ordered_series, raw_swing, received_at, series_with_peaks};
use serde_json::{json, Value};
use std::collections::HashSet;
use swinglab::config::EngineConfig;
use swinglab::errors::ErrorCode;
use swinglab::intelligence::IntelligenceConfig;
use swinglab::models::{AgeBracket, BattedBall, LeakFlag, MotorProfile, SwingMetrics};
use swinglab::pipeline::{ScoringPipeline, SessionInput};
use uuid::Uuid;

fn pipeline() -> ScoringPipeline {
    init_test_logging();
    ScoringPipeline::with_config(&EngineConfig::default())
}

fn swing_with_angle(bat_speed: f64, attack_angle: f64) -> Value {
    let mut record = raw_swing(bat_speed, bat_speed * 0.3, 150.0);
    record["attackAngle"] = json!(attack_angle);
    record
}

fn session() -> SessionInput {
    SessionInput {
        session_id: Uuid::new_v4(),
        age_bracket: Some("hs".to_owned()),
        motor_profile: Some("SPINNER".to_owned()),
        received_at: Some(received_at()),
        raw_swings: vec![
            swing_with_angle(70.0, 8.0),
            swing_with_angle(72.0, 10.0),
            swing_with_angle(10.0, 40.0),
            swing_with_angle(74.0, 12.0),
        ],
        momentum_series: ordered_series(),
        ..SessionInput::default()
    }
}

#[test]
fn test_full_session_report() {
    let input = session();
    let report = pipeline().score_session(&input).unwrap();

    assert_eq!(report.session_id, input.session_id);
    assert_eq!(report.age_bracket, AgeBracket::HighSchool);
    assert_eq!(report.motor_profile, MotorProfile::Spinner);
    assert_eq!(report.normalization.total(), 4);
    assert_eq!(report.normalization.invalid.len(), 1);

    let fingerprint = report.fingerprint.as_ref().unwrap();
    assert!((fingerprint.total.value() - 96.0).abs() < 1e-9);

    // Kinematics come from the momentum series
    assert_eq!(report.metrics.pelvis_peak_frame, Some(3.0));
    assert_eq!(report.metrics.torso_peak_frame, Some(4.0));
    assert_eq!(report.metrics.contact_frame, Some(8.0));

    // Attack angles 8/10/12 on the accepted swings; the rejected 40 is ignored
    let path_std = report.metrics.bat_direction_std_deg.unwrap();
    assert!((path_std - (8.0_f64 / 3.0).sqrt()).abs() < 1e-9);
}

#[test]
fn test_explicit_metrics_take_precedence() {
    let mut input = session();
    input.metrics = SwingMetrics {
        torso_momentum_peak: Some(12.0),
        bat_direction_std_deg: Some(9.5),
        ..SwingMetrics::default()
    };
    let report = pipeline().score_session(&input).unwrap();
    assert_eq!(report.metrics.torso_momentum_peak, Some(12.0));
    assert_eq!(report.metrics.pelvis_momentum_peak, Some(10.0));
    assert_eq!(report.metrics.bat_direction_std_deg, Some(9.5));
    assert!(report.flags.contains(&LeakFlag::Casting));
}

#[test]
fn test_batted_balls_fill_outcome_metrics() {
    let mut input = session();
    input.batted_balls = vec![
        BattedBall {
            exit_velocity_mph: 92.0,
            launch_angle_deg: Some(18.0),
            distance_ft: Some(360.0),
        },
        BattedBall {
            exit_velocity_mph: 84.0,
            launch_angle_deg: Some(-20.0),
            distance_ft: None,
        },
    ];
    let report = pipeline().score_session(&input).unwrap();
    assert_eq!(report.outcomes.ball_count, 2);
    assert_eq!(
        report.metrics.exit_velocity_avg_mph,
        report.outcomes.exit_velocity_avg_mph
    );
    assert!((report.metrics.exit_velocity_avg_mph.unwrap() - 88.0).abs() < 1e-9);
    assert_eq!(report.metrics.exit_velocity_max_mph, Some(92.0));
}

#[test]
fn test_flags_are_deduplicated_union_of_both_scorers() {
    let mut input = session();
    input.momentum_series = series_with_peaks([7, 5, 4, 3]);
    input.metrics.bat_direction_std_deg = Some(9.5);
    let report = pipeline().score_session(&input).unwrap();
    let fingerprint = report.fingerprint.as_ref().unwrap();

    let unique: HashSet<LeakFlag> = report.flags.iter().copied().collect();
    assert_eq!(unique.len(), report.flags.len());

    let expected: HashSet<LeakFlag> = report
        .four_b
        .flags
        .iter()
        .chain(&fingerprint.flags)
        .copied()
        .collect();
    assert_eq!(unique, expected);

    assert!(report.flags.contains(&LeakFlag::Casting));
    assert!(report.flags.contains(&LeakFlag::NoSequence));
    assert!(report.four_b.flags.contains(&LeakFlag::Simultaneous));
    assert!(fingerprint.flags.contains(&LeakFlag::Simultaneous));

    // 4B flags come first
    assert_eq!(
        &report.flags[..report.four_b.flags.len()],
        report.four_b.flags.as_slice()
    );
}

#[test]
fn test_prescription_respects_profile() {
    let mut input = session();
    input.motor_profile = Some("whipper".to_owned());
    input.metrics.bat_direction_std_deg = Some(9.5);
    let report = pipeline().score_session(&input).unwrap();
    assert_eq!(report.prescription.profile, MotorProfile::Whipper);
    assert!(report
        .prescription
        .drills
        .iter()
        .all(|drill| drill.slug != "constraint-rope-drill"));
    assert!(report
        .prescription
        .withheld
        .contains(&"constraint-rope-drill".to_owned()));
}

#[test]
fn test_session_without_series_has_no_fingerprint() {
    let mut input = session();
    input.momentum_series.clear();
    let report = pipeline().score_session(&input).unwrap();
    assert!(report.fingerprint.is_none());
    assert_eq!(report.metrics.pelvis_momentum_peak, None);
    assert_eq!(report.flags, report.four_b.flags);
}

#[test]
fn test_bracket_and_profile_defaults() {
    init_test_logging();
    let config = EngineConfig {
        default_age_bracket: AgeBracket::U14,
        default_motor_profile: MotorProfile::Titan,
        ..EngineConfig::default()
    };
    let pipeline = ScoringPipeline::with_config(&config);

    let mut input = session();
    input.age_bracket = None;
    input.motor_profile = None;
    let report = pipeline.score_session(&input).unwrap();
    assert_eq!(report.age_bracket, AgeBracket::U14);
    assert_eq!(report.motor_profile, MotorProfile::Titan);

    input.age_bracket = Some("varsity".to_owned());
    input.motor_profile = Some("switch-hitter".to_owned());
    let report = pipeline.score_session(&input).unwrap();
    assert_eq!(report.age_bracket, AgeBracket::HighSchool);
    assert_eq!(report.motor_profile, MotorProfile::Spinner);
}

#[test]
fn test_malformed_raw_swing_fails_session() {
    let mut input = session();
    input.raw_swings.push(json!("not a swing"));
    let err = pipeline().score_session(&input).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_session_scoring_is_deterministic() {
    let pipeline = pipeline();
    let input = session();
    let first = serde_json::to_value(pipeline.score_session(&input).unwrap()).unwrap();
    let second = serde_json::to_value(pipeline.score_session(&input).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_batch_preserves_order_and_isolates_failures() {
    let mut broken = session();
    broken.raw_swings = vec![json!(42)];
    let inputs = vec![session(), broken, session()];
    let results = pipeline().score_sessions(&inputs);
    assert_eq!(results.len(), 3);
    assert!(results[1].is_err());
    for index in [0, 2] {
        let report = results[index].as_ref().unwrap();
        assert_eq!(report.session_id, inputs[index].session_id);
    }
}

#[test]
fn test_session_input_parses_from_minimal_json() {
    let input: SessionInput = serde_json::from_value(json!({
        "session_id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
        "age_bracket": "12u",
        "raw_swings": [raw_swing(60.0, 18.0, 170.0)]
    }))
    .unwrap();
    assert!(input.momentum_series.is_empty());
    let report = pipeline().score_session(&input).unwrap();
    assert_eq!(report.age_bracket, AgeBracket::U12);
    assert_eq!(report.normalization.valid.len(), 1);
}

#[test]
fn test_injected_scoring_tables_flow_through() {
    let mut intelligence = IntelligenceConfig::default();
    intelligence.prescription.max_drills = 1;
    let config = EngineConfig::default().with_intelligence(intelligence);
    let pipeline = ScoringPipeline::with_config(&config);

    let mut input = session();
    input.metrics.bat_direction_std_deg = Some(9.5);
    let report = pipeline.score_session(&input).unwrap();
    assert!(report.prescription.drills.len() <= 1);
}
