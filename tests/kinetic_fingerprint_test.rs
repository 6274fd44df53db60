// ABOUTME: Integration tests for the kinetic fingerprint scorer
// ABOUTME: Sequencing, contact detection, missing-data fallbacks and batch behaviour
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, ordered_series, series_with_peaks};
use swinglab::constants::rating_labels::NO_DATA;
use swinglab::intelligence::kinetic_fingerprint::components;
use swinglab::intelligence::{
    ContactMethod, IntelligenceConfig, KineticFingerprintResult, KineticFingerprintScorer,
    MomentumSeries, RatingBucket,
};
use swinglab::models::{LeakFlag, MomentumFrame};

fn scorer() -> KineticFingerprintScorer {
    init_test_logging();
    KineticFingerprintScorer::with_config(&IntelligenceConfig::default())
}

fn score_of(result: &KineticFingerprintResult, name: &str) -> f64 {
    result
        .component(name)
        .unwrap_or_else(|| panic!("missing component {name}"))
        .score
        .value()
}

#[test]
fn test_well_sequenced_swing_is_elite() {
    let result = scorer().score(&ordered_series(), None);

    assert!((score_of(&result, components::TRANSFER_RATIO) - 100.0).abs() < 1e-9);
    assert!((score_of(&result, components::TIMING_GAP) - 80.0).abs() < 1e-9);
    assert!((score_of(&result, components::DECELERATION) - 100.0).abs() < 1e-9);
    assert!((score_of(&result, components::SEQUENCE_ORDER) - 100.0).abs() < 1e-9);
    assert!((score_of(&result, components::ENERGY_DELIVERY) - 100.0).abs() < 1e-9);
    assert!((score_of(&result, components::X_FACTOR) - 100.0).abs() < 1e-9);

    assert!((result.total.value() - 96.0).abs() < 1e-9);
    assert_eq!(result.rating, RatingBucket::Elite);
    assert!(result.flags.is_empty());
}

#[test]
fn test_ordered_peaks_have_no_inversions() {
    let result = scorer().score(&ordered_series(), None);
    let sequence = result.component(components::SEQUENCE_ORDER).unwrap();
    assert_eq!(sequence.raw_value, Some(0.0));
    assert!((sequence.score.value() - 100.0).abs() < 1e-9);
}

#[test]
fn test_contact_detected_from_hand_speed_crossing() {
    let result = scorer().score(&ordered_series(), None);
    let contact = result.contact.unwrap();
    assert_eq!(contact.index, 8);
    assert_eq!(contact.method, ContactMethod::HandSpeedCrossing);
    assert!(!contact.low_confidence);
}

#[test]
fn test_missing_crossing_falls_back_to_last_frame() {
    let frames: Vec<MomentumFrame> = ordered_series()
        .into_iter()
        .map(|frame| MomentumFrame {
            time_from_max_hand: None,
            ..frame
        })
        .collect();
    let contact = MomentumSeries::new(&frames).detect_contact(None).unwrap();
    assert_eq!(contact.index, 9);
    assert_eq!(contact.method, ContactMethod::LastFrame);
    assert!(contact.low_confidence);
}

#[test]
fn test_explicit_contact_is_clamped_into_series() {
    let frames = ordered_series();
    let result = scorer().score(&frames, Some(500));
    let contact = result.contact.unwrap();
    assert_eq!(contact.index, frames.len() - 1);
    assert_eq!(contact.method, ContactMethod::Explicit);
}

#[test]
fn test_zero_pelvis_momentum_has_no_transfer_data() {
    let frames: Vec<MomentumFrame> = ordered_series()
        .into_iter()
        .map(|frame| MomentumFrame {
            pelvis_momentum: 0.0,
            ..frame
        })
        .collect();
    let result = scorer().score(&frames, None);
    let transfer = result.component(components::TRANSFER_RATIO).unwrap();
    assert_eq!(transfer.rating, NO_DATA);
    assert_eq!(transfer.raw_value, None);
    assert!((transfer.score.value() - 40.0).abs() < 1e-9);
    assert!(!result.flags.contains(&LeakFlag::WeakTransfer));
}

#[test]
fn test_single_swap_is_partial_sequence() {
    let result = scorer().score(&series_with_peaks([3, 4, 7, 5]), None);
    let sequence = result.component(components::SEQUENCE_ORDER).unwrap();
    assert_eq!(sequence.raw_value, Some(1.0));
    assert!((sequence.score.value() - 70.0).abs() < 1e-9);
    assert!(result.flags.contains(&LeakFlag::PartialSequence));
    assert!(!result.flags.contains(&LeakFlag::NoSequence));
}

#[test]
fn test_reversed_chain_is_no_sequence() {
    let result = scorer().score(&series_with_peaks([7, 5, 4, 3]), None);
    let sequence = result.component(components::SEQUENCE_ORDER).unwrap();
    assert_eq!(sequence.raw_value, Some(6.0));
    assert!((sequence.score.value() - 20.0).abs() < 1e-9);
    assert!(result.flags.contains(&LeakFlag::NoSequence));
    assert!(!result.flags.contains(&LeakFlag::PartialSequence));
}

#[test]
fn test_empty_series_scores_missing_data() {
    let result = scorer().score(&[], None);
    assert!(result.contact.is_none());
    assert_eq!(result.components.len(), 6);
    assert!((result.total.value() - 40.0).abs() < 1e-9);
    assert!(result.flags.is_empty());
}

#[test]
fn test_components_are_weighted_into_total() {
    let result = scorer().score(&series_with_peaks([2, 6, 5, 9]), None);
    let weight_sum: f64 = result.components.iter().map(|c| c.weight).sum();
    assert!((weight_sum - 1.0).abs() < 1e-9);
    let weighted: f64 = result.components.iter().map(|c| c.weighted).sum();
    assert!((result.total.value() - weighted).abs() < 1e-9);
    for component in &result.components {
        assert!((0.0..=100.0).contains(&component.score.value()));
        assert!((component.weighted - component.score.value() * component.weight).abs() < 1e-9);
    }
}

#[test]
fn test_non_finite_momentum_stays_in_range() {
    let frames: Vec<MomentumFrame> = ordered_series()
        .into_iter()
        .enumerate()
        .map(|(i, frame)| MomentumFrame {
            torso_momentum: if i % 2 == 0 { f64::NAN } else { frame.torso_momentum },
            bat_energy: Some(f64::INFINITY),
            ..frame
        })
        .collect();
    let result = scorer().score(&frames, None);
    assert!(result.total.value().is_finite());
    assert!((0.0..=100.0).contains(&result.total.value()));
}

#[test]
fn test_scoring_is_deterministic() {
    let scorer = scorer();
    let frames = series_with_peaks([3, 5, 4, 7]);
    assert_eq!(scorer.score(&frames, None), scorer.score(&frames, None));
}

#[test]
fn test_batch_matches_individual_scores() {
    let scorer = scorer();
    let batch_input = vec![
        ordered_series(),
        series_with_peaks([7, 5, 4, 3]),
        Vec::new(),
    ];
    let batch = scorer.score_batch(&batch_input);
    assert_eq!(batch.len(), 3);
    for (frames, result) in batch_input.iter().zip(&batch) {
        assert_eq!(result, &scorer.score(frames, None));
    }
}
