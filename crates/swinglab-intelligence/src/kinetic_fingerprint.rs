// ABOUTME: Kinetic fingerprint scorer over a full-body momentum/energy time series
// ABOUTME: Six weighted components, four-level rating, contact detection and leak flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! # Kinetic Fingerprint
//!
//! Independent of the 4B scorer. Components and default weights:
//!
//! | Component        | Weight | Input                                          |
//! |------------------|--------|------------------------------------------------|
//! | transfer_ratio   | 0.25   | torso / pelvis peak momentum                   |
//! | timing_gap       | 0.20   | (torso peak - pelvis peak) / contact, percent  |
//! | deceleration     | 0.20   | pelvis, torso, arms peaks before contact       |
//! | sequence_order   | 0.15   | out-of-order segment peak pairs                |
//! | energy_delivery  | 0.10   | bat share of kinetic energy at contact         |
//! | x_factor         | 0.10   | max torso/pelvis rotation separation           |

use crate::bands::BandTable;
use crate::config::intelligence::{GradingConfig, IntelligenceConfig, KineticConfig};
use crate::grading::{Grader, RatingBucket, Score};
use crate::kinematics::{sequence_inversions, ContactFrame, MomentumSeries};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use swinglab_core::constants::numeric::ZERO_EPSILON;
use swinglab_core::constants::rating_labels::NO_DATA;
use swinglab_core::models::{LeakFlag, MomentumFrame, Segment};
use tracing::{debug, warn};

/// One weighted fingerprint component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FingerprintComponent {
    /// Component key
    pub name: String,
    /// Measured input, if any
    pub raw_value: Option<f64>,
    /// Component score
    pub score: Score,
    /// Weight in the total
    pub weight: f64,
    /// `score * weight`
    pub weighted: f64,
    /// Rating label
    pub rating: String,
}

impl FingerprintComponent {
    fn new(name: &str, raw_value: Option<f64>, score: f64, weight: f64, rating: &str) -> Self {
        let score = Score::new(score);
        Self {
            name: name.to_owned(),
            raw_value,
            score,
            weight,
            weighted: score.value() * weight,
            rating: rating.to_owned(),
        }
    }

    fn banded(name: &str, table: &BandTable, value: f64, weight: f64) -> Self {
        let band = table.evaluate(value);
        Self::new(name, Some(value), band.score, weight, band.label)
    }

    fn no_data(name: &str, score: f64, weight: f64) -> Self {
        Self::new(name, None, score, weight, NO_DATA)
    }

    fn has_data(&self) -> bool {
        self.raw_value.is_some()
    }
}

/// Kinetic fingerprint of one swing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KineticFingerprintResult {
    /// Transfer, timing, deceleration, sequence, energy and x-factor, in that order
    pub components: Vec<FingerprintComponent>,
    /// Weighted total
    pub total: Score,
    /// Rating bucket
    pub rating: RatingBucket,
    /// Rating display color
    pub color: String,
    /// Contact frame used, absent for an empty series
    pub contact: Option<ContactFrame>,
    /// Technique leaks detected
    pub flags: Vec<LeakFlag>,
}

impl KineticFingerprintResult {
    /// Component by key
    #[must_use]
    pub fn component(&self, name: &str) -> Option<&FingerprintComponent> {
        self.components.iter().find(|component| component.name == name)
    }
}

/// Component keys
pub mod components {
    /// Torso/pelvis momentum ratio
    pub const TRANSFER_RATIO: &str = "transfer_ratio";
    /// Pelvis-to-torso peak gap
    pub const TIMING_GAP: &str = "timing_gap";
    /// Segments braking before contact
    pub const DECELERATION: &str = "deceleration";
    /// Segment firing order
    pub const SEQUENCE_ORDER: &str = "sequence_order";
    /// Bat energy share at contact
    pub const ENERGY_DELIVERY: &str = "energy_delivery";
    /// Hip/shoulder separation
    pub const X_FACTOR: &str = "x_factor";
}

/// Scorer for momentum/energy time series
#[derive(Debug, Clone)]
pub struct KineticFingerprintScorer {
    config: KineticConfig,
    grading: GradingConfig,
}

impl Default for KineticFingerprintScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl KineticFingerprintScorer {
    /// Scorer using the process-wide configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global())
    }

    /// Scorer using an injected configuration
    #[must_use]
    pub fn with_config(config: &IntelligenceConfig) -> Self {
        Self {
            config: config.kinetic.clone(),
            grading: config.grading.clone(),
        }
    }

    /// Score a series, detecting contact unless `contact_index` is given
    #[must_use]
    pub fn score(
        &self,
        frames: &[MomentumFrame],
        contact_index: Option<usize>,
    ) -> KineticFingerprintResult {
        let series = MomentumSeries::new(frames);
        let contact = series.detect_contact(contact_index);
        if let Some(detected) = contact.filter(|detected| detected.low_confidence) {
            warn!(
                contact.index = detected.index,
                frames = series.len(),
                "Low-confidence contact frame"
            );
        }

        let components = vec![
            self.transfer_ratio(&series),
            self.timing_gap(&series, contact),
            self.deceleration(&series, contact),
            self.sequence_order(&series),
            self.energy_delivery(&series, contact),
            self.x_factor(&series),
        ];
        let total = Score::new(components.iter().map(|component| component.weighted).sum());
        let rating = Grader::new(&self.grading).fingerprint_bucket(total);
        let flags = self.flags(&components);

        debug!(
            frames = series.len(),
            total = %total,
            rating = %rating,
            flag_count = flags.len(),
            "Kinetic fingerprint complete"
        );

        KineticFingerprintResult {
            components,
            total,
            rating,
            color: rating.color().to_owned(),
            contact,
            flags,
        }
    }

    /// Score many independent series in parallel, preserving order
    #[must_use]
    pub fn score_batch(&self, series: &[Vec<MomentumFrame>]) -> Vec<KineticFingerprintResult> {
        series
            .par_iter()
            .map(|frames| self.score(frames, None))
            .collect()
    }

    fn transfer_ratio(&self, series: &MomentumSeries<'_>) -> FingerprintComponent {
        let weight = self.config.weights.transfer_ratio;
        let ratio = series
            .peak(Segment::Pelvis)
            .zip(series.peak(Segment::Torso))
            .filter(|(pelvis, _)| pelvis.magnitude >= ZERO_EPSILON)
            .map(|(pelvis, torso)| torso.magnitude / pelvis.magnitude);
        ratio.map_or_else(
            || {
                FingerprintComponent::no_data(
                    components::TRANSFER_RATIO,
                    self.config.missing_data_score,
                    weight,
                )
            },
            |ratio| {
                FingerprintComponent::banded(
                    components::TRANSFER_RATIO,
                    &self.config.bands.transfer_ratio,
                    ratio,
                    weight,
                )
            },
        )
    }

    fn timing_gap(
        &self,
        series: &MomentumSeries<'_>,
        contact: Option<ContactFrame>,
    ) -> FingerprintComponent {
        let weight = self.config.weights.timing_gap;
        let gap = contact
            .filter(|contact| contact.index > 0)
            .zip(series.peak(Segment::Pelvis).zip(series.peak(Segment::Torso)))
            .map(|(contact, (pelvis, torso))| {
                (torso.frame as f64 - pelvis.frame as f64) / contact.index as f64 * 100.0
            });
        gap.map_or_else(
            || {
                FingerprintComponent::no_data(
                    components::TIMING_GAP,
                    self.config.missing_data_score,
                    weight,
                )
            },
            |gap| {
                FingerprintComponent::banded(
                    components::TIMING_GAP,
                    &self.config.bands.timing_gap_pct,
                    gap,
                    weight,
                )
            },
        )
    }

    fn deceleration(
        &self,
        series: &MomentumSeries<'_>,
        contact: Option<ContactFrame>,
    ) -> FingerprintComponent {
        let weight = self.config.weights.deceleration;
        let Some(contact) = contact else {
            return FingerprintComponent::no_data(
                components::DECELERATION,
                self.config.missing_data_score,
                weight,
            );
        };
        let braked = [Segment::Pelvis, Segment::Torso, Segment::Arms]
            .into_iter()
            .filter_map(|segment| series.peak(segment))
            .filter(|peak| peak.frame < contact.index)
            .count();
        let score = self.config.counts.decel_score(braked);
        FingerprintComponent::new(
            components::DECELERATION,
            Some(braked as f64),
            score,
            weight,
            count_rating(score),
        )
    }

    fn sequence_order(&self, series: &MomentumSeries<'_>) -> FingerprintComponent {
        let weight = self.config.weights.sequence_order;
        series.chain_peaks().map_or_else(
            || {
                FingerprintComponent::no_data(
                    components::SEQUENCE_ORDER,
                    self.config.missing_data_score,
                    weight,
                )
            },
            |peaks| {
                let inversions = sequence_inversions(&peaks);
                let score = self.config.counts.inversion_score(inversions);
                FingerprintComponent::new(
                    components::SEQUENCE_ORDER,
                    Some(inversions as f64),
                    score,
                    weight,
                    count_rating(score),
                )
            },
        )
    }

    fn energy_delivery(
        &self,
        series: &MomentumSeries<'_>,
        contact: Option<ContactFrame>,
    ) -> FingerprintComponent {
        let weight = self.config.weights.energy_delivery;
        contact
            .and_then(|contact| series.energy_delivery_pct(contact.index))
            .map_or_else(
                || {
                    FingerprintComponent::no_data(
                        components::ENERGY_DELIVERY,
                        self.config.missing_data_score,
                        weight,
                    )
                },
                |share| {
                    FingerprintComponent::banded(
                        components::ENERGY_DELIVERY,
                        &self.config.bands.energy_delivery_pct,
                        share,
                        weight,
                    )
                },
            )
    }

    fn x_factor(&self, series: &MomentumSeries<'_>) -> FingerprintComponent {
        let weight = self.config.weights.x_factor;
        series.x_factor_deg().map_or_else(
            || {
                FingerprintComponent::no_data(
                    components::X_FACTOR,
                    self.config.missing_data_score,
                    weight,
                )
            },
            |separation| {
                FingerprintComponent::banded(
                    components::X_FACTOR,
                    &self.config.bands.x_factor_deg,
                    separation,
                    weight,
                )
            },
        )
    }

    fn flags(&self, components: &[FingerprintComponent]) -> Vec<LeakFlag> {
        let thresholds = &self.config.flags;
        let find = |name: &str| {
            components
                .iter()
                .find(|component| component.name == name && component.has_data())
        };
        let raw = |name: &str| find(name).and_then(|component| component.raw_value);
        let score = |name: &str| find(name).map(|component| component.score.value());

        let gap = raw(components::TIMING_GAP);
        let braked = raw(components::DECELERATION);
        let inversions = raw(components::SEQUENCE_ORDER).map(|value| value as usize);
        let separation = raw(components::X_FACTOR);

        let candidates = [
            (
                score(components::TRANSFER_RATIO)
                    .is_some_and(|s| s <= thresholds.weak_transfer_max_score),
                LeakFlag::WeakTransfer,
            ),
            (
                gap.is_some_and(|g| g < thresholds.simultaneous_gap_pct),
                LeakFlag::Simultaneous,
            ),
            (
                gap.is_some_and(|g| g > thresholds.over_separated_gap_pct),
                LeakFlag::OverSeparated,
            ),
            (
                braked.is_some_and(|count| count as usize <= thresholds.no_brake_max_count),
                LeakFlag::NoBrake,
            ),
            (
                inversions.is_some_and(|count| count >= thresholds.no_sequence_min_inversions),
                LeakFlag::NoSequence,
            ),
            (inversions == Some(1), LeakFlag::PartialSequence),
            (
                score(components::ENERGY_DELIVERY)
                    .is_some_and(|s| s <= thresholds.energy_leak_max_score),
                LeakFlag::EnergyLeak,
            ),
            (
                separation.is_some_and(|x| x < thresholds.low_separation_deg),
                LeakFlag::LowSeparation,
            ),
            (
                separation.is_some_and(|x| x > thresholds.over_rotation_deg),
                LeakFlag::OverRotation,
            ),
        ];
        candidates
            .into_iter()
            .filter_map(|(raised, flag)| raised.then_some(flag))
            .collect()
    }
}

fn count_rating(score: f64) -> &'static str {
    if score >= 100.0 {
        "Elite"
    } else if score >= 70.0 {
        "Good"
    } else if score >= 40.0 {
        "Working"
    } else {
        "Poor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::tests::frame;

    fn scorer() -> KineticFingerprintScorer {
        KineticFingerprintScorer::with_config(&IntelligenceConfig::default())
    }

    /// Ten frames: pelvis peaks at 2, torso at 4, arms at 6, bat at 8, contact at 9
    fn clean_swing() -> Vec<MomentumFrame> {
        let bump = |center: usize, height: f64, i: usize| {
            let distance = center.abs_diff(i) as f64;
            (height - distance).max(0.1)
        };
        (0..10)
            .map(|i| {
                let mut sample = frame(
                    bump(2, 10.0, i),
                    bump(4, 16.0, i),
                    bump(6, 20.0, i),
                    bump(8, 30.0, i),
                );
                sample.time_from_max_hand = Some(i as f64 - 8.5);
                sample.pelvis_rotation_deg = Some(0.0);
                sample.torso_rotation_deg = Some(55.0);
                sample.bat_energy = Some(50.0);
                sample.arms_energy = Some(30.0);
                sample.torso_energy = Some(20.0);
                sample
            })
            .collect()
    }

    #[test]
    fn test_clean_swing_scores_well() {
        let result = scorer().score(&clean_swing(), None);
        let contact = result.contact.unwrap();
        assert_eq!(contact.index, 9);
        assert!(contact.low_confidence);
        let transfer = result.component(components::TRANSFER_RATIO).unwrap();
        assert!((transfer.score.value() - 100.0).abs() < f64::EPSILON);
        let sequence = result.component(components::SEQUENCE_ORDER).unwrap();
        assert_eq!(sequence.raw_value, Some(0.0));
        assert!(!result.flags.contains(&LeakFlag::NoSequence));
        assert!(!result.flags.contains(&LeakFlag::PartialSequence));
    }

    #[test]
    fn test_empty_series_is_all_no_data() {
        let result = scorer().score(&[], None);
        assert!(result.contact.is_none());
        assert!(result.flags.is_empty());
        assert_eq!(result.components.len(), 6);
        assert!(result
            .components
            .iter()
            .all(|component| component.rating == NO_DATA));
        assert!((result.total.value() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_pelvis_transfer_has_no_data() {
        let frames: Vec<_> = (0..5).map(|_| frame(0.0, 5.0, 6.0, 7.0)).collect();
        let result = scorer().score(&frames, Some(3));
        let transfer = result.component(components::TRANSFER_RATIO).unwrap();
        assert_eq!(transfer.rating, NO_DATA);
        assert!((transfer.score.value() - 40.0).abs() < f64::EPSILON);
        assert!(!result.flags.contains(&LeakFlag::WeakTransfer));
    }

    #[test]
    fn test_reversed_chain_flags_no_sequence() {
        let mut frames = clean_swing();
        frames.reverse();
        let result = scorer().score(&frames, Some(9));
        assert!(result.flags.contains(&LeakFlag::NoSequence));
    }

    #[test]
    fn test_weights_sum_to_one() {
        let result = scorer().score(&clean_swing(), None);
        let sum: f64 = result.components.iter().map(|component| component.weight).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
