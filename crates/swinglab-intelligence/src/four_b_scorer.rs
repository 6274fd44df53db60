// ABOUTME: 4B scorer turning kinematic and batted-ball summaries into Brain/Body/Bat/Ball scores
// ABOUTME: Produces banded sub-scores, weighted composite, grade, scout grades and leak flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! # 4B Scorer
//!
//! Scores four categories from one [`SwingMetrics`] summary:
//!
//! - **Body**: transfer efficiency, stability and segment velocity
//! - **Brain**: pelvis-to-torso timing and contact consistency
//! - **Bat**: arms/torso transfer, torso braking and path consistency
//! - **Ball**: exit velocity against the bracket cap, barrel and hard-hit rates
//!
//! Missing inputs never fail scoring: each falls to a configured score labelled
//! "No data", and every score is clamped to `[0, 100]`.

use crate::bands::BandTable;
use crate::config::intelligence::{
    AgeBracketConfig, BracketExpectations, FourBConfig, GradingConfig, IntelligenceConfig,
};
use crate::grading::{Grade, Grader, RatingBucket, Score, ScoutGrade};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use swinglab_core::constants::rating_labels::NO_DATA;
use swinglab_core::models::{AgeBracket, LeakFlag, SwingMetrics};
use tracing::debug;

/// The four scored categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Timing and consistency
    Brain,
    /// Ground-up energy production
    Body,
    /// Delivery of energy to the barrel
    Bat,
    /// Batted-ball outcomes
    Ball,
}

impl Category {
    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brain => "Brain",
            Self::Body => "Body",
            Self::Bat => "Bat",
            Self::Ball => "Ball",
        }
    }

    const fn describe(self, bucket: RatingBucket) -> &'static str {
        match (self, bucket) {
            (Self::Body, RatingBucket::Elite) => "Powerful, connected lower half",
            (Self::Body, RatingBucket::Good) => "Solid energy transfer",
            (Self::Body, RatingBucket::Working) => "Energy transfer developing",
            (Self::Body, RatingBucket::Priority) => "Energy leaking from the chain",
            (Self::Brain, RatingBucket::Elite) => "Elite timing",
            (Self::Brain, RatingBucket::Good) => "Good rhythm",
            (Self::Brain, RatingBucket::Working) => "Timing inconsistent",
            (Self::Brain, RatingBucket::Priority) => "Timing needs work",
            (Self::Bat, RatingBucket::Elite) => "Elite bat delivery",
            (Self::Bat, RatingBucket::Good) => "Efficient bat path",
            (Self::Bat, RatingBucket::Working) => "Bat path developing",
            (Self::Bat, RatingBucket::Priority) => "Bat path needs work",
            (Self::Ball, RatingBucket::Elite) => "Elite contact quality",
            (Self::Ball, RatingBucket::Good) => "Good contact quality",
            (Self::Ball, RatingBucket::Working) => "Contact developing",
            (Self::Ball, RatingBucket::Priority) => "Contact needs work",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One weighted component of a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubScore {
    /// Component key
    pub name: String,
    /// Measured input, if any
    pub raw_value: Option<f64>,
    /// Component score
    pub score: Score,
    /// Weight inside the category
    pub weight: f64,
    /// Qualitative label
    pub label: String,
}

/// Score of one 4B category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category
    pub category: Category,
    /// Category score
    pub score: Score,
    /// Weight in the composite
    pub weight: f64,
    /// Rating bucket
    pub rating: RatingBucket,
    /// Rating display color
    pub color: String,
    /// Qualitative summary
    pub label: String,
    /// Score on the 20-80 scale
    pub scout_grade: ScoutGrade,
    /// Component breakdown
    pub components: Vec<SubScore>,
}

/// Complete 4B result for one swing or session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourBScores {
    /// Bracket the scores are relative to
    pub bracket: AgeBracket,
    /// Body
    pub body: CategoryScore,
    /// Brain
    pub brain: CategoryScore,
    /// Bat
    pub bat: CategoryScore,
    /// Ball
    pub ball: CategoryScore,
    /// Weighted composite
    pub composite: Score,
    /// Composite letter grade
    pub grade: Grade,
    /// Grade display color
    pub grade_color: String,
    /// Composite on the 20-80 scale
    pub scout_grade: ScoutGrade,
    /// Technique leaks detected
    pub flags: Vec<LeakFlag>,
}

impl FourBScores {
    /// Categories in Body, Brain, Bat, Ball order
    #[must_use]
    pub fn categories(&self) -> [&CategoryScore; 4] {
        [&self.body, &self.brain, &self.bat, &self.ball]
    }
}

/// Score and label for one component before weighting
struct Rated {
    raw_value: Option<f64>,
    score: f64,
    label: String,
    has_data: bool,
}

impl Rated {
    fn banded(table: &BandTable, value: Option<f64>, fallback: f64) -> Self {
        match value {
            Some(value) => {
                let band = table.evaluate(value);
                Self {
                    raw_value: Some(value),
                    score: band.score,
                    label: band.label.to_owned(),
                    has_data: true,
                }
            }
            None => Self::no_data(fallback),
        }
    }

    fn no_data(score: f64) -> Self {
        Self {
            raw_value: None,
            score,
            label: NO_DATA.to_owned(),
            has_data: false,
        }
    }

    fn computed(raw_value: Option<f64>, score: f64, label: &str) -> Self {
        Self {
            raw_value,
            score,
            label: label.to_owned(),
            has_data: raw_value.is_some(),
        }
    }

    fn weighted(&self, name: &str, weight: f64) -> SubScore {
        SubScore {
            name: name.to_owned(),
            raw_value: self.raw_value,
            score: Score::new(self.score),
            weight,
            label: self.label.clone(),
        }
    }
}

/// Brain/Body/Bat/Ball scorer
#[derive(Debug, Clone)]
pub struct FourBScorer {
    config: FourBConfig,
    grading: GradingConfig,
    age_brackets: AgeBracketConfig,
}

impl Default for FourBScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl FourBScorer {
    /// Scorer using the process-wide configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global())
    }

    /// Scorer using an injected configuration
    #[must_use]
    pub fn with_config(config: &IntelligenceConfig) -> Self {
        Self {
            config: config.four_b.clone(),
            grading: config.grading.clone(),
            age_brackets: config.age_brackets.clone(),
        }
    }

    /// Score one metrics summary relative to `bracket`
    #[must_use]
    pub fn score(&self, metrics: &SwingMetrics, bracket: AgeBracket) -> FourBScores {
        let expectations = self.age_brackets.expectations(bracket);
        let grader = Grader::new(&self.grading);
        let bands = &self.config.bands;
        let fallbacks = &self.config.fallbacks;

        let torso_pelvis = Rated::banded(
            &bands.torso_pelvis_ratio,
            metrics.torso_pelvis_ratio(),
            fallbacks.missing_ratio_score,
        );
        let arms_torso = Rated::banded(
            &bands.arms_torso_ratio,
            metrics.arms_torso_ratio(),
            fallbacks.missing_ratio_score,
        );

        let body = self.body(metrics, &expectations, &torso_pelvis, &arms_torso, grader);
        let brain = self.brain(metrics, grader);
        let bat = self.bat(metrics, &arms_torso, grader);
        let ball = self.ball(metrics, &expectations, grader);

        let weights = &self.config.weights;
        let composite = Score::new(
            weights.composite_body * body.score.value()
                + weights.composite_brain * brain.score.value()
                + weights.composite_bat * bat.score.value()
                + weights.composite_ball * ball.score.value(),
        );
        let grade = grader.grade(composite);
        let flags = self.leak_flags(metrics, &torso_pelvis);

        debug!(
            bracket = %bracket,
            composite = %composite,
            body = %body.score,
            brain = %brain.score,
            bat = %bat.score,
            ball = %ball.score,
            flag_count = flags.len(),
            "4B scoring complete"
        );

        FourBScores {
            bracket,
            body,
            brain,
            bat,
            ball,
            composite,
            grade,
            grade_color: grade.color().to_owned(),
            scout_grade: grader.scout_grade(composite),
            flags,
        }
    }

    /// Score many independent summaries in parallel, preserving order
    #[must_use]
    pub fn score_batch(&self, inputs: &[(SwingMetrics, AgeBracket)]) -> Vec<FourBScores> {
        inputs
            .par_iter()
            .map(|(metrics, bracket)| self.score(metrics, *bracket))
            .collect()
    }

    fn body(
        &self,
        metrics: &SwingMetrics,
        expectations: &BracketExpectations,
        torso_pelvis: &Rated,
        arms_torso: &Rated,
        grader: Grader<'_>,
    ) -> CategoryScore {
        let weights = &self.config.weights;
        let adjustments = &self.config.adjustments;

        // Raw value is the mean of the ratios the score averages
        let ratio = match (torso_pelvis.raw_value, arms_torso.raw_value) {
            (Some(lower), Some(upper)) => Some(f64::midpoint(lower, upper)),
            (single, None) | (None, single) => single,
        };
        let label = [torso_pelvis, arms_torso]
            .into_iter()
            .find(|rated| rated.has_data)
            .map_or(NO_DATA, |rated| rated.label.as_str());
        let transfer = Rated::computed(
            ratio,
            f64::midpoint(torso_pelvis.score, arms_torso.score),
            label,
        );

        let drift_penalty = metrics
            .drift_timing_ratio
            .map_or(0.0, |ratio| self.config.bands.drift_penalty.evaluate(ratio).score);
        let volatility_penalty = metrics.exit_velocity_cv_pct.map_or(0.0, |cv| {
            ((cv - adjustments.volatility_cv_baseline) * adjustments.volatility_per_cv_point)
                .max(0.0)
                .min(adjustments.volatility_max_penalty)
        });
        let stability_score =
            (100.0 - drift_penalty - volatility_penalty).max(adjustments.stability_floor);
        let stability = Rated::computed(
            metrics.drift_timing_ratio,
            stability_score,
            stability_label(stability_score),
        );

        let velocity = metrics.torso_velocity_peak_deg_s.map_or_else(
            || Rated::no_data(self.config.fallbacks.missing_velocity_percentile),
            |velocity| {
                let percentile =
                    (velocity / expectations.torso_velocity_deg_s * 100.0).clamp(0.0, 100.0);
                Rated::computed(Some(velocity), percentile, "Percentile of bracket peak")
            },
        );

        let components = vec![
            transfer.weighted("transfer_efficiency", weights.body_transfer),
            stability.weighted("stability", weights.body_stability),
            velocity.weighted("velocity_percentile", weights.body_velocity),
        ];
        category_score(Category::Body, weights.composite_body, components, grader)
    }

    fn brain(&self, metrics: &SwingMetrics, grader: Grader<'_>) -> CategoryScore {
        let weights = &self.config.weights;
        let adjustments = &self.config.adjustments;

        let timing = Rated::banded(
            &self.config.bands.timing_gap_pct,
            metrics.timing_gap_pct(),
            self.config.fallbacks.missing_timing_score,
        );
        let consistency = metrics.exit_velocity_cv_pct.map_or_else(
            || Rated::no_data(self.config.fallbacks.missing_consistency_score),
            |cv| {
                let ramp = ((cv - adjustments.consistency_cv_baseline)
                    / adjustments.consistency_cv_span)
                    .max(0.0);
                let penalty = (ramp * adjustments.consistency_max_penalty)
                    .min(adjustments.consistency_max_penalty);
                Rated::computed(Some(cv), 100.0 - penalty, consistency_label(penalty))
            },
        );

        let components = vec![
            timing.weighted("timing_gap", weights.brain_timing),
            consistency.weighted("contact_consistency", weights.brain_consistency),
        ];
        category_score(Category::Brain, weights.composite_brain, components, grader)
    }

    fn bat(&self, metrics: &SwingMetrics, arms_torso: &Rated, grader: Grader<'_>) -> CategoryScore {
        let weights = &self.config.weights;
        let bands = &self.config.bands;
        let missing = self.config.fallbacks.missing_component_score;

        let decel = Rated::banded(&bands.torso_decel_pct, metrics.torso_decel_pct, missing);
        let path = Rated::banded(
            &bands.bat_direction_std_deg,
            metrics.bat_direction_std_deg,
            missing,
        );

        let components = vec![
            arms_torso.weighted("arms_torso_transfer", weights.bat_arms_torso),
            decel.weighted("torso_deceleration", weights.bat_decel),
            path.weighted("path_consistency", weights.bat_path),
        ];
        category_score(Category::Bat, weights.composite_bat, components, grader)
    }

    fn ball(
        &self,
        metrics: &SwingMetrics,
        expectations: &BracketExpectations,
        grader: Grader<'_>,
    ) -> CategoryScore {
        let weights = &self.config.weights;
        let bands = &self.config.bands;
        let adjustments = &self.config.adjustments;
        let missing = self.config.fallbacks.missing_component_score;

        let ev_pct_of_cap = metrics
            .exit_velocity_avg_mph
            .map(|ev| ev / expectations.exit_velocity_cap_mph * 100.0);
        let exit_velocity = Rated::banded(&bands.exit_velocity_pct_of_cap, ev_pct_of_cap, missing);
        let barrel = Rated::banded(&bands.barrel_rate_pct, metrics.barrel_rate_pct, missing);
        let hard_hit = Rated::banded(&bands.hard_hit_rate_pct, metrics.hard_hit_rate_pct, missing);

        let mishit_penalty = metrics.mishit_rate_pct.map_or(0.0, |rate| {
            ((rate - adjustments.mishit_baseline_pct) * adjustments.mishit_penalty_per_point)
                .max(0.0)
        });

        let components = vec![
            exit_velocity.weighted("exit_velocity", weights.ball_exit_velocity),
            barrel.weighted("barrel_rate", weights.ball_barrel),
            hard_hit.weighted("hard_hit_rate", weights.ball_hard_hit),
        ];
        let weighted = weighted_sum(&components) - mishit_penalty;
        let score = Score::new(weighted.max(adjustments.ball_floor));
        finish_category(Category::Ball, weights.composite_ball, score, components, grader)
    }

    fn leak_flags(&self, metrics: &SwingMetrics, torso_pelvis: &Rated) -> Vec<LeakFlag> {
        let thresholds = &self.config.leak_thresholds;
        let below = |value: Option<f64>, limit: f64| value.is_some_and(|v| v < limit);
        let above = |value: Option<f64>, limit: f64| value.is_some_and(|v| v > limit);

        let arms_torso = metrics.arms_torso_ratio();
        let gap = metrics.timing_gap_pct();
        let candidates = [
            (
                torso_pelvis.has_data && torso_pelvis.score <= thresholds.weak_transfer_max_score,
                LeakFlag::WeakTransfer,
            ),
            (below(arms_torso, thresholds.arm_drag_ratio), LeakFlag::ArmDrag),
            (above(arms_torso, thresholds.torso_bypass_ratio), LeakFlag::TorsoBypass),
            (below(gap, thresholds.simultaneous_gap_pct), LeakFlag::Simultaneous),
            (above(gap, thresholds.over_separated_gap_pct), LeakFlag::OverSeparated),
            (
                below(metrics.torso_decel_pct, thresholds.no_brake_decel_pct),
                LeakFlag::NoBrake,
            ),
            (
                below(metrics.drift_timing_ratio, thresholds.early_drift_ratio),
                LeakFlag::EarlyDrift,
            ),
            (
                above(metrics.drift_timing_ratio, thresholds.late_legs_ratio),
                LeakFlag::LateLegs,
            ),
            (
                above(
                    metrics.bat_direction_std_deg,
                    thresholds.casting_direction_std_deg,
                ),
                LeakFlag::Casting,
            ),
            (
                above(
                    metrics.exit_velocity_cv_pct,
                    thresholds.inconsistent_contact_cv_pct,
                ),
                LeakFlag::InconsistentContact,
            ),
            (
                above(metrics.mishit_rate_pct, thresholds.mishit_rate_pct),
                LeakFlag::Mishits,
            ),
        ];
        candidates
            .into_iter()
            .filter_map(|(raised, flag)| raised.then_some(flag))
            .collect()
    }
}

fn category_score(
    category: Category,
    weight: f64,
    components: Vec<SubScore>,
    grader: Grader<'_>,
) -> CategoryScore {
    let score = Score::new(weighted_sum(&components));
    finish_category(category, weight, score, components, grader)
}

fn finish_category(
    category: Category,
    weight: f64,
    score: Score,
    components: Vec<SubScore>,
    grader: Grader<'_>,
) -> CategoryScore {
    let rating = grader.category_bucket(score);
    CategoryScore {
        category,
        score,
        weight,
        rating,
        color: rating.color().to_owned(),
        label: category.describe(rating).to_owned(),
        scout_grade: grader.scout_grade(score),
        components,
    }
}

fn weighted_sum(components: &[SubScore]) -> f64 {
    components
        .iter()
        .map(|component| component.score.value() * component.weight)
        .sum()
}

fn stability_label(score: f64) -> &'static str {
    if score >= 90.0 {
        "Stable"
    } else if score >= 70.0 {
        "Mostly stable"
    } else {
        "Unstable"
    }
}

fn consistency_label(penalty: f64) -> &'static str {
    if penalty <= 0.0 {
        "Consistent"
    } else if penalty < 20.0 {
        "Some variance"
    } else {
        "Inconsistent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> FourBScorer {
        FourBScorer::with_config(&IntelligenceConfig::default())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty_metrics_use_fallbacks() {
        let scores = scorer().score(&SwingMetrics::default(), AgeBracket::HighSchool);
        // Body: TE 40, stability 100, velocity 75
        assert_close(scores.body.score.value(), 0.5 * 40.0 + 0.35 * 100.0 + 0.15 * 75.0);
        // Brain: timing 60, consistency 75
        assert_close(scores.brain.score.value(), 67.5);
        // Bat: 40, 50, 50
        assert_close(scores.bat.score.value(), 46.0);
        assert_close(scores.ball.score.value(), 50.0);
        assert!(scores.flags.is_empty());
        assert_eq!(scores.body.components[0].label, NO_DATA);
    }

    #[test]
    fn test_zero_pelvis_is_not_weak_transfer() {
        let metrics = SwingMetrics {
            pelvis_momentum_peak: Some(0.0),
            torso_momentum_peak: Some(10.0),
            arms_momentum_peak: Some(16.0),
            ..SwingMetrics::default()
        };
        let scores = scorer().score(&metrics, AgeBracket::Pro);
        assert!(!scores.flags.contains(&LeakFlag::WeakTransfer));
        let transfer = &scores.body.components[0];
        assert_close(transfer.score.value(), f64::midpoint(40.0, 95.0));
        assert_close(transfer.raw_value.unwrap(), 1.6);
        assert_ne!(transfer.label, NO_DATA);
    }

    #[test]
    fn test_transfer_raw_value_is_mean_of_both_ratios() {
        let metrics = SwingMetrics {
            pelvis_momentum_peak: Some(5.0),
            torso_momentum_peak: Some(8.0),
            arms_momentum_peak: Some(13.2),
            ..SwingMetrics::default()
        };
        let scores = scorer().score(&metrics, AgeBracket::Pro);
        let transfer = &scores.body.components[0];
        assert_eq!(transfer.name, "transfer_efficiency");
        assert_close(transfer.raw_value.unwrap(), f64::midpoint(1.6, 1.65));
    }

    #[test]
    fn test_mishit_penalty_respects_floor() {
        let metrics = SwingMetrics {
            exit_velocity_avg_mph: Some(40.0),
            barrel_rate_pct: Some(0.0),
            hard_hit_rate_pct: Some(0.0),
            mishit_rate_pct: Some(95.0),
            ..SwingMetrics::default()
        };
        let scores = scorer().score(&metrics, AgeBracket::Pro);
        assert_close(scores.ball.score.value(), 30.0);
        assert!(scores.flags.contains(&LeakFlag::Mishits));
    }

    #[test]
    fn test_bracket_scales_exit_velocity() {
        let metrics = SwingMetrics {
            exit_velocity_avg_mph: Some(62.0),
            ..SwingMetrics::default()
        };
        let youth = scorer().score(&metrics, AgeBracket::U10);
        let pro = scorer().score(&metrics, AgeBracket::Pro);
        assert!(youth.ball.score > pro.ball.score);
    }

    #[test]
    fn test_non_finite_inputs_stay_in_range() {
        let metrics = SwingMetrics {
            pelvis_momentum_peak: Some(f64::NAN),
            torso_momentum_peak: Some(f64::INFINITY),
            exit_velocity_cv_pct: Some(f64::INFINITY),
            torso_velocity_peak_deg_s: Some(f64::NAN),
            mishit_rate_pct: Some(f64::NEG_INFINITY),
            ..SwingMetrics::default()
        };
        let scores = scorer().score(&metrics, AgeBracket::College);
        for category in scores.categories() {
            let value = category.score.value();
            assert!(value.is_finite() && (0.0..=100.0).contains(&value));
        }
        assert!(scores.composite.value().is_finite());
    }

    #[test]
    fn test_batch_preserves_order() {
        let inputs = vec![
            (
                SwingMetrics {
                    barrel_rate_pct: Some(20.0),
                    ..SwingMetrics::default()
                },
                AgeBracket::Pro,
            ),
            (SwingMetrics::default(), AgeBracket::U12),
        ];
        let results = scorer().score_batch(&inputs);
        assert_eq!(results[0].bracket, AgeBracket::Pro);
        assert_eq!(results[1].bracket, AgeBracket::U12);
    }
}
