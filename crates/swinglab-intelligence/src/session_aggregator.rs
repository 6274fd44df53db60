// ABOUTME: Aggregates launch-monitor rows and sensor swings into session-level outcome metrics
// ABOUTME: Exit velocity spread, barrel/hard-hit/mishit rates and attack-angle path consistency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

use crate::config::intelligence::{AgeBracketConfig, BracketExpectations, IntelligenceConfig};
use serde::{Deserialize, Serialize};
use swinglab_core::constants::launch_angle;
use swinglab_core::constants::numeric::ZERO_EPSILON;
use swinglab_core::models::{AgeBracket, BattedBall, CanonicalSwing, SwingMetrics};
use tracing::debug;

/// Session outcome summary derived from batted balls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSummary {
    /// Balls with a finite exit velocity
    pub ball_count: usize,
    /// Mean exit velocity (mph)
    pub exit_velocity_avg_mph: Option<f64>,
    /// Maximum exit velocity (mph)
    pub exit_velocity_max_mph: Option<f64>,
    /// Coefficient of variation of exit velocity (percent)
    pub exit_velocity_cv_pct: Option<f64>,
    /// Barrels (percent of balls)
    pub barrel_rate_pct: Option<f64>,
    /// Hard-hit balls (percent of balls)
    pub hard_hit_rate_pct: Option<f64>,
    /// Mishits (percent of balls)
    pub mishit_rate_pct: Option<f64>,
}

impl OutcomeSummary {
    /// Fill the outcome fields of `metrics` that are still empty
    #[must_use]
    pub fn apply_to(&self, metrics: SwingMetrics) -> SwingMetrics {
        metrics.fill_missing_from(&SwingMetrics {
            exit_velocity_avg_mph: self.exit_velocity_avg_mph,
            exit_velocity_max_mph: self.exit_velocity_max_mph,
            exit_velocity_cv_pct: self.exit_velocity_cv_pct,
            barrel_rate_pct: self.barrel_rate_pct,
            hard_hit_rate_pct: self.hard_hit_rate_pct,
            mishit_rate_pct: self.mishit_rate_pct,
            ..SwingMetrics::default()
        })
    }
}

/// Session-level aggregation of outcome rows
#[derive(Debug, Clone)]
pub struct SessionAggregator {
    age_brackets: AgeBracketConfig,
}

impl Default for SessionAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionAggregator {
    /// Aggregator using the process-wide configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global())
    }

    /// Aggregator using an injected configuration
    #[must_use]
    pub fn with_config(config: &IntelligenceConfig) -> Self {
        Self {
            age_brackets: config.age_brackets.clone(),
        }
    }

    /// Summarize batted balls relative to `bracket`; empty input yields all `None`
    #[must_use]
    pub fn aggregate_batted_balls(
        &self,
        balls: &[BattedBall],
        bracket: AgeBracket,
    ) -> OutcomeSummary {
        let expectations = self.age_brackets.expectations(bracket);
        let usable: Vec<&BattedBall> = balls
            .iter()
            .filter(|ball| ball.exit_velocity_mph.is_finite())
            .collect();
        if usable.is_empty() {
            return OutcomeSummary::default();
        }

        let count = usable.len() as f64;
        let velocities: Vec<f64> = usable.iter().map(|ball| ball.exit_velocity_mph).collect();
        let mean = velocities.iter().sum::<f64>() / count;
        let max = velocities.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let variance = velocities
            .iter()
            .map(|ev| (ev - mean).powi(2))
            .sum::<f64>()
            / count;
        let cv = (mean.abs() >= ZERO_EPSILON).then(|| variance.sqrt() / mean * 100.0);

        let rate = |predicate: &dyn Fn(&BattedBall) -> bool| {
            usable.iter().filter(|ball| predicate(**ball)).count() as f64 / count * 100.0
        };
        let barrel_rate = rate(&|ball| is_barrel(ball, &expectations));
        let hard_hit_rate = rate(&|ball| ball.exit_velocity_mph >= expectations.hard_hit_floor_mph);
        let mishit_rate = rate(&|ball| is_mishit(ball, &expectations));

        debug!(
            bracket = %bracket,
            balls = usable.len(),
            exit_velocity_avg = mean,
            barrel_rate,
            hard_hit_rate,
            mishit_rate,
            "Aggregated batted balls"
        );

        OutcomeSummary {
            ball_count: usable.len(),
            exit_velocity_avg_mph: Some(mean),
            exit_velocity_max_mph: Some(max),
            exit_velocity_cv_pct: cv,
            barrel_rate_pct: Some(barrel_rate),
            hard_hit_rate_pct: Some(hard_hit_rate),
            mishit_rate_pct: Some(mishit_rate),
        }
    }
}

fn is_barrel(ball: &BattedBall, expectations: &BracketExpectations) -> bool {
    ball.exit_velocity_mph >= expectations.barrel_floor_mph
        && ball.launch_angle_deg.is_some_and(|angle| {
            (launch_angle::BARREL_MIN_DEG..=launch_angle::BARREL_MAX_DEG).contains(&angle)
        })
}

fn is_mishit(ball: &BattedBall, expectations: &BracketExpectations) -> bool {
    ball.exit_velocity_mph < expectations.mishit_ceiling_mph
        || ball.launch_angle_deg.is_some_and(|angle| {
            angle < launch_angle::TOPPED_BELOW_DEG || angle > launch_angle::POPUP_ABOVE_DEG
        })
}

/// Population standard deviation of attack angle across valid swings
///
/// Needs at least two valid swings with an attack angle.
#[must_use]
pub fn path_consistency_from_swings<'a>(
    swings: impl IntoIterator<Item = &'a CanonicalSwing>,
) -> Option<f64> {
    let angles: Vec<f64> = swings
        .into_iter()
        .filter(|swing| swing.is_valid())
        .filter_map(|swing| swing.measurements.attack_angle_deg)
        .filter(|angle| angle.is_finite())
        .collect();
    if angles.len() < 2 {
        return None;
    }
    let count = angles.len() as f64;
    let mean = angles.iter().sum::<f64>() / count;
    let variance = angles.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / count;
    Some(variance.sqrt())
}
