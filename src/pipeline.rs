// ABOUTME: Session scoring pipeline wiring normalization, aggregation, scoring and prescription
// ABOUTME: One player session in, one report out; batches of sessions run in parallel with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! # Session Pipeline
//!
//! Composes the engines for one player session:
//!
//! 1. Normalize raw sensor swings into canonical swings
//! 2. Build one `SwingMetrics`: explicit values first, then the momentum series,
//!    then batted-ball outcomes, then attack-angle path consistency
//! 3. Score with the 4B scorer and, when a series is present, the kinetic fingerprint
//! 4. Merge both flag lists and prescribe drills for the hitter's motor profile

use crate::config::EngineConfig;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use swinglab_core::errors::AppResult;
use swinglab_core::models::{
    AgeBracket, BattedBall, LeakFlag, MomentumFrame, MotorProfile, SwingMetrics,
};
use swinglab_intelligence::{
    path_consistency_from_swings, FourBScorer, FourBScores, KineticFingerprintResult,
    KineticFingerprintScorer, MomentumSeries, OutcomeSummary, Prescription, PrescriptionResolver,
    SessionAggregator,
};
use swinglab_providers::{BatchNormalization, NormalizeOptions, SensorNormalizer};
use tracing::{debug, info};
use uuid::Uuid;

/// Everything recorded for one player session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionInput {
    /// Session identifier
    pub session_id: Uuid,
    /// Age bracket key; the engine default applies when absent
    pub age_bracket: Option<String>,
    /// Motor profile token; the engine default applies when absent
    pub motor_profile: Option<String>,
    /// SDK version tag attached to normalized swings
    pub sdk_version: Option<String>,
    /// Fallback time for swings without a timestamp; read from the clock once when absent
    pub received_at: Option<DateTime<Utc>>,
    /// Raw bat-sensor records
    pub raw_swings: Vec<Value>,
    /// Launch-monitor rows
    pub batted_balls: Vec<BattedBall>,
    /// Full-body momentum series of the representative swing
    pub momentum_series: Vec<MomentumFrame>,
    /// Known contact frame of the series
    pub contact_index: Option<usize>,
    /// Measured values that take precedence over derived ones
    pub metrics: SwingMetrics,
}

/// Scored session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Session identifier
    pub session_id: Uuid,
    /// Bracket the scores are relative to
    pub age_bracket: AgeBracket,
    /// Profile drills were filtered for
    pub motor_profile: MotorProfile,
    /// Sensor swings partitioned by validity
    pub normalization: BatchNormalization,
    /// Batted-ball summary
    pub outcomes: OutcomeSummary,
    /// Metrics the 4B scorer saw
    pub metrics: SwingMetrics,
    /// 4B result
    pub four_b: FourBScores,
    /// Kinetic fingerprint, when a momentum series was supplied
    pub fingerprint: Option<KineticFingerprintResult>,
    /// Union of 4B and fingerprint flags, first appearance kept
    pub flags: Vec<LeakFlag>,
    /// Drills for the merged flags
    pub prescription: Prescription,
}

/// Scores whole sessions
#[derive(Debug, Clone)]
pub struct ScoringPipeline {
    normalizer: SensorNormalizer,
    aggregator: SessionAggregator,
    four_b: FourBScorer,
    fingerprint: KineticFingerprintScorer,
    prescriptions: PrescriptionResolver,
    default_age_bracket: AgeBracket,
    default_motor_profile: MotorProfile,
}

impl Default for ScoringPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringPipeline {
    /// Pipeline using the process-wide scoring tables and sensor thresholds
    #[must_use]
    pub fn new() -> Self {
        Self {
            normalizer: SensorNormalizer::new(),
            aggregator: SessionAggregator::new(),
            four_b: FourBScorer::new(),
            fingerprint: KineticFingerprintScorer::new(),
            prescriptions: PrescriptionResolver::new(),
            default_age_bracket: AgeBracket::default(),
            default_motor_profile: MotorProfile::default(),
        }
    }

    /// Pipeline using injected configuration
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        let intelligence = &config.intelligence;
        Self {
            normalizer: SensorNormalizer::with_config(config.sensor.clone()),
            aggregator: SessionAggregator::with_config(intelligence),
            four_b: FourBScorer::with_config(intelligence),
            fingerprint: KineticFingerprintScorer::with_config(intelligence),
            prescriptions: PrescriptionResolver::with_config(intelligence.prescription.clone()),
            default_age_bracket: config.default_age_bracket,
            default_motor_profile: config.default_motor_profile,
        }
    }

    /// Score one session
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when a raw swing is not a JSON object
    pub fn score_session(&self, input: &SessionInput) -> AppResult<SessionReport> {
        let age_bracket = input
            .age_bracket
            .as_deref()
            .map_or(self.default_age_bracket, AgeBracket::parse_or_default);
        let motor_profile = input
            .motor_profile
            .as_deref()
            .map_or(self.default_motor_profile, MotorProfile::parse_or_default);

        let mut options = NormalizeOptions::new(input.session_id)
            .with_received_at(input.received_at.unwrap_or_else(Utc::now));
        options.sdk_version.clone_from(&input.sdk_version);
        let normalization = self.normalizer.normalize_batch(&input.raw_swings, &options)?;

        let fingerprint = (!input.momentum_series.is_empty())
            .then(|| self.fingerprint.score(&input.momentum_series, input.contact_index));
        let outcomes = self
            .aggregator
            .aggregate_batted_balls(&input.batted_balls, age_bracket);
        let metrics = session_metrics(input, fingerprint.as_ref(), &outcomes, &normalization);

        let four_b = self.four_b.score(&metrics, age_bracket);
        let flags = merge_flags(&four_b.flags, fingerprint.as_ref().map(|f| f.flags.as_slice()));
        let prescription = self.prescriptions.prescribe(&flags, motor_profile);

        info!(
            session_id = %input.session_id,
            age_bracket = %age_bracket,
            motor_profile = %motor_profile,
            swings = normalization.total(),
            accepted = normalization.valid.len() + normalization.warned.len(),
            composite = %four_b.composite,
            grade = %four_b.grade,
            fingerprint = ?fingerprint.as_ref().map(|f| f.total.rounded()),
            flags = flags.len(),
            drills = prescription.drills.len(),
            "Scored session"
        );

        Ok(SessionReport {
            session_id: input.session_id,
            age_bracket,
            motor_profile,
            normalization,
            outcomes,
            metrics,
            four_b,
            fingerprint,
            flags,
            prescription,
        })
    }

    /// Score independent sessions in parallel, preserving input order
    #[must_use]
    pub fn score_sessions(&self, inputs: &[SessionInput]) -> Vec<AppResult<SessionReport>> {
        inputs
            .par_iter()
            .map(|input| self.score_session(input))
            .collect()
    }
}

/// Explicit metrics, then series kinematics, then outcomes, then path consistency
fn session_metrics(
    input: &SessionInput,
    fingerprint: Option<&KineticFingerprintResult>,
    outcomes: &OutcomeSummary,
    normalization: &BatchNormalization,
) -> SwingMetrics {
    let mut metrics = input.metrics.clone();
    if let Some(fingerprint) = fingerprint {
        let kinematics =
            MomentumSeries::new(&input.momentum_series).to_metrics(fingerprint.contact);
        metrics = metrics.fill_missing_from(&kinematics);
    }
    metrics = outcomes.apply_to(metrics);

    if metrics.bat_direction_std_deg.is_none() {
        metrics.bat_direction_std_deg = path_consistency_from_swings(normalization.accepted());
    }

    debug!(
        session_id = %input.session_id,
        balls = outcomes.ball_count,
        has_series = fingerprint.is_some(),
        path_consistency = ?metrics.bat_direction_std_deg,
        "Session metrics assembled"
    );
    metrics
}

/// De-duplicated union of flag lists, first appearance wins
fn merge_flags(primary: &[LeakFlag], secondary: Option<&[LeakFlag]>) -> Vec<LeakFlag> {
    let mut seen = HashSet::new();
    primary
        .iter()
        .chain(secondary.unwrap_or_default())
        .copied()
        .filter(|flag| seen.insert(*flag))
        .collect()
}
