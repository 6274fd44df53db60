// ABOUTME: Sensor normalizer converting raw vendor JSON swings into canonical swings
// ABOUTME: Single-record and batch entry points plus the canonical-to-raw inverse mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

use super::aliases::{
    resolve_external_id, resolve_number, round_to, FieldAlias, ATTACK_ANGLE, BAT_SPEED,
    HAND_SPEED, IMPACT_X, IMPACT_Y, IMPACT_Z, ON_PLANE_EFFICIENCY, ROTATIONAL_ACCELERATION,
    TIME_TO_CONTACT, VERTICAL_BAT_ANGLE,
};
use super::timestamp::resolve_timestamp;
use super::validation::SensorValidationConfig;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use swinglab_core::constants::numeric::ZERO_EPSILON;
use swinglab_core::errors::{AppError, AppResult};
use swinglab_core::models::{CanonicalSwing, SensorMeasurements, SwingProvenance};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Decimal places for speeds, angles and percentages
const COARSE_PLACES: i32 = 1;
/// Decimal places for seconds, coordinates and ratios
const FINE_PLACES: i32 = 3;

/// Per-call context for normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Session the swings belong to
    pub session_id: Uuid,
    /// SDK version tag reported by the caller
    pub sdk_version: Option<String>,
    /// Swing numbers start at `offset + 1`
    pub swing_number_offset: u32,
    /// Time used when a swing carries no usable timestamp
    pub received_at: DateTime<Utc>,
}

impl NormalizeOptions {
    /// Options for `session_id`, capturing the current time once
    #[must_use]
    pub fn new(session_id: Uuid) -> Self {
        Self {
            session_id,
            sdk_version: None,
            swing_number_offset: 0,
            received_at: Utc::now(),
        }
    }

    /// Set the SDK version tag
    #[must_use]
    pub fn with_sdk_version(mut self, version: impl Into<String>) -> Self {
        self.sdk_version = Some(version.into());
        self
    }

    /// Set the swing number offset
    #[must_use]
    pub const fn with_swing_number_offset(mut self, offset: u32) -> Self {
        self.swing_number_offset = offset;
        self
    }

    /// Set the fallback time
    #[must_use]
    pub const fn with_received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.received_at = received_at;
        self
    }
}

/// Batch result split into disjoint partitions, each in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchNormalization {
    /// Accepted without warnings
    pub valid: Vec<CanonicalSwing>,
    /// Accepted with warnings
    pub warned: Vec<CanonicalSwing>,
    /// Rejected
    pub invalid: Vec<CanonicalSwing>,
}

impl BatchNormalization {
    /// Every accepted swing, warned or not, in input order
    #[must_use]
    pub fn accepted(&self) -> Vec<&CanonicalSwing> {
        let mut accepted: Vec<&CanonicalSwing> = self.valid.iter().chain(&self.warned).collect();
        accepted.sort_by_key(|swing| swing.provenance.swing_number);
        accepted
    }

    /// Number of swings in all partitions
    #[must_use]
    pub fn total(&self) -> usize {
        self.valid.len() + self.warned.len() + self.invalid.len()
    }
}

/// Converts vendor sensor records into canonical swings
#[derive(Debug, Clone, Default)]
pub struct SensorNormalizer {
    config: SensorValidationConfig,
}

impl SensorNormalizer {
    /// Normalizer with thresholds from `SWINGLAB_SENSOR_CONFIG`, or the defaults
    #[must_use]
    pub fn new() -> Self {
        let config = SensorValidationConfig::load().unwrap_or_else(|e| {
            warn!("Failed to load sensor validation config: {}, using defaults", e);
            SensorValidationConfig::default()
        });
        Self::with_config(config)
    }

    /// Normalizer with injected thresholds
    #[must_use]
    pub const fn with_config(config: SensorValidationConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &SensorValidationConfig {
        &self.config
    }

    /// Normalize one record as swing number `offset + 1`
    ///
    /// # Errors
    /// Returns `InvalidFormat` when `record` is not a JSON object
    pub fn normalize(
        &self,
        record: &Value,
        options: &NormalizeOptions,
    ) -> AppResult<CanonicalSwing> {
        self.normalize_at(record, options, options.swing_number_offset.saturating_add(1))
    }

    /// Normalize records in order; swing `i` gets number `offset + i + 1`
    ///
    /// # Errors
    /// Returns `InvalidFormat` naming the first record that is not a JSON object
    pub fn normalize_batch(
        &self,
        records: &[Value],
        options: &NormalizeOptions,
    ) -> AppResult<BatchNormalization> {
        let mut batch = BatchNormalization::default();
        for (index, record) in records.iter().enumerate() {
            let position = u32::try_from(index).map_err(|_| {
                AppError::invalid_input(format!("Batch too large: {} records", records.len()))
            })?;
            let swing_number = options
                .swing_number_offset
                .saturating_add(position)
                .saturating_add(1);
            let swing = self
                .normalize_at(record, options, swing_number)
                .map_err(|e| e.with_details(json!({ "record_index": index })))?;
            if !swing.is_valid() {
                batch.invalid.push(swing);
            } else if swing.is_warned() {
                batch.warned.push(swing);
            } else {
                batch.valid.push(swing);
            }
        }

        info!(
            session_id = %options.session_id,
            total = batch.total(),
            valid = batch.valid.len(),
            warned = batch.warned.len(),
            invalid = batch.invalid.len(),
            "Normalized sensor batch"
        );
        Ok(batch)
    }

    fn normalize_at(
        &self,
        record: &Value,
        options: &NormalizeOptions,
        swing_number: u32,
    ) -> AppResult<CanonicalSwing> {
        let object = record.as_object().ok_or_else(|| {
            AppError::invalid_format(format!(
                "Sensor record must be a JSON object, got {}",
                json_kind(record)
            ))
            .with_session_id(options.session_id.to_string())
        })?;

        let measurements = measurements(object);
        let resolved = resolve_timestamp(object, options.received_at);
        let provenance = SwingProvenance {
            session_id: options.session_id,
            swing_number,
            external_id: resolve_external_id(object),
            sdk_version: options.sdk_version.clone(),
            timestamp: resolved.timestamp,
            timestamp_source: resolved.source,
            raw_timestamp: resolved.raw,
        };
        let verdict = self.config.verdict(&measurements);
        let swing = CanonicalSwing::new(provenance, measurements, verdict);

        debug!(
            session_id = %options.session_id,
            swing_number,
            valid = swing.is_valid(),
            reason = ?swing.invalid_reason(),
            "Normalized sensor swing"
        );
        Ok(swing)
    }

    /// Re-express a canonical swing using primary vendor field names
    ///
    /// Normalizing the result with the same options reproduces the swing's
    /// measurements, swing time and validity.
    #[must_use]
    pub fn to_raw(swing: &CanonicalSwing) -> Value {
        let m = &swing.measurements;
        let mut raw = Map::new();
        let mut put = |key: &str, value: Option<f64>| {
            if let Some(value) = value {
                raw.insert(key.to_owned(), json!(value));
            }
        };
        put(BAT_SPEED[0].path, m.bat_speed_mph);
        put(HAND_SPEED[0].path, m.hand_speed_mph);
        put(ATTACK_ANGLE[0].path, m.attack_angle_deg);
        put(VERTICAL_BAT_ANGLE[0].path, m.vertical_bat_angle_deg);
        put(ON_PLANE_EFFICIENCY[0].path, m.on_plane_efficiency_pct);
        put(ROTATIONAL_ACCELERATION[0].path, m.rotational_acceleration_g);
        put(TIME_TO_CONTACT[0].path, m.time_to_contact_s);

        let impact: Map<String, Value> = [("x", m.impact_x), ("y", m.impact_y), ("z", m.impact_z)]
            .into_iter()
            .filter_map(|(axis, value)| value.map(|v| (axis.to_owned(), json!(v))))
            .collect();
        if !impact.is_empty() {
            raw.insert("impactLocation".to_owned(), Value::Object(impact));
        }

        raw.insert(
            "timestamp".to_owned(),
            json!(swing
                .provenance
                .timestamp
                .to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        );
        if let Some(id) = &swing.provenance.external_id {
            raw.insert("id".to_owned(), json!(id));
        }
        Value::Object(raw)
    }
}

fn measurements(record: &Map<String, Value>) -> SensorMeasurements {
    let coarse = |aliases: &[FieldAlias]| {
        resolve_number(record, aliases).map(|v| round_to(v, COARSE_PLACES))
    };
    let fine =
        |aliases: &[FieldAlias]| resolve_number(record, aliases).map(|v| round_to(v, FINE_PLACES));

    let bat_speed_mph = coarse(BAT_SPEED);
    let hand_speed_mph = coarse(HAND_SPEED);
    let hand_to_bat_ratio = bat_speed_mph
        .zip(hand_speed_mph)
        .filter(|(bat, _)| bat.abs() >= ZERO_EPSILON)
        .map(|(bat, hand)| round_to(hand / bat, FINE_PLACES));

    SensorMeasurements {
        bat_speed_mph,
        hand_speed_mph,
        hand_to_bat_ratio,
        attack_angle_deg: coarse(ATTACK_ANGLE),
        vertical_bat_angle_deg: coarse(VERTICAL_BAT_ANGLE),
        on_plane_efficiency_pct: coarse(ON_PLANE_EFFICIENCY),
        rotational_acceleration_g: coarse(ROTATIONAL_ACCELERATION),
        time_to_contact_s: fine(TIME_TO_CONTACT),
        impact_x: fine(IMPACT_X),
        impact_y: fine(IMPACT_Y),
        impact_z: fine(IMPACT_Z),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
