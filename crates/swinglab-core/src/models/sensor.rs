// ABOUTME: Canonical, vendor-independent representation of one sensor-recorded swing
// ABOUTME: Couples provenance, measurements and a validity verdict that cannot disagree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

use crate::constants::validation_reasons;
use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Why a swing was rejected by the normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// No bat speed under any known alias
    MissingBatSpeed,
    /// Bat speed below the plausible minimum
    BelowSpeedThreshold,
    /// Bat speed above the plausible maximum
    AboveSpeedThreshold,
    /// Time to contact shorter than physically plausible
    TimingTooFast,
    /// Time to contact longer than a competitive swing
    TimingTooSlow,
}

impl InvalidReason {
    /// Reason code token
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingBatSpeed => validation_reasons::MISSING_BAT_SPEED,
            Self::BelowSpeedThreshold => validation_reasons::BELOW_SPEED_THRESHOLD,
            Self::AboveSpeedThreshold => validation_reasons::ABOVE_SPEED_THRESHOLD,
            Self::TimingTooFast => validation_reasons::TIMING_TOO_FAST,
            Self::TimingTooSlow => validation_reasons::TIMING_TOO_SLOW,
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-fatal observation attached to an accepted swing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingWarning {
    /// Hands slow relative to barrel speed
    HandSpeedLow,
}

impl SwingWarning {
    /// Warning code token
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HandSpeedLow => validation_reasons::HAND_SPEED_LOW,
        }
    }
}

impl fmt::Display for SwingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoding the swing timestamp was resolved from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampSource {
    /// ISO-8601 / RFC 3339 string
    Iso8601,
    /// Epoch seconds
    EpochSeconds,
    /// Epoch milliseconds
    EpochMillis,
    /// Missing or unparseable; normalization time was used
    Fallback,
}

/// Outcome of validating one swing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    /// Swing kept, possibly with warnings
    Accepted {
        /// Non-fatal observations
        warnings: Vec<SwingWarning>,
    },
    /// Swing rejected for the given reason
    Rejected {
        /// First failing rule
        reason: InvalidReason,
    },
}

/// Where a canonical swing came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingProvenance {
    /// Session the swing is attached to
    pub session_id: Uuid,
    /// 1-based swing number within the session
    pub swing_number: u32,
    /// Vendor identifier of the swing, if supplied
    pub external_id: Option<String>,
    /// SDK version tag supplied by the caller
    pub sdk_version: Option<String>,
    /// Resolved swing time
    pub timestamp: DateTime<Utc>,
    /// Encoding the timestamp was resolved from
    pub timestamp_source: TimestampSource,
    /// Original timestamp value, kept for audit
    pub raw_timestamp: Option<serde_json::Value>,
}

/// One physical quantity per field, rounded to field precision
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorMeasurements {
    /// Peak barrel speed (mph, 1 dp)
    pub bat_speed_mph: Option<f64>,
    /// Peak hand speed (mph, 1 dp)
    pub hand_speed_mph: Option<f64>,
    /// Hand speed over bat speed (3 dp)
    pub hand_to_bat_ratio: Option<f64>,
    /// Attack angle at impact (deg, 1 dp)
    pub attack_angle_deg: Option<f64>,
    /// Vertical bat angle at impact (deg, 1 dp)
    pub vertical_bat_angle_deg: Option<f64>,
    /// On-plane efficiency (percent, 1 dp)
    pub on_plane_efficiency_pct: Option<f64>,
    /// Rotational acceleration (g, 1 dp)
    pub rotational_acceleration_g: Option<f64>,
    /// Time from swing start to contact (seconds, 3 dp)
    pub time_to_contact_s: Option<f64>,
    /// Impact location x (3 dp)
    pub impact_x: Option<f64>,
    /// Impact location y (3 dp)
    pub impact_y: Option<f64>,
    /// Impact location z (3 dp)
    pub impact_z: Option<f64>,
}

/// Normalized swing record
///
/// Validity fields are private: a swing is built from a `ValidationVerdict`,
/// so a rejected swing always carries its reason and an accepted one never does.
/// Deserialization rebuilds the verdict and rejects documents that disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SerializedSwing")]
pub struct CanonicalSwing {
    /// Provenance
    #[serde(flatten)]
    pub provenance: SwingProvenance,
    /// Measurements
    #[serde(flatten)]
    pub measurements: SensorMeasurements,
    is_valid: bool,
    invalid_reason: Option<InvalidReason>,
    warnings: Vec<SwingWarning>,
}

/// Wire shape of `CanonicalSwing` before the validity fields are checked
#[derive(Deserialize)]
struct SerializedSwing {
    #[serde(flatten)]
    provenance: SwingProvenance,
    #[serde(flatten)]
    measurements: SensorMeasurements,
    is_valid: bool,
    #[serde(default)]
    invalid_reason: Option<InvalidReason>,
    #[serde(default)]
    warnings: Vec<SwingWarning>,
}

impl TryFrom<SerializedSwing> for CanonicalSwing {
    type Error = AppError;

    fn try_from(swing: SerializedSwing) -> Result<Self, Self::Error> {
        let verdict = match (swing.is_valid, swing.invalid_reason) {
            (true, None) => ValidationVerdict::Accepted {
                warnings: swing.warnings,
            },
            (false, Some(reason)) if swing.warnings.is_empty() => {
                ValidationVerdict::Rejected { reason }
            }
            (false, Some(_)) => {
                return Err(AppError::invalid_format(
                    "Rejected swing cannot carry warnings",
                ))
            }
            (false, None) => {
                return Err(AppError::invalid_format(
                    "Rejected swing is missing its invalid_reason",
                ))
            }
            (true, Some(reason)) => {
                return Err(AppError::invalid_format(format!(
                    "Accepted swing cannot carry invalid_reason '{reason}'"
                )))
            }
        };
        Ok(Self::new(swing.provenance, swing.measurements, verdict))
    }
}

impl CanonicalSwing {
    /// Assemble a canonical swing from its parts and validation verdict
    #[must_use]
    pub fn new(
        provenance: SwingProvenance,
        measurements: SensorMeasurements,
        verdict: ValidationVerdict,
    ) -> Self {
        let (is_valid, invalid_reason, warnings) = match verdict {
            ValidationVerdict::Accepted { warnings } => (true, None, warnings),
            ValidationVerdict::Rejected { reason } => (false, Some(reason), Vec::new()),
        };
        Self {
            provenance,
            measurements,
            is_valid,
            invalid_reason,
            warnings,
        }
    }

    /// Whether the swing passed validation
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Rejection reason, present exactly when the swing is invalid
    #[must_use]
    pub const fn invalid_reason(&self) -> Option<InvalidReason> {
        self.invalid_reason
    }

    /// Non-fatal warnings on an accepted swing
    #[must_use]
    pub fn warnings(&self) -> &[SwingWarning] {
        &self.warnings
    }

    /// Whether the swing was accepted with at least one warning
    #[must_use]
    pub fn is_warned(&self) -> bool {
        self.is_valid && !self.warnings.is_empty()
    }

    /// Key for value-equality deduplication downstream
    ///
    /// Built from rounded values so re-ingesting the same swing from a
    /// different SDK field layout produces the same key.
    #[must_use]
    pub fn dedupe_key(&self) -> String {
        fn part(value: Option<f64>) -> String {
            value.map_or_else(|| "-".to_owned(), |v| format!("{v:.3}"))
        }
        format!(
            "{}:{}:{}:{}:{}",
            self.provenance.session_id,
            self.provenance.timestamp.timestamp_millis(),
            part(self.measurements.bat_speed_mph),
            part(self.measurements.hand_speed_mph),
            part(self.measurements.time_to_contact_s),
        )
    }
}
