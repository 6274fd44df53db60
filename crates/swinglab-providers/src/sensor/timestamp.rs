// ABOUTME: Swing timestamp resolution from ISO-8601 strings or epoch seconds/milliseconds
// ABOUTME: Falls back to the injected normalization time and keeps the raw value for audit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

use super::aliases::{resolve_value, TIMESTAMP};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use swinglab_core::constants::numeric::EPOCH_MILLIS_THRESHOLD;
use swinglab_core::models::TimestampSource;
use tracing::debug;

/// Naive layouts accepted for vendor strings without an offset; read as UTC
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Resolved swing time
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTimestamp {
    /// Swing time
    pub timestamp: DateTime<Utc>,
    /// Encoding it was read from
    pub source: TimestampSource,
    /// Original value, if any alias held one
    pub raw: Option<Value>,
}

/// Resolve the swing time of `record`, using `received_at` when nothing parses
#[must_use]
pub fn resolve_timestamp(
    record: &Map<String, Value>,
    received_at: DateTime<Utc>,
) -> ResolvedTimestamp {
    let raw = resolve_value(record, TIMESTAMP).cloned();
    let parsed = raw.as_ref().and_then(parse_timestamp);
    match parsed {
        Some((timestamp, source)) => ResolvedTimestamp {
            timestamp,
            source,
            raw,
        },
        None => {
            if let Some(value) = &raw {
                debug!(timestamp.raw = %value, "Unparseable swing timestamp, using receive time");
            }
            ResolvedTimestamp {
                timestamp: received_at,
                source: TimestampSource::Fallback,
                raw,
            }
        }
    }
}

/// Parse one raw timestamp value
#[must_use]
pub fn parse_timestamp(value: &Value) -> Option<(DateTime<Utc>, TimestampSource)> {
    match value {
        Value::Number(number) => from_epoch(number.as_f64()?),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<f64>()
                .ok()
                .and_then(from_epoch)
                .or_else(|| from_iso(text))
        }
        _ => None,
    }
}

fn from_iso(text: &str) -> Option<(DateTime<Utc>, TimestampSource)> {
    let parsed = DateTime::parse_from_rfc3339(text)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NAIVE_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(text, format)
                    .ok()
                    .map(|naive| naive.and_utc())
            })
        })?;
    Some((parsed, TimestampSource::Iso8601))
}

fn from_epoch(value: f64) -> Option<(DateTime<Utc>, TimestampSource)> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    if value >= EPOCH_MILLIS_THRESHOLD {
        let millis = value.round() as i64;
        DateTime::from_timestamp_millis(millis).map(|t| (t, TimestampSource::EpochMillis))
    } else {
        let seconds = value.trunc() as i64;
        let nanos = ((value - value.trunc()) * 1e9).round() as u32;
        DateTime::from_timestamp(seconds, nanos.min(999_999_999))
            .map(|t| (t, TimestampSource::EpochSeconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn received() -> DateTime<Utc> {
        DateTime::from_timestamp(1_600_000_000, 0).unwrap()
    }

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_epoch_millis_and_seconds() {
        let millis =
            resolve_timestamp(&record(json!({ "timestamp": 1_700_000_000_123_i64 })), received());
        assert_eq!(millis.source, TimestampSource::EpochMillis);
        assert_eq!(millis.timestamp.timestamp_millis(), 1_700_000_000_123);

        let seconds = resolve_timestamp(&record(json!({ "createdAt": "1700000000" })), received());
        assert_eq!(seconds.source, TimestampSource::EpochSeconds);
        assert_eq!(seconds.timestamp.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_iso_string() {
        let resolved = resolve_timestamp(
            &record(json!({ "swingDate": "2024-05-01T18:30:00-04:00" })),
            received(),
        );
        assert_eq!(resolved.source, TimestampSource::Iso8601);
        assert_eq!(resolved.timestamp.to_rfc3339(), "2024-05-01T22:30:00+00:00");
    }

    #[test]
    fn test_garbage_falls_back_and_keeps_raw() {
        let resolved = resolve_timestamp(&record(json!({ "timestamp": "yesterday" })), received());
        assert_eq!(resolved.source, TimestampSource::Fallback);
        assert_eq!(resolved.timestamp, received());
        assert_eq!(resolved.raw, Some(json!("yesterday")));
    }

    #[test]
    fn test_missing_timestamp_has_no_raw() {
        let resolved = resolve_timestamp(&Map::new(), received());
        assert_eq!(resolved.source, TimestampSource::Fallback);
        assert!(resolved.raw.is_none());
    }
}
