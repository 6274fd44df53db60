// ABOUTME: Priority-ordered vendor field aliases for every canonical sensor quantity
// ABOUTME: Dotted-path lookup, numeric coercion and unit scaling of raw JSON records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! Vendor field aliases
//!
//! Each quantity lists the field paths vendors use for it, most specific first.
//! Dotted paths walk nested objects (`metrics.batSpeed`). The first alias that
//! holds a finite number, or a string parsing to one, wins.

use serde_json::{Map, Value};

/// One vendor field name for a quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldAlias {
    /// Dotted path into the record
    pub path: &'static str,
    /// Multiplier converting the vendor unit into the canonical unit
    pub scale: f64,
}

impl FieldAlias {
    /// Alias already in the canonical unit
    #[must_use]
    pub const fn direct(path: &'static str) -> Self {
        Self { path, scale: 1.0 }
    }

    /// Alias needing a unit conversion
    #[must_use]
    pub const fn scaled(path: &'static str, scale: f64) -> Self {
        Self { path, scale }
    }
}

/// Peak barrel speed (mph)
pub const BAT_SPEED: &[FieldAlias] = &[
    FieldAlias::direct("speedBarrelMax"),
    FieldAlias::direct("metrics.speedBarrelMax"),
    FieldAlias::direct("batSpeed"),
    FieldAlias::direct("metrics.batSpeed"),
];

/// Peak hand speed (mph)
pub const HAND_SPEED: &[FieldAlias] = &[
    FieldAlias::direct("speedHandsMax"),
    FieldAlias::direct("metrics.speedHandsMax"),
    FieldAlias::direct("handSpeed"),
    FieldAlias::direct("metrics.handSpeed"),
];

/// Attack angle (degrees)
pub const ATTACK_ANGLE: &[FieldAlias] = &[
    FieldAlias::direct("attackAngle"),
    FieldAlias::direct("metrics.attackAngle"),
    FieldAlias::direct("swingAttackAngle"),
];

/// Vertical bat angle (degrees)
pub const VERTICAL_BAT_ANGLE: &[FieldAlias] = &[
    FieldAlias::direct("verticalBatAngle"),
    FieldAlias::direct("metrics.verticalBatAngle"),
    FieldAlias::direct("batAngleVertical"),
];

/// On-plane efficiency (percent)
pub const ON_PLANE_EFFICIENCY: &[FieldAlias] = &[
    FieldAlias::direct("onPlaneEfficiency"),
    FieldAlias::direct("metrics.onPlaneEfficiency"),
    FieldAlias::direct("planeEfficiency"),
];

/// Rotational acceleration (g)
pub const ROTATIONAL_ACCELERATION: &[FieldAlias] = &[
    FieldAlias::direct("rotationalAcceleration"),
    FieldAlias::direct("metrics.rotationalAcceleration"),
];

/// Time to contact (seconds)
pub const TIME_TO_CONTACT: &[FieldAlias] = &[
    FieldAlias::direct("timeToContact"),
    FieldAlias::direct("metrics.timeToContact"),
    FieldAlias::scaled("timeToContactMs", 0.001),
    FieldAlias::scaled("metrics.timeToContactMs", 0.001),
];

/// Impact location x
pub const IMPACT_X: &[FieldAlias] = &[
    FieldAlias::direct("impactLocation.x"),
    FieldAlias::direct("impactX"),
];

/// Impact location y
pub const IMPACT_Y: &[FieldAlias] = &[
    FieldAlias::direct("impactLocation.y"),
    FieldAlias::direct("impactY"),
];

/// Impact location z
pub const IMPACT_Z: &[FieldAlias] = &[
    FieldAlias::direct("impactLocation.z"),
    FieldAlias::direct("impactZ"),
];

/// Swing timestamp
pub const TIMESTAMP: &[&str] = &["timestamp", "createdAt", "metrics.timestamp", "swingDate"];

/// Vendor swing identifier
pub const EXTERNAL_ID: &[&str] = &["id", "swingId", "uuid"];

/// Walk a dotted path through nested objects
#[must_use]
pub fn lookup<'a>(record: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = record.get(segments.next()?)?;
    segments.try_fold(first, |value, segment| value.as_object()?.get(segment))
}

/// Finite number from a JSON number or numeric string
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// First numeric value among `aliases`, converted to the canonical unit
#[must_use]
pub fn resolve_number(record: &Map<String, Value>, aliases: &[FieldAlias]) -> Option<f64> {
    aliases.iter().find_map(|alias| {
        lookup(record, alias.path)
            .and_then(as_number)
            .map(|value| value * alias.scale)
    })
}

/// First non-null value among `paths`
#[must_use]
pub fn resolve_value<'a>(record: &'a Map<String, Value>, paths: &[&str]) -> Option<&'a Value> {
    paths
        .iter()
        .find_map(|path| lookup(record, path).filter(|value| !value.is_null()))
}

/// Vendor identifier as text; numeric ids are stringified
#[must_use]
pub fn resolve_external_id(record: &Map<String, Value>) -> Option<String> {
    resolve_value(record, EXTERNAL_ID).and_then(|value| match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_owned()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

/// Round to `places` decimal places
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}
