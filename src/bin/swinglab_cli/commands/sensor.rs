// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors
// ABOUTME: `swinglab normalize` command
// ABOUTME: Normalizes one raw sensor record or an array of them into canonical swings

use crate::helpers::io::{print_json, read_json};
use anyhow::Result;
use serde_json::Value;
use std::path::Path;
use swinglab::config::EngineConfig;
use swinglab::providers::{NormalizeOptions, SensorNormalizer};
use tracing::info;
use uuid::Uuid;

/// Normalize a record file; arrays produce a partitioned batch
pub fn normalize(
    config: &EngineConfig,
    input: &Path,
    session_id: Option<Uuid>,
    sdk_version: Option<String>,
    offset: u32,
) -> Result<()> {
    let document: Value = read_json(input)?;
    let normalizer = SensorNormalizer::with_config(config.sensor.clone());
    let session_id = session_id.unwrap_or_else(Uuid::new_v4);
    let mut options = NormalizeOptions::new(session_id).with_swing_number_offset(offset);
    options.sdk_version = sdk_version;

    match document {
        Value::Array(records) => {
            let batch = normalizer.normalize_batch(&records, &options)?;
            info!(
                valid = batch.valid.len(),
                warned = batch.warned.len(),
                invalid = batch.invalid.len(),
                "Normalized batch"
            );
            print_json(&batch)
        }
        record => print_json(&normalizer.normalize(&record, &options)?),
    }
}
