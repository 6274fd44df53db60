// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors
// ABOUTME: `swinglab score` and `swinglab fingerprint` commands
// ABOUTME: Runs the 4B scorer on metrics and the kinetic fingerprint on a momentum series

use crate::helpers::io::{print_json, read_json};
use anyhow::Result;
use std::path::Path;
use swinglab::config::EngineConfig;
use swinglab::intelligence::{FourBScorer, KineticFingerprintScorer};
use swinglab::models::{AgeBracket, MomentumFrame, SwingMetrics};

/// Score a `SwingMetrics` document
pub fn four_b(config: &EngineConfig, input: &Path, bracket: Option<&str>) -> Result<()> {
    let metrics: SwingMetrics = read_json(input)?;
    let bracket = bracket.map_or(config.default_age_bracket, AgeBracket::parse_or_default);
    let scores = FourBScorer::with_config(&config.intelligence).score(&metrics, bracket);
    print_json(&scores)
}

/// Score a momentum series document (array of frames)
pub fn fingerprint(config: &EngineConfig, input: &Path, contact: Option<usize>) -> Result<()> {
    let frames: Vec<MomentumFrame> = read_json(input)?;
    let scorer = KineticFingerprintScorer::with_config(&config.intelligence);
    print_json(&scorer.score(&frames, contact))
}
