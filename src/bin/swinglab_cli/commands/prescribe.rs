// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors
// ABOUTME: `swinglab prescribe` command
// ABOUTME: Resolves leak flag tokens into drills filtered for a motor profile

use crate::helpers::io::print_json;
use anyhow::Result;
use swinglab::config::EngineConfig;
use swinglab::intelligence::PrescriptionResolver;

/// Prescribe drills for comma-separated flag tokens
pub fn prescribe(config: &EngineConfig, flags: &str, profile: Option<&str>) -> Result<()> {
    let tokens: Vec<&str> = flags
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();
    let profile = profile.map_or_else(
        || config.default_motor_profile.as_str().to_owned(),
        str::to_owned,
    );
    let resolver = PrescriptionResolver::with_config(config.intelligence.prescription.clone());
    print_json(&resolver.prescribe_tokens(&tokens, &profile))
}
