// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors
// ABOUTME: Re-exports command modules for the swinglab CLI
// ABOUTME: Sensor normalization, scoring, prescription and session commands

pub mod prescribe;
pub mod score;
pub mod sensor;
pub mod session;
