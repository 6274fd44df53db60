// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors
// ABOUTME: Shared helpers for the swinglab CLI
// ABOUTME: JSON file input and pretty JSON output

pub mod io;
