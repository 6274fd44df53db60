// ABOUTME: Common benchmark utilities and swing fixtures for performance testing
// ABOUTME: Provides reusable data generators for the Criterion scoring benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! Common benchmark utilities and swing fixtures.

pub mod fixtures;
