// ABOUTME: Criterion benchmarks for the swing scoring engines and session pipeline
// ABOUTME: Measures 4B, kinetic fingerprint, sensor normalization and prescription throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! Criterion benchmarks for the scoring engines.
//!
//! Covers single-swing scoring latency, rayon-backed batch throughput and the
//! end-to-end session pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{
    generate_metrics, generate_momentum_series, generate_raw_swings, generate_sessions,
    SwingBatchSize,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use swinglab::intelligence::{FourBScorer, KineticFingerprintScorer, PrescriptionResolver};
use swinglab::models::{AgeBracket, LeakFlag, MotorProfile, SwingMetrics};
use swinglab::pipeline::ScoringPipeline;
use swinglab::providers::{NormalizeOptions, SensorNormalizer};
use uuid::Uuid;

const BATCH_SIZES: [SwingBatchSize; 3] = [
    SwingBatchSize::Small,
    SwingBatchSize::Medium,
    SwingBatchSize::Large,
];

fn bench_four_b(c: &mut Criterion) {
    let mut group = c.benchmark_group("four_b");
    let scorer = FourBScorer::new();

    let metrics = generate_metrics(3);
    group.bench_function("score_single", |b| {
        b.iter(|| scorer.score(black_box(&metrics), black_box(AgeBracket::HighSchool)));
    });

    let empty = SwingMetrics::default();
    group.bench_function("score_empty_metrics", |b| {
        b.iter(|| scorer.score(black_box(&empty), black_box(AgeBracket::HighSchool)));
    });

    for size in BATCH_SIZES {
        let count = size.count();
        let inputs: Vec<(SwingMetrics, AgeBracket)> = (0..count)
            .map(|index| (generate_metrics(index), AgeBracket::HighSchool))
            .collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("score_batch", count), &inputs, |b, inputs| {
            b.iter(|| scorer.score_batch(black_box(inputs)));
        });
    }

    group.finish();
}

fn bench_kinetic_fingerprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("kinetic_fingerprint");
    let scorer = KineticFingerprintScorer::new();

    for frames in [60, 240, 1_000] {
        let series = generate_momentum_series(frames);
        group.throughput(Throughput::Elements(frames as u64));
        group.bench_with_input(BenchmarkId::new("score_series", frames), &series, |b, series| {
            b.iter(|| scorer.score(black_box(series), black_box(None)));
        });
    }

    let batch: Vec<_> = (0..SwingBatchSize::Medium.count())
        .map(|index| generate_momentum_series(120 + index % 40))
        .collect();
    group.throughput(Throughput::Elements(batch.len() as u64));
    group.bench_function("score_batch", |b| {
        b.iter(|| scorer.score_batch(black_box(&batch)));
    });

    group.finish();
}

fn bench_sensor_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("sensor_normalization");
    let normalizer = SensorNormalizer::new();
    let options = NormalizeOptions::new(Uuid::from_u128(7));

    for size in BATCH_SIZES {
        let count = size.count();
        let records = generate_raw_swings(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("normalize_batch", count),
            &records,
            |b, records| {
                b.iter(|| normalizer.normalize_batch(black_box(records), black_box(&options)));
            },
        );
    }

    group.finish();
}

fn bench_prescription(c: &mut Criterion) {
    let mut group = c.benchmark_group("prescription");
    let resolver = PrescriptionResolver::new();

    group.bench_function("prescribe_all_flags", |b| {
        b.iter(|| {
            for profile in MotorProfile::ALL {
                black_box(resolver.prescribe(black_box(&LeakFlag::ALL), profile));
            }
        });
    });

    group.finish();
}

fn bench_session_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_pipeline");
    group.sample_size(20);
    let pipeline = ScoringPipeline::new();

    for count in [1, 10, 50] {
        let sessions = generate_sessions(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("score_sessions", count),
            &sessions,
            |b, sessions| {
                b.iter(|| pipeline.score_sessions(black_box(sessions)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_four_b,
    bench_kinetic_fingerprint,
    bench_sensor_normalization,
    bench_prescription,
    bench_session_pipeline,
);
criterion_main!(benches);
