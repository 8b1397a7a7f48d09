// ABOUTME: Criterion benchmarks for training-load calculations and alert evaluation
// ABOUTME: Measures load walks over long histories, normalized power and zone distribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the training-load engine.
//!
//! The load walk is linear in calendar days, so histories are sized in days
//! rather than in sessions.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use chrono::Duration;
use common::fixtures::{end_date, generate_history, generate_power_stream, HistorySize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trainload::intelligence::{
    normalized_power, AlertInputs, TrainingLoadCalculator, TrainingLoadEngine, ZoneClassifier,
};

/// Benchmark the day-by-day load walk for growing histories
fn bench_load_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_state");
    let calculator = TrainingLoadCalculator::new();

    for size in [HistorySize::Block, HistorySize::Season, HistorySize::Career] {
        let history = generate_history(size);
        group.throughput(Throughput::Elements(size.days() as u64));
        group.bench_with_input(
            BenchmarkId::new("load_state", size.days()),
            &history,
            |b, history| {
                b.iter(|| calculator.load_state(black_box(history), black_box(end_date())));
            },
        );
    }

    group.finish();
}

/// Benchmark a 90-day series against repeated point queries
fn bench_load_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_series");
    let calculator = TrainingLoadCalculator::new();
    let history = generate_history(HistorySize::Season);
    let to = end_date();
    let from = to - Duration::days(89);

    group.bench_function("series_90_days", |b| {
        b.iter(|| calculator.load_series(black_box(&history), from, to));
    });

    group.bench_function("point_queries_90_days", |b| {
        b.iter(|| {
            (0..90)
                .map(|offset| calculator.load_state(&history, from + Duration::days(offset)))
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

/// Benchmark normalized power over common ride lengths
fn bench_normalized_power(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalized_power");

    for seconds in [600, 3600, 5 * 3600] {
        let stream = generate_power_stream(seconds);
        group.throughput(Throughput::Elements(seconds as u64));
        group.bench_with_input(
            BenchmarkId::new("rolling_window", seconds),
            &stream,
            |b, stream| {
                b.iter(|| normalized_power(black_box(stream), 1.0));
            },
        );
    }

    group.finish();
}

/// Benchmark time-in-zone counting
fn bench_zone_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("zone_distribution");
    let classifier = ZoneClassifier::default();

    for seconds in [3600, 5 * 3600] {
        let stream = generate_power_stream(seconds);
        group.throughput(Throughput::Elements(seconds as u64));
        group.bench_with_input(
            BenchmarkId::new("distribution", seconds),
            &stream,
            |b, stream| {
                b.iter(|| classifier.distribution(black_box(stream), Some(250.0)));
            },
        );
    }

    group.finish();
}

/// Benchmark deriving alert aggregates and evaluating every rule
fn bench_alert_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("alert_pipeline");
    group.sample_size(50);

    let engine = TrainingLoadEngine::default();
    let history = generate_history(HistorySize::Season);

    group.bench_function("from_history", |b| {
        b.iter(|| AlertInputs::from_history(black_box(&history), end_date(), engine.loads()));
    });

    group.bench_function("alerts_for_history", |b| {
        b.iter(|| engine.alerts_for_history(black_box(&history), end_date()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_load_state,
    bench_load_series,
    bench_normalized_power,
    bench_zone_distribution,
    bench_alert_pipeline,
);

criterion_main!(benches);
