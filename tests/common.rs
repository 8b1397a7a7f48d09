// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides date helpers, workout history generators and quiet test logging
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_possible_wrap
)]
//! Shared test utilities for `trainload`

use chrono::{Duration, NaiveDate};
use std::sync::Once;
use trainload::models::WorkoutSample;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// One scored session per day for `days` consecutive days ending on `end`
pub fn consecutive_days(end: NaiveDate, days: i64, score: f64) -> Vec<WorkoutSample> {
    (0..days)
        .rev()
        .map(|offset| WorkoutSample::new(end - Duration::days(offset), 3600).with_stress_score(score))
        .collect()
}

/// One session per entry of `scores`, starting on `start`; zero entries are
/// rest days with no session recorded at all
pub fn history_from_scores(start: NaiveDate, scores: &[f64]) -> Vec<WorkoutSample> {
    scores
        .iter()
        .enumerate()
        .filter(|(_, score)| **score > 0.0)
        .map(|(offset, score)| {
            WorkoutSample::new(start + Duration::days(offset as i64), 3600)
                .with_stress_score(*score)
        })
        .collect()
}

/// Approximate float comparison for rounded engine outputs
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
