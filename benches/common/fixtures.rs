// ABOUTME: Benchmark fixtures generating deterministic workout histories and power streams
// ABOUTME: Provides reproducible inputs for load, normalized power and zone benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating realistic training data.
//!
//! Histories run backwards from a fixed end date so results are reproducible.

use chrono::{Duration, NaiveDate};
use trainload::models::WorkoutSample;

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// One training block (6 weeks)
    Block,
    /// One season (1 year)
    Season,
    /// A long-term athlete (5 years)
    Career,
}

impl HistorySize {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Block => 42,
            Self::Season => 365,
            Self::Career => 5 * 365,
        }
    }
}

/// Last day of every generated history
#[must_use]
pub fn end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 16).unwrap_or_default()
}

/// Generate a history with one rest day in seven and occasional doubles
#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
#[must_use]
pub fn generate_history(size: HistorySize) -> Vec<WorkoutSample> {
    let end = end_date();
    let mut history = Vec::with_capacity(size.days() + size.days() / 5);
    for offset in 0..size.days() {
        if offset % 7 == 3 {
            continue;
        }
        let date = end - Duration::days(offset as i64);
        let score = 30.0 + ((offset * 37) % 90) as f64;
        history.push(
            WorkoutSample::new(date, 3600)
                .with_average_power(180.0 + ((offset * 13) % 80) as f64)
                .with_stress_score(score)
                .with_perceived_effort((3 + (offset * 5) % 7) as u8),
        );
        if offset % 5 == 0 {
            history.push(WorkoutSample::new(date, 1800).with_stress_score(25.0));
        }
    }
    history
}

/// Generate a 1 Hz power stream with interval blocks over an endurance base
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_power_stream(seconds: usize) -> Vec<f64> {
    (0..seconds)
        .map(|second| {
            let base = if (second / 240) % 2 == 0 { 180.0 } else { 310.0 };
            base + ((second * 31) % 40) as f64
        })
        .collect()
}
