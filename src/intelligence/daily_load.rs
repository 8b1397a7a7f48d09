// ABOUTME: Collapses a workout history into one summed stress score per calendar day
// ABOUTME: Provides gap-filled day iteration so rest days appear as explicit zeros
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::intelligence::numeric::ensure_non_negative;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use trainload_core::errors::AppResult;
use trainload_core::models::WorkoutSample;

/// Summed stress score per calendar day
///
/// Holds exactly the days that have at least one sample. Use
/// [`DailyLoad::filled`] to visit every day of a range, rest days included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyLoad {
    scores: BTreeMap<NaiveDate, f64>,
}

impl DailyLoad {
    /// Aggregate a history; samples without a stress score count as 0
    ///
    /// # Errors
    ///
    /// Returns an error if a stored stress score is negative or non-finite
    pub fn from_samples(history: &[WorkoutSample]) -> AppResult<Self> {
        let mut scores = BTreeMap::new();
        for sample in history {
            let score = sample
                .stress_score
                .map_or(Ok(0.0), |score| ensure_non_negative("stress_score", score))?;
            *scores.entry(sample.date).or_insert(0.0) += score;
        }
        Ok(Self { scores })
    }

    /// Score on `date`, 0 for days without samples
    #[must_use]
    pub fn score_on(&self, date: NaiveDate) -> f64 {
        self.scores.get(&date).copied().unwrap_or(0.0)
    }

    /// Earliest day with a sample
    #[must_use]
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.scores.keys().next().copied()
    }

    /// Latest day with a sample
    #[must_use]
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.scores.keys().next_back().copied()
    }

    /// Sum of daily scores over `from..=to`
    #[must_use]
    pub fn total_between(&self, from: NaiveDate, to: NaiveDate) -> f64 {
        if to < from {
            return 0.0;
        }
        self.scores.range(from..=to).map(|(_, score)| score).sum()
    }

    /// Every calendar day in `from..=to` with its score, rest days as 0
    pub fn filled(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        from.iter_days()
            .take_while(move |day| *day <= to)
            .map(move |day| (day, self.score_on(day)))
    }
}
