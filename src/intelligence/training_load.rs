// ABOUTME: Chronic load, acute load and balance from a workout history at any reference date
// ABOUTME: Walks every calendar day from the first sample, so rest days decay both averages
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::config::LoadModelConfig;
use crate::intelligence::algorithms::ExponentialLoad;
use crate::intelligence::daily_load::DailyLoad;
use crate::intelligence::numeric::round_to_tenth;
use crate::intelligence::physiological_constants::form_status::{
    DETRAINING_BALANCE, OVERREACHING_BALANCE, PRODUCTIVE_BALANCE,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use trainload_core::errors::{AppError, AppResult};
use trainload_core::models::{LoadSeriesPoint, LoadState, WorkoutSample};

/// Training load calculator
///
/// Stateless: every call recomputes from the full history. Loads are rounded
/// to one decimal only after the full walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingLoadCalculator {
    chronic: ExponentialLoad,
    acute: ExponentialLoad,
}

impl Default for TrainingLoadCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingLoadCalculator {
    /// Calculator with the standard 42/7 day time constants
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chronic: ExponentialLoad::CHRONIC,
            acute: ExponentialLoad::ACUTE,
        }
    }

    /// Calculator with explicit time constants
    ///
    /// # Errors
    ///
    /// Returns an error if either constant is zero
    pub fn with_time_constants(chronic_days: u32, acute_days: u32) -> AppResult<Self> {
        Ok(Self {
            chronic: ExponentialLoad::new(chronic_days)?,
            acute: ExponentialLoad::new(acute_days)?,
        })
    }

    /// Calculator from a validated load model configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the time constants are invalid
    pub fn from_config(config: &LoadModelConfig) -> AppResult<Self> {
        config.validate()?;
        Self::with_time_constants(
            config.chronic_time_constant_days,
            config.acute_time_constant_days,
        )
    }

    /// Chronic ("fitness") load at `target_date`
    ///
    /// # Errors
    ///
    /// Returns an error if a stored stress score is negative or non-finite
    pub fn chronic_load(
        &self,
        history: &[WorkoutSample],
        target_date: NaiveDate,
    ) -> AppResult<f64> {
        Ok(self.load_state(history, target_date)?.chronic_load)
    }

    /// Acute ("fatigue") load at `target_date`
    ///
    /// # Errors
    ///
    /// Returns an error if a stored stress score is negative or non-finite
    pub fn acute_load(
        &self,
        history: &[WorkoutSample],
        target_date: NaiveDate,
    ) -> AppResult<f64> {
        Ok(self.load_state(history, target_date)?.acute_load)
    }

    /// Chronic load, acute load and balance at `target_date`
    ///
    /// # Errors
    ///
    /// Returns an error if a stored stress score is negative or non-finite
    pub fn load_state(
        &self,
        history: &[WorkoutSample],
        target_date: NaiveDate,
    ) -> AppResult<LoadState> {
        let daily = DailyLoad::from_samples(history)?;
        Ok(self.load_state_from_daily(&daily, target_date))
    }

    /// Load state from an already aggregated history
    #[must_use]
    pub fn load_state_from_daily(&self, daily: &DailyLoad, target_date: NaiveDate) -> LoadState {
        let Some(first_day) = daily.first_day() else {
            return LoadState::default();
        };
        if target_date < first_day {
            return LoadState::default();
        }

        let (chronic, acute) = daily
            .filled(first_day, target_date)
            .fold((0.0, 0.0), |(chronic, acute), (_, score)| {
                (self.chronic.step(chronic, score), self.acute.step(acute, score))
            });

        debug!(
            first_day = %first_day,
            target_date = %target_date,
            days_walked = (target_date - first_day).num_days() + 1,
            chronic_load = chronic,
            acute_load = acute,
            "Calculated load state"
        );

        finish(chronic, acute)
    }

    /// One load state per calendar day in `from..=to`, from a single walk
    ///
    /// # Errors
    ///
    /// Returns an error if `to` precedes `from` or a stored stress score is invalid
    pub fn load_series(
        &self,
        history: &[WorkoutSample],
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<LoadSeriesPoint>> {
        if to < from {
            return Err(AppError::invalid_input(format!(
                "load series end {to} precedes start {from}"
            )));
        }
        let daily = DailyLoad::from_samples(history)?;
        let capacity = usize::try_from((to - from).num_days() + 1).unwrap_or_default();
        let mut series = Vec::with_capacity(capacity);

        let walk_start = daily.first_day().map_or(from, |first| first.min(from));
        let (mut chronic, mut acute) = (0.0, 0.0);
        for (date, score) in daily.filled(walk_start, to) {
            chronic = self.chronic.step(chronic, score);
            acute = self.acute.step(acute, score);
            if date >= from {
                series.push(LoadSeriesPoint {
                    date,
                    load: finish(chronic, acute),
                });
            }
        }

        debug!(
            from = %from,
            to = %to,
            points = series.len(),
            "Calculated load series"
        );
        Ok(series)
    }

    /// Interpret a balance value as a training status
    ///
    /// - Balance < -10: Overreaching (high fatigue)
    /// - Balance -10 to 0: Productive training
    /// - Balance 0 to +10: Fresh, ready to perform
    /// - Balance > +10: Detraining risk
    #[must_use]
    pub fn interpret_balance(balance: f64) -> TrainingStatus {
        if balance < OVERREACHING_BALANCE {
            TrainingStatus::Overreaching
        } else if balance < PRODUCTIVE_BALANCE {
            TrainingStatus::Productive
        } else if balance <= DETRAINING_BALANCE {
            TrainingStatus::Fresh
        } else {
            TrainingStatus::Detraining
        }
    }
}

/// Round both loads and derive the balance from the rounded values
fn finish(chronic: f64, acute: f64) -> LoadState {
    let chronic_load = round_to_tenth(chronic);
    let acute_load = round_to_tenth(acute);
    LoadState {
        chronic_load,
        acute_load,
        balance: round_to_tenth(chronic_load - acute_load),
    }
}

/// Training status interpreted from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    /// Balance < -10: Overreaching, high fatigue
    Overreaching,
    /// Balance -10 to 0: Productive training zone
    Productive,
    /// Balance 0 to +10: Fresh, ready to perform
    Fresh,
    /// Balance > +10: Risk of detraining
    Detraining,
}
