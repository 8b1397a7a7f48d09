// ABOUTME: Exponential load recurrence with a day-count time constant
// ABOUTME: One smoothing step per calendar day: ema += (score - ema) / time_constant
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use serde::{Deserialize, Serialize};
use trainload_core::constants::load_model::{ACUTE_TIME_CONSTANT_DAYS, CHRONIC_TIME_CONSTANT_DAYS};
use trainload_core::errors::{AppError, AppResult};

/// Exponentially weighted daily load
///
/// Formula: `EMA_t = EMA_{t-1} + (score_t - EMA_{t-1}) / τ`, i.e. `α = 1/τ`.
///
/// The recurrence must be stepped once for every calendar day, rest days
/// included with a score of 0.
///
/// # Scientific References
///
/// - Banister, E.W. (1991). "Modeling elite athletic performance." *Physiological Testing of Elite Athletes*.
/// - Coggan, A. (2003). "Training and Racing Using a Power Meter." *Peaksware LLC*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExponentialLoad {
    time_constant_days: u32,
}

impl ExponentialLoad {
    /// Chronic ("fitness") load, τ = 42 days
    pub const CHRONIC: Self = Self {
        time_constant_days: CHRONIC_TIME_CONSTANT_DAYS,
    };

    /// Acute ("fatigue") load, τ = 7 days
    pub const ACUTE: Self = Self {
        time_constant_days: ACUTE_TIME_CONSTANT_DAYS,
    };

    /// Create a recurrence with a custom time constant
    ///
    /// # Errors
    ///
    /// Returns an error if `time_constant_days` is zero
    pub fn new(time_constant_days: u32) -> AppResult<Self> {
        if time_constant_days == 0 {
            return Err(AppError::out_of_range("time_constant_days", 0.0));
        }
        Ok(Self { time_constant_days })
    }

    /// Advance the average by one day
    #[must_use]
    pub fn step(&self, ema: f64, day_score: f64) -> f64 {
        ema + (day_score - ema) / f64::from(self.time_constant_days)
    }
}
