// ABOUTME: Normalized power from a raw power stream via trailing rolling averages and a quartic mean
// ABOUTME: Falls back to the plain mean below one window; also derives the variability index
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::config::NormalizedPowerConfig;
use crate::intelligence::numeric::{ensure_non_negative, round_half_up};
use tracing::debug;
use trainload_core::constants::normalized_power::{
    DEFAULT_SAMPLE_INTERVAL_SECONDS, WINDOW_SECONDS,
};
use trainload_core::errors::{AppError, AppResult};

/// Normalized power estimator
///
/// `NP = ⁴√(mean(rolling_avg(power)⁴))` over a trailing window. Positions
/// before the first full window are excluded, not zero-padded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPowerEstimator {
    window_seconds: f64,
}

impl Default for NormalizedPowerEstimator {
    fn default() -> Self {
        Self {
            window_seconds: WINDOW_SECONDS,
        }
    }
}

impl NormalizedPowerEstimator {
    /// Create an estimator with a custom window
    ///
    /// # Errors
    ///
    /// Returns an error if the window is not a positive finite number of seconds
    pub fn new(window_seconds: f64) -> AppResult<Self> {
        if !window_seconds.is_finite() || window_seconds <= 0.0 {
            return Err(AppError::out_of_range("window_seconds", window_seconds));
        }
        Ok(Self { window_seconds })
    }

    /// Create an estimator from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured window is invalid
    pub fn from_config(config: &NormalizedPowerConfig) -> AppResult<Self> {
        Self::new(config.window_seconds)
    }

    /// Number of samples per rolling window, never less than one
    ///
    /// # Errors
    ///
    /// Returns an error if the sample interval is not positive and finite
    pub fn window_size(&self, sample_interval_seconds: f64) -> AppResult<usize> {
        if !sample_interval_seconds.is_finite() || sample_interval_seconds <= 0.0 {
            return Err(AppError::out_of_range(
                "sample_interval_seconds",
                sample_interval_seconds,
            ));
        }
        let size = round_half_up(self.window_seconds / sample_interval_seconds);
        Ok((size as usize).max(1))
    }

    /// Normalized power of `samples` recorded every `sample_interval_seconds`
    ///
    /// Returns 0 for an empty stream and the rounded mean when the stream is
    /// shorter than one window.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is invalid or a sample is negative or non-finite
    pub fn estimate(&self, samples: &[f64], sample_interval_seconds: f64) -> AppResult<u32> {
        let window = self.window_size(sample_interval_seconds)?;
        Ok(round_half_up(self.raw_estimate(samples, window)?) as u32)
    }

    /// Normalized power divided by mean power
    ///
    /// 1.0 for a perfectly steady effort, higher for surging efforts; 0 when
    /// the stream is empty or averages zero watts.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is invalid or a sample is negative or non-finite
    pub fn variability_index(
        &self,
        samples: &[f64],
        sample_interval_seconds: f64,
    ) -> AppResult<f64> {
        let window = self.window_size(sample_interval_seconds)?;
        let normalized = self.raw_estimate(samples, window)?;
        let average = mean(samples);
        if average <= 0.0 {
            return Ok(0.0);
        }
        Ok(normalized / average)
    }

    fn raw_estimate(&self, samples: &[f64], window: usize) -> AppResult<f64> {
        for &watts in samples {
            ensure_non_negative("power_sample", watts)?;
        }

        if samples.is_empty() {
            return Ok(0.0);
        }
        if samples.len() < window {
            debug!(
                samples = samples.len(),
                window_size = window,
                "Power stream shorter than one window, using mean power"
            );
            return Ok(mean(samples));
        }

        let window_f64 = window as f64;
        let mut rolling_sum: f64 = samples[..window].iter().sum();
        let mut fourth_power_sum = (rolling_sum / window_f64).powi(4);
        for index in window..samples.len() {
            rolling_sum += samples[index] - samples[index - window];
            fourth_power_sum += (rolling_sum / window_f64).powi(4);
        }

        let positions = (samples.len() - window + 1) as f64;
        let normalized = (fourth_power_sum / positions).powf(0.25);

        debug!(
            samples = samples.len(),
            window_size = window,
            window_seconds = self.window_seconds,
            normalized_power = normalized,
            "Calculated normalized power"
        );
        Ok(normalized)
    }
}

fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Normalized power with the standard 30 second window
///
/// # Errors
///
/// Returns an error if the interval is invalid or a sample is negative or non-finite
pub fn normalized_power(samples: &[f64], sample_interval_seconds: f64) -> AppResult<u32> {
    NormalizedPowerEstimator::default().estimate(samples, sample_interval_seconds)
}

/// Normalized power of a 1 Hz stream with the standard 30 second window
///
/// # Errors
///
/// Returns an error if a sample is negative or non-finite
pub fn normalized_power_1hz(samples: &[f64]) -> AppResult<u32> {
    normalized_power(samples, DEFAULT_SAMPLE_INTERVAL_SECONDS)
}
