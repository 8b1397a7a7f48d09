// ABOUTME: Per-session stress score from power, threshold power and duration
// ABOUTME: Selectable power source: average power, normalized power, or NP with average fallback
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::intelligence::numeric::{ensure_finite, ensure_non_negative, round_half_up};
use crate::intelligence::physiological_constants::stress_score::BASE_MULTIPLIER;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use trainload_core::constants::time_constants::SECONDS_PER_HOUR_F64;
use trainload_core::errors::{AppError, AppResult};

/// Stress score of one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressScore {
    /// Rounded unitless score; 100 is one hour at threshold power
    pub score: u32,
    /// Session power divided by threshold power
    pub intensity_factor: f64,
}

impl StressScore {
    /// Score used whenever power or threshold data is missing
    pub const ZERO: Self = Self {
        score: 0,
        intensity_factor: 0.0,
    };
}

/// Score a session from its average power
///
/// Absent power, absent threshold, or a zero threshold all yield
/// `StressScore::ZERO`; missing biometric data is not an error.
///
/// # Errors
///
/// Returns an error if the duration or a supplied power value is negative or
/// non-finite, or if the ratio of the two overflows the score range
pub fn calculate_stress_score(
    average_power: Option<f64>,
    reference_power: Option<f64>,
    duration_seconds: f64,
) -> AppResult<StressScore> {
    let duration_seconds = ensure_non_negative("duration_seconds", duration_seconds)?;
    let power = average_power
        .map(|watts| ensure_non_negative("average_power", watts))
        .transpose()?;
    let reference = reference_power
        .map(|watts| ensure_non_negative("reference_power", watts))
        .transpose()?;

    let (Some(power), Some(reference)) = (power, reference) else {
        return Ok(StressScore::ZERO);
    };
    if reference == 0.0 {
        return Ok(StressScore::ZERO);
    }

    let intensity_factor = ensure_finite("intensity_factor", power / reference)?;
    let hours = duration_seconds / SECONDS_PER_HOUR_F64;
    let score = round_half_up(intensity_factor * intensity_factor * hours * BASE_MULTIPLIER);
    if !(0.0..=f64::from(u32::MAX)).contains(&score) {
        return Err(AppError::out_of_range("stress_score", score));
    }

    Ok(StressScore {
        score: score as u32,
        intensity_factor,
    })
}

/// Power figures available for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionPower {
    /// Average power in watts
    pub average_power: Option<f64>,
    /// Normalized power in watts, if a power stream was processed
    pub normalized_power: Option<f64>,
}

/// Which power figure drives the stress score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressScoreSource {
    /// Average power; underestimates variable efforts
    #[default]
    AveragePower,
    /// Normalized power only; no score without a processed stream
    NormalizedPower,
    /// Normalized power when present, average power otherwise
    Hybrid,
}

impl StressScoreSource {
    /// Score a session using this source
    ///
    /// # Errors
    ///
    /// Returns an error if the duration or the selected power value is invalid
    pub fn score(
        self,
        power: &SessionPower,
        reference_power: Option<f64>,
        duration_seconds: f64,
    ) -> AppResult<StressScore> {
        let selected = match self {
            Self::AveragePower => power.average_power,
            Self::NormalizedPower => power.normalized_power,
            Self::Hybrid => power.normalized_power.or(power.average_power),
        };
        calculate_stress_score(selected, reference_power, duration_seconds)
    }

    /// Get source name for logging and debugging
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AveragePower => "average_power",
            Self::NormalizedPower => "normalized_power",
            Self::Hybrid => "hybrid",
        }
    }
}

impl FromStr for StressScoreSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "avg_power" | "average_power" => Ok(Self::AveragePower),
            "normalized_power" | "np" => Ok(Self::NormalizedPower),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(AppError::invalid_input(format!(
                "Unknown stress score source: '{other}'. Valid options: average_power, normalized_power, hybrid"
            ))),
        }
    }
}
