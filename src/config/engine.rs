// ABOUTME: Engine configuration: load model time constants, alert thresholds, zones and NP window
// ABOUTME: Thresholds and window load from TRAINLOAD_* environment variables with research defaults
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::error::ConfigError;
use super::training_zones::ZoneTable;
use crate::intelligence::physiological_constants::alert_thresholds;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use trainload_core::constants::{load_model, normalized_power};

/// Read `key` from the environment, falling back to `default` when absent or unparsable
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Exponential load model
    pub load: LoadModelConfig,
    /// Alert rule thresholds
    pub alerts: AlertThresholds,
    /// Power zone table
    pub zones: ZoneTable,
    /// Normalized power estimator settings
    pub normalized_power: NormalizedPowerConfig,
}

impl EngineConfig {
    /// Load configuration from environment
    ///
    /// Load model time constants and the zone table are never read from the
    /// environment; they keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            load: LoadModelConfig::default(),
            alerts: AlertThresholds::from_env(),
            zones: ZoneTable::default(),
            normalized_power: NormalizedPowerConfig::from_env(),
        }
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.load.validate()?;
        self.alerts.validate()?;
        self.zones.validate()?;
        self.normalized_power.validate()
    }
}

/// Exponential load model time constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadModelConfig {
    /// Chronic ("fitness") time constant in days
    pub chronic_time_constant_days: u32,
    /// Acute ("fatigue") time constant in days
    pub acute_time_constant_days: u32,
}

impl Default for LoadModelConfig {
    fn default() -> Self {
        Self {
            chronic_time_constant_days: load_model::CHRONIC_TIME_CONSTANT_DAYS,
            acute_time_constant_days: load_model::ACUTE_TIME_CONSTANT_DAYS,
        }
    }
}

impl LoadModelConfig {
    /// Explicit non-default time constants
    ///
    /// The ramp-rate and detraining thresholds are calibrated for 42/7; changing
    /// these requires revisiting `AlertThresholds` as well.
    #[must_use]
    pub const fn new(chronic_time_constant_days: u32, acute_time_constant_days: u32) -> Self {
        Self {
            chronic_time_constant_days,
            acute_time_constant_days,
        }
    }

    /// Validate time constants
    ///
    /// # Errors
    ///
    /// Returns an error if a constant is zero or acute is not shorter than chronic
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chronic_time_constant_days == 0 || self.acute_time_constant_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "load model time constants must be at least one day",
            ));
        }
        if self.acute_time_constant_days >= self.chronic_time_constant_days {
            return Err(ConfigError::InvalidRange(
                "acute time constant must be shorter than chronic time constant",
            ));
        }
        Ok(())
    }
}

/// Normalized power estimator settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPowerConfig {
    /// Rolling window length in seconds
    pub window_seconds: f64,
}

impl Default for NormalizedPowerConfig {
    fn default() -> Self {
        Self {
            window_seconds: normalized_power::WINDOW_SECONDS,
        }
    }
}

impl NormalizedPowerConfig {
    /// Load from `TRAINLOAD_NP_WINDOW_SECONDS`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            window_seconds: env_or(
                "TRAINLOAD_NP_WINDOW_SECONDS",
                normalized_power::WINDOW_SECONDS,
            ),
        }
    }

    /// Validate the window length
    ///
    /// # Errors
    ///
    /// Returns an error if the window is not a positive finite number of seconds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.window_seconds.is_finite() || self.window_seconds <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "normalized power window must be a positive number of seconds",
            ));
        }
        Ok(())
    }
}

/// Thresholds for the four alert rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// Weekly/baseline percentage for an overload warning (inclusive)
    pub overload_warning_percent: f64,
    /// Weekly/baseline percentage for a critical overload (inclusive)
    pub overload_critical_percent: f64,
    /// Daily score at or above which a day is intense
    pub intense_day_score: f64,
    /// Perceived effort at or above which a day is intense
    pub intense_perceived_effort: u8,
    /// Consecutive intense days for a rest warning
    pub rest_warning_run_days: u32,
    /// Consecutive intense days for a critical rest alert
    pub rest_critical_run_days: u32,
    /// Inactive days for a detraining warning
    pub detraining_warning_gap_days: i64,
    /// Inactive days for a critical detraining alert
    pub detraining_critical_gap_days: i64,
    /// Balance strictly above which a detraining warning fires
    pub detraining_balance: f64,
    /// Weekly chronic load rise strictly above which a ramp warning fires
    pub ramp_warning_delta: f64,
    /// Weekly chronic load rise strictly above which the ramp alert is critical
    pub ramp_critical_delta: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            overload_warning_percent: alert_thresholds::OVERLOAD_WARNING_PERCENT,
            overload_critical_percent: alert_thresholds::OVERLOAD_CRITICAL_PERCENT,
            intense_day_score: alert_thresholds::INTENSE_DAY_SCORE,
            intense_perceived_effort: alert_thresholds::INTENSE_PERCEIVED_EFFORT,
            rest_warning_run_days: alert_thresholds::REST_WARNING_RUN_DAYS,
            rest_critical_run_days: alert_thresholds::REST_CRITICAL_RUN_DAYS,
            detraining_warning_gap_days: alert_thresholds::DETRAINING_WARNING_GAP_DAYS,
            detraining_critical_gap_days: alert_thresholds::DETRAINING_CRITICAL_GAP_DAYS,
            detraining_balance: alert_thresholds::DETRAINING_BALANCE,
            ramp_warning_delta: alert_thresholds::RAMP_WARNING_DELTA,
            ramp_critical_delta: alert_thresholds::RAMP_CRITICAL_DELTA,
        }
    }
}

impl AlertThresholds {
    /// Load alert thresholds from environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            overload_warning_percent: env_or(
                "TRAINLOAD_OVERLOAD_WARNING_PERCENT",
                defaults.overload_warning_percent,
            ),
            overload_critical_percent: env_or(
                "TRAINLOAD_OVERLOAD_CRITICAL_PERCENT",
                defaults.overload_critical_percent,
            ),
            intense_day_score: env_or("TRAINLOAD_INTENSE_DAY_SCORE", defaults.intense_day_score),
            intense_perceived_effort: env_or(
                "TRAINLOAD_INTENSE_PERCEIVED_EFFORT",
                defaults.intense_perceived_effort,
            ),
            rest_warning_run_days: env_or(
                "TRAINLOAD_REST_WARNING_RUN_DAYS",
                defaults.rest_warning_run_days,
            ),
            rest_critical_run_days: env_or(
                "TRAINLOAD_REST_CRITICAL_RUN_DAYS",
                defaults.rest_critical_run_days,
            ),
            detraining_warning_gap_days: env_or(
                "TRAINLOAD_DETRAINING_WARNING_GAP_DAYS",
                defaults.detraining_warning_gap_days,
            ),
            detraining_critical_gap_days: env_or(
                "TRAINLOAD_DETRAINING_CRITICAL_GAP_DAYS",
                defaults.detraining_critical_gap_days,
            ),
            detraining_balance: env_or(
                "TRAINLOAD_DETRAINING_BALANCE",
                defaults.detraining_balance,
            ),
            ramp_warning_delta: env_or("TRAINLOAD_RAMP_WARNING_DELTA", defaults.ramp_warning_delta),
            ramp_critical_delta: env_or(
                "TRAINLOAD_RAMP_CRITICAL_DELTA",
                defaults.ramp_critical_delta,
            ),
        }
    }

    /// Validate threshold ordering and ranges
    ///
    /// # Errors
    ///
    /// Returns an error if a warning threshold exceeds its critical threshold
    /// or a value is outside its meaningful range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.overload_warning_percent,
            self.overload_critical_percent,
            self.intense_day_score,
            self.detraining_balance,
            self.ramp_warning_delta,
            self.ramp_critical_delta,
        ];
        if finite.iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "alert thresholds must be finite numbers",
            ));
        }
        if self.overload_warning_percent <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "overload warning percent must be positive",
            ));
        }
        if self.overload_warning_percent > self.overload_critical_percent {
            return Err(ConfigError::InvalidRange(
                "overload warning percent exceeds critical percent",
            ));
        }
        if self.intense_day_score < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "intense day score must not be negative",
            ));
        }
        if !(1..=10).contains(&self.intense_perceived_effort) {
            return Err(ConfigError::ValueOutOfRange(
                "intense perceived effort must be between 1 and 10",
            ));
        }
        if self.rest_warning_run_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "rest warning run must be at least one day",
            ));
        }
        if self.rest_warning_run_days > self.rest_critical_run_days {
            return Err(ConfigError::InvalidRange(
                "rest warning run exceeds critical run",
            ));
        }
        if self.detraining_warning_gap_days < 1 {
            return Err(ConfigError::ValueOutOfRange(
                "detraining warning gap must be at least one day",
            ));
        }
        if self.detraining_warning_gap_days > self.detraining_critical_gap_days {
            return Err(ConfigError::InvalidRange(
                "detraining warning gap exceeds critical gap",
            ));
        }
        if self.ramp_warning_delta > self.ramp_critical_delta {
            return Err(ConfigError::InvalidRange(
                "ramp warning delta exceeds critical delta",
            ));
        }
        Ok(())
    }
}
