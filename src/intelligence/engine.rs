// ABOUTME: Facade bundling the configured calculators behind one validated entry point
// ABOUTME: Scores sessions, computes load state, normalized power, zones and alerts from one config
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::config::EngineConfig;
use crate::intelligence::algorithms::{
    NormalizedPowerEstimator, SessionPower, StressScore, StressScoreSource,
};
use crate::intelligence::alerts::{AlertEngine, AlertInputs};
use crate::intelligence::training_load::TrainingLoadCalculator;
use crate::intelligence::zones::{ZoneClassifier, ZoneDistribution};
use chrono::NaiveDate;
use tracing::debug;
use trainload_core::errors::AppResult;
use trainload_core::models::{Alert, LoadSeriesPoint, LoadState, WorkoutSample};

/// Training-load engine built from an `EngineConfig`
///
/// Holds only immutable configuration; every method is a pure function of its
/// arguments and may be called concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingLoadEngine {
    loads: TrainingLoadCalculator,
    normalized_power: NormalizedPowerEstimator,
    zones: ZoneClassifier,
    alerts: AlertEngine,
    score_source: StressScoreSource,
}

impl Default for TrainingLoadEngine {
    fn default() -> Self {
        Self {
            loads: TrainingLoadCalculator::new(),
            normalized_power: NormalizedPowerEstimator::default(),
            zones: ZoneClassifier::default(),
            alerts: AlertEngine::default(),
            score_source: StressScoreSource::default(),
        }
    }
}

impl TrainingLoadEngine {
    /// Build an engine from a configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any section fails validation
    pub fn from_config(config: &EngineConfig) -> AppResult<Self> {
        config.validate()?;
        debug!(
            chronic_days = config.load.chronic_time_constant_days,
            acute_days = config.load.acute_time_constant_days,
            np_window_seconds = config.normalized_power.window_seconds,
            zones = config.zones.bands().len(),
            "Building training load engine"
        );
        Ok(Self {
            loads: TrainingLoadCalculator::from_config(&config.load)?,
            normalized_power: NormalizedPowerEstimator::from_config(&config.normalized_power)?,
            zones: ZoneClassifier::new(config.zones.clone())?,
            alerts: AlertEngine::from_config(config)?,
            score_source: StressScoreSource::default(),
        })
    }

    /// Use a different power source for stress scores
    #[must_use]
    pub const fn with_score_source(mut self, source: StressScoreSource) -> Self {
        self.score_source = source;
        self
    }

    /// Load calculator in use
    #[must_use]
    pub const fn loads(&self) -> &TrainingLoadCalculator {
        &self.loads
    }

    /// Stress score of one session
    ///
    /// # Errors
    ///
    /// Returns an error if the duration or selected power is invalid
    pub fn score_session(
        &self,
        power: &SessionPower,
        reference_power: Option<f64>,
        duration_seconds: f64,
    ) -> AppResult<StressScore> {
        self.score_source
            .score(power, reference_power, duration_seconds)
    }

    /// Load state at `target_date`
    ///
    /// # Errors
    ///
    /// Returns an error if a stored stress score is invalid
    pub fn load_state(
        &self,
        history: &[WorkoutSample],
        target_date: NaiveDate,
    ) -> AppResult<LoadState> {
        self.loads.load_state(history, target_date)
    }

    /// Daily load states over `from..=to`
    ///
    /// # Errors
    ///
    /// Returns an error if the range is inverted or a stored score is invalid
    pub fn load_series(
        &self,
        history: &[WorkoutSample],
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<LoadSeriesPoint>> {
        self.loads.load_series(history, from, to)
    }

    /// Normalized power of a power stream
    ///
    /// # Errors
    ///
    /// Returns an error if the interval or a sample is invalid
    pub fn normalized_power(
        &self,
        samples: &[f64],
        sample_interval_seconds: f64,
    ) -> AppResult<u32> {
        self.normalized_power
            .estimate(samples, sample_interval_seconds)
    }

    /// Zone label for a session
    ///
    /// # Errors
    ///
    /// Returns an error if a supplied power is negative or non-finite
    pub fn classify_zone(
        &self,
        average_power: Option<f64>,
        reference_power: Option<f64>,
    ) -> AppResult<Option<&str>> {
        self.zones.classify(average_power, reference_power)
    }

    /// Time-in-zone breakdown of a power stream
    ///
    /// # Errors
    ///
    /// Returns an error if the reference or a sample is invalid
    pub fn zone_distribution(
        &self,
        samples: &[f64],
        reference_power: Option<f64>,
    ) -> AppResult<Option<ZoneDistribution>> {
        self.zones.distribution(samples, reference_power)
    }

    /// Active alerts for precomputed aggregates
    ///
    /// # Errors
    ///
    /// Returns an error if an aggregate is negative or non-finite
    pub fn evaluate_alerts(&self, inputs: &AlertInputs) -> AppResult<Vec<Alert>> {
        self.alerts.evaluate(inputs)
    }

    /// Active alerts derived directly from a raw history
    ///
    /// # Errors
    ///
    /// Returns an error if a stored stress score is invalid
    pub fn alerts_for_history(
        &self,
        history: &[WorkoutSample],
        today: NaiveDate,
    ) -> AppResult<Vec<Alert>> {
        let inputs = AlertInputs::from_history(history, today, &self.loads)?;
        self.alerts.evaluate(&inputs)
    }
}
