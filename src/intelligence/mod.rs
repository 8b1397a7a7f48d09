// ABOUTME: Training-load intelligence: stress scores, load smoothing, normalized power, zones, alerts
// ABOUTME: Pure synchronous calculators with no I/O and no state retained between calls
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Intelligence Module
//!
//! Data flow: workout history → [`DailyLoad`] → [`TrainingLoadCalculator`] →
//! [`AlertEngine`]. Power streams go through [`NormalizedPowerEstimator`] and
//! optionally into a stress score, independently of the load walk.

/// Algorithm building blocks
pub mod algorithms;
/// Alert rules and input assembly
pub mod alerts;
/// Per-day aggregation of a workout history
pub mod daily_load;
/// Configured facade over all calculators
pub mod engine;
pub(crate) mod numeric;
/// Research-based default constants
pub mod physiological_constants;
/// Chronic/acute load and balance
pub mod training_load;
/// Power zone classification
pub mod zones;

pub use algorithms::{
    calculate_stress_score, normalized_power, ExponentialLoad, NormalizedPowerEstimator,
    SessionPower, StressScore, StressScoreSource,
};
pub use alerts::{AlertEngine, AlertInputs};
pub use daily_load::DailyLoad;
pub use engine::TrainingLoadEngine;
pub use training_load::{TrainingLoadCalculator, TrainingStatus};
pub use zones::{ZoneClassifier, ZoneDistribution, ZoneShare};
