// ABOUTME: Algorithm implementations for stress scoring, normalized power and load smoothing
// ABOUTME: Pure numeric building blocks composed by the calculators in the parent module
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Algorithm building blocks
//!
//! - `stress_score`: per-session score with selectable power source
//! - `normalized_power`: trailing-window quartic mean of a power stream
//! - `training_load`: the daily exponential recurrence

/// Normalized power estimation
pub mod normalized_power;
/// Per-session stress score
pub mod stress_score;
/// Exponential daily load recurrence
pub mod training_load;

pub use normalized_power::{normalized_power, normalized_power_1hz, NormalizedPowerEstimator};
pub use stress_score::{calculate_stress_score, SessionPower, StressScore, StressScoreSource};
pub use training_load::ExponentialLoad;
