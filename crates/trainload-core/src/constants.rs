// ABOUTME: Engine-wide constants for time conversion, smoothing windows and alert lookbacks
// ABOUTME: Centralizes day counts so the load walk and alert assembly agree on calendar spans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants shared by the engine crate and its callers.

/// Time conversion constants
pub mod time_constants {
    /// Seconds in one hour
    pub const SECONDS_PER_HOUR_F64: f64 = 3600.0;

    /// Calendar days in one week
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// Exponential load model time constants
///
/// Downstream alert thresholds (ramp rate, detraining balance) assume these
/// values, so they are constants rather than environment settings.
pub mod load_model {
    /// Chronic load ("fitness") time constant in days
    pub const CHRONIC_TIME_CONSTANT_DAYS: u32 = 42;

    /// Acute load ("fatigue") time constant in days
    pub const ACUTE_TIME_CONSTANT_DAYS: u32 = 7;
}

/// Normalized power defaults
pub mod normalized_power {
    /// Rolling window length in seconds
    pub const WINDOW_SECONDS: f64 = 30.0;

    /// Sample interval of a standard 1 Hz power stream
    pub const DEFAULT_SAMPLE_INTERVAL_SECONDS: f64 = 1.0;
}

/// Calendar windows used when assembling alert inputs from a raw history
pub mod alert_windows {
    /// Days summed for the current weekly score (ending on the reference date)
    pub const WEEKLY_WINDOW_DAYS: i64 = 7;

    /// Maximum number of weeks averaged for the weekly baseline
    pub const BASELINE_WEEKS: i64 = 4;

    /// Days of samples handed to the rest-needed rule
    pub const RECENT_WINDOW_DAYS: i64 = 14;

    /// Lookback for the prior chronic load compared by the ramp-rate rule
    pub const RAMP_LOOKBACK_DAYS: i64 = 7;
}
