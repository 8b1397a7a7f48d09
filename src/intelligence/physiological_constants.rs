// ABOUTME: Sports-science constants for stress scoring, power zones, form status and training alerts
// ABOUTME: Default values for the engine's configuration layer, grouped by concern with references
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Physiological constants based on sports science research
//!
//! These are the defaults the configuration layer starts from. The smoothing
//! time constants live in `trainload_core::constants::load_model` because they
//! are not configurable.

/// Stress score calculation constants
///
/// Reference: Coggan, A. (2003). Training Stress Score explained
pub mod stress_score {
    /// Score of one hour ridden exactly at threshold power
    pub const BASE_MULTIPLIER: f64 = 100.0;
}

/// Power training zones (percentage of threshold power)
///
/// Reference: Allen, H. & Coggan, A. (2010). Training and Racing with a Power Meter
pub mod power_zones {
    /// Active recovery upper limit
    pub const RECOVERY_UPPER_PERCENT: f64 = 55.0;

    /// Endurance upper limit
    pub const ENDURANCE_UPPER_PERCENT: f64 = 75.0;

    /// Tempo upper limit
    pub const TEMPO_UPPER_PERCENT: f64 = 90.0;

    /// Lactate threshold upper limit
    pub const THRESHOLD_UPPER_PERCENT: f64 = 105.0;

    /// VO2 max upper limit
    pub const VO2MAX_UPPER_PERCENT: f64 = 120.0;

    /// Anaerobic capacity upper limit; neuromuscular power is unbounded above
    pub const ANAEROBIC_UPPER_PERCENT: f64 = 150.0;
}

/// Form (balance) interpretation thresholds
///
/// Reference: Banister, E.W. (1991). Modeling elite athletic performance
pub mod form_status {
    /// Below this balance the athlete is overreaching
    pub const OVERREACHING_BALANCE: f64 = -10.0;

    /// Below this balance (and not overreaching) training is productive
    pub const PRODUCTIVE_BALANCE: f64 = 0.0;

    /// Above this balance fitness is starting to decay
    pub const DETRAINING_BALANCE: f64 = 10.0;
}

/// Alert rule thresholds
///
/// References:
/// - Gabbett, T.J. (2016). The training-injury prevention paradox
/// - <https://bjsm.bmj.com/content/50/5/273>
pub mod alert_thresholds {
    /// Weekly score as a percentage of baseline that warrants a warning
    pub const OVERLOAD_WARNING_PERCENT: f64 = 120.0;

    /// Weekly score as a percentage of baseline that is critical
    pub const OVERLOAD_CRITICAL_PERCENT: f64 = 150.0;

    /// Daily stress score at or above which a day counts as intense
    pub const INTENSE_DAY_SCORE: f64 = 80.0;

    /// Perceived effort (1-10) at or above which a day counts as intense
    pub const INTENSE_PERCEIVED_EFFORT: u8 = 8;

    /// Consecutive intense days that warrant a warning
    pub const REST_WARNING_RUN_DAYS: u32 = 3;

    /// Consecutive intense days that are critical
    pub const REST_CRITICAL_RUN_DAYS: u32 = 4;

    /// Days without activity that warrant a warning
    pub const DETRAINING_WARNING_GAP_DAYS: i64 = 7;

    /// Days without activity that are critical
    pub const DETRAINING_CRITICAL_GAP_DAYS: i64 = 10;

    /// Balance strictly above which accumulated freshness is flagged
    pub const DETRAINING_BALANCE: f64 = 25.0;

    /// Week-over-week chronic load rise strictly above which a warning fires
    pub const RAMP_WARNING_DELTA: f64 = 7.0;

    /// Week-over-week chronic load rise strictly above which the alert is critical
    pub const RAMP_CRITICAL_DELTA: f64 = 10.0;
}
