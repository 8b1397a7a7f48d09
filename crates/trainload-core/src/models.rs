// ABOUTME: Plain data models exchanged between the engine and the surrounding application
// ABOUTME: Workout samples in, load state and severity-leveled alerts out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine data model.
//!
//! Every type here is an immutable value: the engine never mutates or persists
//! a `WorkoutSample`, and `LoadState` / `Alert` are recomputed on every call.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One completed training session, summarized to day granularity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSample {
    /// Calendar day of the session (UTC)
    pub date: NaiveDate,
    /// Session duration in seconds
    pub duration_seconds: u64,
    /// Average power in watts, if a power meter was used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_power: Option<f64>,
    /// Precomputed stress score, if one was stored for the session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_score: Option<f64>,
    /// Self-reported perceived effort (1-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perceived_effort: Option<u8>,
}

impl WorkoutSample {
    /// Create a sample with no power, score, or effort data
    #[must_use]
    pub const fn new(date: NaiveDate, duration_seconds: u64) -> Self {
        Self {
            date,
            duration_seconds,
            average_power: None,
            stress_score: None,
            perceived_effort: None,
        }
    }

    /// Create a sample from a session start timestamp, keeping only its UTC day
    #[must_use]
    pub fn started_at(start: DateTime<Utc>, duration_seconds: u64) -> Self {
        Self::new(start.date_naive(), duration_seconds)
    }

    /// Set the average power in watts
    #[must_use]
    pub const fn with_average_power(mut self, watts: f64) -> Self {
        self.average_power = Some(watts);
        self
    }

    /// Set the stored stress score
    #[must_use]
    pub const fn with_stress_score(mut self, score: f64) -> Self {
        self.stress_score = Some(score);
        self
    }

    /// Set the perceived effort rating
    #[must_use]
    pub const fn with_perceived_effort(mut self, rating: u8) -> Self {
        self.perceived_effort = Some(rating);
        self
    }
}

/// Smoothed load signals for one reference date
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadState {
    /// Long time-constant average of daily stress ("fitness")
    pub chronic_load: f64,
    /// Short time-constant average of daily stress ("fatigue")
    pub acute_load: f64,
    /// `chronic_load - acute_load` ("form"); positive means fresh
    pub balance: f64,
}

/// Load state on a specific calendar day, for charting a range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSeriesPoint {
    /// Day the state was evaluated at
    pub date: NaiveDate,
    /// Load state at the end of that day
    #[serde(flatten)]
    pub load: LoadState,
}

/// Closed set of alert rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Weekly stress well above the athlete's baseline
    Overload,
    /// Too many consecutive intense days
    RestNeeded,
    /// Long inactivity or a large positive balance
    Detraining,
    /// Chronic load rising too quickly week over week
    RampRate,
}

impl AlertKind {
    /// All kinds, in evaluation order
    pub const ALL: [Self; 4] = [
        Self::Overload,
        Self::RestNeeded,
        Self::Detraining,
        Self::RampRate,
    ];

    /// Stable snake_case identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overload => "overload",
            Self::RestNeeded => "rest_needed",
            Self::Detraining => "detraining",
            Self::RampRate => "ramp_rate",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Rule evaluated but did not fire
    None,
    /// Worth the athlete's attention
    Warning,
    /// Action recommended
    Critical,
}

impl AlertSeverity {
    /// Whether an alert with this severity should be surfaced
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Result of evaluating one alert rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Rule that produced the alert
    pub kind: AlertKind,
    /// Severity decided by the rule
    pub severity: AlertSeverity,
    /// Human-readable message embedding `value`
    pub message: String,
    /// Number that drove the severity decision (percent, days, or points)
    pub value: f64,
}

impl Alert {
    /// Create an alert
    pub fn new(
        kind: AlertKind,
        severity: AlertSeverity,
        value: f64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            value,
        }
    }

    /// Whether the rule fired
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.severity.is_active()
    }
}
