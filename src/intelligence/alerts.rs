// ABOUTME: Rule-based training alerts: overload, rest needed, detraining and ramp rate
// ABOUTME: Evaluates all four rules independently, then returns only the ones that fired
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::config::{AlertThresholds, ConfigError, EngineConfig};
use crate::intelligence::daily_load::DailyLoad;
use crate::intelligence::numeric::{
    ceil_to_tenth, ensure_finite, ensure_non_negative, floor_to_tenth, snap,
};
use crate::intelligence::training_load::TrainingLoadCalculator;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use trainload_core::constants::alert_windows::{
    BASELINE_WEEKS, RAMP_LOOKBACK_DAYS, RECENT_WINDOW_DAYS, WEEKLY_WINDOW_DAYS,
};
use trainload_core::constants::time_constants::DAYS_PER_WEEK;
use trainload_core::errors::AppResult;
use trainload_core::models::{Alert, AlertKind, AlertSeverity, LoadState, WorkoutSample};

/// Precomputed aggregates the alert rules consume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertInputs {
    /// Stress score summed over the current week
    pub weekly_score: f64,
    /// Baseline weekly stress score
    pub average_weekly_score: f64,
    /// Recent samples for the consecutive-intense-days check
    pub recent_samples: Vec<WorkoutSample>,
    /// Load state at `today`
    pub load: LoadState,
    /// Chronic load one week before `today`
    pub chronic_load_week_ago: f64,
    /// Most recent day with any activity
    pub last_activity_date: Option<NaiveDate>,
    /// Reference date
    pub today: NaiveDate,
}

impl AlertInputs {
    /// Derive every aggregate from a raw history
    ///
    /// - weekly score: the 7 days ending `today`
    /// - baseline: up to 4 weeks ending `today`, divided by the number of
    ///   weeks the history actually spans inside that window
    /// - recent samples: the 14 days ending `today`
    ///
    /// Samples dated after `today` are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored stress score is negative or non-finite
    pub fn from_history(
        history: &[WorkoutSample],
        today: NaiveDate,
        calculator: &TrainingLoadCalculator,
    ) -> AppResult<Self> {
        let past: Vec<WorkoutSample> = history
            .iter()
            .filter(|sample| sample.date <= today)
            .cloned()
            .collect();
        let daily = DailyLoad::from_samples(&past)?;

        let weekly_start = today - Duration::days(WEEKLY_WINDOW_DAYS - 1);
        let weekly_score = daily.total_between(weekly_start, today);

        let baseline_start = today - Duration::days(BASELINE_WEEKS * DAYS_PER_WEEK - 1);
        let average_weekly_score = daily.first_day().map_or(0.0, |first_day| {
            let span_start = first_day.max(baseline_start);
            let span_days = (today - span_start).num_days() + 1;
            let weeks = ((span_days + DAYS_PER_WEEK - 1) / DAYS_PER_WEEK).clamp(1, BASELINE_WEEKS);
            daily.total_between(span_start, today) / weeks as f64
        });

        let recent_start = today - Duration::days(RECENT_WINDOW_DAYS - 1);
        let recent_samples = past
            .iter()
            .filter(|sample| sample.date >= recent_start)
            .cloned()
            .collect();

        let load = calculator.load_state_from_daily(&daily, today);
        let chronic_load_week_ago = calculator
            .load_state_from_daily(&daily, today - Duration::days(RAMP_LOOKBACK_DAYS))
            .chronic_load;

        Ok(Self {
            weekly_score,
            average_weekly_score,
            recent_samples,
            load,
            chronic_load_week_ago,
            last_activity_date: daily.last_day(),
            today,
        })
    }

    fn validate(&self) -> AppResult<()> {
        ensure_non_negative("weekly_score", self.weekly_score)?;
        ensure_non_negative("average_weekly_score", self.average_weekly_score)?;
        ensure_finite("chronic_load", self.load.chronic_load)?;
        ensure_finite("balance", self.load.balance)?;
        ensure_finite("chronic_load_week_ago", self.chronic_load_week_ago)?;
        Ok(())
    }
}

/// Alert rule engine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertEngine {
    thresholds: AlertThresholds,
}

impl AlertEngine {
    /// Engine with custom thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if the thresholds are inverted or out of range
    pub fn new(thresholds: AlertThresholds) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// Engine from the alert section of an engine configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the thresholds are inverted or out of range
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        Self::new(config.alerts.clone())
    }

    /// Overload: current week against the baseline week
    ///
    /// No baseline (0) means no alert. Bands are inclusive at their lower edge.
    /// The message rounds the percentage down to a tenth so the text never
    /// reads as a higher band than the one decided.
    #[must_use]
    pub fn overload(&self, weekly_score: f64, average_weekly_score: f64) -> Alert {
        if average_weekly_score <= 0.0 {
            return Alert::new(
                AlertKind::Overload,
                AlertSeverity::None,
                0.0,
                "No training baseline yet to compare this week against",
            );
        }

        let percent = snap(weekly_score * 100.0 / average_weekly_score);
        let severity = if percent >= self.thresholds.overload_critical_percent {
            AlertSeverity::Critical
        } else if percent >= self.thresholds.overload_warning_percent {
            AlertSeverity::Warning
        } else {
            AlertSeverity::None
        };
        let shown = floor_to_tenth(percent);
        let message = match severity {
            AlertSeverity::Critical => format!(
                "Weekly training load is {shown:.1}% of your average. Reduce volume to avoid overtraining"
            ),
            AlertSeverity::Warning => format!(
                "Weekly training load is {shown:.1}% of your average. Monitor fatigue closely"
            ),
            AlertSeverity::None => {
                format!("Weekly training load is {shown:.1}% of your average")
            }
        };
        Alert::new(AlertKind::Overload, severity, percent, message)
    }

    /// Longest run of strictly consecutive intense days in `samples`
    ///
    /// A day is intense if its summed score reaches the intense-day score or
    /// any sample that day reports a perceived effort at or above the
    /// intense-effort rating.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored stress score is negative or non-finite
    pub fn longest_intense_run(&self, samples: &[WorkoutSample]) -> AppResult<u32> {
        let mut days: BTreeMap<NaiveDate, (f64, bool)> = BTreeMap::new();
        for sample in samples {
            let score = sample
                .stress_score
                .map_or(Ok(0.0), |score| ensure_non_negative("stress_score", score))?;
            let hard_effort = sample
                .perceived_effort
                .is_some_and(|rating| rating >= self.thresholds.intense_perceived_effort);
            let day = days.entry(sample.date).or_insert((0.0, false));
            day.0 += score;
            day.1 |= hard_effort;
        }

        let mut longest = 0;
        let mut current = 0;
        let mut previous: Option<NaiveDate> = None;
        for (date, (score, hard_effort)) in days {
            if score < self.thresholds.intense_day_score && !hard_effort {
                current = 0;
                previous = None;
                continue;
            }
            current = match previous {
                Some(prev) if (date - prev).num_days() == 1 => current + 1,
                _ => 1,
            };
            longest = longest.max(current);
            previous = Some(date);
        }
        Ok(longest)
    }

    /// Rest needed: too many consecutive intense days
    ///
    /// # Errors
    ///
    /// Returns an error if a stored stress score is negative or non-finite
    pub fn rest_needed(&self, recent_samples: &[WorkoutSample]) -> AppResult<Alert> {
        let run = self.longest_intense_run(recent_samples)?;
        let severity = if run >= self.thresholds.rest_critical_run_days {
            AlertSeverity::Critical
        } else if run >= self.thresholds.rest_warning_run_days {
            AlertSeverity::Warning
        } else {
            AlertSeverity::None
        };
        let message = match severity {
            AlertSeverity::Critical => {
                format!("{run} consecutive intense training days. Take a rest day now")
            }
            AlertSeverity::Warning => {
                format!("{run} consecutive intense training days. Plan a recovery day soon")
            }
            AlertSeverity::None => format!("Longest intense streak is {run} days"),
        };
        Ok(Alert::new(
            AlertKind::RestNeeded,
            severity,
            f64::from(run),
            message,
        ))
    }

    /// Detraining: long inactivity, else excessive positive balance
    ///
    /// The gap check takes priority; the balance check decides only when no
    /// gap-based alert fired. A last activity after `today` gives a negative
    /// gap, which never qualifies.
    #[must_use]
    pub fn detraining(
        &self,
        balance: f64,
        last_activity_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Alert {
        if let Some(last) = last_activity_date {
            let gap = (today - last).num_days();
            if gap >= self.thresholds.detraining_critical_gap_days {
                return Alert::new(
                    AlertKind::Detraining,
                    AlertSeverity::Critical,
                    gap as f64,
                    format!("{gap} days since your last workout. Fitness is declining"),
                );
            }
            if gap >= self.thresholds.detraining_warning_gap_days {
                return Alert::new(
                    AlertKind::Detraining,
                    AlertSeverity::Warning,
                    gap as f64,
                    format!("{gap} days since your last workout. Resume training to keep fitness"),
                );
            }
        }

        let shown = ceil_to_tenth(balance);
        if balance > self.thresholds.detraining_balance {
            Alert::new(
                AlertKind::Detraining,
                AlertSeverity::Warning,
                balance,
                format!("Form balance is {shown:.1}. Long-term load is coasting down"),
            )
        } else {
            Alert::new(
                AlertKind::Detraining,
                AlertSeverity::None,
                balance,
                format!("Form balance is {shown:.1}"),
            )
        }
    }

    /// Ramp rate: week-over-week chronic load rise
    ///
    /// The delta is compared unrounded, apart from float noise left by
    /// subtracting two tenth-rounded loads.
    #[must_use]
    pub fn ramp_rate(&self, chronic_load_now: f64, chronic_load_week_ago: f64) -> Alert {
        let delta = snap(chronic_load_now - chronic_load_week_ago);
        let shown = ceil_to_tenth(delta);
        let severity = if delta > self.thresholds.ramp_critical_delta {
            AlertSeverity::Critical
        } else if delta > self.thresholds.ramp_warning_delta {
            AlertSeverity::Warning
        } else {
            AlertSeverity::None
        };
        let message = match severity {
            AlertSeverity::Critical => format!(
                "Chronic load rose by {shown:.1} points in a week. Injury risk is high"
            ),
            AlertSeverity::Warning => format!(
                "Chronic load rose by {shown:.1} points in a week. Build more gradually"
            ),
            AlertSeverity::None => format!("Chronic load changed by {shown:.1} points in a week"),
        };
        Alert::new(AlertKind::RampRate, severity, delta, message)
    }

    /// Evaluate every rule, in `AlertKind::ALL` order, including inactive ones
    ///
    /// # Errors
    ///
    /// Returns an error if an aggregate is negative or non-finite
    pub fn evaluate_all(&self, inputs: &AlertInputs) -> AppResult<[Alert; 4]> {
        inputs.validate()?;
        Ok([
            self.overload(inputs.weekly_score, inputs.average_weekly_score),
            self.rest_needed(&inputs.recent_samples)?,
            self.detraining(inputs.load.balance, inputs.last_activity_date, inputs.today),
            self.ramp_rate(inputs.load.chronic_load, inputs.chronic_load_week_ago),
        ])
    }

    /// Evaluate every rule and keep only the alerts that fired
    ///
    /// # Errors
    ///
    /// Returns an error if an aggregate is negative or non-finite
    pub fn evaluate(&self, inputs: &AlertInputs) -> AppResult<Vec<Alert>> {
        let active: Vec<Alert> = self
            .evaluate_all(inputs)?
            .into_iter()
            .filter(Alert::is_active)
            .collect();

        debug!(
            today = %inputs.today,
            fired = ?active.iter().map(|alert| alert.kind.as_str()).collect::<Vec<_>>(),
            "Evaluated training alerts"
        );
        Ok(active)
    }
}
