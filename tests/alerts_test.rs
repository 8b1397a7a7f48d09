// ABOUTME: Integration tests for the four alert rules and their combined evaluation
// ABOUTME: Covers threshold boundaries, consecutive-day detection, gap priority and filtering
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{assert_close, date};
use trainload::config::AlertThresholds;
use trainload::intelligence::{AlertEngine, AlertInputs};
use trainload::models::{AlertKind, AlertSeverity, LoadState, WorkoutSample};

fn intense(day: u32) -> WorkoutSample {
    WorkoutSample::new(date(2026, 2, day), 3600).with_stress_score(85.0)
}

fn easy(day: u32) -> WorkoutSample {
    WorkoutSample::new(date(2026, 2, day), 3600).with_stress_score(40.0)
}

fn quiet_inputs() -> AlertInputs {
    AlertInputs {
        weekly_score: 300.0,
        average_weekly_score: 300.0,
        recent_samples: Vec::new(),
        load: LoadState {
            chronic_load: 40.0,
            acute_load: 45.0,
            balance: -5.0,
        },
        chronic_load_week_ago: 38.0,
        last_activity_date: Some(date(2026, 2, 15)),
        today: date(2026, 2, 16),
    }
}

// ============================================================================
// Overload
// ============================================================================

#[test]
fn test_overload_bands() {
    let engine = AlertEngine::default();
    assert_eq!(engine.overload(120.0, 100.0).severity, AlertSeverity::Warning);
    assert_eq!(engine.overload(150.0, 100.0).severity, AlertSeverity::Critical);
    assert_eq!(engine.overload(119.0, 100.0).severity, AlertSeverity::None);
    assert_eq!(engine.overload(149.0, 100.0).severity, AlertSeverity::Warning);
}

#[test]
fn test_overload_without_baseline() {
    let engine = AlertEngine::default();
    for weekly in [0.0, 50.0, 10_000.0] {
        let alert = engine.overload(weekly, 0.0);
        assert_eq!(alert.severity, AlertSeverity::None);
        assert!(alert.value.is_finite());
    }
}

#[test]
fn test_overload_message_embeds_percentage() {
    let alert = AlertEngine::default().overload(180.0, 100.0);
    assert_eq!(alert.kind, AlertKind::Overload);
    assert_close(alert.value, 180.0);
    assert!(alert.message.contains("180.0%"), "{}", alert.message);
}

#[test]
fn test_overload_message_never_reads_as_next_band() {
    let engine = AlertEngine::default();

    let below = engine.overload(119.6, 100.0);
    assert_eq!(below.severity, AlertSeverity::None);
    assert_close(below.value, 119.6);
    assert!(below.message.contains("119.6%"), "{}", below.message);
    assert!(!below.message.contains("120"), "{}", below.message);

    let just_below = engine.overload(119.96, 100.0);
    assert_eq!(just_below.severity, AlertSeverity::None);
    assert!(just_below.message.contains("119.9%"), "{}", just_below.message);

    let at_edge = engine.overload(120.0, 100.0);
    assert_eq!(at_edge.severity, AlertSeverity::Warning);
    assert!(at_edge.message.contains("120.0%"), "{}", at_edge.message);
}

// ============================================================================
// Rest needed
// ============================================================================

#[test]
fn test_three_consecutive_intense_days_warn() {
    let engine = AlertEngine::default();
    let alert = engine
        .rest_needed(&[intense(1), intense(2), intense(3)])
        .unwrap();
    assert_eq!(alert.severity, AlertSeverity::Warning);
    assert_close(alert.value, 3.0);
    assert!(alert.message.contains('3'));
}

#[test]
fn test_four_consecutive_intense_days_are_critical() {
    let engine = AlertEngine::default();
    let alert = engine
        .rest_needed(&[intense(4), intense(2), intense(1), intense(3)])
        .unwrap();
    assert_eq!(alert.severity, AlertSeverity::Critical);
}

#[test]
fn test_date_gap_breaks_the_run() {
    let engine = AlertEngine::default();
    let alert = engine
        .rest_needed(&[intense(1), intense(2), intense(4)])
        .unwrap();
    assert_eq!(alert.severity, AlertSeverity::None);

    let alert = engine
        .rest_needed(&[intense(1), intense(2), easy(3), intense(4), intense(5)])
        .unwrap();
    assert_eq!(alert.severity, AlertSeverity::None);
}

#[test]
fn test_perceived_effort_alone_marks_intense_day() {
    let engine = AlertEngine::default();
    let samples = [
        WorkoutSample::new(date(2026, 2, 1), 3600).with_perceived_effort(8),
        WorkoutSample::new(date(2026, 2, 2), 3600)
            .with_stress_score(20.0)
            .with_perceived_effort(9),
        WorkoutSample::new(date(2026, 2, 3), 1800).with_stress_score(80.0),
    ];
    let alert = engine.rest_needed(&samples).unwrap();
    assert_eq!(alert.severity, AlertSeverity::Warning);

    let relaxed = [
        WorkoutSample::new(date(2026, 2, 1), 3600).with_perceived_effort(7),
        WorkoutSample::new(date(2026, 2, 2), 3600).with_perceived_effort(7),
        WorkoutSample::new(date(2026, 2, 3), 3600).with_perceived_effort(7),
    ];
    assert_eq!(
        engine.rest_needed(&relaxed).unwrap().severity,
        AlertSeverity::None
    );
}

#[test]
fn test_empty_recent_history_needs_no_rest() {
    let alert = AlertEngine::default().rest_needed(&[]).unwrap();
    assert_eq!(alert.severity, AlertSeverity::None);
    assert_close(alert.value, 0.0);
}

// ============================================================================
// Detraining
// ============================================================================

#[test]
fn test_detraining_gap_bands() {
    let engine = AlertEngine::default();
    let today = date(2026, 2, 16);

    let warning = engine.detraining(0.0, Some(today - Duration::days(7)), today);
    assert_eq!(warning.severity, AlertSeverity::Warning);
    assert_close(warning.value, 7.0);
    assert!(warning.message.contains("7 days"));

    let critical = engine.detraining(0.0, Some(today - Duration::days(10)), today);
    assert_eq!(critical.severity, AlertSeverity::Critical);

    let none = engine.detraining(0.0, Some(today - Duration::days(6)), today);
    assert_eq!(none.severity, AlertSeverity::None);
}

#[test]
fn test_balance_decides_when_gap_is_short() {
    let engine = AlertEngine::default();
    let today = date(2026, 2, 16);
    let alert = engine.detraining(30.0, Some(today - Duration::days(6)), today);
    assert_eq!(alert.severity, AlertSeverity::Warning);
    assert_close(alert.value, 30.0);
    assert!(alert.message.contains("30.0"));

    let just_over = engine.detraining(25.04, Some(today - Duration::days(6)), today);
    assert_eq!(just_over.severity, AlertSeverity::Warning);
    assert!(just_over.message.contains("25.1"), "{}", just_over.message);
}

#[test]
fn test_gap_takes_priority_over_balance() {
    let engine = AlertEngine::default();
    let today = date(2026, 2, 16);
    let alert = engine.detraining(30.0, Some(today - Duration::days(12)), today);
    assert_eq!(alert.severity, AlertSeverity::Critical);
    assert_close(alert.value, 12.0);
}

#[test]
fn test_balance_check_without_any_activity() {
    let engine = AlertEngine::default();
    let today = date(2026, 2, 16);
    assert_eq!(
        engine.detraining(25.1, None, today).severity,
        AlertSeverity::Warning
    );
    assert_eq!(
        engine.detraining(25.0, None, today).severity,
        AlertSeverity::None
    );
}

#[test]
fn test_future_last_activity_never_qualifies() {
    let engine = AlertEngine::default();
    let today = date(2026, 2, 16);
    let alert = engine.detraining(0.0, Some(today + Duration::days(20)), today);
    assert_eq!(alert.severity, AlertSeverity::None);
}

// ============================================================================
// Ramp rate
// ============================================================================

#[test]
fn test_ramp_rate_bands() {
    let engine = AlertEngine::default();
    assert_eq!(engine.ramp_rate(47.0, 40.0).severity, AlertSeverity::None);
    assert_eq!(engine.ramp_rate(47.1, 40.0).severity, AlertSeverity::Warning);
    assert_eq!(engine.ramp_rate(50.0, 40.0).severity, AlertSeverity::Warning);
    assert_eq!(engine.ramp_rate(50.1, 40.0).severity, AlertSeverity::Critical);
    assert_eq!(engine.ramp_rate(30.0, 40.0).severity, AlertSeverity::None);
}

#[test]
fn test_ramp_rate_compares_unrounded_delta() {
    let engine = AlertEngine::default();

    let critical = engine.ramp_rate(50.04, 40.0);
    assert_eq!(critical.severity, AlertSeverity::Critical);
    assert_close(critical.value, 10.04);
    assert!(critical.message.contains("10.1"), "{}", critical.message);

    let warning = engine.ramp_rate(47.04, 40.0);
    assert_eq!(warning.severity, AlertSeverity::Warning);
    assert_close(warning.value, 7.04);
    assert!(warning.message.contains("7.1"), "{}", warning.message);
}

#[test]
fn test_ramp_rate_message_uses_delta() {
    let alert = AlertEngine::default().ramp_rate(31.8, 22.9);
    assert_eq!(alert.severity, AlertSeverity::Warning);
    assert_close(alert.value, 8.9);
    assert!(alert.message.contains("8.9"), "{}", alert.message);
}

// ============================================================================
// Combined evaluation
// ============================================================================

#[test]
fn test_quiet_week_has_no_alerts() {
    let engine = AlertEngine::default();
    assert!(engine.evaluate(&quiet_inputs()).unwrap().is_empty());

    let all = engine.evaluate_all(&quiet_inputs()).unwrap();
    let kinds: Vec<AlertKind> = all.iter().map(|alert| alert.kind).collect();
    assert_eq!(kinds, AlertKind::ALL.to_vec());
    assert!(all.iter().all(|alert| !alert.is_active()));
}

#[test]
fn test_all_rules_fire_in_fixed_order() {
    let engine = AlertEngine::default();
    let inputs = AlertInputs {
        weekly_score: 700.0,
        average_weekly_score: 400.0,
        recent_samples: vec![intense(3), intense(4), intense(5)],
        load: LoadState {
            chronic_load: 60.0,
            acute_load: 30.0,
            balance: 30.0,
        },
        chronic_load_week_ago: 45.0,
        last_activity_date: Some(date(2026, 2, 5)),
        today: date(2026, 2, 16),
    };

    let alerts = engine.evaluate(&inputs).unwrap();
    let summary: Vec<(AlertKind, AlertSeverity)> = alerts
        .iter()
        .map(|alert| (alert.kind, alert.severity))
        .collect();
    assert_eq!(
        summary,
        vec![
            (AlertKind::Overload, AlertSeverity::Critical),
            (AlertKind::RestNeeded, AlertSeverity::Warning),
            (AlertKind::Detraining, AlertSeverity::Critical),
            (AlertKind::RampRate, AlertSeverity::Critical),
        ]
    );
}

#[test]
fn test_custom_thresholds() {
    let thresholds = AlertThresholds {
        rest_warning_run_days: 2,
        rest_critical_run_days: 2,
        ..AlertThresholds::default()
    };
    let engine = AlertEngine::new(thresholds).unwrap();
    assert_eq!(
        engine.rest_needed(&[intense(1), intense(2)]).unwrap().severity,
        AlertSeverity::Critical
    );

    let inverted = AlertThresholds {
        ramp_warning_delta: 12.0,
        ..AlertThresholds::default()
    };
    assert!(AlertEngine::new(inverted).is_err());
}

#[test]
fn test_invalid_aggregates_are_rejected() {
    let engine = AlertEngine::default();
    let mut inputs = quiet_inputs();
    inputs.average_weekly_score = f64::NAN;
    assert!(engine.evaluate(&inputs).is_err());

    let mut inputs = quiet_inputs();
    inputs.recent_samples = vec![WorkoutSample::new(date(2026, 2, 10), 60).with_stress_score(-3.0)];
    assert!(engine.evaluate(&inputs).is_err());
}
