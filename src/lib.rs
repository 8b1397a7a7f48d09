// ABOUTME: Main library entry point for the trainload training-load engine
// ABOUTME: Stress scoring, fitness/fatigue smoothing, normalized power, zones and training alerts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainload
//!
//! A pure, stateless training-load modeling and alerting engine. It turns a
//! history of dated workout summaries into:
//!
//! - a stress score per session
//! - smoothed chronic load, acute load and balance at any reference date
//! - a normalized power estimate from a raw power stream
//! - a power zone label
//! - overload, rest-needed, detraining and ramp-rate alerts
//!
//! Missing power or threshold data is never an error; only structurally
//! invalid input (negative durations, non-finite samples) is rejected.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use trainload::intelligence::TrainingLoadEngine;
//! use trainload::models::WorkoutSample;
//! use trainload::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let engine = TrainingLoadEngine::default();
//!     let today = NaiveDate::from_ymd_opt(2026, 2, 16).unwrap_or_default();
//!     let history = vec![WorkoutSample::new(today, 3600).with_stress_score(80.0)];
//!
//!     let state = engine.load_state(&history, today)?;
//!     let alerts = engine.alerts_for_history(&history, today)?;
//!     println!("balance {} with {} alerts", state.balance, alerts.len());
//!     Ok(())
//! }
//! ```

/// Engine configuration and validation
pub mod config;

/// Training-load calculators and alert rules
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use trainload_core::{constants, errors, models};
