// ABOUTME: Configuration module for the training-load engine
// ABOUTME: Engine settings, alert thresholds, zone tables and their validation errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Engine configuration
//!
//! Every section has research-based defaults. Alert thresholds and the
//! normalized power window can be overridden with `TRAINLOAD_*` environment
//! variables; unparsable values fall back to the default.

/// Engine, load model, alert and normalized power settings
pub mod engine;
/// Configuration validation errors
pub mod error;
/// Power zone tables
pub mod training_zones;

pub use engine::{AlertThresholds, EngineConfig, LoadModelConfig, NormalizedPowerConfig};
pub use error::ConfigError;
pub use training_zones::{ZoneBand, ZoneTable};
