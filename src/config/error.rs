// ABOUTME: Configuration error types for engine configuration validation
// ABOUTME: Defines error variants for inverted thresholds, invalid values and malformed zone tables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration error types for engine configuration validation.

use thiserror::Error;
use trainload_core::errors::AppError;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Warning threshold is not below its critical counterpart
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Zone bands leave a gap, overlap, or do not cover `[0, inf)`
    #[error("Invalid zone table: {0}")]
    InvalidZoneTable(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}
