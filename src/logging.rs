// ABOUTME: Optional tracing subscriber setup for applications embedding the engine
// ABOUTME: Picks a json, pretty or compact fmt layer behind an EnvFilter from environment settings
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Structured logging setup
//!
//! The engine only emits `debug!` events from its calculators. Nothing here
//! runs unless the host application calls [`LoggingConfig::init`]; hosts with
//! their own subscriber can ignore this module entirely.

use anyhow::{anyhow, Result};
use std::env;
use std::fmt;
use std::io;
use tracing::{info, Subscriber};
use tracing_subscriber::{
    filter::{Directive, LevelFilter},
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Target prefix of every event the engine emits
pub const DEFAULT_SERVICE_NAME: &str = "trainload";

/// Variable holding the level of the engine's own events
pub const LEVEL_ENV_VAR: &str = "TRAINLOAD_LOG";

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event, for log shippers
    Json,
    /// Human-readable multi-field lines
    #[default]
    Pretty,
    /// Single-line output without targets
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything unrecognized is `Pretty`
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        })
    }
}

/// Subscriber settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level applied to the engine's own events, a single level name such as `debug`
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Deployment environment name, reported once at startup
    pub environment: String,
    /// Annotate events with file and line
    pub source_location: bool,
    /// Annotate events with thread id and name
    pub thread_info: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::default(),
            environment: "development".into(),
            source_location: false,
            thread_info: false,
        }
    }
}

impl LoggingConfig {
    /// Read `TRAINLOAD_LOG`, `LOG_FORMAT`, `ENVIRONMENT` and
    /// `LOG_SOURCE_LOCATION` / `LOG_THREAD_INFO`
    ///
    /// `RUST_LOG` is not read here; [`LoggingConfig::init`] hands it to the
    /// `EnvFilter` unchanged. Production always gets location and thread
    /// annotations.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let production = environment.eq_ignore_ascii_case("production");

        Self {
            level: env::var(LEVEL_ENV_VAR).unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |value| LogFormat::from_str_or_default(&value)),
            source_location: production || env::var("LOG_SOURCE_LOCATION").is_ok(),
            thread_info: production || env::var("LOG_THREAD_INFO").is_ok(),
            environment,
        }
    }

    /// `trainload=<level>`, or `None` when `level` is not a single level name
    fn engine_directive(&self) -> Option<Directive> {
        let level: LevelFilter = self.level.trim().parse().ok()?;
        format!("{DEFAULT_SERVICE_NAME}={level}").parse().ok()
    }

    /// `RUST_LOG` directives if set, otherwise `warn`, plus the engine directive
    fn env_filter(&self) -> EnvFilter {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        match self.engine_directive() {
            Some(directive) => filter.add_directive(directive),
            None => filter,
        }
    }

    /// fmt layer for the configured format
    fn fmt_layer<S>(&self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + 'static,
    {
        let base = tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_span_events(FmtSpan::NONE)
            .with_file(self.source_location)
            .with_line_number(self.source_location)
            .with_thread_ids(self.thread_info)
            .with_thread_names(self.thread_info);

        match self.format {
            LogFormat::Json => base.json().boxed(),
            LogFormat::Pretty => base.with_target(true).boxed(),
            LogFormat::Compact => base.compact().with_target(false).boxed(),
        }
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed; calling
    /// this twice never panics
    pub fn init(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(self.fmt_layer())
            .try_init()
            .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

        info!(
            service = DEFAULT_SERVICE_NAME,
            version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            level = %self.level,
            format = %self.format,
            "Training load engine logging initialized"
        );
        Ok(())
    }
}

/// Install a subscriber configured from the environment
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
