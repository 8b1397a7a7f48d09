// ABOUTME: Power zone table configuration: ordered, gap-free bands of threshold-power percentages
// ABOUTME: Provides the classic seven-zone default table and validation of custom tables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::error::ConfigError;
use crate::intelligence::physiological_constants::power_zones::{
    ANAEROBIC_UPPER_PERCENT, ENDURANCE_UPPER_PERCENT, RECOVERY_UPPER_PERCENT, TEMPO_UPPER_PERCENT,
    THRESHOLD_UPPER_PERCENT, VO2MAX_UPPER_PERCENT,
};
use serde::{Deserialize, Serialize};

/// One zone: `[min_percent, max_percent)` of threshold power
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneBand {
    /// Display label
    pub label: String,
    /// Inclusive lower bound, percent of threshold power
    pub min_percent: f64,
    /// Exclusive upper bound; `None` for the open top band
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent: Option<f64>,
}

impl ZoneBand {
    /// Create a band
    pub fn new(label: impl Into<String>, min_percent: f64, max_percent: Option<f64>) -> Self {
        Self {
            label: label.into(),
            min_percent,
            max_percent,
        }
    }

    /// Whether `percent` falls inside this band
    #[must_use]
    pub fn contains(&self, percent: f64) -> bool {
        percent >= self.min_percent && !matches!(self.max_percent, Some(max) if percent >= max)
    }
}

/// Ordered zone table covering `[0, inf)` with no gaps or overlaps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneTable {
    bands: Vec<ZoneBand>,
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self {
            bands: vec![
                ZoneBand::new("recovery", 0.0, Some(RECOVERY_UPPER_PERCENT)),
                ZoneBand::new(
                    "endurance",
                    RECOVERY_UPPER_PERCENT,
                    Some(ENDURANCE_UPPER_PERCENT),
                ),
                ZoneBand::new("tempo", ENDURANCE_UPPER_PERCENT, Some(TEMPO_UPPER_PERCENT)),
                ZoneBand::new(
                    "threshold",
                    TEMPO_UPPER_PERCENT,
                    Some(THRESHOLD_UPPER_PERCENT),
                ),
                ZoneBand::new(
                    "vo2max",
                    THRESHOLD_UPPER_PERCENT,
                    Some(VO2MAX_UPPER_PERCENT),
                ),
                ZoneBand::new(
                    "anaerobic",
                    VO2MAX_UPPER_PERCENT,
                    Some(ANAEROBIC_UPPER_PERCENT),
                ),
                ZoneBand::new("neuromuscular", ANAEROBIC_UPPER_PERCENT, None),
            ],
        }
    }
}

impl ZoneTable {
    /// Build a table from bands in ascending order
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidZoneTable` if the bands do not tile `[0, inf)`
    pub fn new(bands: Vec<ZoneBand>) -> Result<Self, ConfigError> {
        let table = Self { bands };
        table.validate()?;
        Ok(table)
    }

    /// Bands in ascending order
    #[must_use]
    pub fn bands(&self) -> &[ZoneBand] {
        &self.bands
    }

    /// Index of the first band containing `percent`
    #[must_use]
    pub fn position(&self, percent: f64) -> Option<usize> {
        self.bands.iter().position(|band| band.contains(percent))
    }

    /// First band containing `percent`
    #[must_use]
    pub fn band_for(&self, percent: f64) -> Option<&ZoneBand> {
        self.position(percent).map(|index| &self.bands[index])
    }

    /// Validate that bands start at 0, are contiguous, and end unbounded
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidZoneTable` describing the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(first) = self.bands.first() else {
            return Err(ConfigError::InvalidZoneTable("table has no bands".into()));
        };
        if first.min_percent.abs() > f64::EPSILON {
            return Err(ConfigError::InvalidZoneTable(format!(
                "first band '{}' must start at 0%",
                first.label
            )));
        }

        let last_index = self.bands.len() - 1;
        for (index, band) in self.bands.iter().enumerate() {
            if !band.min_percent.is_finite() {
                return Err(ConfigError::InvalidZoneTable(format!(
                    "band '{}' has a non-finite lower bound",
                    band.label
                )));
            }
            match band.max_percent {
                Some(max) if index == last_index => {
                    return Err(ConfigError::InvalidZoneTable(format!(
                        "top band '{}' must be unbounded, found upper bound {max}%",
                        band.label
                    )));
                }
                Some(max) => {
                    if !max.is_finite() || max <= band.min_percent {
                        return Err(ConfigError::InvalidZoneTable(format!(
                            "band '{}' upper bound {max}% must exceed its lower bound {}%",
                            band.label, band.min_percent
                        )));
                    }
                    let next = &self.bands[index + 1];
                    if (next.min_percent - max).abs() > f64::EPSILON {
                        return Err(ConfigError::InvalidZoneTable(format!(
                            "band '{}' must start at {max}% where '{}' ends, found {}%",
                            next.label, band.label, next.min_percent
                        )));
                    }
                }
                None if index != last_index => {
                    return Err(ConfigError::InvalidZoneTable(format!(
                        "only the top band may be unbounded, found '{}'",
                        band.label
                    )));
                }
                None => {}
            }
        }
        Ok(())
    }
}
