// ABOUTME: Maps power to a zone label relative to threshold power using an ordered zone table
// ABOUTME: Also computes time-in-zone distribution of a power stream in parallel with rayon
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::config::{ConfigError, ZoneTable};
use crate::intelligence::numeric::ensure_non_negative;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use trainload_core::errors::AppResult;

/// Zone classifier over a validated zone table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneClassifier {
    table: ZoneTable,
}

impl ZoneClassifier {
    /// Create a classifier for a custom table
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidZoneTable` if the table has gaps or overlaps
    pub fn new(table: ZoneTable) -> Result<Self, ConfigError> {
        table.validate()?;
        Ok(Self { table })
    }

    /// Zone label for `average_power` relative to `reference_power`
    ///
    /// `None` when either power is absent or the reference is zero.
    ///
    /// # Errors
    ///
    /// Returns an error if a supplied power is negative or non-finite
    pub fn classify(
        &self,
        average_power: Option<f64>,
        reference_power: Option<f64>,
    ) -> AppResult<Option<&str>> {
        let Some(percent) = percent_of_reference(average_power, reference_power)? else {
            return Ok(None);
        };
        Ok(self.table.band_for(percent).map(|band| band.label.as_str()))
    }

    /// Share of `samples` falling in each zone
    ///
    /// `None` when the reference is absent or zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference or any sample is negative or non-finite
    pub fn distribution(
        &self,
        samples: &[f64],
        reference_power: Option<f64>,
    ) -> AppResult<Option<ZoneDistribution>> {
        let Some(reference) = reference_power
            .map(|watts| ensure_non_negative("reference_power", watts))
            .transpose()?
        else {
            return Ok(None);
        };
        if reference == 0.0 {
            return Ok(None);
        }
        for &watts in samples {
            ensure_non_negative("power_sample", watts)?;
        }

        let band_count = self.table.bands().len();
        let counts = samples
            .par_iter()
            .fold(
                || vec![0_usize; band_count],
                |mut counts, &watts| {
                    if let Some(index) = self.table.position(watts * 100.0 / reference) {
                        counts[index] += 1;
                    }
                    counts
                },
            )
            .reduce(
                || vec![0_usize; band_count],
                |mut a, b| {
                    for (total, count) in a.iter_mut().zip(b) {
                        *total += count;
                    }
                    a
                },
            );

        let total = samples.len();
        let zones = self
            .table
            .bands()
            .iter()
            .zip(counts)
            .map(|(band, count)| ZoneShare {
                label: band.label.clone(),
                samples: count,
                percentage: if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                },
            })
            .collect();

        debug!(
            samples = total,
            zones = band_count,
            reference_power = reference,
            "Calculated zone distribution"
        );

        Ok(Some(ZoneDistribution {
            total_samples: total,
            zones,
        }))
    }
}

/// Power as a percentage of reference power, `None` when undefined
fn percent_of_reference(
    average_power: Option<f64>,
    reference_power: Option<f64>,
) -> AppResult<Option<f64>> {
    let power = average_power
        .map(|watts| ensure_non_negative("average_power", watts))
        .transpose()?;
    let reference = reference_power
        .map(|watts| ensure_non_negative("reference_power", watts))
        .transpose()?;
    match (power, reference) {
        (Some(power), Some(reference)) if reference > 0.0 => Ok(Some(power * 100.0 / reference)),
        _ => Ok(None),
    }
}

/// Samples in one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneShare {
    /// Zone label
    pub label: String,
    /// Number of samples in the zone
    pub samples: usize,
    /// Percentage of all samples
    pub percentage: f64,
}

/// Time-in-zone breakdown of a power stream, in table order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDistribution {
    /// Samples classified
    pub total_samples: usize,
    /// One entry per zone band
    pub zones: Vec<ZoneShare>,
}

impl ZoneDistribution {
    /// Share for the zone named `label`
    #[must_use]
    pub fn share(&self, label: &str) -> Option<&ZoneShare> {
        self.zones.iter().find(|zone| zone.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_reference_is_unclassified() {
        let classifier = ZoneClassifier::default();
        assert_eq!(classifier.classify(Some(200.0), Some(0.0)).unwrap(), None);
        assert!(classifier
            .distribution(&[200.0], Some(0.0))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_percent_of_reference() {
        let percent = percent_of_reference(Some(250.0), Some(200.0))
            .unwrap()
            .unwrap();
        assert!((percent - 125.0).abs() < 1e-9);
        assert_eq!(percent_of_reference(None, Some(200.0)).unwrap(), None);
    }
}
