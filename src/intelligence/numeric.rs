// ABOUTME: Rounding and input validation helpers shared by the engine's calculators
// ABOUTME: Round-half-up, noise snapping, directed tenths, finite and non-negative input checks
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use trainload_core::errors::{AppError, AppResult};

/// Round to the nearest integer, halves toward positive infinity
#[must_use]
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place, halves toward positive infinity
#[must_use]
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Drop float noise below a billionth, leaving real digits untouched
#[must_use]
pub(crate) fn snap(value: f64) -> f64 {
    (value * 1e9).round() / 1e9
}

/// Largest tenth not above `value`
///
/// Displaying an inclusive lower-edge band value this way never crosses an
/// edge that lies on a tenth.
#[must_use]
pub(crate) fn floor_to_tenth(value: f64) -> f64 {
    snap(value * 10.0).floor() / 10.0
}

/// Smallest tenth not below `value`
///
/// Counterpart of [`floor_to_tenth`] for strict `>` band edges.
#[must_use]
pub(crate) fn ceil_to_tenth(value: f64) -> f64 {
    snap(value * 10.0).ceil() / 10.0
}

/// Reject NaN and infinities
pub(crate) fn ensure_finite(field: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::out_of_range(field, value))
    }
}

/// Reject NaN, infinities and negative values
pub(crate) fn ensure_non_negative(field: &str, value: f64) -> AppResult<f64> {
    if ensure_finite(field, value)? < 0.0 {
        return Err(AppError::out_of_range(field, value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert!((round_half_up(2.5) - 3.0).abs() < f64::EPSILON);
        assert!((round_half_up(2.49) - 2.0).abs() < f64::EPSILON);
        assert!((round_half_up(-2.5) + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_to_tenth() {
        assert!((round_to_tenth(31.84) - 31.8).abs() < 1e-9);
        assert!((round_to_tenth(-45.06) + 45.1).abs() < 1e-9);
    }

    #[test]
    fn test_snap_keeps_real_digits() {
        assert!((snap(32.9 - 22.9) - 10.0).abs() < f64::EPSILON);
        assert!(snap(50.04 - 40.0) > 10.0);
        assert!(snap(47.04 - 40.0) > 7.0);
    }

    #[test]
    fn test_directed_tenths() {
        assert!((floor_to_tenth(119.96) - 119.9).abs() < 1e-9);
        assert!((floor_to_tenth(119.6) - 119.6).abs() < 1e-9);
        assert!((ceil_to_tenth(7.04) - 7.1).abs() < 1e-9);
        assert!((ceil_to_tenth(31.8 - 22.9) - 8.9).abs() < 1e-9);
    }

    #[test]
    fn test_validation() {
        assert!(ensure_finite("power", f64::NAN).is_err());
        assert!(ensure_non_negative("duration", -1.0).is_err());
        assert!(ensure_non_negative("duration", 0.0).is_ok());
    }
}
