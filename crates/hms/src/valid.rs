// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validity and canonical-form predicates.
//!
//! Validity is advisory: no conversion, formatting or arithmetic operation
//! checks it. Callers that want a boundary check opt in with [`is_valid`] or
//! [`validate`]; everything else accepts negative or non-finite fields and
//! produces the mathematically defined result.

use crate::duration::{Duration, LooseDuration};
use crate::error::{Error, Result};

/// True iff every field (absent fields read as zero) is finite and >= 0.
///
/// A single negative, NaN or infinite field invalidates the whole value.
pub fn is_valid(duration: impl Into<LooseDuration>) -> bool {
    let d = duration.into();

    is_non_negative_finite(d.hours.unwrap_or(0.0))
        && is_non_negative_finite(d.minutes.unwrap_or(0.0))
        && is_non_negative_finite(d.seconds.unwrap_or(0.0))
}

/// Error-raising form of [`is_valid`].
///
/// Returns [`Error::InvalidDuration`] carrying the offending value. No other
/// operation in the crate calls this on your behalf.
pub fn validate(duration: impl Into<LooseDuration>) -> Result<()> {
    let d = duration.into();
    if is_valid(d) {
        Ok(())
    } else {
        Err(Error::InvalidDuration(d))
    }
}

/// True iff `duration` is in canonical form: integer hours, integer minutes
/// in `0..=59`, and seconds finite, non-negative and below 60.
///
/// Negative integer hours are canonical: the floor carry convention
/// represents minus five seconds as `{-1, 59, 55}`.
pub fn is_normal(duration: Duration) -> bool {
    is_integer(duration.hours)
        && is_integer_in_range(duration.minutes, 0.0, 59.0)
        && is_non_negative_finite(duration.seconds)
        && duration.seconds < 60.0
}

fn is_non_negative_finite(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

fn is_integer_in_range(value: f64, min: f64, max: f64) -> bool {
    is_integer(value) && value >= min && value <= max
}

#[cfg(test)]
#[path = "valid_tests.rs"]
mod tests;
