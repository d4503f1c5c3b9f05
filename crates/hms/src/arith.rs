// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Arithmetic and rounding over durations.
//!
//! Addition, subtraction and scaling all go through total seconds and come
//! back through [`from_seconds`], so results are always canonical. Rounding
//! is half away from zero in the unit being rounded: [`round_to_minutes`]
//! works in minute space and rebuilds with [`from_minutes`], which keeps
//! the truncate-style carry of that constructor.

use crate::convert::{from_hours, from_minutes, from_seconds, to_hours, to_minutes, to_seconds};
use crate::duration::{Duration, LooseDuration};

/// Sum of two durations.
pub fn add(a: impl Into<LooseDuration>, b: impl Into<LooseDuration>) -> Duration {
    from_seconds(to_seconds(a) + to_seconds(b))
}

/// Difference of two durations. May go negative, in which case the hours
/// field carries the sign: `{0, 0, 10} - {0, 0, 15}` is `{-1, 59, 55}`.
pub fn subtract(a: impl Into<LooseDuration>, b: impl Into<LooseDuration>) -> Duration {
    from_seconds(to_seconds(a) - to_seconds(b))
}

/// Scale a duration by a factor.
pub fn multiply(duration: impl Into<LooseDuration>, factor: f64) -> Duration {
    from_seconds(to_seconds(duration) * factor)
}

/// Divide a duration by a divisor. Dividing by zero yields non-finite
/// fields, which [`crate::is_valid`] reports as invalid.
pub fn divide(duration: impl Into<LooseDuration>, divisor: f64) -> Duration {
    from_seconds(to_seconds(duration) / divisor)
}

/// Round to the nearest whole second, ties away from zero.
pub fn round_to_second(duration: impl Into<LooseDuration>) -> Duration {
    round_to_seconds(duration, 1.0)
}

/// Round to the nearest multiple of `seconds`, e.g. a step of `15.0`
/// snaps to quarter-minute boundaries.
pub fn round_to_seconds(duration: impl Into<LooseDuration>, seconds: f64) -> Duration {
    from_seconds((to_seconds(duration) / seconds).round() * seconds)
}

/// Round to the nearest whole minute, ties away from zero.
pub fn round_to_minute(duration: impl Into<LooseDuration>) -> Duration {
    round_to_minutes(duration, 1.0)
}

/// Round to the nearest multiple of `minutes` in minute space:
/// `{0, 15, 1}` at a step of `10.0` snaps up to `{0, 20, 0}`.
pub fn round_to_minutes(duration: impl Into<LooseDuration>, minutes: f64) -> Duration {
    from_minutes((to_minutes(duration) / minutes).round() * minutes)
}

/// Round to the nearest whole hour, ties away from zero.
pub fn round_to_hour(duration: impl Into<LooseDuration>) -> Duration {
    round_to_hours(duration, 1.0)
}

/// Round to the nearest multiple of `hours` in hour space.
pub fn round_to_hours(duration: impl Into<LooseDuration>, hours: f64) -> Duration {
    from_hours((to_hours(duration) / hours).round() * hours)
}

#[cfg(test)]
#[path = "arith_tests.rs"]
mod tests;
