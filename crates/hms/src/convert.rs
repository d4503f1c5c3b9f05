// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scalar conversions and normalization.
//!
//! Everything reduces to the identity `total = hours*3600 + minutes*60 +
//! seconds`, with absent fields read as zero. The three `from_*` directions
//! do not share one carry convention:
//!
//! - [`from_seconds`] distributes with `floor`, so a negative total becomes
//!   a negative hours field with minutes and seconds still in `[0, 60)`:
//!   `from_seconds(-5.0)` is `{-1, 59, 55}`.
//! - [`from_minutes`] and [`from_hours`] truncate toward zero instead, so a
//!   negative total leaves every field non-positive: `from_minutes(-0.5)`
//!   is `{-0, -0, -30}`.
//!
//! Both conventions are part of the contract and must not be unified.

use crate::duration::{Duration, LooseDuration};

/// Total length in seconds: `hours*3600 + minutes*60 + seconds`.
pub fn to_seconds(duration: impl Into<LooseDuration>) -> f64 {
    let d = duration.into();
    let hours = d.hours.unwrap_or(0.0);
    let minutes = d.minutes.unwrap_or(0.0);
    let seconds = d.seconds.unwrap_or(0.0);

    hours * 3600.0 + minutes * 60.0 + seconds
}

/// Break a second count into the canonical triple (floor convention).
pub fn from_seconds(seconds: f64) -> Duration {
    let hours = (seconds / 3600.0).floor();
    let seconds = seconds - hours * 3600.0;
    let minutes = (seconds / 60.0).floor();
    let seconds = seconds - minutes * 60.0;

    Duration {
        hours,
        minutes,
        seconds,
    }
}

/// Total length in minutes: `hours*60 + minutes + seconds/60`.
pub fn to_minutes(duration: impl Into<LooseDuration>) -> f64 {
    let d = duration.into();
    let hours = d.hours.unwrap_or(0.0);
    let minutes = d.minutes.unwrap_or(0.0);
    let seconds = d.seconds.unwrap_or(0.0);

    hours * 60.0 + minutes + seconds / 60.0
}

/// Break a minute count into a triple (truncate convention).
///
/// The fractional part of `minutes` spills into seconds with the sign of
/// the input preserved (`%` keeps the dividend's sign).
pub fn from_minutes(minutes: f64) -> Duration {
    let hours = (minutes / 60.0).trunc();
    let seconds = (minutes % 1.0) * 60.0;
    let minutes = (minutes - hours * 60.0).trunc();

    Duration {
        hours,
        minutes,
        seconds,
    }
}

/// Total length in hours: `hours + minutes/60 + seconds/3600`.
pub fn to_hours(duration: impl Into<LooseDuration>) -> f64 {
    let d = duration.into();
    let hours = d.hours.unwrap_or(0.0);
    let minutes = d.minutes.unwrap_or(0.0);
    let seconds = d.seconds.unwrap_or(0.0);

    hours + minutes / 60.0 + seconds / 3600.0
}

/// Break an hour count into a triple (truncate convention, applied at each
/// level: hours first, then the minute remainder, seconds absorb the rest).
pub fn from_hours(hours: f64) -> Duration {
    let truncated_hours = hours.trunc();
    let minutes = (hours - truncated_hours) * 60.0;
    let truncated_minutes = minutes.trunc();
    let seconds = (minutes - truncated_minutes) * 60.0;

    Duration {
        hours: truncated_hours,
        minutes: truncated_minutes,
        seconds,
    }
}

/// Fold a loose duration into canonical form.
///
/// Always the floor/seconds path: `from_seconds(to_seconds(duration))`.
pub fn normalize(duration: impl Into<LooseDuration>) -> Duration {
    from_seconds(to_seconds(duration))
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
