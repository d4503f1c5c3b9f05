// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The duration value model.
//!
//! [`Duration`] is the canonical (hours, minutes, seconds) triple produced
//! by the conversion functions; [`LooseDuration`] is its partial
//! counterpart, in which every field is optional and an absent field reads
//! as zero.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A length of time broken into hours, minutes and seconds.
///
/// All fields are `f64`; `seconds` routinely carries a fractional part.
/// Canonical form (minutes and seconds within `[0, 60)`) is a convention
/// established by the construction path ([`crate::from_seconds`] and
/// friends), not something the type enforces. A triple built by hand may
/// hold any values; [`crate::normalize`] folds it back down.
///
/// Durations are plain `Copy` values: never mutated in place, every
/// operation returns a new one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Duration {
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Duration {
    /// The zero-length duration.
    pub const ZERO: Duration = Duration {
        hours: 0.0,
        minutes: 0.0,
        seconds: 0.0,
    };

    /// Build a duration from explicit field values, unchecked.
    pub const fn new(hours: f64, minutes: f64, seconds: f64) -> Self {
        Duration {
            hours,
            minutes,
            seconds,
        }
    }
}

/// Renders the normalized `H:MM:SS` form, same as [`crate::format::hhmmss`].
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::hhmmss(*self))
    }
}

/// A duration with each field optional; a missing field reads as zero.
///
/// Nearly every operation in the crate takes `impl Into<LooseDuration>`, so
/// callers can pass a partial value ("just 90 seconds") or a full
/// [`Duration`] interchangeably:
///
/// ```
/// use hms::{LooseDuration, to_seconds};
///
/// let d = LooseDuration::new().minutes(1.0).seconds(30.0);
/// assert_eq!(to_seconds(d), 90.0);
/// ```
///
/// In JSON, absent fields are simply omitted: `{"minutes":1.5}` round-trips
/// to a loose duration with only `minutes` set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LooseDuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<f64>,
}

impl LooseDuration {
    /// A loose duration with no fields set.
    pub const fn new() -> Self {
        LooseDuration {
            hours: None,
            minutes: None,
            seconds: None,
        }
    }

    /// Set the hours field.
    pub fn hours(mut self, hours: f64) -> Self {
        self.hours = Some(hours);
        self
    }

    /// Set the minutes field.
    pub fn minutes(mut self, minutes: f64) -> Self {
        self.minutes = Some(minutes);
        self
    }

    /// Set the seconds field.
    pub fn seconds(mut self, seconds: f64) -> Self {
        self.seconds = Some(seconds);
        self
    }
}

impl From<Duration> for LooseDuration {
    fn from(duration: Duration) -> Self {
        LooseDuration {
            hours: Some(duration.hours),
            minutes: Some(duration.minutes),
            seconds: Some(duration.seconds),
        }
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
