// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsers for colon-separated duration text.
//!
//! Both parsers tolerate surrounding whitespace, allow a fractional final
//! field, and run the result through [`normalize`], so out-of-range fields
//! carry upward: `hhmmss("1:62:77")` is `{2, 3, 17}`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::convert::normalize;
use crate::duration::{Duration, LooseDuration};

/// Matches `s`, `m:s` or `h:m:s`. Groups: 1 hours, 2 minutes, 3 seconds.
/// Only the seconds field may carry a fraction.
static HHMMSS: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^\s*(?:(?:([0-9]+):)?([0-9]+):)?([0-9]+(?:\.[0-9]*)?|\.[0-9]+)\s*$")
        .expect("valid regex")
});

/// Matches `m` or `h:m`. Groups: 1 hours, 2 minutes. Only the minutes
/// field may carry a fraction.
static HHMM: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^\s*(?:([0-9]+):)?([0-9]+(?:\.[0-9]*)?|\.[0-9]+)\s*$").expect("valid regex")
});

/// Parse text as hours, minutes and seconds, e.g. `"1:02:20.5"`.
///
/// Omitted leading fields default to zero, so `"5:08"` reads as five
/// minutes eight seconds and `"42"` as forty-two seconds. Returns `None`
/// when the text does not match.
pub fn hhmmss(text: &str) -> Option<Duration> {
    let Some(caps) = HHMMSS.captures(text) else {
        tracing::trace!("unparseable h:m:s duration: {text:?}");
        return None;
    };
    let hours = field(&caps, 1)?;
    let minutes = field(&caps, 2)?;
    let seconds = field(&caps, 3)?;

    Some(normalize(
        LooseDuration::new()
            .hours(hours)
            .minutes(minutes)
            .seconds(seconds),
    ))
}

/// Parse text as hours and minutes, e.g. `"1:30"` or `"90.5"`.
///
/// A lone number reads as minutes. Returns `None` when the text does not
/// match; in particular a seconds field (`"6:5:1"`) is rejected here.
pub fn hhmm(text: &str) -> Option<Duration> {
    let Some(caps) = HHMM.captures(text) else {
        tracing::trace!("unparseable h:m duration: {text:?}");
        return None;
    };
    let hours = field(&caps, 1)?;
    let minutes = field(&caps, 2)?;

    Some(normalize(LooseDuration::new().hours(hours).minutes(minutes)))
}

fn field(caps: &Captures<'_>, index: usize) -> Option<f64> {
    match caps.get(index) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0.0),
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
