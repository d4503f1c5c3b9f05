// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Renderers for clock-style and scalar duration text.
//!
//! The clock-style formatters ([`hhmmss`], [`hhmm`], [`mmss`] and their
//! `_fixed` twins) normalize first, then print each field with [`f64`]'s
//! `Display` (shortest decimal that round-trips, no trailing `.0`). Trailing
//! fields are zero-padded to two leading digits, the leading field is not:
//! `{6, 5, 1}` renders as `"6:05:01"`.
//!
//! The `_fixed` variants round the final field to a digit count at render
//! time without re-carrying, so `hhmmss_fixed({seconds: 59.6}, 0)` is
//! `"0:00:60"`, not `"0:01:00"`.
//!
//! The scalar formatters ([`seconds_fixed`], [`minutes_fixed`],
//! [`hours_fixed`]) skip normalization entirely and render one total.

use crate::convert::{normalize, to_hours, to_minutes, to_seconds};
use crate::duration::LooseDuration;

/// Render as `h:mm:ss`, e.g. `"6:05:01"` or `"0:00:12.25"`.
pub fn hhmmss(duration: impl Into<LooseDuration>) -> String {
    let n = normalize(duration);
    format!(
        "{}:{:02}:{}",
        n.hours,
        n.minutes,
        pad2(&n.seconds.to_string())
    )
}

/// Render as `h:mm:ss` with the seconds field rounded to `digits`
/// fractional digits.
pub fn hhmmss_fixed(duration: impl Into<LooseDuration>, digits: usize) -> String {
    let n = normalize(duration);
    format!(
        "{}:{:02}:{}",
        n.hours,
        n.minutes,
        pad2(&to_fixed(n.seconds, digits))
    )
}

/// Render as `h:mm`, folding seconds into the minutes field, e.g.
/// `{0, 3, 21}` becomes `"0:03.35"`.
pub fn hhmm(duration: impl Into<LooseDuration>) -> String {
    let n = normalize(duration);
    let minutes = n.minutes + n.seconds / 60.0;
    format!("{}:{}", n.hours, pad2(&minutes.to_string()))
}

/// Render as `h:mm` with the minutes field rounded to `digits` fractional
/// digits.
pub fn hhmm_fixed(duration: impl Into<LooseDuration>, digits: usize) -> String {
    let n = normalize(duration);
    let minutes = n.minutes + n.seconds / 60.0;
    format!("{}:{}", n.hours, pad2(&to_fixed(minutes, digits)))
}

/// Render as `m:ss`, folding hours into the minutes field, e.g.
/// `{6, 5, 1}` becomes `"365:01"`.
pub fn mmss(duration: impl Into<LooseDuration>) -> String {
    let n = normalize(duration);
    let minutes = n.hours * 60.0 + n.minutes;
    format!("{}:{}", minutes, pad2(&n.seconds.to_string()))
}

/// Render as `m:ss` with the seconds field rounded to `digits` fractional
/// digits.
pub fn mmss_fixed(duration: impl Into<LooseDuration>, digits: usize) -> String {
    let n = normalize(duration);
    let minutes = n.hours * 60.0 + n.minutes;
    format!("{}:{}", minutes, pad2(&to_fixed(n.seconds, digits)))
}

/// Render the total length in seconds to `digits` fractional digits.
pub fn seconds_fixed(duration: impl Into<LooseDuration>, digits: usize) -> String {
    to_fixed(to_seconds(duration), digits)
}

/// Render the total length in minutes to `digits` fractional digits.
pub fn minutes_fixed(duration: impl Into<LooseDuration>, digits: usize) -> String {
    to_fixed(to_minutes(duration), digits)
}

/// Render the total length in hours to `digits` fractional digits.
pub fn hours_fixed(duration: impl Into<LooseDuration>, digits: usize) -> String {
    to_fixed(to_hours(duration), digits)
}

/// Fixed-point rendering with exactly `digits` fractional digits.
///
/// Rounds the value's exact decimal expansion, halfway cases away from
/// zero: `to_fixed(1.25, 1)` is `"1.3"`, `to_fixed(-0.08, 0)` is `"-0"`,
/// and a value just under a half step stays down
/// (`0.94999999999999996` at one digit is `"0.9"`).
fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    // A finite double never has more than 1074 fractional decimal digits,
    // so this rendering is the complete expansion.
    let exact = format!("{:.1074}", value.abs());
    let (whole, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let keep = digits.min(frac.len());
    let mut places: Vec<u8> = whole.bytes().chain(frac.bytes().take(keep)).collect();
    if frac.as_bytes().get(keep).is_some_and(|&next| next >= b'5') {
        round_up(&mut places);
    }
    let point = places.len() - keep;
    let mut text: String = places.iter().map(|&place| char::from(place)).collect();
    if digits > 0 {
        text.insert(point, '.');
        text.push_str(&"0".repeat(digits - keep));
    }
    if value < 0.0 {
        text.insert(0, '-');
    }
    text
}

/// Add one to the last decimal place, carrying through trailing nines.
fn round_up(places: &mut Vec<u8>) {
    for place in places.iter_mut().rev() {
        if *place < b'9' {
            *place += 1;
            return;
        }
        *place = b'0';
    }
    places.insert(0, b'1');
}

/// Zero-pad to two leading digits. Strings already starting with two
/// digits pass through, so `"5.2"` becomes `"05.2"` but `"123"` stays.
fn pad2(value: &str) -> String {
    match value.as_bytes() {
        [a, b, ..] if a.is_ascii_digit() && b.is_ascii_digit() => value.to_string(),
        _ => format!("0{value}"),
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
