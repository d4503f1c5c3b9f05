//! Parser acceptance and rejection tables.
//!
//! Both grammars share the trailing `seconds` field shape (`12`, `12.`,
//! `.5`) and both normalize, so oversized fields carry upward instead of
//! failing. Only the trailing field may be fractional.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;
use hms::parse;

#[test]
fn hhmmss_rejects_malformed_text() {
    let cases = [
        ("", "empty"),
        (":", "lone separator"),
        ("::", "two separators"),
        (":1.2", "empty leading group"),
        ("::2", "empty middle groups"),
    ];
    for (text, desc) in cases {
        assert_eq!(parse::hhmmss(text), None, "{desc}: {text:?}");
    }
}

#[test]
fn hhmmss_accepts_one_to_three_groups() {
    let cases = [
        ("0", dur(0.0, 0.0, 0.0)),
        ("0.1", dur(0.0, 0.0, 0.1)),
        ("1.2", dur(0.0, 0.0, 1.2)),
        ("2", dur(0.0, 0.0, 2.0)),
        ("0:13", dur(0.0, 0.0, 13.0)),
        ("3:22.5", dur(0.0, 3.0, 22.5)),
        ("3:2.5", dur(0.0, 3.0, 2.5)),
        ("6:5:1", dur(6.0, 5.0, 1.0)),
        ("1:48:23.25", dur(1.0, 48.0, 23.25)),
    ];
    for (text, expected) in cases {
        match parse::hhmmss(text) {
            Some(parsed) => assert_same(parsed, expected),
            None => panic!("expected {text:?} to parse"),
        }
    }
}

#[test]
fn hhmmss_normalizes_oversized_fields() {
    assert_eq!(parse::hhmmss("1:62:77"), Some(dur(2.0, 3.0, 17.0)));
    assert_eq!(parse::hhmmss("62:77"), Some(dur(1.0, 3.0, 17.0)));
}

#[test]
fn hhmmss_ignores_surrounding_whitespace() {
    assert_eq!(parse::hhmmss("  42  "), Some(dur(0.0, 0.0, 42.0)));
    assert_eq!(parse::hhmmss("\t1:30\n"), Some(dur(0.0, 1.0, 30.0)));
}

#[test]
fn hhmm_rejects_malformed_text() {
    let cases = [
        ("", "empty"),
        (":", "lone separator"),
        ("::", "two separators"),
        (":1.2", "empty leading group"),
        ("::2", "empty middle groups"),
        ("6:5:1", "three groups"),
    ];
    for (text, desc) in cases {
        assert_eq!(parse::hhmm(text), None, "{desc}: {text:?}");
    }
}

#[test]
fn hhmm_reads_the_trailing_group_as_minutes() {
    let cases = [
        ("0", dur(0.0, 0.0, 0.0)),
        ("0.25", dur(0.0, 0.0, 15.0)),
        ("1.5", dur(0.0, 1.0, 30.0)),
        ("2", dur(0.0, 2.0, 0.0)),
        ("0:13", dur(0.0, 13.0, 0.0)),
        ("3:22.5", dur(3.0, 22.0, 30.0)),
        ("3:2.5", dur(3.0, 2.0, 30.0)),
    ];
    for (text, expected) in cases {
        match parse::hhmm(text) {
            Some(parsed) => assert_same(parsed, expected),
            None => panic!("expected {text:?} to parse"),
        }
    }
}

#[test]
fn hhmm_normalizes_oversized_fields() {
    assert_eq!(parse::hhmm("62:77"), Some(dur(63.0, 17.0, 0.0)));
}
