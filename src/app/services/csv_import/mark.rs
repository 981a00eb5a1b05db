//! Mark classification and normalization
//!
//! A mark is the raw result string from one CSV cell: "10:32.15", "5.25",
//! "17-6.5", "DNF". Classification is best-effort and never fails; a mark
//! that cannot be read numerically keeps its raw text and a null value.

use crate::app::models::MarkKind;
use crate::constants::METERS_PER_INCH;
use regex::Regex;
use std::sync::OnceLock;

/// A classified mark with its normalized numeric value
///
/// `value` is total seconds for times and the numeric reading for
/// distances (feet-inches marks are converted to meters). It is `None`
/// whenever no number could be extracted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedMark {
    pub value: Option<f64>,
    pub kind: MarkKind,
}

/// Whole-string feet-inches pattern: `17-6.5` or `17'6.5`
fn feet_inches_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+)[-'](\d+(?:\.\d+)?)$").expect("feet-inches pattern is valid")
    })
}

/// Classify a raw mark string and extract its numeric value
///
/// Decision order:
/// 1. Blank input is `Unknown` with no value.
/// 2. Anything containing a colon is a clock time; a time whose segments
///    cannot all be read still reports kind `Time` with no value.
/// 3. Otherwise a token with digits and no hyphen reads as a plain
///    distance after stripping everything but digits and dots.
/// 4. Otherwise a whole-string feet-inches token converts to meters.
/// 5. Everything else is `Unknown` with no value.
pub fn parse_mark(raw: &str) -> ParsedMark {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return ParsedMark {
            value: None,
            kind: MarkKind::Unknown,
        };
    }

    if cleaned.contains(':') {
        return ParsedMark {
            value: parse_clock_time(cleaned),
            kind: MarkKind::Time,
        };
    }

    // A hyphen anywhere disqualifies the plain-number path, keeping
    // negative-looking and range-like tokens out of it.
    let digits_only: String = cleaned
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    if let Ok(numeric) = digits_only.parse::<f64>() {
        if cleaned.chars().any(|ch| ch.is_ascii_digit()) && !cleaned.contains('-') {
            return ParsedMark {
                value: Some(numeric),
                kind: MarkKind::Distance,
            };
        }
    }

    if let Some(meters) = parse_feet_inches(cleaned) {
        return ParsedMark {
            value: Some(meters),
            kind: MarkKind::Distance,
        };
    }

    ParsedMark {
        value: None,
        kind: MarkKind::Unknown,
    }
}

/// Convert `mm:ss` or `hh:mm:ss` to total seconds
///
/// Any non-numeric segment or unsupported segment count yields `None`.
fn parse_clock_time(value: &str) -> Option<f64> {
    let parts: Vec<f64> = value
        .split(':')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;

    match parts.as_slice() {
        [hours, minutes, seconds] => Some(hours * 3600.0 + minutes * 60.0 + seconds),
        [minutes, seconds] => Some(minutes * 60.0 + seconds),
        _ => None,
    }
}

/// Convert a feet-inches mark like "17-6.5" to meters
fn parse_feet_inches(value: &str) -> Option<f64> {
    let captures = feet_inches_pattern().captures(value)?;
    let feet: f64 = captures.get(1)?.as_str().parse().ok()?;
    let inches: f64 = captures.get(2)?.as_str().parse().ok()?;
    Some((feet * 12.0 + inches) * METERS_PER_INCH)
}
