//! Meet construction from raw CSV text
//!
//! Orchestrates the tokenizer, header mapper, and mark parser to turn CSV
//! text plus user-supplied metadata into a meet record. There are no error
//! paths here: unusable rows degrade to warnings and the worst outcome is a
//! meet with no performances, which callers treat as a failed import.

use chrono::Utc;
use indicatif::ProgressBar;
use tracing::{debug, info};

use super::header_map::HeaderMap;
use super::mark::parse_mark;
use super::outcome::ImportOutcome;
use super::tokenizer::tokenize;
use crate::app::models::{Meet, MeetMeta, Performance, athlete_id, slugify};
use crate::constants::{DEFAULT_MEET_NAME, DEFAULT_MEET_SLUG};

/// Build a meet record from raw CSV text and metadata
///
/// The first row is taken as headers and mapped once; every following row
/// is a data row. A row missing its event, result, or athlete name (after
/// the combined-name fallback) is skipped with a warning citing its
/// 1-based spreadsheet row number. The optional progress bar is sized to
/// the data row count and advanced once per row.
pub fn build_meet(text: &str, meta: &MeetMeta, progress: Option<&ProgressBar>) -> ImportOutcome {
    let rows = tokenize(text);
    let mut warnings = Vec::new();

    if rows.is_empty() {
        warnings.push("No rows found in the CSV.".to_string());
        return ImportOutcome {
            meet: None,
            warnings,
            total_rows: 0,
        };
    }

    let mapping = HeaderMap::detect(&rows[0]);
    debug!("Resolved header mapping: {:?}", mapping);

    let data_rows = &rows[1..];
    let total_rows = data_rows.len();

    if let Some(pb) = progress {
        pb.set_length(total_rows as u64);
    }

    let mut performances = Vec::new();

    for (index, row) in data_rows.iter().enumerate() {
        if let Some(pb) = progress {
            pb.inc(1);
        }

        let event_name = cell(row, mapping.event).trim();
        let mark_raw = cell(row, mapping.result).trim();

        let mut first = cell(row, mapping.first).trim().to_string();
        let mut last = cell(row, mapping.last).trim().to_string();

        if (first.is_empty() || last.is_empty()) && mapping.name.is_some() {
            let (combined_first, combined_last) = split_athlete_name(cell(row, mapping.name));
            if first.is_empty() {
                first = combined_first;
            }
            if last.is_empty() {
                last = combined_last;
            }
        }

        if event_name.is_empty() || mark_raw.is_empty() || first.is_empty() || last.is_empty() {
            // Row numbers are 1-based and offset past the header row.
            warnings.push(format!(
                "Skipped row {}: missing event, athlete, or result.",
                index + 2
            ));
            continue;
        }

        let mark = parse_mark(mark_raw);
        let team = cell(row, mapping.team).trim();

        performances.push(Performance {
            athlete_id: athlete_id(&first, &last, team),
            athlete_first: first,
            athlete_last: last,
            event_name: event_name.to_string(),
            mark_raw: mark_raw.to_string(),
            mark_value: mark.value,
            mark_kind: mark.kind,
            gender: non_empty(cell(row, mapping.gender).trim()),
            grade: non_empty(cell(row, mapping.grade).trim()),
            team: non_empty(team),
        });
    }

    if performances.is_empty() {
        warnings.push("No usable performances were found in the CSV.".to_string());
    }

    info!(
        "Built meet '{}': {} of {} data rows usable, {} warnings",
        meta.name,
        performances.len(),
        total_rows,
        warnings.len()
    );

    let now = Utc::now();
    let meet = Meet {
        id: meet_id(meta, now.timestamp_millis()),
        name: if meta.name.is_empty() {
            DEFAULT_MEET_NAME.to_string()
        } else {
            meta.name.clone()
        },
        date: meta.date.clone().filter(|date| !date.is_empty()),
        location: meta.location.clone().filter(|location| !location.is_empty()),
        season: meta.season.clone().filter(|season| !season.is_empty()),
        source: meta.source.clone().filter(|source| !source.is_empty()),
        imported_at: now,
        performances,
    };

    ImportOutcome {
        meet: Some(meet),
        warnings,
        total_rows,
    }
}

/// Read a mapped column from a row, tolerating short rows and unmapped slots
fn cell<'a>(row: &'a [String], index: Option<usize>) -> &'a str {
    index
        .and_then(|i| row.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

/// Wrap a trimmed value in `Some` unless it is empty
fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Split a combined name cell into (first, last)
///
/// A comma-containing value splits as "Last, First"; otherwise the final
/// whitespace token is the surname and everything before it the given
/// name. Suffixes and multi-word surnames are not special-cased.
fn split_athlete_name(value: &str) -> (String, String) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return (String::new(), String::new());
    }

    if trimmed.contains(',') {
        let mut segments = trimmed.split(',').map(str::trim);
        let last = segments.next().unwrap_or("").to_string();
        let first = segments.next().unwrap_or("").to_string();
        return (first, last);
    }

    let mut parts: Vec<&str> = trimmed.split_whitespace().collect();
    let last = parts.pop().unwrap_or("").to_string();
    (parts.join(" "), last)
}

/// Generate a meet id: name slug, date digits, and a short time-derived
/// uniqueness suffix
fn meet_id(meta: &MeetMeta, now_millis: i64) -> String {
    let base = slugify(if meta.name.is_empty() {
        DEFAULT_MEET_SLUG
    } else {
        meta.name.as_str()
    });

    let date_tag = match &meta.date {
        Some(date) if !date.is_empty() => date.chars().filter(|ch| ch.is_ascii_digit()).collect(),
        _ => "undated".to_string(),
    };

    let encoded = encode_base36(now_millis.unsigned_abs());
    let suffix = &encoded[encoded.len().saturating_sub(4)..];

    format!("{base}-{date_tag}-{suffix}")
}

/// Encode a value in lowercase base 36
fn encode_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = String::new();
    while value > 0 {
        out.insert(0, DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    out
}
