//! Data models for imported meet results
//!
//! This module contains the core data structures for representing imported
//! meets, individual performances, and the persisted store aggregate, along
//! with the slug helpers that derive athlete identity and the display
//! formatter for marks.

use crate::constants::{MISSING_MARK_PLACEHOLDER, STORE_SCHEMA_VERSION};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Marks
// =============================================================================

/// Classification of a result mark
///
/// Times are normalized to total seconds, distances to a numeric reading
/// (meters for feet-inches marks). `Unknown` covers blank cells and
/// non-results such as "DNF" or "NH".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    Time,
    Distance,
    Unknown,
}

// =============================================================================
// Performances and Meets
// =============================================================================

/// One athlete's result in one event at one meet
///
/// The raw mark text is always preserved verbatim for display fallback;
/// `mark_value` is present only when the mark classified as a time or a
/// distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    /// Stable athlete identity slug, derived from first/last/team
    pub athlete_id: String,

    /// Athlete given name
    pub athlete_first: String,

    /// Athlete surname
    pub athlete_last: String,

    /// Event name as it appeared in the CSV, case preserved
    pub event_name: String,

    /// Raw mark text, verbatim
    pub mark_raw: String,

    /// Normalized numeric mark: seconds for times, distance reading for
    /// distances
    pub mark_value: Option<f64>,

    /// Classification of the mark
    pub mark_kind: MarkKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

/// One imported competition
///
/// Immutable after import: a meet is only ever created by a successful
/// import and removed by clearing the store. Performances keep CSV row
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meet {
    /// Generated id: name slug, date digits, and a short uniqueness suffix
    pub id: String,

    /// Display name
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Instant of import, UTC
    pub imported_at: DateTime<Utc>,

    /// Performances in CSV row order
    pub performances: Vec<Performance>,
}

/// User-supplied metadata for one import
#[derive(Debug, Clone, Default)]
pub struct MeetMeta {
    /// Display name for the meet; empty falls back to a default
    pub name: String,
    pub date: Option<String>,
    pub season: Option<String>,
    pub location: Option<String>,
    pub source: Option<String>,
}

// =============================================================================
// Store Aggregate
// =============================================================================

/// The persisted aggregate of all imports
///
/// Meets are kept most-recently-imported first. The version field must
/// equal [`STORE_SCHEMA_VERSION`] or the whole blob is treated as absent
/// when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportStore {
    pub version: u32,
    pub meets: Vec<Meet>,
}

impl ImportStore {
    /// A fresh store with no imports
    pub fn empty() -> Self {
        Self {
            version: STORE_SCHEMA_VERSION,
            meets: Vec::new(),
        }
    }
}

impl Default for ImportStore {
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// Slugs and Identity
// =============================================================================

/// Normalize a value into a lowercase hyphen-separated slug
///
/// Runs of characters outside `[a-z0-9]` collapse to a single hyphen;
/// leading and trailing hyphens are dropped.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;

    for ch in value.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Stable identity slug for an athlete
///
/// Two performances with identical first name, last name, and team collapse
/// into one athlete, across meets and regardless of other attributes. Team
/// is the empty string when absent.
pub fn athlete_id(first: &str, last: &str, team: &str) -> String {
    slugify(&format!("{first}-{last}-{team}"))
}

// =============================================================================
// Display
// =============================================================================

/// Render a mark for display
///
/// The raw text wins when present. Otherwise times render as `m:ss.ss`
/// (bare seconds under a minute), distances as `X.XX m`, and a mark with
/// neither raw text nor value renders as an em-dash placeholder.
pub fn format_mark(mark_raw: &str, mark_value: Option<f64>, mark_kind: MarkKind) -> String {
    if !mark_raw.is_empty() {
        return mark_raw.to_string();
    }

    let Some(value) = mark_value else {
        return MISSING_MARK_PLACEHOLDER.to_string();
    };

    match mark_kind {
        MarkKind::Time => {
            let minutes = (value / 60.0).floor() as u64;
            let seconds = value - minutes as f64 * 60.0;
            if minutes > 0 {
                format!("{minutes}:{seconds:05.2}")
            } else {
                format!("{seconds:.2}")
            }
        }
        MarkKind::Distance | MarkKind::Unknown => format!("{value:.2} m"),
    }
}
