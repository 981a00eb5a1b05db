//! Header-to-field resolution via synonym lists
//!
//! Results exports name their columns inconsistently ("Mark", "Final Mark",
//! "RESULT", "time"). This module normalizes each header and resolves it
//! against fixed synonym tables, so column order in the CSV is arbitrary.

use crate::constants::header_synonyms;

/// Resolved column indexes for the semantic CSV fields
///
/// Each slot holds the zero-based index of the first header whose
/// normalized form matches one of that field's synonyms, or `None` when no
/// header matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    pub event: Option<usize>,
    pub result: Option<usize>,
    pub first: Option<usize>,
    pub last: Option<usize>,
    pub name: Option<usize>,
    pub gender: Option<usize>,
    pub grade: Option<usize>,
    pub team: Option<usize>,
}

impl HeaderMap {
    /// Resolve a header row against the synonym tables
    ///
    /// First match in column order wins; there is no scoring or
    /// disambiguation beyond that.
    pub fn detect(headers: &[String]) -> Self {
        let normalized: Vec<String> = headers
            .iter()
            .map(|header| normalize_header(header))
            .collect();

        let find = |synonyms: &[&str]| {
            normalized
                .iter()
                .position(|header| synonyms.contains(&header.as_str()))
        };

        Self {
            event: find(header_synonyms::EVENT),
            result: find(header_synonyms::RESULT),
            first: find(header_synonyms::FIRST),
            last: find(header_synonyms::LAST),
            name: find(header_synonyms::NAME),
            gender: find(header_synonyms::GENDER),
            grade: find(header_synonyms::GRADE),
            team: find(header_synonyms::TEAM),
        }
    }
}

/// Lowercase a header and strip every character outside `[a-z0-9]`
fn normalize_header(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .collect()
}
