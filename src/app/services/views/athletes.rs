//! Athlete directory derived from the import store
//!
//! Folds every performance across every meet into per-athlete entries.
//! Identity is the derived athlete slug, so the same name on the same team
//! collapses into one entry across meets.

use std::collections::HashMap;

use serde::Serialize;

use crate::app::models::{ImportStore, MarkKind};

/// One athlete's directory entry with accumulated performances
#[derive(Debug, Clone, Serialize)]
pub struct AthleteEntry {
    /// Derived identity slug
    pub id: String,

    pub first: String,
    pub last: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,

    /// Accumulated performances in fold order
    pub performances: Vec<PerformanceSummary>,
}

/// A performance as carried on directory and profile views
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceSummary {
    pub meet_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meet_date: Option<String>,

    pub event_name: String,
    pub mark_raw: String,
    pub mark_value: Option<f64>,
    pub mark_kind: MarkKind,
}

/// Fold the store into a surname-sorted athlete directory
///
/// The first performance seen for an identity seeds the entry's name,
/// gender, grade, and team; later performances only extend the history.
/// Output is sorted by surname ascending, case-insensitively; surname ties
/// keep fold order.
pub fn athlete_directory(store: &ImportStore) -> Vec<AthleteEntry> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<AthleteEntry> = Vec::new();

    for meet in &store.meets {
        for performance in &meet.performances {
            let slot = *index
                .entry(performance.athlete_id.as_str())
                .or_insert_with(|| {
                    entries.push(AthleteEntry {
                        id: performance.athlete_id.clone(),
                        first: performance.athlete_first.clone(),
                        last: performance.athlete_last.clone(),
                        gender: performance.gender.clone(),
                        grade: performance.grade.clone(),
                        team: performance.team.clone(),
                        performances: Vec::new(),
                    });
                    entries.len() - 1
                });

            entries[slot].performances.push(PerformanceSummary {
                meet_name: meet.name.clone(),
                meet_date: meet.date.clone(),
                event_name: performance.event_name.clone(),
                mark_raw: performance.mark_raw.clone(),
                mark_value: performance.mark_value,
                mark_kind: performance.mark_kind,
            });
        }
    }

    entries.sort_by(|a, b| a.last.to_lowercase().cmp(&b.last.to_lowercase()));
    entries
}

/// Group one athlete's performances by event for profile display
///
/// Events come back sorted by name; within an event, entries are ordered
/// by meet date with undated meets first.
pub fn group_by_event(entry: &AthleteEntry) -> Vec<(String, Vec<PerformanceSummary>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<PerformanceSummary>)> = Vec::new();

    for performance in &entry.performances {
        let slot = *index
            .entry(performance.event_name.as_str())
            .or_insert_with(|| {
                groups.push((performance.event_name.clone(), Vec::new()));
                groups.len() - 1
            });
        groups[slot].1.push(performance.clone());
    }

    for (_, performances) in &mut groups {
        performances.sort_by(|a, b| a.meet_date.cmp(&b.meet_date));
    }
    groups.sort_by(|a, b| a.0.cmp(&b.0));

    groups
}
