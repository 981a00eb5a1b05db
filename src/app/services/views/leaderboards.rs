//! Per-event leaderboards derived from the import store
//!
//! Folds performances by event name and ranks them direction-aware: lower
//! is better for times, higher is better for distances.

use std::collections::HashMap;

use serde::Serialize;

use crate::app::models::{ImportStore, MarkKind};

/// Ranked entries for one event
#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    pub event_name: String,

    /// Ranking direction source: the kind of the first performance folded
    /// for this event
    pub kind: MarkKind,

    /// Entries ranked best-first, truncated to the requested limit
    pub entries: Vec<LeaderboardEntry>,
}

/// One ranked performance on a leaderboard
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    /// "First Last" display name
    pub athlete_name: String,

    pub meet_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meet_date: Option<String>,

    pub mark_raw: String,

    /// Normalized mark; performances without one never reach a board
    pub mark_value: f64,

    pub mark_kind: MarkKind,
}

/// Fold the store into per-event leaderboards
///
/// Events come back in first-seen fold order. Within an event,
/// performances without a numeric value are dropped, the rest are ranked
/// ascending for time events and descending for distance events, and the
/// result is truncated to `limit`. Ties keep fold order (stable sort).
pub fn build_leaderboards(store: &ImportStore, limit: usize) -> Vec<Leaderboard> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut boards: Vec<Leaderboard> = Vec::new();

    for meet in &store.meets {
        for performance in &meet.performances {
            let slot = *index
                .entry(performance.event_name.as_str())
                .or_insert_with(|| {
                    boards.push(Leaderboard {
                        event_name: performance.event_name.clone(),
                        kind: performance.mark_kind,
                        entries: Vec::new(),
                    });
                    boards.len() - 1
                });

            if let Some(value) = performance.mark_value {
                boards[slot].entries.push(LeaderboardEntry {
                    athlete_name: format!(
                        "{} {}",
                        performance.athlete_first, performance.athlete_last
                    ),
                    meet_name: meet.name.clone(),
                    meet_date: meet.date.clone(),
                    mark_raw: performance.mark_raw.clone(),
                    mark_value: value,
                    mark_kind: performance.mark_kind,
                });
            }
        }
    }

    for board in &mut boards {
        match board.kind {
            MarkKind::Distance => board
                .entries
                .sort_by(|a, b| b.mark_value.total_cmp(&a.mark_value)),
            MarkKind::Time | MarkKind::Unknown => board
                .entries
                .sort_by(|a, b| a.mark_value.total_cmp(&b.mark_value)),
        }
        board.entries.truncate(limit);
    }

    boards
}
