//! Shared fixtures for derived-view tests


use chrono::Utc;

use crate::app::models::{ImportStore, MarkKind, Meet, Performance, athlete_id};

/// Build a performance with the common fields filled in
pub fn performance(
    first: &str,
    last: &str,
    team: &str,
    event: &str,
    mark_raw: &str,
    mark_value: Option<f64>,
    mark_kind: MarkKind,
) -> Performance {
    Performance {
        athlete_id: athlete_id(first, last, team),
        athlete_first: first.to_string(),
        athlete_last: last.to_string(),
        event_name: event.to_string(),
        mark_raw: mark_raw.to_string(),
        mark_value,
        mark_kind,
        gender: None,
        grade: None,
        team: if team.is_empty() {
            None
        } else {
            Some(team.to_string())
        },
    }
}

/// Build a meet with the given performances
pub fn meet(name: &str, date: Option<&str>, performances: Vec<Performance>) -> Meet {
    Meet {
        id: format!("{}-test", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        date: date.map(str::to_string),
        location: None,
        season: None,
        source: None,
        imported_at: Utc::now(),
        performances,
    }
}

/// Build a store whose meets are already in newest-first order
pub fn store_with(meets: Vec<Meet>) -> ImportStore {
    let mut store = ImportStore::empty();
    store.meets = meets;
    store
}
