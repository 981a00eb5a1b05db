//! Import outcome and accounting for meet builds
//!
//! This module provides the result structure handed back by the meet
//! builder: the built meet (when the CSV had any rows at all), the
//! human-readable warnings collected along the way, and row accounting.

use crate::app::models::Meet;

/// Result of building a meet from CSV text
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    /// The built meet, or `None` when the CSV had no rows at all
    pub meet: Option<Meet>,

    /// Human-readable warnings for rows that could not be used
    pub warnings: Vec<String>,

    /// Number of data rows after the header
    pub total_rows: usize,
}

impl ImportOutcome {
    /// Number of performances that survived row screening
    pub fn performances_imported(&self) -> usize {
        self.meet
            .as_ref()
            .map(|meet| meet.performances.len())
            .unwrap_or(0)
    }

    /// Whether the import produced anything worth persisting
    pub fn is_usable(&self) -> bool {
        self.performances_imported() > 0
    }

    /// Share of data rows that produced a performance, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.performances_imported() as f64 / self.total_rows as f64) * 100.0
        }
    }
}
