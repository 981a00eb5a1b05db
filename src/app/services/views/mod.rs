//! Derived views over the import store
//!
//! Pure folds that rebuild presentation-ready structures from the store on
//! every read. Nothing here is persisted or cached; callers recompute after
//! each snapshot.
//!
//! Fold order is pinned for every view: meets in store order (newest import
//! first), then CSV row order within each meet. All sorts are stable, so
//! ties keep that fold order.

pub mod athletes;
pub mod leaderboards;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use athletes::{AthleteEntry, PerformanceSummary, athlete_directory, group_by_event};
pub use leaderboards::{Leaderboard, LeaderboardEntry, build_leaderboards};
