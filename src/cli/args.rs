//! Command-line argument definitions for the meet importer
//!
//! This module defines the complete CLI interface using the clap derive
//! API.

use crate::constants::DEFAULT_LEADERBOARD_LIMIT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the meet importer
///
/// Imports CSV exports of track-and-field meet results into a local,
/// versioned results store and derives athlete profiles and per-event
/// leaderboards from the accumulated data.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "meet-importer",
    version,
    about = "Import track-and-field meet results from CSV into a local results store",
    long_about = "Imports CSV exports of track-and-field meet results into a local, \
                  versioned results store, then derives per-athlete profiles and \
                  per-event leaderboards from the accumulated data. Column headers are \
                  matched by synonym, marks are classified as times or distances, and \
                  unusable rows degrade to warnings instead of aborting the import."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Path of the persisted store blob
    ///
    /// Defaults to imports.json under the per-user data directory.
    #[arg(long = "store", value_name = "PATH", global = true)]
    pub store_path: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Suppress progress bars and non-essential logging
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Effective log level for the tracing filter
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Whether interactive progress bars should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Available subcommands for the meet importer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import a CSV of meet results into the store
    Import(ImportArgs),
    /// List imported meets, newest first
    Meets,
    /// Show the athlete directory derived from all imports
    Athletes(AthletesArgs),
    /// Show per-event leaderboards
    Leaderboards(LeaderboardsArgs),
    /// Print store totals: meets, performances, athletes
    Summary,
    /// Remove every imported meet from the store
    Clear,
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// CSV file to import
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Display name for the meet
    ///
    /// Defaults to the file name with its extension dropped and
    /// underscore/hyphen runs turned into spaces.
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Meet date, e.g. 2025-05-17
    #[arg(long = "date", value_name = "DATE")]
    pub date: Option<String>,

    /// Season tag, e.g. "2025 outdoor"
    #[arg(long = "season", value_name = "SEASON")]
    pub season: Option<String>,

    /// Meet location
    #[arg(long = "location", value_name = "LOCATION")]
    pub location: Option<String>,

    /// Tag recording where the CSV came from
    #[arg(long = "source", value_name = "SOURCE")]
    pub source: Option<String>,
}

/// Arguments for the athletes command
#[derive(Debug, Clone, Parser)]
pub struct AthletesArgs {
    /// Show each athlete's full history grouped by event
    #[arg(long = "detailed")]
    pub detailed: bool,
}

/// Arguments for the leaderboards command
#[derive(Debug, Clone, Parser)]
pub struct LeaderboardsArgs {
    /// Entries to keep per event
    #[arg(
        short = 'l',
        long = "limit",
        value_name = "N",
        default_value_t = DEFAULT_LEADERBOARD_LIMIT
    )]
    pub limit: usize,
}
