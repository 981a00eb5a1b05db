//! CSV import pipeline for meet results
//!
//! This module turns raw CSV text plus user-supplied metadata into a
//! structured meet record. The pipeline is organized into logical
//! components:
//! - [`tokenizer`] - raw text to rows of string fields
//! - [`header_map`] - synonym-based column resolution
//! - [`mark`] - mark classification and normalization
//! - [`builder`] - row screening and meet assembly
//! - [`outcome`] - import results and accounting
//!
//! Parsing is best-effort throughout: unusable rows become warnings, a
//! rowless file yields a null meet, and nothing in the pipeline raises an
//! error.
//!
//! ## Usage
//!
//! ```rust
//! use meet_importer::app::services::csv_import::build_meet;
//! use meet_importer::app::models::MeetMeta;
//!
//! let csv = "Event,Mark,First Name,Last Name\n100m,12.84,Jordan,Avery\n";
//! let meta = MeetMeta {
//!     name: "Spring Invitational".to_string(),
//!     ..Default::default()
//! };
//!
//! let outcome = build_meet(csv, &meta, None);
//! assert_eq!(outcome.performances_imported(), 1);
//! assert!(outcome.warnings.is_empty());
//! ```

pub mod builder;
pub mod header_map;
pub mod mark;
pub mod outcome;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::build_meet;
pub use header_map::HeaderMap;
pub use mark::{ParsedMark, parse_mark};
pub use outcome::ImportOutcome;
pub use tokenizer::tokenize;
