//! Meet Importer Library
//!
//! A Rust library for importing track-and-field meet results from CSV text
//! into a local, versioned results store, with derived athlete profiles and
//! per-event leaderboards.
//!
//! This library provides tools for:
//! - Tokenizing raw CSV text with quote and line-ending handling
//! - Resolving arbitrary column headers to semantic fields via synonym lists
//! - Classifying and normalizing marks (clock times vs. distances)
//! - Building meet records with per-row warnings for unusable data
//! - Persisting imports as a versioned JSON store with defensive recovery
//! - Folding the store into an athlete directory and event leaderboards

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_import;
        pub mod import_store;
        pub mod snapshot_bus;
        pub mod views;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ImportStore, MarkKind, Meet, MeetMeta, Performance};
pub use config::Config;

/// Result type alias for the meet importer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for meet import operations
///
/// Only genuinely fatal conditions are errors: an unreadable input file, an
/// unwritable store, or invalid configuration. Data defects degrade to
/// per-row warnings and a corrupted store blob is treated as empty, so
/// neither ever surfaces here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Store blob could not be encoded for writing
    #[error("Store encoding error: {message}")]
    StoreEncoding {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::other(message_str),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a store encoding error with context
    pub fn store_encoding(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::StoreEncoding {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::StoreEncoding {
            message: "Store serialization failed".to_string(),
            source: error,
        }
    }
}
