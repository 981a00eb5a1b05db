//! Configuration management and validation.
//!
//! Provides the runtime configuration for the importer: where the persisted
//! store blob lives and how many entries each leaderboard keeps.

use crate::constants::{APP_DIR_NAME, DEFAULT_LEADERBOARD_LIMIT, STORE_FILE_NAME};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Runtime configuration for the meet importer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the persisted store blob
    pub store_path: PathBuf,

    /// Number of entries kept per event leaderboard
    pub leaderboard_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: Self::default_store_path(),
            leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
        }
    }
}

impl Config {
    /// Build a configuration from optional overrides, falling back to
    /// defaults for anything not supplied
    pub fn new(store_path: Option<PathBuf>, leaderboard_limit: Option<usize>) -> Self {
        let config = Self {
            store_path: store_path.unwrap_or_else(Self::default_store_path),
            leaderboard_limit: leaderboard_limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT),
        };
        debug!("Resolved configuration: {:?}", config);
        config
    }

    /// Default store location under the per-user data directory
    ///
    /// Falls back to the current directory when no data directory can be
    /// resolved for the platform.
    pub fn default_store_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(STORE_FILE_NAME)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.leaderboard_limit == 0 {
            return Err(Error::configuration(
                "Leaderboard limit must be at least 1",
            ));
        }

        if self.store_path.file_name().is_none() {
            return Err(Error::configuration(format!(
                "Store path has no file name: {}",
                self.store_path.display()
            )));
        }

        Ok(())
    }
}
