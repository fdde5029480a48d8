//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::database::{DatabaseConfig, DEFAULT_DATABASE_FILE};

/// Settings that may come from `bookstock.yaml` or the command line.
///
/// Every field is optional; unset fields fall back to the defaults of
/// [`DatabaseConfig`].
///
/// # Examples
///
/// ```
/// use bookstock::config::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     database: Some(PathBuf::from("inventory.db")),
///     ..Default::default()
/// };
/// assert_eq!(config.database_config().path, PathBuf::from("inventory.db"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the database file.
    pub database: Option<PathBuf>,

    /// How long to wait on a locked database, in milliseconds.
    pub busy_timeout_ms: Option<u64>,
}

impl Config {
    /// Layers explicit overrides on top of this configuration.
    ///
    /// `Some` values replace what was loaded; `None` keeps it.
    #[must_use]
    pub fn with_overrides(self, database: Option<PathBuf>, busy_timeout_ms: Option<u64>) -> Self {
        Self {
            database: database.or(self.database),
            busy_timeout_ms: busy_timeout_ms.or(self.busy_timeout_ms),
        }
    }

    /// Builds the database configuration, filling in defaults.
    #[must_use]
    pub fn database_config(&self) -> DatabaseConfig {
        let path = self
            .database
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_FILE));
        let config = DatabaseConfig::new(path);
        match self.busy_timeout_ms {
            Some(ms) => config.with_busy_timeout(Duration::from_millis(ms)),
            None => config,
        }
    }
}
