//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that run the menu with scripted input

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// The binary runs with this directory as its working directory, so the
/// default database file and any `bookstock.yaml` land inside it.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running in the test directory.
    ///
    /// Inherited `BOOKSTOCK_*` variables are cleared so the host
    /// environment cannot leak into the test.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("bookstock").expect("Failed to find bookstock binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("BOOKSTOCK_DATABASE")
            .env_remove("BOOKSTOCK_BUSY_TIMEOUT")
            .env_remove("BOOKSTOCK_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the database file used when nothing overrides it.
    pub fn default_database(&self) -> PathBuf {
        self.temp_path.join("small_bookstore_stock.db")
    }

    /// Write a `bookstock.yaml` into the test directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.temp_path.join("bookstock.yaml"), contents)
            .expect("Failed to write config");
    }

    /// Run the menu with the given input lines and return stdout.
    ///
    /// # Panics
    /// Panics if the process exits unsuccessfully.
    pub fn session(&self, input: &str) -> String {
        let output = self
            .command()
            .write_stdin(input)
            .output()
            .expect("Failed to run bookstock");

        assert!(
            output.status.success(),
            "bookstock failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Count the rows in a database file directly.
    pub fn count_books(path: &Path) -> i64 {
        let conn = rusqlite::Connection::open(path).expect("Failed to open database");
        conn.query_row("SELECT COUNT(*) FROM book", [], |row| row.get(0))
            .expect("Failed to count books")
    }
}
