//! Error types for the bookstock library.
//!
//! This module provides the error hierarchy shared by the storage layer,
//! the book model and configuration loading, using `thiserror` for
//! ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a bookstock error.
///
/// # Examples
///
/// ```
/// use bookstock::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(3001)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the bookstock library.
///
/// Storage faults arrive as [`Error::Database`]; malformed book data is
/// reported as [`Error::Validation`].
#[derive(Debug, Error)]
pub enum Error {
    /// A database error occurred.
    ///
    /// This covers constraint violations (duplicate id or title), a missing
    /// `book` table and file-level failures reported by `SQLite`.
    #[error("{0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Returns true if this error is a `SQLite` constraint violation.
    ///
    /// Inserting a book whose id or title is already taken produces one.
    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}
