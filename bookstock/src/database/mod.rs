//! Database layer for persistent storage of the book catalog.
//!
//! This module provides a SQLite-based storage layer: connection
//! management, idempotent schema setup with seed data, and the CRUD and
//! search operations over the `book` table.
//!
//! # Examples
//!
//! ```no_run
//! use bookstock::database::{Database, DatabaseConfig};
//! use bookstock::Book;
//!
//! // Open a database and make sure the table exists
//! let config = DatabaseConfig::new("/tmp/bookstock.db");
//! let mut db = Database::open(config).unwrap();
//! db.initialize().unwrap();
//!
//! // Add a book
//! let book = Book::new(3006, "Dune", "Frank Herbert", 10).unwrap();
//! db.add(&book).unwrap();
//!
//! // List all books
//! for book in db.list_all().unwrap() {
//!     println!("{book}");
//! }
//! ```

mod config;
mod connection;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

#[cfg(test)]
mod proptests;

// Re-export public API
pub use config::{DatabaseConfig, DEFAULT_DATABASE_FILE};
pub use connection::Database;
