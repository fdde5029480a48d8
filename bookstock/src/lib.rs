#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # bookstock
//!
//! A library for managing a small bookstore catalog stored in `SQLite`.
//!
//! This library provides the book model, the storage layer over the
//! single `book` table, and the configuration and logging used by the
//! interactive `bookstock` CLI.
//!
//! ## Core Types
//!
//! - [`Book`]: One catalog record
//! - [`Database`] and [`DatabaseConfig`]: Storage and its connection settings
//! - [`Config`] and [`ConfigLoader`]: Optional `bookstock.yaml` settings
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use bookstock::{Book, Database, DatabaseConfig};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/bookstock.db")).unwrap();
//! db.initialize().unwrap();
//!
//! db.add(&Book::new(3006, "Dune", "Frank Herbert", 10).unwrap()).unwrap();
//! for book in db.search("Lewis").unwrap() {
//!     println!("{book}");
//! }
//! ```

pub mod book;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;

// Re-export key types at crate root for convenience
pub use book::{seed_books, Book, MAX_QTY, SEED_BOOKS};
pub use config::{Config, ConfigLoader};
pub use database::{Database, DatabaseConfig, DEFAULT_DATABASE_FILE};
pub use error::{Error, Result};
pub use logging::{init_logger, resolve_log_level, LogLevel, Logger};
