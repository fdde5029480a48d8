//! Configuration for the bookstock catalog.
//!
//! An optional `bookstock.yaml` in the working directory can choose the
//! database file and busy timeout. Command-line overrides are layered on
//! top, and built-in defaults fill whatever is left.
//!
//! # Examples
//!
//! ```no_run
//! use bookstock::config::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::load(Path::new(".")).unwrap();
//! let db_config = config.database_config();
//! println!("Database: {}", db_config.path.display());
//! ```

mod loader;
mod schema;

pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use schema::Config;
