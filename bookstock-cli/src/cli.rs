//! CLI structure and option definitions.
//!
//! Running with no arguments starts the interactive menu against the
//! default database file. Every option is optional.

use clap::Parser;
use std::path::PathBuf;

/// Interactive inventory manager for a small bookstore.
#[derive(Parser, Debug)]
#[command(name = "bookstock")]
#[command(version, about = "Manage a small bookstore catalog", long_about = None)]
pub struct Cli {
    /// Path to the catalog database file
    #[arg(long, value_name = "PATH", env = "BOOKSTOCK_DATABASE")]
    pub database: Option<PathBuf>,

    /// How long to wait on a locked database (in milliseconds)
    #[arg(long, value_name = "MILLIS", env = "BOOKSTOCK_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,
}
