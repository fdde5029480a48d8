//! Library exports for bookstock-cli.
//!
//! The menu session and prompts live here so they can be driven from
//! tests with in-memory streams.

pub mod cli;
pub mod error;
pub mod prompt;
pub mod session;

pub use cli::Cli;
pub use session::{MenuChoice, Session};
