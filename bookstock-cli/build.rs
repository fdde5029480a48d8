//! Build script for bookstock-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("bookstock")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage a small bookstore catalog")
        .long_about(
            "Interactive menu for adding, updating, deleting, searching and listing \
             books in a SQLite-backed bookstore catalog",
        )
        .arg(
            Arg::new("database")
                .long("database")
                .help("Path to the catalog database file")
                .value_name("PATH")
                .env("BOOKSTOCK_DATABASE"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("How long to wait on a locked database (in milliseconds)")
                .value_name("MILLIS")
                .env("BOOKSTOCK_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(clap::ArgAction::SetTrue),
        )
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("bookstock.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
