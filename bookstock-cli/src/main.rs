//! Main entry point for the bookstock CLI.
//!
//! Opens the catalog database, seeds it on first run, and hands the
//! terminal to the interactive menu:
//! - `1`: Enter book
//! - `2`: Update book
//! - `3`: Delete book
//! - `4`: Search books
//! - `5`: Show all books
//! - `0`: Exit

use std::io;

use bookstock::{ConfigLoader, Database};
use bookstock_cli::error::CliError;
use bookstock_cli::{Cli, Session};
use clap::Parser;

fn run(cli: Cli) -> Result<(), CliError> {
    let config = ConfigLoader::load(&std::env::current_dir()?)?
        .with_overrides(cli.database, cli.busy_timeout);
    let db_config = config.database_config();
    log::debug!("using database {}", db_config.path.display());

    let db = Database::open(db_config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(db, stdin.lock(), stdout.lock());
    session.initialize()?;
    session.run()
}

fn main() {
    let cli = Cli::parse();

    let _level = bookstock::init_logger(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
