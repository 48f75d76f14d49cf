mod commands;
mod dispatch;
mod error;
mod repl;
mod similarity;
mod util;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::dispatch::{Dispatcher, Settings};
use crate::error::{exit_code_for, report_error};
use addrbook_config as config;
use addrbook_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "addrbook", version, about = "Address book assistant")]
struct Cli {
    /// Address book file (defaults to the data directory)
    #[arg(long)]
    book_path: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        book_path,
        config: config_path,
        verbose,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let book_path = paths::resolve_book_path(book_path.or_else(|| app_config.book_path.clone()))
        .with_context(|| "resolve address book path")?;
    debug!(path = %book_path.display(), "address book path resolved");

    let store = Store::open(&book_path)
        .with_context(|| format!("open address book {}", book_path.display()))?;
    store.migrate().with_context(|| "run migrations")?;
    let book = store.load_book().with_context(|| "load address book")?;
    debug!(records = book.len(), "address book loaded");

    let mut dispatcher = Dispatcher::new(book, store, Settings::from(&app_config));
    repl::run(
        &mut dispatcher,
        io::stdin().lock(),
        io::stdout().lock(),
        util::local_today,
    )
    .with_context(|| "read commands")?;
    debug!(records = dispatcher.book().len(), "session finished");

    let (book, store) = dispatcher.into_parts();
    if book.is_empty() {
        store
            .discard(&book_path)
            .with_context(|| format!("remove empty address book {}", book_path.display()))?;
        debug!(path = %book_path.display(), "empty address book removed");
    } else {
        store.save_book(&book).with_context(|| "save address book")?;
        debug!(records = book.len(), "address book saved");
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .try_init();
}
