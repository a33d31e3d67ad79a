//! Terminal front end for the congenital heart disease quiz.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod render;

use anyhow::Context;
use chd_core::{KeyValueStore, MemoryStore, Session};
use clap::Parser;
use std::io::{self, Write};

use crate::cli::{Cli, Command};
use crate::config::{AppConfig, StoreLocation};
use crate::db::SqliteStore;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = AppConfig::from_cli(&cli);
    let catalog = config.load_catalog()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Play) {
        Command::Cases => commands::list_cases(&catalog, config.json, &mut out)?,
        Command::Resolve { text } => {
            commands::resolve(&catalog, &text.join(" "), config.json, &mut out)?
        }
        Command::Status => {
            let session = open_session(&config, catalog);
            commands::status(&session, config.json, &mut out)?;
        }
        Command::Reset => {
            let mut session = open_session(&config, catalog);
            commands::reset(&mut session, &mut out)?;
        }
        Command::Play => {
            let mut session = open_session(&config, catalog);
            let stdin = io::stdin();
            commands::play(&mut session, stdin.lock(), &mut out).context("play loop failed")?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Open the configured store. An unusable database falls back to memory
/// so the quiz still runs.
pub fn open_store(location: &StoreLocation) -> Box<dyn KeyValueStore> {
    match location {
        StoreLocation::Memory => Box::new(MemoryStore::new()),
        StoreLocation::Sqlite(path) => match SqliteStore::open(path) {
            Ok(store) => {
                tracing::debug!(path = %path.display(), "opened session database");
                Box::new(store)
            }
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "cannot open database, progress will not be saved");
                Box::new(MemoryStore::new())
            }
        },
    }
}

pub fn open_session(
    config: &AppConfig,
    catalog: chd_core::Catalog,
) -> Session<Box<dyn KeyValueStore>> {
    Session::open_with_key(
        open_store(&config.store),
        &config.storage_key,
        catalog,
        config.session_settings(),
    )
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
