//! Runtime configuration from flags, environment and `.env`.

use crate::cli::Cli;
use anyhow::Context;
use chd_core::session::DEFAULT_STORAGE_KEY;
use chd_core::{Catalog, ReviewWindow, SessionSettings};
use std::path::{Path, PathBuf};

/// Where the saved session lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    Sqlite(PathBuf),
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreLocation,
    pub catalog_path: Option<PathBuf>,
    pub review_window: ReviewWindow,
    pub storage_key: String,
    pub json: bool,
}

impl AppConfig {
    /// Merge parsed flags (which already fall back to environment
    /// variables) with built-in defaults.
    pub fn from_cli(cli: &Cli) -> Self {
        let store = if cli.memory {
            StoreLocation::Memory
        } else {
            StoreLocation::Sqlite(cli.db.clone().unwrap_or_else(default_db_path))
        };

        Self {
            store,
            catalog_path: cli.catalog.clone(),
            review_window: cli.review_window.unwrap_or_default(),
            storage_key: cli
                .storage_key
                .clone()
                .filter(|k| !k.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
            json: cli.json,
        }
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            review_window: self.review_window,
        }
    }

    /// The configured catalog file, or the built-in cases.
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog_path {
            Some(path) => load_catalog_file(path),
            None => Ok(Catalog::builtin()),
        }
    }
}

fn load_catalog_file(path: &Path) -> anyhow::Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_json(&content)
        .with_context(|| format!("invalid catalog {}", path.display()))?;
    tracing::info!(cases = catalog.len(), path = %path.display(), "loaded catalog");
    Ok(catalog)
}

/// Default database location under the user's local data directory.
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("guess-the-chd")
        .join("quiz.db")
}
