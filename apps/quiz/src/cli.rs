//! Command-line arguments.

use chd_core::ReviewWindow;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "guess-the-chd",
    about = "Recognise congenital heart disease from progressively revealed clues",
    version
)]
pub struct Cli {
    /// SQLite database holding the saved session
    #[arg(long, global = true, env = "GUESS_CHD_DB")]
    pub db: Option<PathBuf>,

    /// Keep the session in memory only, ignoring --db
    #[arg(long, global = true)]
    pub memory: bool,

    /// JSON file with a custom case catalog
    #[arg(long, global = true, env = "GUESS_CHD_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// How due reviews are counted: since-miss, modulo, or modulo:N
    #[arg(long, global = true, env = "GUESS_CHD_REVIEW_WINDOW", value_parser = parse_review_window)]
    pub review_window: Option<ReviewWindow>,

    /// Key the session is saved under
    #[arg(long, global = true, env = "GUESS_CHD_STORAGE_KEY")]
    pub storage_key: Option<String>,

    /// Print JSON instead of text where supported
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Play interactively (default)
    Play,
    /// Show score, progress and weak categories
    Status,
    /// Discard the saved session and start over
    Reset,
    /// List the cases in the catalog
    Cases,
    /// Show which case free text resolves to
    Resolve {
        /// Text to resolve
        text: Vec<String>,
    },
}

fn parse_review_window(s: &str) -> Result<ReviewWindow, String> {
    ReviewWindow::parse(s)
        .ok_or_else(|| format!("unknown review window '{s}' (use since-miss, modulo or modulo:N)"))
}
