//! Shared helpers for the quiz integration tests.
//!
//! Sessions run against a real SQLite store, either in memory or in a
//! temporary directory, and scripted input is fed through the play loop.

#![allow(dead_code)]

pub mod fixtures;

use std::io::Cursor;
use std::path::Path;

use chd_core::{Catalog, Session, SessionSettings};
use guess_the_chd::commands;
use guess_the_chd::db::SqliteStore;

pub type TestSession = Session<SqliteStore>;

/// Session over a fresh in-memory database with the built-in cases.
pub fn memory_session() -> TestSession {
    let store = SqliteStore::open_in_memory().expect("in-memory database");
    Session::open(store, Catalog::builtin(), SessionSettings::default())
}

/// Session over the database file at `path`, restoring any saved state.
pub fn file_session(path: &Path) -> TestSession {
    let store = SqliteStore::open(path).expect("database file");
    Session::open(store, Catalog::builtin(), SessionSettings::default())
}

/// Feed `lines` to the play loop and return everything it printed.
pub fn play_script(session: &mut TestSession, lines: &[&str]) -> String {
    let input = Cursor::new(lines.join("\n"));
    let mut out = Vec::new();
    commands::play(session, input, &mut out).expect("play loop");
    String::from_utf8(out).expect("utf-8 output")
}
