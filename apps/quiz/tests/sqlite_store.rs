//! Persistence of sessions in the SQLite store.

mod common;

use chd_core::session::DEFAULT_STORAGE_KEY;
use chd_core::{Catalog, KeyValueStore, Phase, Session, SessionSettings};
use guess_the_chd::commands;
use guess_the_chd::db::SqliteStore;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_session_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quiz.db");

    let session_id = {
        let mut session = common::file_session(&path);
        common::play_script(&mut session, &["HLHS", ":next", ":more"]);
        session.snapshot().session_id
    };

    let session = common::file_session(&path);
    assert_eq!(session.snapshot().session_id, session_id);
    assert_eq!(session.current_case().map(|c| c.id.as_str()), Some("vsd"));
    assert_eq!(session.snapshot().current_rung.ordinal(), 2);
    assert_eq!(session.progress().review_queue_len, 1);
}

#[test]
fn test_open_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("data").join("quiz.db");

    let store = SqliteStore::open(&path).unwrap();
    assert!(path.exists());
    assert_eq!(store.schema_version().unwrap(), Some(1));
}

#[test]
fn test_corrupt_snapshot_starts_fresh() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.set(DEFAULT_STORAGE_KEY, "{not json").unwrap();

    let session = Session::open(store, Catalog::builtin(), SessionSettings::default());
    assert_eq!(session.phase(), Phase::Presenting);
    assert_eq!(session.snapshot().score, 0);

    let saved = session.store().get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert!(saved.starts_with('{'));
    assert!(saved.contains("\"version\""));
}

#[test]
fn test_status_json_reflects_saved_progress() {
    let mut session = common::memory_session();
    common::play_script(&mut session, &["ASD", ":next", "HLHS", ":next"]);

    let mut out = Vec::new();
    commands::status(&session, true, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(value["progress"]["score"], 100);
    assert_eq!(value["progress"]["cases_completed"], 2);
    assert_eq!(value["weak_categories"][0]["category"], "acyanotic-shunt");
}

#[test]
fn test_separate_keys_keep_separate_sessions() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut first = Session::open_with_key(store, "first", Catalog::builtin(), SessionSettings::default());
    first.submit_answer("ASD", None);
    let store = first.into_store();

    let second = Session::open_with_key(store, "second", Catalog::builtin(), SessionSettings::default());
    assert_eq!(second.snapshot().score, 0);
    assert!(second.store().get("first").unwrap().is_some());
}
