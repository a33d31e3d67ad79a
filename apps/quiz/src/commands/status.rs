//! Status and reset commands.

use crate::render;
use chd_core::session::{Progress, Session};
use chd_core::{Category, KeyValueStore};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct WeakCategory {
    pub category: Category,
    pub count: usize,
}

/// Machine-readable session summary.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub session_id: Uuid,
    pub session_started_at: DateTime<Utc>,
    pub current_case: Option<String>,
    pub progress: Progress,
    pub weak_categories: Vec<WeakCategory>,
}

impl StatusReport {
    pub fn from_session<S: KeyValueStore>(session: &Session<S>) -> Self {
        let snapshot = session.snapshot();
        Self {
            session_id: snapshot.session_id,
            session_started_at: snapshot.session_started_at,
            current_case: snapshot.current_case_id().map(str::to_string),
            progress: session.progress(),
            weak_categories: session
                .weak_categories()
                .into_iter()
                .map(|(category, count)| WeakCategory { category, count })
                .collect(),
        }
    }
}

pub fn status<S: KeyValueStore, W: Write>(
    session: &Session<S>,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    if json {
        let report = StatusReport::from_session(session);
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    let snapshot = session.snapshot();
    writeln!(
        out,
        "Session {} started {}",
        snapshot.session_id,
        snapshot.session_started_at.format("%Y-%m-%d %H:%M UTC")
    )?;
    writeln!(out, "{}", render::progress(&session.progress()))?;
    writeln!(out, "{}", render::weak_categories(&session.weak_categories()))?;
    Ok(())
}

pub fn reset<S: KeyValueStore, W: Write>(session: &mut Session<S>, out: &mut W) -> anyhow::Result<()> {
    session.reset();
    writeln!(out, "Session reset. New session {}.", session.snapshot().session_id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chd_core::{Catalog, MemoryStore, SessionSettings};

    fn session() -> Session<MemoryStore> {
        Session::open(MemoryStore::new(), Catalog::builtin(), SessionSettings::default())
    }

    #[test]
    fn json_status_lists_weak_categories() {
        let mut session = session();
        session.submit_answer("HLHS", None);

        let mut out = Vec::new();
        status(&session, true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["current_case"], "asd");
        assert_eq!(value["progress"]["score"], 0);
        assert_eq!(value["weak_categories"][0]["category"], "acyanotic-shunt");
        assert_eq!(value["weak_categories"][0]["count"], 1);
    }

    #[test]
    fn text_status_includes_progress() {
        let mut out = Vec::new();
        status(&session(), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Score 0"));
        assert!(text.contains("No weak categories."));
    }

    #[test]
    fn reset_replaces_session_id() {
        let mut session = session();
        let before = session.snapshot().session_id;
        let mut out = Vec::new();
        reset(&mut session, &mut out).unwrap();
        assert_ne!(session.snapshot().session_id, before);
    }
}
