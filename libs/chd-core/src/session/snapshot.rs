//! Persisted session state.

use crate::catalog::Catalog;
use crate::error::RestoreError;
use crate::review::{ReviewQueue, ReviewWindow};
use crate::scoring::Feedback;
use crate::types::Rung;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Key the snapshot is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "guessthechd_gamestate";

/// Where the session is in the present/answer/next cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Presenting,
    ShowingFeedback,
    Completed,
}

/// Why the current case is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseSource {
    Main,
    Review,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentCase {
    pub case_id: String,
    pub source: CaseSource,
}

/// Full session state as written to the key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "Uuid::new_v4")]
    pub session_id: Uuid,
    /// Position in the catalog's main sequence.
    #[serde(default)]
    pub current_case_index: usize,
    #[serde(default)]
    pub current_rung: Rung,
    #[serde(default)]
    pub score: u32,
    /// Finished case ids in order; a reviewed case appears again.
    #[serde(default)]
    pub cases_completed: Vec<String>,
    #[serde(default)]
    pub review_queue: ReviewQueue,
    #[serde(default = "Utc::now")]
    pub session_started_at: DateTime<Utc>,
    #[serde(default)]
    pub phase: Phase,
    #[serde(default)]
    pub current: Option<CurrentCase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_feedback: Option<Feedback>,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

impl SessionSnapshot {
    /// A new session positioned on its first case.
    pub fn fresh(catalog: &Catalog, window: ReviewWindow, now: DateTime<Utc>) -> Self {
        let mut snapshot = Self {
            version: SNAPSHOT_VERSION,
            session_id: Uuid::new_v4(),
            current_case_index: 0,
            current_rung: Rung::FIRST,
            score: 0,
            cases_completed: Vec::new(),
            review_queue: ReviewQueue::new(),
            session_started_at: now,
            phase: Phase::Presenting,
            current: None,
            last_feedback: None,
        };
        snapshot.select_next(catalog, window);
        snapshot
    }

    /// Parse a stored snapshot and repair anything out of range.
    pub fn restore(
        raw: &str,
        catalog: &Catalog,
        window: ReviewWindow,
    ) -> Result<Self, RestoreError> {
        let snapshot: Self = serde_json::from_str(raw)?;
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(RestoreError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot.sanitize(catalog, window))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn sanitize(mut self, catalog: &Catalog, window: ReviewWindow) -> Self {
        self.version = SNAPSHOT_VERSION;
        self.current_case_index = self.current_case_index.min(catalog.len());

        let known: Vec<_> = self
            .review_queue
            .items()
            .iter()
            .filter(|item| catalog.get(&item.case_id).is_some())
            .cloned()
            .collect();
        self.review_queue = ReviewQueue::from(known);

        if self
            .current
            .as_ref()
            .is_some_and(|c| catalog.get(&c.case_id).is_none())
        {
            self.current = None;
            self.last_feedback = None;
        }

        match self.phase {
            Phase::Completed => self.select_next(catalog, window),
            Phase::Presenting | Phase::ShowingFeedback if self.current.is_none() => {
                self.select_next(catalog, window)
            }
            _ => {}
        }
        if self.phase != Phase::ShowingFeedback {
            self.last_feedback = None;
        }
        self
    }

    /// Pick the next case: a due review first, then the main sequence.
    /// With neither available the session is completed.
    pub(crate) fn select_next(&mut self, catalog: &Catalog, window: ReviewWindow) {
        let completed = self.cases_completed.len();
        let review = window
            .due_item(&self.review_queue, completed)
            .filter(|id| catalog.get(id).is_some());

        self.current = match review {
            Some(case_id) => Some(CurrentCase {
                case_id: case_id.to_string(),
                source: CaseSource::Review,
            }),
            None => catalog.at(self.current_case_index).map(|case| CurrentCase {
                case_id: case.id.clone(),
                source: CaseSource::Main,
            }),
        };
        self.current_rung = Rung::FIRST;
        self.phase = if self.current.is_some() {
            Phase::Presenting
        } else {
            Phase::Completed
        };
    }

    pub fn current_case_id(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.case_id.as_str())
    }

    pub fn completed_count(&self) -> usize {
        self.cases_completed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn fresh_session_presents_first_case() {
        let snapshot = SessionSnapshot::fresh(&catalog(), ReviewWindow::SinceMiss, Utc::now());
        assert_eq!(snapshot.phase, Phase::Presenting);
        assert_eq!(snapshot.current_case_id(), Some("asd"));
        assert_eq!(snapshot.current.as_ref().unwrap().source, CaseSource::Main);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.current_rung, Rung::FIRST);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let catalog = catalog();
        let snapshot = SessionSnapshot::fresh(&catalog, ReviewWindow::SinceMiss, Utc::now());
        let json = snapshot.to_json().unwrap();
        let restored = SessionSnapshot::restore(&json, &catalog, ReviewWindow::SinceMiss).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn restore_rejects_garbage() {
        let err = SessionSnapshot::restore("{not json", &catalog(), ReviewWindow::SinceMiss)
            .unwrap_err();
        assert!(matches!(err, RestoreError::Malformed(_)));

        let err = SessionSnapshot::restore(r#"{"score": -5}"#, &catalog(), ReviewWindow::SinceMiss)
            .unwrap_err();
        assert!(matches!(err, RestoreError::Malformed(_)));
    }

    #[test]
    fn restore_rejects_newer_version() {
        let err = SessionSnapshot::restore(r#"{"version": 99}"#, &catalog(), ReviewWindow::SinceMiss)
            .unwrap_err();
        assert!(matches!(err, RestoreError::UnsupportedVersion { found: 99, .. }));
    }

    #[test]
    fn restore_clamps_corrupt_fields() {
        let raw = r#"{
            "current_case_index": 400,
            "current_rung": 17,
            "score": 120,
            "cases_completed": ["asd"],
            "review_queue": [
                {"case_id": "ghost", "missed_at": "2026-01-01T00:00:00Z", "review_after": 1},
                {"case_id": "vsd", "missed_at": "2026-01-01T00:00:00Z", "review_after": 3}
            ],
            "phase": "presenting",
            "current": {"case_id": "vsd", "source": "main"}
        }"#;
        let snapshot = SessionSnapshot::restore(raw, &catalog(), ReviewWindow::SinceMiss).unwrap();

        assert_eq!(snapshot.current_case_index, 12);
        assert_eq!(snapshot.current_rung, Rung::LAST);
        assert_eq!(snapshot.score, 120);
        assert_eq!(snapshot.review_queue.len(), 1);
        assert_eq!(snapshot.current_case_id(), Some("vsd"));
    }

    #[test]
    fn restore_clamps_rung_outside_byte_range() {
        for (stored, expected) in [("300", Rung::LAST), ("-1", Rung::FIRST)] {
            let raw = format!(
                r#"{{
                    "current_case_index": 3,
                    "current_rung": {stored},
                    "score": 240,
                    "cases_completed": ["asd", "vsd", "pda"],
                    "phase": "presenting",
                    "current": {{"case_id": "coa", "source": "main"}}
                }}"#
            );
            let snapshot = SessionSnapshot::restore(&raw, &catalog(), ReviewWindow::SinceMiss).unwrap();
            assert_eq!(snapshot.current_rung, expected);
            assert_eq!(snapshot.score, 240);
            assert_eq!(snapshot.completed_count(), 3);
            assert_eq!(snapshot.current_case_id(), Some("coa"));
        }
    }

    #[test]
    fn completed_phase_with_cases_left_resumes() {
        let raw = r#"{"current_case_index": 4, "score": 200, "phase": "completed"}"#;
        let snapshot = SessionSnapshot::restore(raw, &catalog(), ReviewWindow::SinceMiss).unwrap();
        assert_eq!(snapshot.phase, Phase::Presenting);
        assert_eq!(snapshot.current_case_id(), Some("ps"));
        assert_eq!(snapshot.score, 200);
    }

    #[test]
    fn restore_reselects_unknown_current_case() {
        let raw = r#"{
            "current_case_index": 2,
            "phase": "presenting",
            "current": {"case_id": "ghost", "source": "main"}
        }"#;
        let snapshot = SessionSnapshot::restore(raw, &catalog(), ReviewWindow::SinceMiss).unwrap();
        assert_eq!(snapshot.current_case_id(), Some("pda"));
        assert_eq!(snapshot.phase, Phase::Presenting);
    }

    #[test]
    fn restore_legacy_snapshot_without_phase() {
        let raw = r#"{
            "current_case_index": 5,
            "current_rung": 2,
            "score": 300,
            "cases_completed": ["asd", "vsd", "pda", "coa", "ps"],
            "review_queue": [],
            "session_started_at": "2026-03-01T10:00:00Z"
        }"#;
        let snapshot = SessionSnapshot::restore(raw, &catalog(), ReviewWindow::SinceMiss).unwrap();
        assert_eq!(snapshot.current_case_id(), Some("tof"));
        assert_eq!(snapshot.phase, Phase::Presenting);
        assert_eq!(snapshot.completed_count(), 5);
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
    }

    #[test]
    fn exhausted_sequence_is_completed() {
        let raw = r#"{"current_case_index": 12, "phase": "presenting"}"#;
        let snapshot = SessionSnapshot::restore(raw, &catalog(), ReviewWindow::SinceMiss).unwrap();
        assert_eq!(snapshot.phase, Phase::Completed);
        assert_eq!(snapshot.current, None);
    }
}
