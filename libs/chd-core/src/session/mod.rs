//! Session state machine and its persistence driver.

pub mod machine;
pub mod snapshot;

pub use machine::{apply, Event, Outcome, Transition};
pub use snapshot::{CaseSource, CurrentCase, Phase, SessionSnapshot, DEFAULT_STORAGE_KEY, SNAPSHOT_VERSION};

use crate::catalog::Catalog;
use crate::scoring::{self, Feedback};
use crate::store::KeyValueStore;
use crate::types::{Case, Category, SessionSettings, Stage};
use chrono::Utc;
use serde::Serialize;

/// Score and position summary for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub score: u32,
    pub cases_completed: usize,
    pub review_queue_len: usize,
    pub main_position: usize,
    pub main_total: usize,
    /// Best score achievable over the completed cases.
    pub max_possible: u32,
    pub percentage: u32,
    pub phase: Phase,
}

/// A quiz session bound to a key-value store.
///
/// Restores itself on open and writes the full snapshot after every
/// accepted event. Store failures are logged and the session carries on
/// in memory.
pub struct Session<S: KeyValueStore> {
    store: S,
    key: String,
    catalog: Catalog,
    settings: SessionSettings,
    snapshot: SessionSnapshot,
    /// Set when the saved session could not be read; writes would clobber it.
    memory_only: bool,
}

impl<S: KeyValueStore> Session<S> {
    /// Open under the default storage key.
    pub fn open(store: S, catalog: Catalog, settings: SessionSettings) -> Self {
        Self::open_with_key(store, DEFAULT_STORAGE_KEY, catalog, settings)
    }

    pub fn open_with_key(store: S, key: &str, catalog: Catalog, settings: SessionSettings) -> Self {
        let window = settings.review_window;
        let mut memory_only = false;
        let snapshot = match store.get(key) {
            Ok(Some(raw)) => match SessionSnapshot::restore(&raw, &catalog, window) {
                Ok(snapshot) => {
                    tracing::debug!(
                        session_id = %snapshot.session_id,
                        completed = snapshot.completed_count(),
                        "restored saved session"
                    );
                    snapshot
                }
                Err(error) => {
                    tracing::warn!(%error, "saved session is unreadable, starting fresh");
                    SessionSnapshot::fresh(&catalog, window, Utc::now())
                }
            },
            Ok(None) => SessionSnapshot::fresh(&catalog, window, Utc::now()),
            Err(error) => {
                tracing::warn!(%error, "could not read saved session, playing without saving");
                memory_only = true;
                SessionSnapshot::fresh(&catalog, window, Utc::now())
            }
        };

        let mut session = Self {
            store,
            key: key.to_string(),
            catalog,
            settings,
            snapshot,
            memory_only,
        };
        session.persist();
        session
    }

    fn dispatch(&mut self, event: Event) -> Outcome {
        let transition = apply(&self.snapshot, event, &self.catalog, &self.settings, Utc::now());
        if transition.changed() {
            self.snapshot = transition.snapshot;
            self.persist();
        } else {
            tracing::debug!(outcome = ?transition.outcome, "event ignored");
        }
        transition.outcome
    }

    fn persist(&mut self) {
        if self.memory_only {
            return;
        }
        let json = match self.snapshot.to_json() {
            Ok(json) => json,
            Err(error) => {
                tracing::warn!(%error, "failed to serialize session");
                return;
            }
        };
        if let Err(error) = self.store.set(&self.key, &json) {
            tracing::warn!(%error, key = %self.key, "failed to save session, continuing in memory");
        }
    }

    /// Reveal the next stage of the current case.
    pub fn advance_stage(&mut self) -> Outcome {
        self.dispatch(Event::AdvanceStage)
    }

    pub fn submit_answer(&mut self, response: &str, rationale: Option<&str>) -> Outcome {
        let outcome = self.dispatch(Event::SubmitAnswer {
            response: response.to_string(),
            rationale: rationale.map(str::to_string),
        });
        if let Outcome::Scored { feedback } = &outcome {
            tracing::info!(
                session_id = %self.snapshot.session_id,
                correct = feedback.correct,
                points = feedback.points_earned,
                "answer scored"
            );
        }
        outcome
    }

    pub fn next_case(&mut self) -> Outcome {
        self.dispatch(Event::NextCase)
    }

    pub fn reset(&mut self) -> Outcome {
        tracing::info!(session_id = %self.snapshot.session_id, "resetting session");
        self.dispatch(Event::Reset)
    }

    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn phase(&self) -> Phase {
        self.snapshot.phase
    }

    pub fn current_case(&self) -> Option<&Case> {
        self.snapshot
            .current_case_id()
            .and_then(|id| self.catalog.get(id))
    }

    pub fn current_source(&self) -> Option<CaseSource> {
        self.snapshot.current.as_ref().map(|c| c.source)
    }

    /// Stages disclosed so far for the current case.
    pub fn visible_stages(&self) -> &[Stage] {
        match self.current_case() {
            Some(case) => case.visible_stages(self.snapshot.current_rung),
            None => &[],
        }
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.snapshot.last_feedback.as_ref()
    }

    pub fn progress(&self) -> Progress {
        let completed = self.snapshot.completed_count();
        let max_possible = scoring::max_points_per_case().saturating_mul(completed as u32);
        Progress {
            score: self.snapshot.score,
            cases_completed: completed,
            review_queue_len: self.snapshot.review_queue.len(),
            main_position: self.snapshot.current_case_index,
            main_total: self.catalog.len(),
            max_possible,
            percentage: scoring::percentage(self.snapshot.score, max_possible),
            phase: self.snapshot.phase,
        }
    }

    /// Categories most represented in the review queue.
    pub fn weak_categories(&self) -> Vec<(Category, usize)> {
        self.snapshot
            .review_queue
            .weak_categories(|id| self.catalog.category_of(id))
    }

    /// Whether changes are kept in memory only.
    pub fn is_memory_only(&self) -> bool {
        self.memory_only
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::MemoryStore;
    use crate::types::Rung;
    use pretty_assertions::assert_eq;

    fn open(store: MemoryStore) -> Session<MemoryStore> {
        Session::open(store, Catalog::builtin(), SessionSettings::default())
    }

    fn saved(session: &Session<MemoryStore>) -> SessionSnapshot {
        let raw = session.store().get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("locked".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("locked".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("locked".to_string()))
        }
    }

    #[test]
    fn open_persists_a_fresh_session() {
        let session = open(MemoryStore::new());
        assert_eq!(saved(&session), *session.snapshot());
        assert_eq!(session.current_case().unwrap().id, "asd");
        assert_eq!(session.visible_stages().len(), 1);
    }

    #[test]
    fn every_transition_is_persisted() {
        let mut session = open(MemoryStore::new());

        session.advance_stage();
        assert_eq!(saved(&session).current_rung, Rung::new(1));

        session.submit_answer("ASD", Some("fixed split second sound"));
        assert_eq!(saved(&session).score, 90);
        assert_eq!(saved(&session).phase, Phase::ShowingFeedback);

        session.next_case();
        assert_eq!(saved(&session).cases_completed, vec!["asd".to_string()]);
    }

    #[test]
    fn reopening_restores_progress() {
        let mut session = open(MemoryStore::new());
        session.submit_answer("PDA", None);
        session.next_case();
        session.advance_stage();
        let before = session.snapshot().clone();

        let reopened = open(session.into_store());
        assert_eq!(*reopened.snapshot(), before);
        assert_eq!(reopened.current_case().unwrap().id, "vsd");
        assert_eq!(reopened.visible_stages().len(), 2);
    }

    #[test]
    fn corrupt_saved_session_starts_fresh() {
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "{\"score\": \"lots\"");
        let session = open(store);
        assert_eq!(session.snapshot().score, 0);
        assert_eq!(session.phase(), Phase::Presenting);
        // The unreadable value is replaced.
        assert_eq!(saved(&session), *session.snapshot());
    }

    #[test]
    fn failing_store_keeps_session_in_memory() {
        let mut session = Session::open(ReadOnlyStore, Catalog::builtin(), SessionSettings::default());
        let outcome = session.submit_answer("Atrial Septal Defect", None);
        assert!(matches!(outcome, Outcome::Scored { ref feedback } if feedback.correct));
        assert_eq!(session.snapshot().score, 100);
    }

    /// Store whose first read fails, wrapping a working store.
    struct FlakyStore {
        inner: MemoryStore,
        reads: std::cell::Cell<usize>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            let reads = self.reads.get();
            self.reads.set(reads + 1);
            if reads == 0 {
                return Err(StoreError::Unavailable("database is locked".to_string()));
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn unreadable_store_is_never_overwritten() {
        let mut played = open(MemoryStore::new());
        played.submit_answer("ASD", None);
        played.next_case();
        let before = played.snapshot().clone();

        let flaky = FlakyStore {
            inner: played.into_store(),
            reads: std::cell::Cell::new(0),
        };
        let mut session = Session::open(flaky, Catalog::builtin(), SessionSettings::default());
        assert!(session.is_memory_only());
        assert_eq!(session.snapshot().score, 0);

        session.submit_answer("ASD", None);
        session.next_case();

        let store = session.into_store().inner;
        let reopened = open(store);
        assert_eq!(*reopened.snapshot(), before);
        assert_eq!(reopened.snapshot().score, 100);
        assert_eq!(reopened.snapshot().completed_count(), 1);
    }

    #[test]
    fn progress_summary() {
        let mut session = open(MemoryStore::new());
        session.submit_answer("ASD", None);
        session.next_case();
        session.submit_answer("TOF", None);
        session.next_case();

        let progress = session.progress();
        assert_eq!(progress.score, 100);
        assert_eq!(progress.cases_completed, 2);
        assert_eq!(progress.review_queue_len, 1);
        assert_eq!(progress.max_possible, 220);
        assert_eq!(progress.percentage, 45);
        assert_eq!(progress.main_position, 2);
        assert_eq!(progress.main_total, 12);
    }

    #[test]
    fn correct_review_leaves_weak_categories() {
        let mut session = open(MemoryStore::new());
        session.submit_answer("TOF", None); // asd missed
        assert_eq!(session.weak_categories(), vec![(Category::AcyanoticShunt, 1)]);
        session.next_case();
        session.submit_answer("VSD", None);
        session.next_case();

        assert_eq!(session.current_source(), Some(CaseSource::Review));
        session.submit_answer("ASD", None);
        assert!(session.weak_categories().is_empty());
    }

    #[test]
    fn reset_is_persisted() {
        let mut session = open(MemoryStore::new());
        session.submit_answer("ASD", None);
        session.reset();
        assert_eq!(saved(&session).score, 0);
        assert_eq!(session.feedback(), None);
    }
}
