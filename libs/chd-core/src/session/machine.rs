//! Pure session transitions.
//!
//! `apply` never touches storage; the caller decides whether to persist
//! the returned snapshot.

use super::snapshot::{CaseSource, Phase, SessionSnapshot};
use crate::catalog::Catalog;
use crate::scoring::{self, Feedback};
use crate::types::{Answer, Rung, SessionSettings};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-triggered event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    AdvanceStage,
    SubmitAnswer {
        response: String,
        #[serde(default)]
        rationale: Option<String>,
    },
    NextCase,
    Reset,
}

/// What an event did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    StageAdvanced { rung: Rung },
    Scored { feedback: Feedback },
    Presenting { case_id: String, source: CaseSource },
    Completed,
    /// The event does not apply in the current phase; nothing changed.
    Ignored { reason: String },
}

#[derive(Debug, Clone)]
pub struct Transition {
    pub snapshot: SessionSnapshot,
    pub outcome: Outcome,
}

impl Transition {
    fn ignored(snapshot: &SessionSnapshot, reason: &str) -> Self {
        Self {
            snapshot: snapshot.clone(),
            outcome: Outcome::Ignored {
                reason: reason.to_string(),
            },
        }
    }

    /// Whether the snapshot changed and should be persisted.
    pub fn changed(&self) -> bool {
        !matches!(self.outcome, Outcome::Ignored { .. })
    }
}

/// Apply one event to a snapshot.
pub fn apply(
    snapshot: &SessionSnapshot,
    event: Event,
    catalog: &Catalog,
    settings: &SessionSettings,
    now: DateTime<Utc>,
) -> Transition {
    match event {
        Event::AdvanceStage => advance_stage(snapshot),
        Event::SubmitAnswer {
            response,
            rationale,
        } => submit_answer(snapshot, response, rationale, catalog, now),
        Event::NextCase => next_case(snapshot, catalog, settings),
        Event::Reset => {
            let next = SessionSnapshot::fresh(catalog, settings.review_window, now);
            let outcome = presenting_outcome(&next);
            Transition {
                snapshot: next,
                outcome,
            }
        }
    }
}

fn advance_stage(snapshot: &SessionSnapshot) -> Transition {
    if snapshot.phase != Phase::Presenting {
        return Transition::ignored(snapshot, "no case is being presented");
    }
    if snapshot.current_rung.is_last() {
        return Transition::ignored(snapshot, "already at the last stage");
    }

    let mut next = snapshot.clone();
    next.current_rung = snapshot.current_rung.next();
    Transition {
        outcome: Outcome::StageAdvanced {
            rung: next.current_rung,
        },
        snapshot: next,
    }
}

fn submit_answer(
    snapshot: &SessionSnapshot,
    response: String,
    rationale: Option<String>,
    catalog: &Catalog,
    now: DateTime<Utc>,
) -> Transition {
    if snapshot.phase != Phase::Presenting {
        return Transition::ignored(snapshot, "no case is awaiting an answer");
    }
    let Some(case) = snapshot.current_case_id().and_then(|id| catalog.get(id)) else {
        return Transition::ignored(snapshot, "current case is not in the catalog");
    };

    let answer = Answer {
        case_id: case.id.clone(),
        response,
        rung: snapshot.current_rung,
        rationale,
        submitted_at: now,
    };
    let feedback = scoring::score(&answer, case, catalog);

    let mut next = snapshot.clone();
    next.score = next.score.saturating_add(feedback.points_earned);
    next.review_queue = if feedback.correct {
        snapshot.review_queue.dequeue_on_success(&case.id)
    } else {
        // Counted from when this case itself is finished.
        snapshot
            .review_queue
            .enqueue_miss(&case.id, now, snapshot.completed_count() + 1)
    };
    next.phase = Phase::ShowingFeedback;
    next.last_feedback = Some(feedback.clone());

    Transition {
        snapshot: next,
        outcome: Outcome::Scored { feedback },
    }
}

fn next_case(
    snapshot: &SessionSnapshot,
    catalog: &Catalog,
    settings: &SessionSettings,
) -> Transition {
    if snapshot.phase != Phase::ShowingFeedback {
        return Transition::ignored(snapshot, "answer the current case first");
    }

    let mut next = snapshot.clone();
    if let Some(current) = snapshot.current.as_ref() {
        next.cases_completed.push(current.case_id.clone());
        if current.source == CaseSource::Main {
            next.current_case_index = (next.current_case_index + 1).min(catalog.len());
        }
    }
    next.last_feedback = None;
    next.select_next(catalog, settings.review_window);

    let outcome = presenting_outcome(&next);
    Transition {
        snapshot: next,
        outcome,
    }
}

fn presenting_outcome(snapshot: &SessionSnapshot) -> Outcome {
    match snapshot.current.as_ref() {
        Some(current) => Outcome::Presenting {
            case_id: current.case_id.clone(),
            source: current.source,
        },
        None => Outcome::Completed,
    }
}
