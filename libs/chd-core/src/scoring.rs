//! Answer scoring with per-stage points and partial credit.
//!
//! Earlier recognition earns more. There are no penalties: a miss earns
//! either nothing or a share of the stage value when the guess falls in
//! the right category.

use crate::catalog::Catalog;
use crate::resolver::Resolution;
use crate::types::{Answer, Case, NearestDistractor, Rung, STAGE_COUNT};
use serde::{Deserialize, Serialize};

/// Points per stage, strictly descending.
pub const STAGE_POINTS: [u32; STAGE_COUNT] = [100, 80, 60, 40, 20];

/// Percentage of the stage value awarded for a category match.
pub const CATEGORY_PARTIAL_PERCENT: u32 = 25;

/// Bonus for a correct answer with a rationale.
pub const RATIONALE_BONUS: u32 = 10;

/// A rationale must be longer than this (in characters, trimmed) to count.
pub const RATIONALE_MIN_CHARS: usize = 10;

/// Result of scoring an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub correct: bool,
    pub points_earned: u32,
    pub explanation: String,
    pub nearest_distractor: NearestDistractor,
    /// Correct category but wrong diagnosis. Always true for correct answers.
    pub category_match: bool,
    pub resolution: Resolution,
}

/// Points for answering at a given stage.
pub fn stage_points(rung: Rung) -> u32 {
    STAGE_POINTS[rung.index()]
}

/// Partial credit for a category match at a given stage (floored).
pub fn partial_points(rung: Rung) -> u32 {
    stage_points(rung) * CATEGORY_PARTIAL_PERCENT / 100
}

fn has_rationale(rationale: Option<&str>) -> bool {
    rationale.is_some_and(|r| r.trim().chars().count() > RATIONALE_MIN_CHARS)
}

/// Score an answer against the case it was given for.
pub fn score(answer: &Answer, correct_case: &Case, catalog: &Catalog) -> Feedback {
    let resolution = catalog.resolve(&answer.response);
    let correct = resolution.case_id() == Some(correct_case.id.as_str());

    let (points_earned, category_match) = if correct {
        let bonus = if has_rationale(answer.rationale.as_deref()) {
            RATIONALE_BONUS
        } else {
            0
        };
        (stage_points(answer.rung) + bonus, true)
    } else {
        let category_match = resolution
            .case_id()
            .and_then(|id| catalog.category_of(id))
            .is_some_and(|category| category == correct_case.category);
        let points = if category_match {
            partial_points(answer.rung)
        } else {
            0
        };
        (points, category_match)
    };

    Feedback {
        correct,
        points_earned,
        explanation: explanation(correct_case, correct, category_match),
        nearest_distractor: correct_case.nearest_distractor.clone(),
        category_match,
        resolution,
    }
}

fn explanation(case: &Case, correct: bool, category_match: bool) -> String {
    if correct {
        format!("Correct! {}", case.reveal)
    } else if category_match {
        format!(
            "Partially correct: you identified the right category ({}), but the specific diagnosis is {}. {}",
            case.category.as_str(),
            case.name,
            case.reveal
        )
    } else {
        format!("The correct answer is {}. {}", case.name, case.reveal)
    }
}

/// Best possible score for a single case (R1 plus rationale).
pub fn max_points_per_case() -> u32 {
    STAGE_POINTS[0] + RATIONALE_BONUS
}

/// Rounded percentage of `earned` over `total`, zero when `total` is zero.
pub fn percentage(earned: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((earned as f64 / total as f64) * 100.0).round() as u32
}

/// Format a point value for display.
pub fn format_points(points: u32) -> String {
    match points {
        1 => "1 pt".to_string(),
        n => format!("{n} pts"),
    }
}
