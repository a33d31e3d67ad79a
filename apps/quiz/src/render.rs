//! Plain-text rendering of session views.

use chd_core::scoring::format_points;
use chd_core::session::{CaseSource, Progress};
use chd_core::{Catalog, Category, Feedback, Resolution, Rung, Stage};
use std::fmt::Write;

/// Disclosed stages of the current case, newest last.
pub fn stages(stages: &[Stage], rung: Rung, source: Option<CaseSource>) -> String {
    let mut out = String::new();
    let label = match source {
        Some(CaseSource::Review) => " (review)",
        _ => "",
    };
    let _ = writeln!(out, "Case{label}, rung R{} of R5", rung.ordinal());

    for (index, stage) in stages.iter().enumerate() {
        let _ = writeln!(out, "  R{} {}: {}", index + 1, stage.kind.label(), stage.content);
        if let Some(media) = &stage.media {
            let alt = media.alt.as_deref().unwrap_or("media");
            let _ = writeln!(out, "     [{alt}] {}", media.url);
            if let Some(caption) = &media.caption {
                let _ = writeln!(out, "     {caption}");
            }
        }
    }
    out
}

pub fn feedback(feedback: &Feedback) -> String {
    let mut out = String::new();
    let verdict = if feedback.correct {
        "CORRECT"
    } else if feedback.category_match {
        "RIGHT CATEGORY"
    } else {
        "MISSED"
    };
    let _ = writeln!(out, "{verdict}  +{}", format_points(feedback.points_earned));
    let _ = writeln!(out, "{}", feedback.explanation);
    let _ = writeln!(
        out,
        "Nearest distractor: {}. {}",
        feedback.nearest_distractor.name, feedback.nearest_distractor.why_not
    );
    out
}

pub fn progress(progress: &Progress) -> String {
    format!(
        "Score {} ({}% of {} possible) | completed {} | case {}/{} | review queue {}",
        progress.score,
        progress.percentage,
        progress.max_possible,
        progress.cases_completed,
        progress.main_position.min(progress.main_total),
        progress.main_total,
        progress.review_queue_len,
    )
}

pub fn weak_categories(weak: &[(Category, usize)]) -> String {
    if weak.is_empty() {
        return "No weak categories.".to_string();
    }
    let items: Vec<String> = weak
        .iter()
        .map(|(category, count)| format!("{} ({count})", category.label()))
        .collect();
    format!("Weak categories: {}", items.join(", "))
}

/// Catalog listing grouped by category.
pub fn case_list(catalog: &Catalog) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        let cases = catalog.by_category(category);
        if cases.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}", category.label());
        for case in cases {
            let _ = writeln!(out, "  {:<8} {}", case.id, case.name);
        }
    }
    out
}

pub fn resolution(resolution: &Resolution, catalog: &Catalog) -> String {
    match resolution {
        Resolution::Resolved { case_id } => match catalog.get(case_id) {
            Some(case) => format!("{case_id}: {} ({})", case.name, case.category.as_str()),
            None => case_id.clone(),
        },
        Resolution::Unresolved { raw_text } => format!("no match for '{raw_text}'"),
    }
}
