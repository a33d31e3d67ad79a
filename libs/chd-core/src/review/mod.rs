//! Review queue for missed cases.
//!
//! Missed cases resurface after a growing number of other cases. The queue
//! is a value: every operation returns a new queue and leaves `self` as is.

pub mod ladder;
pub mod window;

pub use ladder::{next_interval, REVIEW_LADDER};
pub use window::{ReviewWindow, DEFAULT_MODULO_WINDOW};

use crate::types::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A missed case waiting to be shown again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub case_id: String,
    pub missed_at: DateTime<Utc>,
    /// Show again after this many more cases.
    pub review_after: u32,
    /// Completed-case count at which the missed case itself was finished.
    #[serde(default)]
    pub missed_after: usize,
}

impl ReviewItem {
    /// Cases completed since this item was missed.
    pub fn cases_since_miss(&self, completed: usize) -> usize {
        completed.saturating_sub(self.missed_after)
    }
}

/// Missed cases, at most one entry per case id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ReviewItem>", into = "Vec<ReviewItem>")]
pub struct ReviewQueue {
    items: Vec<ReviewItem>,
}

impl From<Vec<ReviewItem>> for ReviewQueue {
    /// Drops repeated case ids, keeping the first entry.
    fn from(items: Vec<ReviewItem>) -> Self {
        let mut unique: Vec<ReviewItem> = Vec::with_capacity(items.len());
        for item in items {
            if !unique.iter().any(|u| u.case_id == item.case_id) {
                unique.push(item);
            }
        }
        Self { items: unique }
    }
}

impl From<ReviewQueue> for Vec<ReviewItem> {
    fn from(queue: ReviewQueue) -> Self {
        queue.items
    }
}

impl ReviewQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ReviewItem] {
        &self.items
    }

    pub fn get(&self, case_id: &str) -> Option<&ReviewItem> {
        self.items.iter().find(|item| item.case_id == case_id)
    }

    pub fn contains(&self, case_id: &str) -> bool {
        self.get(case_id).is_some()
    }

    /// Record a miss. A new case starts at the bottom of the ladder; a case
    /// already queued climbs one rung and restarts its counters in place.
    pub fn enqueue_miss(&self, case_id: &str, now: DateTime<Utc>, missed_after: usize) -> Self {
        let mut items = self.items.clone();

        match items.iter_mut().find(|item| item.case_id == case_id) {
            Some(existing) => {
                existing.review_after = next_interval(existing.review_after);
                existing.missed_at = now;
                existing.missed_after = missed_after;
            }
            None => items.push(ReviewItem {
                case_id: case_id.to_string(),
                missed_at: now,
                review_after: ladder::first_interval(),
                missed_after,
            }),
        }

        Self { items }
    }

    /// Remove a case after it is answered correctly.
    pub fn dequeue_on_success(&self, case_id: &str) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| item.case_id != case_id)
                .cloned()
                .collect(),
        }
    }

    /// Soonest-due-first: among items sorted by threshold (ties keep
    /// insertion order), the first whose threshold is at most
    /// `cases_since_last_review`.
    pub fn due_item(&self, cases_since_last_review: usize) -> Option<&str> {
        self.by_threshold()
            .into_iter()
            .find(|item| item.review_after as usize <= cases_since_last_review)
            .map(|item| item.case_id.as_str())
    }

    /// Same policy as [`due_item`](Self::due_item), but each item measures
    /// the cases completed since its own miss.
    pub fn due_item_since_miss(&self, completed: usize) -> Option<&str> {
        self.by_threshold()
            .into_iter()
            .find(|item| item.review_after as usize <= item.cases_since_miss(completed))
            .map(|item| item.case_id.as_str())
    }

    fn by_threshold(&self) -> Vec<&ReviewItem> {
        let mut sorted: Vec<&ReviewItem> = self.items.iter().collect();
        sorted.sort_by_key(|item| item.review_after);
        sorted
    }

    /// Queue entries counted by category, most frequent first. Ties keep
    /// the order categories were first seen; unknown ids are skipped.
    pub fn weak_categories<F>(&self, category_of: F) -> Vec<(Category, usize)>
    where
        F: Fn(&str) -> Option<Category>,
    {
        let mut counts: Vec<(Category, usize)> = Vec::new();
        for item in &self.items {
            let Some(category) = category_of(&item.case_id) else {
                continue;
            };
            match counts.iter_mut().find(|(c, _)| *c == category) {
                Some((_, count)) => *count += 1,
                None => counts.push((category, 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}
