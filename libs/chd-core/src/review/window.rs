//! How "cases since last review" is counted.

use super::ReviewQueue;
use serde::{Deserialize, Serialize};

/// Window size used by the legacy modulo policy.
pub const DEFAULT_MODULO_WINDOW: usize = 10;

/// Policy for deciding whether a queued review is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ReviewWindow {
    /// Each item counts the cases completed since it was missed.
    SinceMiss,
    /// One shared counter, `completed % size`, reset every `size` cases.
    /// A threshold-7 item can be skipped when the window wraps first.
    Modulo { size: usize },
}

impl Default for ReviewWindow {
    fn default() -> Self {
        Self::SinceMiss
    }
}

impl ReviewWindow {
    /// Parse `since-miss`, `modulo`, or `modulo:N`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "since-miss" | "since_miss" => Some(Self::SinceMiss),
            "modulo" => Some(Self::Modulo {
                size: DEFAULT_MODULO_WINDOW,
            }),
            other => other
                .strip_prefix("modulo:")
                .and_then(|n| n.parse().ok())
                .filter(|&size: &usize| size > 0)
                .map(|size| Self::Modulo { size }),
        }
    }

    pub fn as_string(&self) -> String {
        match self {
            Self::SinceMiss => "since-miss".to_string(),
            Self::Modulo { size } => format!("modulo:{size}"),
        }
    }

    /// The review due after `completed` cases, if any.
    pub fn due_item<'a>(&self, queue: &'a ReviewQueue, completed: usize) -> Option<&'a str> {
        match *self {
            Self::SinceMiss => queue.due_item_since_miss(completed),
            Self::Modulo { size } => {
                let since = if size == 0 { completed } else { completed % size };
                queue.due_item(since)
            }
        }
    }
}
