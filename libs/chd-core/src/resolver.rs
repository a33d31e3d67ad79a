//! Free-text answer resolution against the alias table.

use serde::{Deserialize, Serialize};

/// Inputs shorter than this never match partially.
pub const MIN_PARTIAL_LEN: usize = 3;

/// Outcome of resolving free text to a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    Resolved { case_id: String },
    Unresolved { raw_text: String },
}

impl Resolution {
    /// The resolved case id, if any.
    pub fn case_id(&self) -> Option<&str> {
        match self {
            Self::Resolved { case_id } => Some(case_id),
            Self::Unresolved { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

/// Ordered many-to-one mapping from labels to case ids.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: Vec<(String, String)>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a label. Labels are stored normalized; a repeated label keeps
    /// its first mapping.
    pub fn insert(&mut self, label: &str, case_id: &str) {
        let key = normalize(label);
        if key.is_empty() || self.entries.iter().any(|(k, _)| *k == key) {
            return;
        }
        self.entries.push((key, case_id.to_string()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(label, case_id)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Resolve free text to a case id.
    ///
    /// Exact label matches win over partial ones. A partial match is either
    /// a label containing the input, or the input containing a label as a
    /// whole word. Inputs shorter than [`MIN_PARTIAL_LEN`] only match exactly.
    pub fn resolve(&self, raw: &str) -> Resolution {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Resolution::Unresolved { raw_text: normalized };
        }

        if let Some((_, id)) = self.entries.iter().find(|(key, _)| *key == normalized) {
            return Resolution::Resolved { case_id: id.clone() };
        }

        if normalized.chars().count() >= MIN_PARTIAL_LEN {
            let partial = self.entries.iter().find(|(key, _)| {
                key.contains(normalized.as_str()) || contains_word(&normalized, key)
            });
            if let Some((_, id)) = partial {
                return Resolution::Resolved { case_id: id.clone() };
            }
        }

        Resolution::Unresolved { raw_text: normalized }
    }
}

/// Trim, collapse whitespace runs, and lowercase.
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether `needle` occurs in `haystack` bounded by non-alphanumeric
/// characters or the string ends.
fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
