//! Core types for the quiz.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of disclosure stages every case carries.
pub const STAGE_COUNT: usize = 5;

/// Underlying mechanism a case belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    AcyanoticShunt,
    AcyanoticObstructive,
    CyanoticConotruncal,
    CyanoticOther,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Self::AcyanoticShunt,
        Self::AcyanoticObstructive,
        Self::CyanoticConotruncal,
        Self::CyanoticOther,
    ];

    /// Get the category identifier as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AcyanoticShunt => "acyanotic-shunt",
            Self::AcyanoticObstructive => "acyanotic-obstructive",
            Self::CyanoticConotruncal => "cyanotic-conotruncal",
            Self::CyanoticOther => "cyanotic-other",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "acyanotic-shunt" => Some(Self::AcyanoticShunt),
            "acyanotic-obstructive" => Some(Self::AcyanoticObstructive),
            "cyanotic-conotruncal" => Some(Self::CyanoticConotruncal),
            "cyanotic-other" => Some(Self::CyanoticOther),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AcyanoticShunt => "Acyanotic shunt",
            Self::AcyanoticObstructive => "Acyanotic obstructive",
            Self::CyanoticConotruncal => "Cyanotic conotruncal",
            Self::CyanoticOther => "Cyanotic other",
        }
    }
}

/// Kind of disclosure a stage offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Whisper,
    Pathophys,
    Image,
    Audio,
    Confirmatory,
}

impl StageKind {
    /// Stage kinds in ladder order.
    pub const ORDER: [StageKind; STAGE_COUNT] = [
        Self::Whisper,
        Self::Pathophys,
        Self::Image,
        Self::Audio,
        Self::Confirmatory,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Whisper => "Whisper",
            Self::Pathophys => "Pathophysiology",
            Self::Image => "Image",
            Self::Audio => "Audio",
            Self::Confirmatory => "Confirmatory",
        }
    }
}

/// Image or audio attached to a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// One rung of a case's disclosure ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub kind: StageKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaAsset>,
}

/// The most easily confused alternative and how to tell it apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestDistractor {
    pub name: String,
    pub why_not: String,
}

/// A quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub recognition: String,
    pub hook: String,
    pub nearest_distractor: NearestDistractor,
    pub stages: [Stage; STAGE_COUNT],
    pub reveal: String,
    /// Extra labels the resolver accepts besides the id and name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Case {
    /// Stages disclosed up to and including `rung`.
    pub fn visible_stages(&self, rung: Rung) -> &[Stage] {
        &self.stages[..=rung.index()]
    }
}

/// Zero-based disclosure stage reached, always within 0..=4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Rung(u8);

impl Rung {
    pub const FIRST: Rung = Rung(0);
    pub const LAST: Rung = Rung(STAGE_COUNT as u8 - 1);

    /// Create a rung, clamping out-of-range values to the last stage.
    pub fn new(index: u8) -> Self {
        Self(index.min(Self::LAST.0))
    }

    /// The following rung, or this one if already at the last stage.
    pub fn next(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// One-based position as shown to players (R1..R5).
    pub fn ordinal(self) -> u8 {
        self.0 + 1
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }
}

/// Stored rungs outside 0..=4 are clamped rather than rejected.
impl From<i64> for Rung {
    fn from(value: i64) -> Self {
        Self(value.clamp(0, i64::from(Self::LAST.0)) as u8)
    }
}

impl From<Rung> for u8 {
    fn from(rung: Rung) -> Self {
        rung.0
    }
}

/// A submitted answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub case_id: String,
    pub response: String,
    pub rung: Rung,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Session-wide tunables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub review_window: crate::review::ReviewWindow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rung_clamps_to_last_stage() {
        assert_eq!(Rung::new(9), Rung::LAST);
        assert_eq!(Rung::LAST.next(), Rung::LAST);
        assert_eq!(Rung::FIRST.next().index(), 1);
        assert_eq!(Rung::new(2).ordinal(), 3);
    }

    #[test]
    fn rung_deserialize_clamps_corrupt_values() {
        let rung: Rung = serde_json::from_str("42").unwrap();
        assert_eq!(rung, Rung::LAST);

        let rung: Rung = serde_json::from_str("300").unwrap();
        assert_eq!(rung, Rung::LAST);

        let rung: Rung = serde_json::from_str("-1").unwrap();
        assert_eq!(rung, Rung::FIRST);
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str("cyanotic"), None);
    }

    #[test]
    fn category_serializes_kebab_case() {
        let json = serde_json::to_string(&Category::AcyanoticObstructive).unwrap();
        assert_eq!(json, "\"acyanotic-obstructive\"");
    }
}
