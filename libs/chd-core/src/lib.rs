//! Core of the congenital heart disease recognition quiz.
//!
//! Provides:
//! - The case catalog (12 built-in cases, or one loaded from JSON)
//! - Free-text answer resolution against an alias table
//! - Stage-weighted scoring with category partial credit
//! - A Leitner-style review queue for missed cases
//! - The session state machine and its key-value persistence boundary

pub mod catalog;
pub mod error;
pub mod resolver;
pub mod review;
pub mod scoring;
pub mod session;
pub mod store;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, RestoreError, Result, StoreError};
pub use resolver::{AliasTable, Resolution};
pub use review::{ReviewItem, ReviewQueue, ReviewWindow};
pub use scoring::{score, Feedback, STAGE_POINTS};
pub use session::{Event, Outcome, Phase, Progress, Session, SessionSnapshot};
pub use store::{KeyValueStore, MemoryStore};
pub use types::{
    Answer, Case, Category, MediaAsset, NearestDistractor, Rung, SessionSettings, Stage, StageKind,
};
