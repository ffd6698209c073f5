//! Core types for the support triage prompt chain
//!
//! Holds the closed vocabularies (categories, intent labels, missing fields),
//! the extracted details record and the five-stage pipeline trace. No
//! matching logic lives here; see the text processing and agent crates.

pub mod category;
pub mod details;
pub mod error;
pub mod intent;
pub mod trace;

pub use category::Category;
pub use details::{Details, MissingField};
pub use error::{Result, TriageError};
pub use intent::{IntentLabel, IntentReport, NO_QUERY_MESSAGE};
pub use trace::{PipelineTrace, Stage, StageOutput, StageRecord};
