//! Support triage agent
//!
//! Classifies a free-text support query, extracts transaction details and
//! produces a short templated reply.
//!
//! # Example
//!
//! ```
//! use support_triage_agent::run_prompt_chain;
//! use support_triage_core::Category;
//!
//! let trace = run_prompt_chain("I want to open a new account");
//! assert_eq!(trace.category, Category::AccountOpening);
//! assert_eq!(trace.records().len(), 5);
//! ```

pub mod interpreter;
pub mod mapper;
pub mod pipeline;
pub mod response;
pub mod selector;

pub use interpreter::interpret_intent;
pub use mapper::map_to_categories;
pub use pipeline::{run_prompt_chain, TriagePipeline};
pub use response::{generate_short_response, ResponseGenerator};
pub use selector::choose_category;

// Re-export the extractor so hosts need only this crate
pub use support_triage_text_processing::{missing_fields, DetailExtractor};
