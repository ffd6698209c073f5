//! Text processing for support queries
//!
//! Pattern-based extraction of amounts, dates, card types, transaction ids
//! and account digits from raw customer text.

pub mod entities;

pub use entities::{missing_fields, DetailExtractor};
