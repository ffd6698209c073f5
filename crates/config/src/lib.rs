//! Configuration for the support triage prompt chain
//!
//! Routing constants, reply templates and layered settings.

pub mod constants;
pub mod error;
pub mod responses;
pub mod settings;

pub use error::ConfigError;
pub use responses::{ResponseTemplates, KNOWN_PLACEHOLDERS};
pub use settings::{LogFormat, LoggingSettings, OutputFormat, OutputSettings, Settings};
