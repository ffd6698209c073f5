//! Configuration errors

use support_triage_core::TriageError;
use thiserror::Error;

/// Errors when loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found at {path}: {source}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid template '{name}': {reason}")]
    InvalidTemplate { name: String, reason: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<ConfigError> for TriageError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidTemplate { name, reason } => TriageError::Template { name, reason },
            other => TriageError::Config(other.to_string()),
        }
    }
}
