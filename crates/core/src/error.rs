//! Error types shared across the workspace
//!
//! The prompt chain itself cannot fail. Errors only come from the edges:
//! loading configuration, validating templates, and rendering output.

use thiserror::Error;

/// Workspace-wide error
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid response template '{name}': {reason}")]
    Template { name: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TriageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_error_message() {
        let err = TriageError::Template {
            name: "loan_inquiry".to_string(),
            reason: "unknown placeholder {rate}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid response template 'loan_inquiry': unknown placeholder {rate}"
        );
    }
}
