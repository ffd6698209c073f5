//! Layered application settings
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. `support-triage.{yaml,toml,json}` in the working directory, if present
//! 3. An explicit file passed by the host (`--config`)
//! 4. Environment variables, e.g. `SUPPORT_TRIAGE__OUTPUT__FORMAT=json`
//!
//! A `responses_file` setting replaces the inline `responses` table with
//! templates loaded from a standalone YAML file.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::sources;
use crate::error::ConfigError;
use crate::responses::ResponseTemplates;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Trace output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when RUST_LOG is unset
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: sources::DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub output: OutputSettings,
    /// Standalone YAML file with response templates
    pub responses_file: Option<PathBuf>,
    pub responses: ResponseTemplates,
}

impl Settings {
    /// Load settings from all sources
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name(sources::DEFAULT_FILE_STEM).required(false));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
                });
            }
            tracing::debug!(path = %path.display(), "Loading settings file");
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix(sources::ENV_PREFIX).separator(sources::ENV_SEPARATOR),
        );

        let mut settings: Settings = builder.build()?.try_deserialize()?;

        if let Some(responses_file) = &settings.responses_file {
            tracing::debug!(path = %responses_file.display(), "Loading response templates");
            settings.responses = ResponseTemplates::load(responses_file)?;
        }

        settings.responses.validate()?;
        Ok(settings)
    }
}
