//! Configuration file support for summarize_violations.
//!
//! Provides YAML-based configuration through
//! `summarize-violations.config.yml` files, including data structures,
//! file loading, validation and merging with command-line options.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::shared::error::SummaryError;
use crate::shared::Result;
use crate::summary::services::{DEFAULT_END_MARKER, DEFAULT_SAMPLE_LENGTH, DEFAULT_START_MARKER};

pub const CONFIG_FILENAME: &str = "summarize-violations.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub sample_length: Option<usize>,
    pub start_marker: Option<String>,
    pub end_marker: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format` value, `None` when the key is absent
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| {
                format.parse::<OutputFormat>().map_err(|message| {
                    anyhow::Error::from(SummaryError::Validation {
                        message: format!("Invalid config: {}", message),
                    })
                })
            })
            .transpose()
    }

    /// Unknown keys, sorted for stable warning output
    pub fn unknown_field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.unknown_fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Command-line values that may override the config file
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub sample_length: Option<usize>,
}

/// Effective settings after merging CLI > config file > defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub sample_length: usize,
    pub start_marker: String,
    pub end_marker: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            sample_length: DEFAULT_SAMPLE_LENGTH,
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
        }
    }
}

impl Settings {
    pub fn resolve(cli: &CliOverrides, config: Option<&ConfigFile>) -> Result<Self> {
        let defaults = Settings::default();

        let config_format = match config {
            Some(config) => config.output_format()?,
            None => None,
        };

        Ok(Self {
            format: cli.format.or(config_format).unwrap_or(defaults.format),
            sample_length: cli
                .sample_length
                .or_else(|| config.and_then(|c| c.sample_length))
                .unwrap_or(defaults.sample_length),
            start_marker: config
                .and_then(|c| c.start_marker.clone())
                .unwrap_or(defaults.start_marker),
            end_marker: config
                .and_then(|c| c.end_marker.clone())
                .unwrap_or(defaults.end_marker),
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| SummaryError::ConfigError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| SummaryError::ConfigError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.output_format()?;

    if config.sample_length == Some(0) {
        return Err(SummaryError::Validation {
            message: "Invalid config: sample_length must be at least 1".to_string(),
        }
        .into());
    }

    for (key, marker) in [
        ("start_marker", &config.start_marker),
        ("end_marker", &config.end_marker),
    ] {
        if marker.as_deref() == Some("") {
            return Err(SummaryError::Validation {
                message: format!("Invalid config: {} must not be empty", key),
            }
            .into());
        }
    }

    Ok(())
}
