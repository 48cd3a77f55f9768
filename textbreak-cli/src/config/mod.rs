//! Configuration module
//!
//! Settings resolve in this order: command-line flag, environment variable,
//! configuration file, built-in default.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use textbreak_core::{CountingPolicy, DEFAULT_LINE_BUDGET};

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Reflow configuration
    #[serde(default)]
    pub reflow: ReflowConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Reflow-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ReflowConfig {
    /// Counted characters per line
    pub line_budget: usize,

    /// Counting policy code
    pub policy: CountingPolicy,

    /// Split sentences into paragraphs before wrapping
    pub separate_sentences: bool,
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self {
            line_budget: DEFAULT_LINE_BUDGET,
            policy: CountingPolicy::default(),
            separate_sentences: true,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Copy the result to the clipboard after every reflow
    pub copy_to_clipboard: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
            copy_to_clipboard: false,
        }
    }
}

impl CliConfig {
    /// Load and validate a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check values the core would reject
    pub fn validate(&self) -> Result<(), CliError> {
        if self.reflow.line_budget == 0 {
            return Err(CliError::ConfigError(
                "reflow.line_budget must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
