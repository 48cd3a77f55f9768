//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from core
    ProcessingError(String),
    /// The system clipboard could not be read or written
    ClipboardUnavailable(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
            CliError::ClipboardUnavailable(msg) => write!(f, "Clipboard unavailable: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<textbreak_core::Error> for CliError {
    fn from(err: textbreak_core::Error) -> Self {
        match err {
            textbreak_core::Error::InvalidConfiguration(msg) => CliError::ConfigError(msg),
            textbreak_core::Error::UnknownPolicy(name) => {
                CliError::ConfigError(format!("unknown counting policy '{name}'"))
            }
            other => CliError::ProcessingError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
