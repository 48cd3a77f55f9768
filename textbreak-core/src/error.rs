//! Error types for reflow operations

use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors surfaced by the reflow API.
///
/// Empty input, text without countable characters, overlong words and text
/// without periods are not errors; they have defined outputs.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected configuration, e.g. a line budget of zero
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Counting policy name that does not match any variant
    #[error("unknown counting policy: {0}")]
    UnknownPolicy(String),

    /// I/O failure while reading an input source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes were not valid UTF-8
    #[error("encoding error: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// Result type for reflow operations
pub type Result<T> = std::result::Result<T, Error>;
