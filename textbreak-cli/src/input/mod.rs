//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::clipboard::{paste_text, Clipboard};

/// A single text source for a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file resolved from a pattern
    File(PathBuf),
    /// Text taken from the clipboard
    Clipboard(String),
}

impl InputSource {
    /// Label used in reports and structured output
    pub fn label(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Clipboard(_) => "<clipboard>".to_string(),
        }
    }

    /// Read the source as UTF-8 text
    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read from stdin")?;
                Ok(buffer)
            }
            InputSource::File(path) => FileReader::read_text(path),
            InputSource::Clipboard(text) => Ok(text.clone()),
        }
    }
}

/// Decide where input comes from: the clipboard when requested, the given
/// file patterns, or standard input when neither is present.
pub fn resolve_sources(
    patterns: &[String],
    from_clipboard: bool,
    clipboard: &mut dyn Clipboard,
) -> Result<Vec<InputSource>> {
    if from_clipboard {
        let text = paste_text(clipboard)?;
        return Ok(vec![InputSource::Clipboard(text)]);
    }

    if patterns.is_empty() || patterns.iter().all(|p| p == "-") {
        return Ok(vec![InputSource::Stdin]);
    }

    Ok(resolve_patterns(patterns)?
        .into_iter()
        .map(InputSource::File)
        .collect())
}
