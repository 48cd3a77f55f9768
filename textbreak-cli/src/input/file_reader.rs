//! File reading utilities

use anyhow::{Context, Result};
use std::path::Path;
use textbreak_core::Input;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = Input::from_file(path)
            .read_text()
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }
}
