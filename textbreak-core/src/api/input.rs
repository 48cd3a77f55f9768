//! Input abstraction for reflow sources

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Where the text to reflow comes from
pub enum Input {
    /// Text already in memory
    Text(String),
    /// UTF-8 file on disk
    File(PathBuf),
    /// Any byte stream (stdin, sockets)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("chars", &text.chars().count())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish_non_exhaustive(),
        }
    }
}

impl Input {
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole source as UTF-8 text
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => {
                log::debug!("reading input file {}", path.display());
                Ok(String::from_utf8(std::fs::read(&path)?)?)
            }
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                Ok(String::from_utf8(buffer)?)
            }
        }
    }
}
