//! Clipboard access for the host application
//!
//! Reflow never touches the clipboard. Commands read input from it or copy
//! results to it at most once per invocation, and a failure only produces a
//! `false` / empty result plus a warning.

use crate::error::CliError;

/// Clipboard collaborator
pub trait Clipboard {
    /// Replace the clipboard content; `true` on success
    fn write(&mut self, text: &str) -> bool;

    /// Current clipboard text, empty on failure
    fn read(&mut self) -> String;
}

/// System clipboard backed by `arboard`
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> bool {
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
            Ok(()) => {
                log::debug!("copied {} chars to clipboard", text.chars().count());
                true
            }
            Err(e) => {
                log::warn!("clipboard copy failed: {e}");
                false
            }
        }
    }

    fn read(&mut self) -> String {
        match arboard::Clipboard::new().and_then(|mut cb| cb.get_text()) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("clipboard read failed: {e}");
                String::new()
            }
        }
    }
}

/// In-memory clipboard
#[derive(Debug)]
pub struct MemoryClipboard {
    content: Option<String>,
    available: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self {
            content: None,
            available: true,
        }
    }

    /// A clipboard whose every access fails
    pub fn unavailable() -> Self {
        Self {
            content: None,
            available: false,
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&mut self, text: &str) -> bool {
        if !self.available {
            return false;
        }
        self.content = Some(text.to_string());
        true
    }

    fn read(&mut self) -> String {
        if !self.available {
            return String::new();
        }
        self.content.clone().unwrap_or_default()
    }
}

/// Copy `text`, turning a failed write into [`CliError::ClipboardUnavailable`]
pub fn copy_text(clipboard: &mut dyn Clipboard, text: &str) -> Result<(), CliError> {
    if clipboard.write(text) {
        Ok(())
    } else {
        Err(CliError::ClipboardUnavailable(
            "could not copy the result".into(),
        ))
    }
}

/// Copy a command result unless it is blank.
///
/// Returns whether the clipboard was written; blank results leave the
/// current clipboard content untouched.
pub fn copy_result(clipboard: &mut dyn Clipboard, text: &str) -> Result<bool, CliError> {
    if text.trim().is_empty() {
        log::warn!("nothing to copy, clipboard left unchanged");
        return Ok(false);
    }
    copy_text(clipboard, text)?;
    Ok(true)
}

/// Read non-blank text, turning an empty result into
/// [`CliError::ClipboardUnavailable`]
pub fn paste_text(clipboard: &mut dyn Clipboard) -> Result<String, CliError> {
    let text = clipboard.read();
    if text.trim().is_empty() {
        return Err(CliError::ClipboardUnavailable(
            "clipboard is empty or could not be read".into(),
        ));
    }
    Ok(text)
}
