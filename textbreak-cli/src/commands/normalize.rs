//! Normalize command implementation

use std::io::{self, Write};

use clap::Args;
use textbreak_core::normalize_sentences;

use crate::clipboard::{copy_result, Clipboard, SystemClipboard};
use crate::error::CliResult;
use crate::input::resolve_sources;

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Take the input text from the system clipboard
    #[arg(long, conflicts_with = "input")]
    pub from_clipboard: bool,

    /// Copy the normalized text to the system clipboard
    #[arg(long)]
    pub copy: bool,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self) -> CliResult<()> {
        self.execute_with(&mut SystemClipboard)
    }

    /// Execute the normalize command with the given clipboard
    pub fn execute_with(&self, clipboard: &mut dyn Clipboard) -> CliResult<()> {
        let sources = resolve_sources(&self.input, self.from_clipboard, clipboard)?;

        let mut normalized = Vec::with_capacity(sources.len());
        for source in &sources {
            normalized.push(normalize_sentences(&source.read_text()?));
        }
        let text = join_sources(&normalized);

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()?;

        if self.copy {
            copy_result(clipboard, &text)?;
        }
        Ok(())
    }
}

/// Blank line between sources; empty results are dropped
fn join_sources(normalized: &[String]) -> String {
    normalized
        .iter()
        .filter(|text| !text.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n")
}
