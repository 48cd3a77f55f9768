//! Count command implementation

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use textbreak_core::{count_visible, CountingPolicy};

use super::PolicyArg;
use crate::clipboard::SystemClipboard;
use crate::error::CliResult;
use crate::input::resolve_sources;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Take the input text from the system clipboard
    #[arg(long, conflicts_with = "input")]
    pub from_clipboard: bool,

    /// Report only this policy (default: all of them)
    #[arg(short, long, value_enum)]
    pub policy: Option<PolicyArg>,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> CliResult<()> {
        let sources = resolve_sources(&self.input, self.from_clipboard, &mut SystemClipboard)?;
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        for source in &sources {
            let text = source.read_text()?;
            self.report(&mut writer, &source.label(), &text)?;
        }
        Ok(())
    }

    fn policies(&self) -> Vec<CountingPolicy> {
        match self.policy {
            Some(policy) => vec![policy.into()],
            None => CountingPolicy::ALL.to_vec(),
        }
    }

    fn report<W: Write>(&self, writer: &mut W, label: &str, text: &str) -> Result<()> {
        writeln!(writer, "{label}")?;
        for policy in self.policies() {
            writeln!(writer, "  {:<28} {}", policy.code(), policy.count(text))?;
        }
        writeln!(writer, "  {:<28} {}", "visible", count_visible(text))?;
        Ok(())
    }
}
