//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use textbreak_core::Output;

/// Markdown formatter - one section per source with a fenced text block
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    line_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line_count: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn write_document(&mut self, source: &str, output: &Output) -> Result<()> {
        self.line_count += output.stats.line_count;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "```text")?;
        if !output.document.is_empty() {
            writeln!(self.writer, "{}", output.document)?;
        }
        writeln!(self.writer, "```")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "*{}*", output.summary())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total lines: {}*", self.line_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
