//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use textbreak_core::Output;

/// Plain text formatter - writes the reflowed lines, one blank line between
/// sources
pub struct TextFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn write_document(&mut self, _source: &str, output: &Output) -> Result<()> {
        if output.document.is_empty() {
            return Ok(());
        }
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "{}", output.document)?;
        self.documents += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
