//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use textbreak_core::{Line, Output, ReflowStats};

/// JSON formatter - outputs one entry per source as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// File name, `<stdin>` or `<clipboard>`
    pub source: String,
    /// Reflowed text joined with line feeds
    pub text: String,
    /// Lines with their weights
    pub lines: Vec<Line>,
    /// Reflow statistics
    pub stats: ReflowStats,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn write_document(&mut self, source: &str, output: &Output) -> Result<()> {
        self.entries.push(DocumentData {
            source: source.to_string(),
            text: output.text(),
            lines: output.document.lines().to_vec(),
            stats: output.stats.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
