//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use textbreak_core::Output;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output the reflow result of one source
    fn write_document(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., emit the JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Reflowed text only
    #[default]
    Text,
    /// JSON array with lines, weights and statistics
    Json,
    /// Markdown sections with fenced text blocks
    Markdown,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Build the formatter for `format` writing into `writer`
pub fn formatter_for<W>(format: OutputFormat, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
where
    W: std::io::Write + Send + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
