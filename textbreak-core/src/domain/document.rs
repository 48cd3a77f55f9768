//! Reflow result types

use std::fmt;

use serde::Serialize;

use super::classifier::CountingPolicy;

/// A single output line: words joined by single spaces.
///
/// An empty line stands for a preserved paragraph break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    text: String,
    weight: usize,
}

impl Line {
    /// Build a line from rendered text, weighing it under `policy`
    pub fn new(text: impl Into<String>, policy: CountingPolicy) -> Self {
        let text = text.into();
        let weight = policy.count(&text);
        Self { text, weight }
    }

    /// Build a line whose weight is already known
    pub(crate) fn with_weight(text: String, weight: usize) -> Self {
        Self { text, weight }
    }

    /// Paragraph separator
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            weight: 0,
        }
    }

    /// Rendered text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sum of character weights under the policy the line was built with
    pub fn weight(&self) -> usize {
        self.weight
    }

    /// Whether this line is a paragraph separator
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered lines produced by one reflow call, serialized with `\n`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Empty document
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub(crate) fn extend(&mut self, lines: impl IntoIterator<Item = Line>) {
        self.lines.extend(lines);
    }

    /// All lines, separators included
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines, separators included
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of paragraphs (runs of non-blank lines)
    pub fn paragraph_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        1 + self.lines.iter().filter(|line| line.is_blank()).count()
    }

    /// Heaviest line weight, 0 for an empty document
    pub fn max_weight(&self) -> usize {
        self.lines.iter().map(Line::weight).max().unwrap_or(0)
    }

    /// Line texts in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(Line::text)
    }

    /// Join all lines with `\n`
    pub fn join(&self) -> String {
        self.to_string()
    }

    /// Consume the document into its line texts
    pub fn into_texts(self) -> Vec<String> {
        self.lines.into_iter().map(|line| line.text).collect()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line.text())?;
        }
        Ok(())
    }
}
