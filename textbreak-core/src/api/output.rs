//! Output types for reflow processing

use std::time::Duration;

use serde::Serialize;

use crate::domain::{count_visible, CountingPolicy, Document};

/// Reflowed document with statistics
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// The reflowed lines
    pub document: Document,
    /// Statistics for the status line
    pub stats: ReflowStats,
}

/// Figures reported after a reflow
#[derive(Debug, Clone, Serialize)]
pub struct ReflowStats {
    /// Counted characters per line
    pub line_budget: usize,
    /// Policy used for counting
    pub policy: CountingPolicy,
    /// Whether sentence normalization ran
    pub normalized: bool,
    /// Characters in the input
    pub input_chars: usize,
    /// Non-whitespace characters in the result
    pub visible_chars: usize,
    /// Policy-weighted characters in the result
    pub weighted_chars: usize,
    /// Output lines, paragraph separators included
    pub line_count: usize,
    /// Paragraphs in the result
    pub paragraph_count: usize,
    /// Wall time spent in the reflow call
    #[serde(with = "duration_micros")]
    pub duration: Duration,
}

impl Output {
    pub(crate) fn new(
        document: Document,
        input: &str,
        line_budget: usize,
        policy: CountingPolicy,
        normalized: bool,
        duration: Duration,
    ) -> Self {
        let weighted_chars = document.lines().iter().map(|line| line.weight()).sum();
        let visible_chars = document.texts().map(count_visible).sum();
        let stats = ReflowStats {
            line_budget,
            policy,
            normalized,
            input_chars: input.chars().count(),
            visible_chars,
            weighted_chars,
            line_count: document.len(),
            paragraph_count: document.paragraph_count(),
            duration,
        };
        Self { document, stats }
    }

    /// Result text joined with `\n`
    pub fn text(&self) -> String {
        self.document.join()
    }

    /// One-line summary in the style of the desktop status label
    pub fn summary(&self) -> String {
        format!(
            "{} characters excluding whitespace, {} lines (line budget: {}, policy: {})",
            self.stats.visible_chars,
            self.stats.line_count,
            self.stats.line_budget,
            self.stats.policy
        )
    }
}

mod duration_micros {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(duration.as_micros()).unwrap_or(u64::MAX))
    }
}
