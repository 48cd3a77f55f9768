//! Configured reflow processor

use std::io::Read;
use std::time::Instant;

use crate::api::{Config, Input, Output};
use crate::domain::{count_weighted, ReflowEngine};
use crate::error::Result;

/// Reflow processor holding a validated configuration
#[derive(Debug, Clone)]
pub struct Reflower {
    engine: ReflowEngine,
    config: Config,
}

impl Reflower {
    /// Create a processor with the default configuration
    pub fn new() -> Self {
        Self::from_valid(Config::default())
    }

    /// Create a processor with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Korean-only processor without sentence normalization
    pub fn legacy() -> Self {
        Self::from_valid(Config::legacy())
    }

    fn from_valid(config: Config) -> Self {
        Self {
            engine: ReflowEngine {
                line_budget: config.line_budget,
                policy: config.policy,
            },
            config,
        }
    }

    /// Reflow text read from `input`
    pub fn process(&self, input: Input) -> Result<Output> {
        let text = input.read_text()?;
        Ok(self.process_text(&text))
    }

    /// Reflow text read from a stream
    pub fn process_stream<R: Read + Send + Sync + 'static>(&self, reader: R) -> Result<Output> {
        self.process(Input::from_reader(reader))
    }

    /// Reflow text already in memory
    pub fn process_text(&self, text: &str) -> Output {
        let start = Instant::now();
        let document = self.engine.reflow(text, self.config.normalize_sentences);
        Output::new(
            document,
            text,
            self.config.line_budget,
            self.config.policy,
            self.config.normalize_sentences,
            start.elapsed(),
        )
    }

    /// Weighted count of `text` under the configured policy
    pub fn count(&self, text: &str) -> usize {
        count_weighted(text, self.config.policy)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Reflower {
    fn default() -> Self {
        Self::new()
    }
}
