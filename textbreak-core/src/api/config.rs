//! Configuration API for reflow processing

use crate::domain::{CountingPolicy, DEFAULT_LINE_BUDGET};
use crate::error::{Error, Result};
use std::str::FromStr;

/// Reflow configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub(crate) line_budget: usize,
    pub(crate) policy: CountingPolicy,
    pub(crate) normalize_sentences: bool,
}

impl Default for Config {
    /// Budget of 18 with all-characters counting and sentence separation,
    /// the settings the desktop tool starts with.
    fn default() -> Self {
        Self {
            line_budget: DEFAULT_LINE_BUDGET,
            policy: CountingPolicy::default(),
            normalize_sentences: true,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Korean-only counting without sentence normalization
    pub fn legacy() -> Self {
        Self {
            line_budget: DEFAULT_LINE_BUDGET,
            policy: CountingPolicy::KoreanOnly,
            normalize_sentences: false,
        }
    }

    pub fn line_budget(&self) -> usize {
        self.line_budget
    }

    pub fn policy(&self) -> CountingPolicy {
        self.policy
    }

    pub fn normalize_sentences(&self) -> bool {
        self.normalize_sentences
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.line_budget == 0 {
            return Err(Error::InvalidConfiguration(
                "line_budget must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    line_budget: Option<usize>,
    policy: Option<String>,
    normalize_sentences: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of counted characters per line
    pub fn line_budget(mut self, budget: usize) -> Self {
        self.line_budget = Some(budget);
        self
    }

    /// Set the counting policy by name, parsed on [`ConfigBuilder::build`]
    pub fn policy_name(mut self, name: impl Into<String>) -> Self {
        self.policy = Some(name.into());
        self
    }

    /// Set the counting policy
    pub fn policy(mut self, policy: CountingPolicy) -> Self {
        self.policy = Some(policy.code().to_string());
        self
    }

    /// Enable or disable sentence normalization
    pub fn normalize_sentences(mut self, enabled: bool) -> Self {
        self.normalize_sentences = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(budget) = self.line_budget {
            config.line_budget = budget;
        }

        if let Some(name) = self.policy {
            config.policy = CountingPolicy::from_str(&name)?;
        }

        if let Some(enabled) = self.normalize_sentences {
            config.normalize_sentences = enabled;
        }

        config.validate()?;
        Ok(config)
    }
}
