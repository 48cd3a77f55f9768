//! Validate command implementation

use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::load(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Line budget: {}", config.reflow.line_budget);
                println!(
                    "  Counting policy: {} ({})",
                    config.reflow.policy,
                    config.reflow.policy.name()
                );
                println!(
                    "  Separate sentences: {}",
                    config.reflow.separate_sentences
                );
                println!("  Output format: {}", config.output.default_format.as_str());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
