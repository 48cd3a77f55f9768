//! Generate config command implementation

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use textbreak_core::{CountingPolicy, DEFAULT_LINE_BUDGET};

use super::RunOptions;
use crate::error::CliResult;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self, options: RunOptions) -> CliResult<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        std::fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        if !options.quiet {
            println!("✓ Configuration template written to {}", self.output.display());
            println!();
            println!("Next steps:");
            println!("1. Edit the line budget and counting policy");
            println!("2. Validate your configuration:");
            println!("   textbreak validate -c {}", self.output.display());
            println!("3. Use it for reflowing:");
            println!("   textbreak reflow -i input.txt -c {}", self.output.display());
        }

        Ok(())
    }
}

/// Commented template whose values equal the built-in defaults
fn generate_template() -> String {
    let policies = CountingPolicy::ALL
        .iter()
        .map(|policy| format!("#   {:<28} {}", policy.code(), policy.name()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"# textbreak configuration

[reflow]
# Counted characters per line (must be greater than 0)
line_budget = {budget}

# Which characters count toward the line budget:
{policies}
policy = "{policy}"

# Put every sentence in its own paragraph before wrapping
separate_sentences = true

[output]
# text, json or markdown
default_format = "text"

# Pretty print JSON output
pretty_json = true

# Copy the result to the clipboard after every reflow
copy_to_clipboard = false
"#,
        budget = DEFAULT_LINE_BUDGET,
        policies = policies,
        policy = CountingPolicy::default().code(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let config = CliConfig::from_toml(&generate_template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_template_lists_every_policy() {
        let template = generate_template();
        for policy in CountingPolicy::ALL {
            assert!(template.contains(policy.code()));
        }
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("textbreak.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };

        assert!(args.execute(RunOptions { quiet: true }).is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("line_budget = 18"));
    }

    #[test]
    fn test_existing_file_needs_force() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("textbreak.toml");
        std::fs::write(&output_path, "keep me").unwrap();

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };
        assert!(args.execute(RunOptions { quiet: true }).is_err());
        assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "keep me");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: true,
        };
        assert!(args.execute(RunOptions { quiet: true }).is_ok());
    }
}
