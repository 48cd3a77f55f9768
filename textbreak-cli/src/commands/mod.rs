//! CLI command implementations

use clap::Subcommand;
use textbreak_core::CountingPolicy;

use crate::error::CliResult;
use crate::output::OutputFormat;

pub mod count;
pub mod generate_config;
pub mod normalize;
pub mod reflow;
pub mod validate;

/// Options shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Suppress status lines and progress bars
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reflow text into lines of a fixed counted width
    Reflow(reflow::ReflowArgs),

    /// Count characters under each counting policy
    Count(count::CountArgs),

    /// Print text with every sentence moved into its own paragraph
    Normalize(normalize::NormalizeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List counting policies
    Policies,

    /// List output formats
    Formats,
}

/// Counting policy selectable on the command line
///
/// Values are the policy codes printed by `list policies`; shorter aliases
/// are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PolicyArg {
    /// Only Hangul syllables count
    #[value(name = "korean-only", aliases = ["korean", "ko", "hangul"])]
    KoreanOnly,
    /// Every character except the space counts
    #[value(name = "all-chars-simple", aliases = ["all-chars", "all", "simple"])]
    AllChars,
    /// Spaces, commas, periods, `!`, line feeds and invisible marks are skipped
    #[value(name = "all-chars-excluding-period", alias = "excluding-period")]
    ExcludingPeriod,
    /// Like all-chars-excluding-period, but periods count
    #[value(name = "all-chars-including-period", alias = "including-period")]
    IncludingPeriod,
}

impl From<PolicyArg> for CountingPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::KoreanOnly => CountingPolicy::KoreanOnly,
            PolicyArg::AllChars => CountingPolicy::AllCharsSimple,
            PolicyArg::ExcludingPeriod => CountingPolicy::AllCharsExcludingPeriod,
            PolicyArg::IncludingPeriod => CountingPolicy::AllCharsIncludingPeriod,
        }
    }
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, options: RunOptions) -> CliResult<()> {
        match self {
            Commands::Reflow(args) => args.execute(options),
            Commands::Count(args) => args.execute(),
            Commands::Normalize(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(options),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Policies => {
                println!("Available counting policies:");
                for policy in CountingPolicy::ALL {
                    println!("  {:<28} {}", policy.code(), policy.name());
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  {:<10} Reflowed text only", OutputFormat::Text.as_str());
                println!(
                    "  {:<10} Lines with weights and statistics",
                    OutputFormat::Json.as_str()
                );
                println!(
                    "  {:<10} One section per input with a fenced block",
                    OutputFormat::Markdown.as_str()
                );
            }
        }
    }
}
