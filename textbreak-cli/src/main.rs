use clap::Parser;
use textbreak_cli::commands::{Commands, RunOptions};

/// Reflow Korean text into lines of a fixed counted width
#[derive(Debug, Parser)]
#[command(name = "textbreak", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress status lines and progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    textbreak_cli::init_logging(cli.verbose, cli.quiet);
    log::debug!("Arguments: {:?}", cli);

    let options = RunOptions { quiet: cli.quiet };
    if let Err(e) = cli.command.execute(options) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
