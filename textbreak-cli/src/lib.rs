//! Textbreak CLI library
//!
//! This library provides the command-line interface for reflowing Korean
//! text into fixed-width lines.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

/// Initialize logging from the verbosity flags. `RUST_LOG` still wins.
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    // A second initialization (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .try_init();
}
