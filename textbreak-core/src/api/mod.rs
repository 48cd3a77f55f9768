//! Configured reflow API
//!
//! Wraps the domain functions behind a validated [`Config`] so host
//! applications (the CLI, a desktop front end) share one entry point.

mod config;
mod input;
mod output;
mod processor;


pub use config::{Config, ConfigBuilder};
pub use input::Input;
pub use output::{Output, ReflowStats};
pub use processor::Reflower;
