//! Textsift CLI library.
//!
//! This library provides the pieces of the `textsift` binary: argument
//! parsing, configuration loading, time-limited execution and JSON output.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod runner;

pub use cli::{Cli, USAGE_ERROR};
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
