//! Output formatting for the CLI.
//!
//! Everything written here goes to stdout and is always a single JSON value.

use crate::error::Result;
use serde::Serialize;
use textsift_extractor::{Capabilities, ResultDocument};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Compact single-line JSON
    Json,
    /// Indented JSON
    Pretty,
}

/// Engine availability report printed by `--probe`.
#[derive(Debug, Serialize)]
struct ProbeReport<'a> {
    version: &'a str,
    engines: Capabilities,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format a result document.
    pub fn format_document(&self, document: &ResultDocument) -> Result<String> {
        Ok(document.to_json(self.format == OutputFormat::Pretty)?)
    }

    /// Format the engine capabilities.
    pub fn format_capabilities(&self, capabilities: Capabilities) -> Result<String> {
        let report = ProbeReport {
            version: env!("CARGO_PKG_VERSION"),
            engines: capabilities,
        };
        self.to_json(&report)
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(match self.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        })
    }
}
