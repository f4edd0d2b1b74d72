//! Error types for the pipeline

use thiserror::Error;

/// Failures that escape the typed extraction outcomes
///
/// Anything that reaches the caller as a `PipelineError` is unexpected; the
/// pipeline's `run` entry point replaces it with the fallback document.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Filesystem error other than a missing source file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A stage panicked
    #[error("Pipeline panicked: {0}")]
    Panicked(String),
}
