//! Engine error type

use std::fmt;

/// A failure reported by an extraction engine
///
/// Engines wrap whatever their backing library or tool reports into this
/// value so the pipeline can log it and move on to the next unit or strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    engine: String,
    message: String,
}

impl EngineError {
    /// Create an engine error
    pub fn new(engine: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            message: message.into(),
        }
    }

    /// Name of the engine that failed
    pub fn engine(&self) -> &str {
        &self.engine
    }

    /// Failure message without the engine prefix
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.engine, self.message)
    }
}

impl std::error::Error for EngineError {}
