//! Result assembler: the pipeline entry points

use crate::config::PipelineConfig;
use crate::dispatcher::dispatch;
use crate::error::PipelineError;
use crate::fallback::fallback_document;
use crate::keywords::KeywordExtractor;
use crate::normalize::process_text;
use crate::registry::{Capabilities, EngineRegistry};
use crate::types::{ExtractionStats, ResultDocument};
use std::panic::{self, AssertUnwindSafe};
use textsift_domain::{ExtractionOutcome, SourceDocument};
use textsift_engines::panic_message;
use tracing::{debug, error, info};

/// How an invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// A document was produced from the input, possibly describing a failed
    /// extraction
    Completed,
    /// The caller's input was unusable (missing file)
    InputError,
    /// An unexpected failure was replaced by the fallback document
    Fallback,
}

/// A result document and how it came about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    /// Document to hand to the caller
    pub document: ResultDocument,
    /// How the invocation ended
    pub status: RunStatus,
}

impl PipelineOutput {
    /// Output carrying the fallback document
    pub fn fallback() -> Self {
        Self {
            document: fallback_document(),
            status: RunStatus::Fallback,
        }
    }
}

/// Extraction pipeline over a fixed set of engines
///
/// The registry and configuration are read-only after construction, so one
/// pipeline can serve any number of invocations.
pub struct Pipeline {
    registry: EngineRegistry,
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline over an explicit registry
    pub fn new(registry: EngineRegistry, config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Config)?;
        Ok(Self { registry, config })
    }

    /// Create a pipeline over the engines found in this environment
    pub fn detect(config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Config)?;
        let registry = EngineRegistry::detect(&config);
        Ok(Self { registry, config })
    }

    /// Capability flags of the registry
    pub fn capabilities(&self) -> Capabilities {
        self.registry.capabilities()
    }

    /// Active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Extract, normalize and analyze one document
    ///
    /// Extraction problems are reported inside the document; `Err` means an
    /// unexpected failure.
    pub fn process(&self, source: &SourceDocument) -> Result<PipelineOutput, PipelineError> {
        let outcome = dispatch(source, &self.registry, &self.config)?;
        Ok(self.assemble(&outcome))
    }

    /// Like [`Pipeline::process`], but never fails
    ///
    /// Errors and panics are logged and replaced by the fallback document.
    pub fn run(&self, source: &SourceDocument) -> PipelineOutput {
        match panic::catch_unwind(AssertUnwindSafe(|| self.process(source))) {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                error!("Unexpected error: {}", e);
                PipelineOutput::fallback()
            }
            Err(payload) => {
                let e = PipelineError::Panicked(panic_message(payload.as_ref()));
                error!("Unexpected error: {}", e);
                PipelineOutput::fallback()
            }
        }
    }

    /// Build the result document for an extraction outcome
    pub fn assemble(&self, outcome: &ExtractionOutcome) -> PipelineOutput {
        let raw = outcome.raw_text();
        let processed = process_text(raw, self.config.chunk_size);
        let important_words =
            KeywordExtractor::new(self.config.max_keywords, self.config.min_keyword_chars)
                .extract(raw);
        let extraction_stats = ExtractionStats::compute(raw, outcome.method());

        debug!(
            "{} sentences, {} important words",
            processed.sentences.len(),
            important_words.len()
        );
        info!(
            "Extraction finished: method={}, characters={}",
            extraction_stats.extraction_method, extraction_stats.character_count
        );

        let status = match outcome.diagnostic() {
            Some(diagnostic) if diagnostic.is_input_error() => RunStatus::InputError,
            _ => RunStatus::Completed,
        };

        PipelineOutput {
            document: ResultDocument {
                full_text: processed.full_text,
                sentences: processed.sentences,
                important_words,
                extraction_stats,
                error: outcome.diagnostic().map(|d| d.to_string()),
            },
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = PipelineConfig::default();
        config.chunk_size = 0;
        let result = Pipeline::new(EngineRegistry::empty(), config);
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }
}
