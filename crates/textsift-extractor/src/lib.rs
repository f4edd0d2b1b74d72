//! Textsift Extractor
//!
//! Turns a document on disk into normalized text, sentences, important words
//! and extraction statistics.
//!
//! # Architecture
//!
//! ```text
//! SourceDocument → Dispatcher → (plain text | PDF cascade | document puller)
//!                → ExtractionOutcome → Normalizer + Keywords + Stats
//!                → ResultDocument
//! ```
//!
//! The PDF cascade tries the text layer, then page-by-page text, then OCR, and
//! stops at the first stage that yields non-empty text. Engines come from an
//! [`EngineRegistry`] built once at startup.
//!
//! Extraction problems never escape as errors: a missing file, an unsupported
//! type, an absent engine or an exhausted cascade all produce a well-formed
//! [`ResultDocument`] with an `error` message. Apart from a missing file, the
//! message is also the extracted text, so readers of `full_text` see it.
//! [`Pipeline::run`] additionally turns unexpected errors and panics into the
//! fixed fallback document.
//!
//! # Example Usage
//!
//! ```
//! use textsift_domain::SourceDocument;
//! use textsift_engines::mock::MockTextLayer;
//! use textsift_extractor::{EngineRegistry, Pipeline, PipelineConfig, RunStatus};
//! use std::io::Write;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut file = tempfile::NamedTempFile::new()?;
//! file.write_all(b"%PDF-1.4")?;
//!
//! let registry = EngineRegistry::empty()
//!     .with_text_layer(MockTextLayer::new("Quarterly revenue grew. Margins held."));
//! let pipeline = Pipeline::new(registry, PipelineConfig::default())?;
//!
//! let output = pipeline.run(&SourceDocument::new(file.path(), "report.pdf"));
//! assert_eq!(output.status, RunStatus::Completed);
//! assert_eq!(output.document.sentences.len(), 2);
//! assert_eq!(output.document.extraction_stats.extraction_method.as_str(), "layer-extract-A");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod cascade;
mod config;
mod dispatcher;
mod error;
mod fallback;
mod keywords;
mod normalize;
mod pipeline;
mod registry;
mod stats;
mod types;
mod words;


pub use cascade::{PdfCascade, StageAttempt, UnitFailure};
pub use config::{CascadeStage, EngineToggles, OcrConfig, PipelineConfig};
pub use dispatcher::{dispatch, read_text_lossy};
pub use error::PipelineError;
pub use fallback::fallback_document;
pub use keywords::{KeywordExtractor, STOPWORDS};
pub use normalize::{normalize_whitespace, process_text, Segmenter};
pub use pipeline::{Pipeline, PipelineOutput, RunStatus};
pub use registry::{Capabilities, EngineRegistry};
pub use types::{ExtractionStats, ProcessedText, ResultDocument};
pub use words::{word_count, words};
