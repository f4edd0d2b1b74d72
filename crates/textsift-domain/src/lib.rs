//! Textsift Domain Layer
//!
//! This crate contains the core vocabulary of the extraction pipeline. It has
//! ZERO external dependencies and defines the value objects and engine trait
//! interfaces that all other crates depend upon.
//!
//! ## Key Concepts
//!
//! - **SourceDocument**: a file path plus the type declared by its file name
//! - **ExtractionMethod**: provenance tag recording which strategy produced text
//! - **ExtractionOutcome**: the raw text of one extraction routine, or a typed diagnostic
//! - **Engines**: black-box extractors (text layer, paged text, OCR, document puller)
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Engine implementations live in `textsift-engines`
//! - Pipeline orchestration lives in `textsift-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod method;
pub mod outcome;
pub mod traits;

// Re-exports for convenience
pub use document::{DocumentType, SourceDocument};
pub use error::EngineError;
pub use method::ExtractionMethod;
pub use outcome::{Diagnostic, ExtractionOutcome};
