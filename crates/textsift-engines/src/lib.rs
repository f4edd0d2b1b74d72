//! Textsift Extraction Engines
//!
//! Pluggable engine implementations of the traits in `textsift-domain`.
//!
//! # Engines
//!
//! | Trait | Implementation | Availability |
//! |-------|----------------|--------------|
//! | `TextLayerEngine` | [`PdfExtractEngine`] (`pdf-extract`) | feature `pdf-extract` |
//! | `PageTextEngine` | [`LopdfEngine`] (`lopdf`) | feature `lopdf` |
//! | `PageRasterizer` | [`PdftoppmRasterizer`] (poppler `pdftoppm`) | executable on `PATH` |
//! | `TextRecognizer` | [`TesseractRecognizer`] (`tesseract`) | executable on `PATH` |
//! | `DocumentPuller` | [`DocxPuller`] (`docx-rs`) | feature `docx` |
//!
//! The [`detect`] module probes what is usable in the current build and
//! environment. The [`mock`] module provides deterministic engines for tests.
//!
//! # Examples
//!
//! ```
//! use textsift_engines::mock::MockTextLayer;
//! use textsift_domain::traits::TextLayerEngine;
//! use std::path::Path;
//!
//! let engine = MockTextLayer::new("Hello from the text layer.");
//! let text = engine.extract_document(Path::new("any.pdf")).unwrap();
//! assert_eq!(text, "Hello from the text layer.");
//! ```

#![warn(missing_docs)]

use std::panic::{catch_unwind, AssertUnwindSafe};
use textsift_domain::EngineError;

pub mod detect;
pub mod mock;
pub mod ocr;

#[cfg(feature = "docx")]
pub mod docx;
#[cfg(feature = "lopdf")]
pub mod lopdf_pages;
#[cfg(feature = "pdf-extract")]
pub mod pdf_text;

#[cfg(feature = "docx")]
pub use docx::DocxPuller;
#[cfg(feature = "lopdf")]
pub use lopdf_pages::LopdfEngine;
pub use ocr::{PdftoppmRasterizer, TesseractRecognizer};
#[cfg(feature = "pdf-extract")]
pub use pdf_text::PdfExtractEngine;

/// Render a panic payload as a message
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Run one engine call, reporting a panic inside it as an [`EngineError`]
///
/// Several parsing libraries panic on malformed input instead of returning an
/// error. Wrapping each unit of work keeps one bad page from losing the rest.
pub fn guard<T>(
    engine: &str,
    call: impl FnOnce() -> Result<T, EngineError>,
) -> Result<T, EngineError> {
    catch_unwind(AssertUnwindSafe(call)).unwrap_or_else(|payload| {
        Err(EngineError::new(
            engine,
            format!("panicked: {}", panic_message(payload.as_ref())),
        ))
    })
}
