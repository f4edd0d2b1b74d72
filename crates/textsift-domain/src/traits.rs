//! Trait definitions for extraction engines
//!
//! These traits define the boundary between the pipeline and the black-box
//! engines that turn files into raw text. Implementations live in
//! `textsift-engines`; the pipeline only ever sees these interfaces, which
//! keeps every absent-engine path testable with mocks.

use crate::error::EngineError;
use std::path::{Path, PathBuf};

/// Extracts the text layer of a whole PDF in one call
///
/// Implemented by the infrastructure layer (textsift-engines)
pub trait TextLayerEngine: Send + Sync {
    /// Engine name used in logs
    fn name(&self) -> &str;

    /// Extract all text from the document at `path`
    fn extract_document(&self, path: &Path) -> Result<String, EngineError>;
}

/// A PDF opened for page-by-page extraction
pub trait PagedDocument {
    /// Number of pages in the document
    fn page_count(&self) -> usize;

    /// Extract the text of one page (zero-based index)
    fn page_text(&self, index: usize) -> Result<String, EngineError>;
}

/// Opens PDFs for page-by-page text extraction
///
/// Implemented by the infrastructure layer (textsift-engines)
pub trait PageTextEngine: Send + Sync {
    /// Engine name used in logs
    fn name(&self) -> &str;

    /// Open the document at `path`
    fn open(&self, path: &Path) -> Result<Box<dyn PagedDocument>, EngineError>;
}

/// Renders every page of a PDF to an image file
pub trait PageRasterizer: Send + Sync {
    /// Rasterizer name used in logs
    fn name(&self) -> &str;

    /// Render all pages of `path` into `output_dir`, returning images in page order
    fn rasterize(&self, path: &Path, output_dir: &Path) -> Result<Vec<PathBuf>, EngineError>;
}

/// Recognizes text in a page image
pub trait TextRecognizer: Send + Sync {
    /// Recognizer name used in logs
    fn name(&self) -> &str;

    /// Run OCR over a single image
    fn recognize(&self, image: &Path) -> Result<String, EngineError>;
}

/// Pulls plain text out of a word-processing document
///
/// Implemented by the infrastructure layer (textsift-engines)
pub trait DocumentPuller: Send + Sync {
    /// Engine name used in logs
    fn name(&self) -> &str;

    /// Extract the text of the document at `path`
    fn pull(&self, path: &Path) -> Result<String, EngineError>;
}
