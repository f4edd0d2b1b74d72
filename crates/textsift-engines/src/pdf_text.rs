//! Whole-document text layer extraction with `pdf-extract`

use crate::guard;
use std::path::Path;
use textsift_domain::traits::TextLayerEngine;
use textsift_domain::EngineError;
use tracing::debug;

/// Primary PDF engine: reads the text layer of the whole document at once
///
/// `pdf-extract` panics on some malformed fonts, so the call is wrapped in
/// [`guard`] and a panic is reported as an ordinary engine error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractEngine;

impl PdfExtractEngine {
    /// Create the engine
    pub fn new() -> Self {
        Self
    }
}

impl TextLayerEngine for PdfExtractEngine {
    fn name(&self) -> &str {
        "pdf-extract"
    }

    fn extract_document(&self, path: &Path) -> Result<String, EngineError> {
        let text = guard(self.name(), || {
            pdf_extract::extract_text(path).map_err(|e| EngineError::new(self.name(), e.to_string()))
        })?;
        debug!("pdf-extract returned {} characters", text.len());
        Ok(text)
    }
}
