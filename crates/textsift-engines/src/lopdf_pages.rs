//! Page-by-page text extraction with `lopdf`

use crate::guard;
use lopdf::Document;
use std::path::Path;
use textsift_domain::traits::{PageTextEngine, PagedDocument};
use textsift_domain::EngineError;
use tracing::debug;

const ENGINE_NAME: &str = "lopdf";

/// Secondary PDF engine: opens the document once and extracts each page separately
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfEngine;

impl LopdfEngine {
    /// Create the engine
    pub fn new() -> Self {
        Self
    }
}

impl PageTextEngine for LopdfEngine {
    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn open(&self, path: &Path) -> Result<Box<dyn PagedDocument>, EngineError> {
        let document = guard(ENGINE_NAME, || {
            Document::load(path).map_err(|e| EngineError::new(ENGINE_NAME, e.to_string()))
        })?;

        // get_pages is keyed by 1-based page number
        let mut page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        page_numbers.sort_unstable();

        debug!("lopdf opened {} ({} pages)", path.display(), page_numbers.len());

        Ok(Box::new(LopdfDocument {
            document,
            page_numbers,
        }))
    }
}

struct LopdfDocument {
    document: Document,
    page_numbers: Vec<u32>,
}

impl PagedDocument for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String, EngineError> {
        let page_number = self.page_numbers.get(index).copied().ok_or_else(|| {
            EngineError::new(
                ENGINE_NAME,
                format!("page index {} out of range ({} pages)", index, self.page_numbers.len()),
            )
        })?;

        guard(ENGINE_NAME, || {
            self.document
                .extract_text(&[page_number])
                .map_err(|e| EngineError::new(ENGINE_NAME, format!("page {}: {}", page_number, e)))
        })
    }
}
