//! Extraction provenance

use std::fmt;

/// Which routine produced the text of an outcome
///
/// Carried through to the extraction statistics so callers can tell a
/// scanned document (OCR) from one with a text layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionMethod {
    /// File read directly as text
    PlainText,

    /// Whole-document text layer extraction (primary PDF engine)
    TextLayer,

    /// Page-by-page text layer extraction (secondary PDF engine)
    PageText,

    /// Rasterized pages run through OCR
    Ocr,

    /// Word document text puller
    DocumentPuller,

    /// Input or capability error; no extraction was attempted
    Error,

    /// Every available strategy ran and none produced text
    Failed,

    /// Canned result emitted after an unexpected failure
    Fallback,
}

impl ExtractionMethod {
    /// Get the method name as it appears in results
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::PlainText => "plain-text",
            ExtractionMethod::TextLayer => "layer-extract-A",
            ExtractionMethod::PageText => "layer-extract-B",
            ExtractionMethod::Ocr => "ocr",
            ExtractionMethod::DocumentPuller => "document-puller",
            ExtractionMethod::Error => "error",
            ExtractionMethod::Failed => "failed",
            ExtractionMethod::Fallback => "fallback",
        }
    }

    /// Whether this method means no text was extracted
    pub fn is_unsuccessful(&self) -> bool {
        matches!(self, ExtractionMethod::Error | ExtractionMethod::Failed)
    }
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
