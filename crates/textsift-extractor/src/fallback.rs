//! Fallback responder
//!
//! The fallback document is fixed: it never depends on the input, so it can
//! be produced after any failure, including a panic or a timeout.

use crate::types::{ExtractionStats, ResultDocument};
use textsift_domain::ExtractionMethod;

const FALLBACK_SENTENCES: &[&str] = &[
    "We could not process this document automatically.",
    "The file may be damaged, protected, or in a format that is not supported yet.",
    "Please try uploading the document again or save it as plain text first.",
];

const FALLBACK_WORDS: &[&str] = &["document", "process", "upload", "format", "text"];

/// The fixed document returned after an unexpected failure
pub fn fallback_document() -> ResultDocument {
    let full_text = FALLBACK_SENTENCES.join(" ");
    ResultDocument {
        extraction_stats: ExtractionStats::compute(&full_text, ExtractionMethod::Fallback),
        sentences: FALLBACK_SENTENCES.iter().map(|s| s.to_string()).collect(),
        important_words: FALLBACK_WORDS.iter().map(|s| s.to_string()).collect(),
        full_text,
        error: None,
    }
}
