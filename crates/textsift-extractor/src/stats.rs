//! Diagnostics builder

use crate::types::ExtractionStats;
use crate::words::word_count;
use textsift_domain::ExtractionMethod;

impl ExtractionStats {
    /// Statistics of the raw (not normalized) text
    pub fn compute(raw_text: &str, method: ExtractionMethod) -> Self {
        Self {
            extraction_method: method,
            character_count: raw_text.chars().count(),
            word_count: word_count(raw_text),
            is_empty: raw_text.trim().is_empty(),
        }
    }
}
