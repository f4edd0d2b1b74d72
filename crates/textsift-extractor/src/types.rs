//! Result types

use serde::{Serialize, Serializer};
use textsift_domain::ExtractionMethod;

/// Normalized text and its sentences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedText {
    /// Whitespace-collapsed, trimmed text
    pub full_text: String,

    /// Sentences in order; empty only if `full_text` is empty
    pub sentences: Vec<String>,
}

/// Statistics about the raw extracted text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Routine that produced the text
    #[serde(serialize_with = "serialize_method")]
    pub extraction_method: ExtractionMethod,

    /// Length of the raw text in characters
    pub character_count: usize,

    /// Number of word tokens in the raw text
    pub word_count: usize,

    /// Whether the raw text is blank
    pub is_empty: bool,
}

/// The structured result of one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultDocument {
    /// Normalized text
    pub full_text: String,

    /// Sentence segmentation of `full_text`
    pub sentences: Vec<String>,

    /// Most frequent significant words
    pub important_words: Vec<String>,

    /// Extraction diagnostics
    pub extraction_stats: ExtractionStats,

    /// Why no text could be extracted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultDocument {
    /// Error-shaped document for failures before extraction could start
    pub fn error_document(message: impl Into<String>) -> Self {
        Self {
            full_text: String::new(),
            sentences: Vec::new(),
            important_words: Vec::new(),
            extraction_stats: ExtractionStats::compute("", ExtractionMethod::Error),
            error: Some(message.into()),
        }
    }

    /// Serialize to compact or pretty JSON
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

fn serialize_method<S: Serializer>(method: &ExtractionMethod, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(method.as_str())
}
