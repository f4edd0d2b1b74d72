//! Configuration for the pipeline

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use textsift_domain::ExtractionMethod;

/// One stage of the PDF cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CascadeStage {
    /// Whole-document text layer extraction
    TextLayer,
    /// Page-by-page text extraction
    PageText,
    /// Rasterize pages and recognize them
    Ocr,
}

impl CascadeStage {
    /// Method an outcome produced by this stage is tagged with
    pub fn method(&self) -> ExtractionMethod {
        match self {
            CascadeStage::TextLayer => ExtractionMethod::TextLayer,
            CascadeStage::PageText => ExtractionMethod::PageText,
            CascadeStage::Ocr => ExtractionMethod::Ocr,
        }
    }

    /// Stage name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            CascadeStage::TextLayer => "text-layer",
            CascadeStage::PageText => "page-text",
            CascadeStage::Ocr => "ocr",
        }
    }
}

impl fmt::Display for CascadeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-engine switches; a disabled engine is treated as absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineToggles {
    /// Whole-document PDF text layer engine
    pub text_layer: bool,
    /// Page-by-page PDF text engine
    pub page_text: bool,
    /// External OCR tools
    pub ocr: bool,
    /// Word document puller
    pub document_puller: bool,
}

impl Default for EngineToggles {
    fn default() -> Self {
        Self {
            text_layer: true,
            page_text: true,
            ocr: true,
            document_puller: true,
        }
    }
}

/// Settings for the OCR tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Rasterization resolution
    pub dpi: u32,
    /// Tesseract language code
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            dpi: 150,
            language: "eng".to_string(),
        }
    }
}

/// Configuration for the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Maximum number of important words returned
    pub max_keywords: usize,

    /// Minimum keyword length in characters
    pub min_keyword_chars: usize,

    /// Chunk size (characters) for the last-resort segmenter
    pub chunk_size: usize,

    /// Order in which the PDF cascade tries its stages
    pub cascade_order: Vec<CascadeStage>,

    /// Engine switches
    pub engines: EngineToggles,

    /// OCR settings
    pub ocr: OcrConfig,
}

impl PipelineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_keywords == 0 {
            return Err("max_keywords must be greater than 0".to_string());
        }
        if self.min_keyword_chars == 0 {
            return Err("min_keyword_chars must be greater than 0".to_string());
        }
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than 0".to_string());
        }
        if self.cascade_order.is_empty() {
            return Err("cascade_order must name at least one stage".to_string());
        }
        let mut seen = HashSet::new();
        for stage in &self.cascade_order {
            if !seen.insert(stage) {
                return Err(format!("cascade_order lists '{}' more than once", stage));
            }
        }
        if self.ocr.dpi == 0 {
            return Err("ocr.dpi must be greater than 0".to_string());
        }
        if self.ocr.language.trim().is_empty() {
            return Err("ocr.language cannot be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_keywords: 10,
            min_keyword_chars: 4,
            chunk_size: 100,
            cascade_order: vec![
                CascadeStage::TextLayer,
                CascadeStage::PageText,
                CascadeStage::Ocr,
            ],
            engines: EngineToggles::default(),
            ocr: OcrConfig::default(),
        }
    }
}
