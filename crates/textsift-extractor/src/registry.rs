//! Strategy registry
//!
//! Engines are probed once when the registry is built. After that the
//! registry is read-only; the dispatcher and the cascade only borrow it.

use crate::config::PipelineConfig;
use serde::Serialize;
use textsift_domain::traits::{
    DocumentPuller, PageRasterizer, PageTextEngine, TextLayerEngine, TextRecognizer,
};
use textsift_engines::detect::{self, OcrEngines};
use tracing::{debug, info};

/// Capability flags: which optional engines are usable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// Whole-document PDF text layer engine
    pub text_layer: bool,
    /// Page-by-page PDF text engine
    pub page_text: bool,
    /// Rasterizer and recognizer pair
    pub ocr: bool,
    /// Word document puller
    pub document_puller: bool,
}

impl Capabilities {
    /// Whether any PDF strategy exists
    pub fn has_pdf_engine(&self) -> bool {
        self.text_layer || self.page_text || self.ocr
    }
}

/// Available engines, each independently optional
#[derive(Default)]
pub struct EngineRegistry {
    text_layer: Option<Box<dyn TextLayerEngine>>,
    page_text: Option<Box<dyn PageTextEngine>>,
    ocr: Option<OcrEngines>,
    document_puller: Option<Box<dyn DocumentPuller>>,
}

impl EngineRegistry {
    /// Registry with no engines at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Probe the environment, honoring the engine switches in `config`
    pub fn detect(config: &PipelineConfig) -> Self {
        let toggles = &config.engines;

        let registry = Self {
            text_layer: toggles
                .text_layer
                .then(detect::text_layer_engine)
                .flatten(),
            page_text: toggles.page_text.then(detect::page_text_engine).flatten(),
            ocr: toggles
                .ocr
                .then(|| detect::ocr_engines(config.ocr.dpi, &config.ocr.language))
                .flatten(),
            document_puller: toggles
                .document_puller
                .then(detect::document_puller)
                .flatten(),
        };

        let caps = registry.capabilities();
        info!(
            "Engines: text-layer={}, page-text={}, ocr={}, docx={}",
            caps.text_layer, caps.page_text, caps.ocr, caps.document_puller
        );
        if let Some(engine) = &registry.text_layer {
            debug!("text layer engine: {}", engine.name());
        }
        if let Some(engine) = &registry.page_text {
            debug!("page text engine: {}", engine.name());
        }

        registry
    }

    /// Use this whole-document text layer engine
    pub fn with_text_layer(mut self, engine: impl TextLayerEngine + 'static) -> Self {
        self.text_layer = Some(Box::new(engine));
        self
    }

    /// Use this page-by-page engine
    pub fn with_page_text(mut self, engine: impl PageTextEngine + 'static) -> Self {
        self.page_text = Some(Box::new(engine));
        self
    }

    /// Use this rasterizer and recognizer for OCR
    pub fn with_ocr(
        mut self,
        rasterizer: impl PageRasterizer + 'static,
        recognizer: impl TextRecognizer + 'static,
    ) -> Self {
        self.ocr = Some(OcrEngines {
            rasterizer: Box::new(rasterizer),
            recognizer: Box::new(recognizer),
        });
        self
    }

    /// Use this word document puller
    pub fn with_document_puller(mut self, puller: impl DocumentPuller + 'static) -> Self {
        self.document_puller = Some(Box::new(puller));
        self
    }

    /// Capability flags derived from the engines present
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            text_layer: self.text_layer.is_some(),
            page_text: self.page_text.is_some(),
            ocr: self.ocr.is_some(),
            document_puller: self.document_puller.is_some(),
        }
    }

    pub(crate) fn text_layer(&self) -> Option<&dyn TextLayerEngine> {
        self.text_layer.as_deref()
    }

    pub(crate) fn page_text(&self) -> Option<&dyn PageTextEngine> {
        self.page_text.as_deref()
    }

    pub(crate) fn ocr(&self) -> Option<&OcrEngines> {
        self.ocr.as_ref()
    }

    pub(crate) fn document_puller(&self) -> Option<&dyn DocumentPuller> {
        self.document_puller.as_deref()
    }
}
