//! Engine detection
//!
//! Each probe returns `None` when the engine is absent from this build or
//! environment. Probes never fail and have no side effects.

use crate::ocr::{PdftoppmRasterizer, TesseractRecognizer};
use textsift_domain::traits::{
    DocumentPuller, PageRasterizer, PageTextEngine, TextLayerEngine, TextRecognizer,
};
use tracing::debug;

/// Rasterizer and recognizer pair; OCR needs both
pub struct OcrEngines {
    /// Page-to-image renderer
    pub rasterizer: Box<dyn PageRasterizer>,
    /// Image-to-text recognizer
    pub recognizer: Box<dyn TextRecognizer>,
}

/// Whole-document text layer engine, if compiled in
#[cfg(feature = "pdf-extract")]
pub fn text_layer_engine() -> Option<Box<dyn TextLayerEngine>> {
    Some(Box::new(crate::PdfExtractEngine::new()))
}

/// Whole-document text layer engine, if compiled in
#[cfg(not(feature = "pdf-extract"))]
pub fn text_layer_engine() -> Option<Box<dyn TextLayerEngine>> {
    debug!("text layer engine not compiled in (feature `pdf-extract`)");
    None
}

/// Page-by-page text engine, if compiled in
#[cfg(feature = "lopdf")]
pub fn page_text_engine() -> Option<Box<dyn PageTextEngine>> {
    Some(Box::new(crate::LopdfEngine::new()))
}

/// Page-by-page text engine, if compiled in
#[cfg(not(feature = "lopdf"))]
pub fn page_text_engine() -> Option<Box<dyn PageTextEngine>> {
    debug!("page text engine not compiled in (feature `lopdf`)");
    None
}

/// Word document puller, if compiled in
#[cfg(feature = "docx")]
pub fn document_puller() -> Option<Box<dyn DocumentPuller>> {
    Some(Box::new(crate::DocxPuller::new()))
}

/// Word document puller, if compiled in
#[cfg(not(feature = "docx"))]
pub fn document_puller() -> Option<Box<dyn DocumentPuller>> {
    debug!("document puller not compiled in (feature `docx`)");
    None
}

/// OCR engines, if both `pdftoppm` and `tesseract` are installed
pub fn ocr_engines(dpi: u32, language: &str) -> Option<OcrEngines> {
    let rasterizer = PdftoppmRasterizer::new(dpi);
    let recognizer = TesseractRecognizer::new(language);

    let has_rasterizer = rasterizer.is_available();
    let has_recognizer = recognizer.is_available();
    debug!(
        "OCR probe: pdftoppm={}, tesseract={}",
        has_rasterizer, has_recognizer
    );

    if has_rasterizer && has_recognizer {
        Some(OcrEngines {
            rasterizer: Box::new(rasterizer),
            recognizer: Box::new(recognizer),
        })
    } else {
        None
    }
}
