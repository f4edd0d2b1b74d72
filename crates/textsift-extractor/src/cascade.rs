//! PDF extraction cascade
//!
//! Stages run in the configured order and the first one whose text is
//! non-empty after trimming wins. A stage that is not available is skipped.
//! Failures inside a stage are logged and never leave the cascade: an engine
//! error counts as zero text, a failed page is skipped, and a failed OCR page
//! ends OCR with whatever text it had gathered. Every engine call is wrapped in
//! [`guard`], so a panicking engine fails only the unit it was working on.

use crate::config::CascadeStage;
use crate::registry::EngineRegistry;
use std::path::Path;
use textsift_domain::traits::{PageTextEngine, TextLayerEngine};
use textsift_domain::{EngineError, ExtractionOutcome};
use textsift_engines::detect::OcrEngines;
use textsift_engines::guard;
use tracing::{debug, info, warn};

/// Failure of one unit of work (a page, or a whole-document attempt)
#[derive(Debug, Clone)]
pub struct UnitFailure {
    /// Zero-based page index, if the failure is page-scoped
    pub page: Option<usize>,
    /// Engine error
    pub error: EngineError,
}

/// Text accumulated by one stage, with the failures it recovered from
#[derive(Debug, Clone, Default)]
pub struct StageAttempt {
    /// Concatenated text
    pub text: String,
    /// Units that failed and were skipped
    pub failures: Vec<UnitFailure>,
}

impl StageAttempt {
    fn failed(page: Option<usize>, error: EngineError) -> Self {
        Self {
            text: String::new(),
            failures: vec![UnitFailure { page, error }],
        }
    }

    fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Ordered list of PDF strategies over a shared registry
pub struct PdfCascade<'a> {
    registry: &'a EngineRegistry,
    order: &'a [CascadeStage],
}

impl<'a> PdfCascade<'a> {
    /// Create a cascade trying `order` against the engines in `registry`
    pub fn new(registry: &'a EngineRegistry, order: &'a [CascadeStage]) -> Self {
        Self { registry, order }
    }

    /// Extract text from a PDF, or return the `failed` sentinel
    pub fn extract(&self, path: &Path) -> ExtractionOutcome {
        for stage in self.order {
            let attempt = match stage {
                CascadeStage::TextLayer => match self.registry.text_layer() {
                    Some(engine) => text_layer_attempt(engine, path),
                    None => continue,
                },
                CascadeStage::PageText => match self.registry.page_text() {
                    Some(engine) => page_text_attempt(engine, path),
                    None => continue,
                },
                CascadeStage::Ocr => match self.registry.ocr() {
                    Some(engines) => ocr_attempt(engines, path),
                    None => continue,
                },
            };

            if attempt.has_text() {
                info!(
                    "{} extracted {} characters ({} units skipped)",
                    stage,
                    attempt.text.len(),
                    attempt.failures.len()
                );
                return ExtractionOutcome::extracted(attempt.text, stage.method());
            }

            info!("{} produced no text", stage);
        }

        if self.registry.ocr().is_none() {
            warn!(
                "OCR is not available. Install pdftoppm (poppler) and tesseract \
                 to extract scanned PDFs."
            );
        }

        ExtractionOutcome::failed()
    }
}

fn text_layer_attempt(engine: &dyn TextLayerEngine, path: &Path) -> StageAttempt {
    info!("Attempting extraction with {}", engine.name());

    match guard(engine.name(), || engine.extract_document(path)) {
        Ok(text) => StageAttempt {
            text,
            failures: Vec::new(),
        },
        Err(e) => {
            warn!("{} failed: {}", engine.name(), e);
            StageAttempt::failed(None, e)
        }
    }
}

fn page_text_attempt(engine: &dyn PageTextEngine, path: &Path) -> StageAttempt {
    info!("Attempting page-by-page extraction with {}", engine.name());

    let document = match guard(engine.name(), || engine.open(path)) {
        Ok(document) => document,
        Err(e) => {
            warn!("{} could not open document: {}", engine.name(), e);
            return StageAttempt::failed(None, e);
        }
    };

    (0..document.page_count()).fold(StageAttempt::default(), |mut acc, index| {
        match guard(engine.name(), || document.page_text(index)) {
            Ok(text) => {
                if !text.is_empty() {
                    acc.text.push_str(&text);
                    acc.text.push('\n');
                }
            }
            Err(e) => {
                warn!("Error extracting page {}: {}", index + 1, e);
                acc.failures.push(UnitFailure {
                    page: Some(index),
                    error: e,
                });
            }
        }
        acc
    })
}

fn ocr_attempt(engines: &OcrEngines, path: &Path) -> StageAttempt {
    info!(
        "Attempting OCR with {} and {}",
        engines.rasterizer.name(),
        engines.recognizer.name()
    );

    ocr_attempt_in(engines, path, &std::env::temp_dir())
}

fn ocr_attempt_in(engines: &OcrEngines, path: &Path, scratch_root: &Path) -> StageAttempt {
    // Removed on drop, after every page has been recognized
    let scratch = match tempfile::Builder::new()
        .prefix("textsift-ocr-")
        .tempdir_in(scratch_root)
    {
        Ok(scratch) => scratch,
        Err(e) => {
            warn!("Cannot create OCR scratch directory, skipping OCR: {}", e);
            return StageAttempt::failed(
                None,
                EngineError::new("scratch", format!("cannot create scratch directory: {}", e)),
            );
        }
    };

    let rasterizer = engines.rasterizer.as_ref();
    let rasterized = guard(rasterizer.name(), || rasterizer.rasterize(path, scratch.path()));
    let images = match rasterized {
        Ok(images) => images,
        Err(e) => {
            warn!("Rasterization failed: {}", e);
            return StageAttempt::failed(None, e);
        }
    };

    let recognizer = engines.recognizer.as_ref();
    let mut attempt = StageAttempt::default();
    for (index, image) in images.iter().enumerate() {
        debug!("Running OCR on page {}", index + 1);
        match guard(recognizer.name(), || recognizer.recognize(image)) {
            Ok(text) => {
                attempt.text.push_str(&text);
                attempt.text.push_str("\n\n");
            }
            Err(e) => {
                // Keep the pages read so far
                warn!("OCR failed on page {}, stopping: {}", index + 1, e);
                attempt.failures.push(UnitFailure {
                    page: Some(index),
                    error: e,
                });
                break;
            }
        }
    }

    attempt
}

#[cfg(test)]
mod tests {
    use super::*;
    use textsift_domain::ExtractionMethod;
    use textsift_engines::mock::{
        MockPagedEngine, MockRasterizer, MockRecognizer, MockResponse, MockTextLayer,
    };

    fn order() -> Vec<CascadeStage> {
        vec![
            CascadeStage::TextLayer,
            CascadeStage::PageText,
            CascadeStage::Ocr,
        ]
    }

    #[test]
    fn test_page_fold_skips_failed_pages() {
        let engine = MockPagedEngine::new(vec![
            MockResponse::Text("one".to_string()),
            MockResponse::Fail("bad page".to_string()),
            MockResponse::Text(String::new()),
            MockResponse::Text("three".to_string()),
        ]);

        let attempt = page_text_attempt(&engine, Path::new("a.pdf"));
        assert_eq!(attempt.text, "one\nthree\n");
        assert_eq!(attempt.failures.len(), 1);
        assert_eq!(attempt.failures[0].page, Some(1));
    }

    #[test]
    fn test_unopenable_document_is_one_failure() {
        let engine = MockPagedEngine::unopenable("encrypted");
        let attempt = page_text_attempt(&engine, Path::new("a.pdf"));
        assert!(!attempt.has_text());
        assert_eq!(attempt.failures.len(), 1);
        assert_eq!(attempt.failures[0].page, None);
    }

    #[test]
    fn test_ocr_stops_at_first_failed_page() {
        let recognizer = MockRecognizer::new(vec![
            MockResponse::Text("page one".to_string()),
            MockResponse::Fail("unreadable".to_string()),
            MockResponse::Text("page three".to_string()),
        ]);
        let engines = OcrEngines {
            rasterizer: Box::new(MockRasterizer::new(3)),
            recognizer: Box::new(recognizer.clone()),
        };

        let attempt = ocr_attempt(&engines, Path::new("a.pdf"));
        assert_eq!(attempt.text, "page one\n\n");
        assert_eq!(recognizer.call_count(), 2);
    }

    #[test]
    fn test_panicking_page_is_skipped() {
        let engine = MockPagedEngine::new(vec![
            MockResponse::Text("Good page one.".to_string()),
            MockResponse::Panic,
            MockResponse::Text("Good page three.".to_string()),
        ]);

        let attempt = page_text_attempt(&engine, Path::new("a.pdf"));
        assert_eq!(attempt.text, "Good page one.\nGood page three.\n");
        assert_eq!(attempt.failures.len(), 1);
        assert_eq!(attempt.failures[0].page, Some(1));
        assert!(attempt.failures[0].error.message().starts_with("panicked"));
    }

    #[test]
    fn test_panicking_text_layer_falls_through() {
        let registry = EngineRegistry::empty()
            .with_text_layer(MockTextLayer::panicking())
            .with_page_text(MockPagedEngine::with_pages(["Recovered text."]));
        let order = order();

        let outcome = PdfCascade::new(&registry, &order).extract(Path::new("a.pdf"));
        assert_eq!(outcome.method(), ExtractionMethod::PageText);
    }

    #[test]
    fn test_unusable_scratch_root_skips_ocr() {
        let recognizer = MockRecognizer::with_texts(["never read"]);
        let rasterizer = MockRasterizer::new(1);
        let engines = OcrEngines {
            rasterizer: Box::new(rasterizer.clone()),
            recognizer: Box::new(recognizer.clone()),
        };

        let attempt = ocr_attempt_in(
            &engines,
            Path::new("a.pdf"),
            Path::new("/no/such/scratch/root"),
        );
        assert!(!attempt.has_text());
        assert_eq!(attempt.failures.len(), 1);
        assert_eq!(attempt.failures[0].error.engine(), "scratch");
        assert_eq!(rasterizer.call_count(), 0);
        assert_eq!(recognizer.call_count(), 0);
    }

    #[test]
    fn test_whitespace_only_text_falls_through() {
        let registry = EngineRegistry::empty()
            .with_text_layer(MockTextLayer::new("  \n\t "))
            .with_page_text(MockPagedEngine::with_pages(["real text"]));
        let order = order();

        let outcome = PdfCascade::new(&registry, &order)
            .extract(Path::new("a.pdf"));
        assert_eq!(outcome.method(), ExtractionMethod::PageText);
        assert_eq!(outcome.raw_text(), "real text\n");
    }

    #[test]
    fn test_configured_order_is_respected() {
        let text_layer = MockTextLayer::new("from text layer");
        let registry = EngineRegistry::empty()
            .with_text_layer(text_layer.clone())
            .with_page_text(MockPagedEngine::with_pages(["from pages"]));
        let order = vec![CascadeStage::PageText, CascadeStage::TextLayer];

        let outcome = PdfCascade::new(&registry, &order)
            .extract(Path::new("a.pdf"));
        assert_eq!(outcome.method(), ExtractionMethod::PageText);
        assert_eq!(text_layer.call_count(), 0);
    }

    #[test]
    fn test_empty_registry_yields_failed_sentinel() {
        let registry = EngineRegistry::empty();
        let order = order();
        let outcome = PdfCascade::new(&registry, &order)
            .extract(Path::new("a.pdf"));
        assert_eq!(outcome.method(), ExtractionMethod::Failed);
    }
}
