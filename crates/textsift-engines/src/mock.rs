//! Deterministic mock engines for testing
//!
//! These engines return pre-configured text without touching the file they
//! are given. Every mock counts its calls so tests can assert that the
//! cascade short-circuits.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use textsift_domain::traits::{
    DocumentPuller, PageRasterizer, PageTextEngine, PagedDocument, TextLayerEngine,
    TextRecognizer,
};
use textsift_domain::EngineError;

/// What a mock does when called
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    /// Return this text
    Text(String),
    /// Fail with this message
    Fail(String),
    /// Panic, simulating a crash inside a third-party engine
    Panic,
}

impl MockResponse {
    fn resolve(&self, engine: &str) -> Result<String, EngineError> {
        match self {
            MockResponse::Text(text) => Ok(text.clone()),
            MockResponse::Fail(message) => Err(EngineError::new(engine, message.clone())),
            MockResponse::Panic => panic!("{} mock panicked", engine),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct CallCounter(Arc<Mutex<usize>>);

impl CallCounter {
    fn hit(&self) -> usize {
        let mut count = self.0.lock().unwrap();
        *count += 1;
        *count
    }

    fn get(&self) -> usize {
        *self.0.lock().unwrap()
    }
}

/// Mock whole-document text layer engine
#[derive(Debug, Clone)]
pub struct MockTextLayer {
    response: MockResponse,
    calls: CallCounter,
}

impl MockTextLayer {
    /// Engine that returns `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self::scripted(MockResponse::Text(text.into()))
    }

    /// Engine that fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self::scripted(MockResponse::Fail(message.into()))
    }

    /// Engine that panics when called
    pub fn panicking() -> Self {
        Self::scripted(MockResponse::Panic)
    }

    fn scripted(response: MockResponse) -> Self {
        Self {
            response,
            calls: CallCounter::default(),
        }
    }

    /// Number of times the engine was called
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl TextLayerEngine for MockTextLayer {
    fn name(&self) -> &str {
        "mock-text-layer"
    }

    fn extract_document(&self, _path: &Path) -> Result<String, EngineError> {
        self.calls.hit();
        self.response.resolve(self.name())
    }
}

/// Mock page-by-page engine with a fixed response per page
#[derive(Debug, Clone)]
pub struct MockPagedEngine {
    pages: Vec<MockResponse>,
    open_error: Option<String>,
    calls: CallCounter,
}

impl MockPagedEngine {
    /// Engine whose documents have one page per entry
    pub fn new(pages: Vec<MockResponse>) -> Self {
        Self {
            pages,
            open_error: None,
            calls: CallCounter::default(),
        }
    }

    /// Engine whose documents all have these page texts
    pub fn with_pages<S: Into<String>>(pages: impl IntoIterator<Item = S>) -> Self {
        Self::new(pages.into_iter().map(|p| MockResponse::Text(p.into())).collect())
    }

    /// Engine that cannot open any document
    pub fn unopenable(message: impl Into<String>) -> Self {
        Self {
            pages: Vec::new(),
            open_error: Some(message.into()),
            calls: CallCounter::default(),
        }
    }

    /// Number of times a document was opened
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl PageTextEngine for MockPagedEngine {
    fn name(&self) -> &str {
        "mock-paged"
    }

    fn open(&self, _path: &Path) -> Result<Box<dyn PagedDocument>, EngineError> {
        self.calls.hit();
        if let Some(message) = &self.open_error {
            return Err(EngineError::new(self.name(), message.clone()));
        }
        Ok(Box::new(MockPagedDocument {
            pages: self.pages.clone(),
        }))
    }
}

struct MockPagedDocument {
    pages: Vec<MockResponse>,
}

impl PagedDocument for MockPagedDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, EngineError> {
        match self.pages.get(index) {
            Some(response) => response.resolve("mock-paged"),
            None => Err(EngineError::new("mock-paged", format!("no page {}", index))),
        }
    }
}

/// Mock rasterizer producing `pages` image paths without writing anything
#[derive(Debug, Clone)]
pub struct MockRasterizer {
    pages: usize,
    error: Option<String>,
    calls: CallCounter,
}

impl MockRasterizer {
    /// Rasterizer that "renders" `pages` pages
    pub fn new(pages: usize) -> Self {
        Self {
            pages,
            error: None,
            calls: CallCounter::default(),
        }
    }

    /// Rasterizer that always fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            pages: 0,
            error: Some(message.into()),
            calls: CallCounter::default(),
        }
    }

    /// Number of rasterize calls
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl PageRasterizer for MockRasterizer {
    fn name(&self) -> &str {
        "mock-rasterizer"
    }

    fn rasterize(&self, _path: &Path, output_dir: &Path) -> Result<Vec<PathBuf>, EngineError> {
        self.calls.hit();
        if let Some(message) = &self.error {
            return Err(EngineError::new(self.name(), message.clone()));
        }
        Ok((1..=self.pages)
            .map(|n| output_dir.join(format!("page-{}.png", n)))
            .collect())
    }
}

/// Mock recognizer answering successive calls with successive responses
///
/// Calls past the end of the response list return empty text.
#[derive(Debug, Clone)]
pub struct MockRecognizer {
    responses: Vec<MockResponse>,
    calls: CallCounter,
}

impl MockRecognizer {
    /// Recognizer with one response per call
    pub fn new(responses: Vec<MockResponse>) -> Self {
        Self {
            responses,
            calls: CallCounter::default(),
        }
    }

    /// Recognizer returning these texts in call order
    pub fn with_texts<S: Into<String>>(texts: impl IntoIterator<Item = S>) -> Self {
        Self::new(texts.into_iter().map(|t| MockResponse::Text(t.into())).collect())
    }

    /// Number of recognize calls
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl TextRecognizer for MockRecognizer {
    fn name(&self) -> &str {
        "mock-recognizer"
    }

    fn recognize(&self, _image: &Path) -> Result<String, EngineError> {
        let call = self.calls.hit();
        match self.responses.get(call - 1) {
            Some(response) => response.resolve(self.name()),
            None => Ok(String::new()),
        }
    }
}

/// Mock word document puller
#[derive(Debug, Clone)]
pub struct MockPuller {
    response: MockResponse,
    calls: CallCounter,
}

impl MockPuller {
    /// Puller that returns `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self::scripted(MockResponse::Text(text.into()))
    }

    /// Puller that fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self::scripted(MockResponse::Fail(message.into()))
    }

    /// Puller that panics when called
    pub fn panicking() -> Self {
        Self::scripted(MockResponse::Panic)
    }

    fn scripted(response: MockResponse) -> Self {
        Self {
            response,
            calls: CallCounter::default(),
        }
    }

    /// Number of pull calls
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl DocumentPuller for MockPuller {
    fn name(&self) -> &str {
        "mock-puller"
    }

    fn pull(&self, _path: &Path) -> Result<String, EngineError> {
        self.calls.hit();
        self.response.resolve(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "mock-puller mock panicked")]
    fn test_panicking_puller() {
        let _ = MockPuller::panicking().pull(Path::new("a.docx"));
    }

    #[test]
    fn test_paged_document() {
        let engine = MockPagedEngine::new(vec![
            MockResponse::Text("one".to_string()),
            MockResponse::Fail("corrupt".to_string()),
        ]);
        let doc = engine.open(Path::new("a.pdf")).unwrap();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.page_text(0).unwrap(), "one");
        assert!(doc.page_text(1).is_err());
        assert!(doc.page_text(2).is_err());
        assert_eq!(engine.call_count(), 1);
    }

    #[test]
    fn test_recognizer_call_order() {
        let recognizer = MockRecognizer::with_texts(["first", "second"]);
        assert_eq!(recognizer.recognize(Path::new("p1")).unwrap(), "first");
        assert_eq!(recognizer.recognize(Path::new("p2")).unwrap(), "second");
        assert_eq!(recognizer.recognize(Path::new("p3")).unwrap(), "");
        assert_eq!(recognizer.call_count(), 3);
    }

    #[test]
    fn test_clones_share_call_count() {
        let puller = MockPuller::new("doc");
        let clone = puller.clone();
        clone.pull(Path::new("a.docx")).unwrap();
        assert_eq!(puller.call_count(), 1);
    }
}
