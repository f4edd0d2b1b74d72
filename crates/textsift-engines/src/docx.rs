//! Word document text puller built on `docx-rs`
//!
//! A `.docx` file is a ZIP archive of XML parts. `docx-rs` parses it into a
//! typed tree; text lives at Paragraph → Run → Text.

use crate::guard;
use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};
use std::fs;
use std::path::Path;
use textsift_domain::traits::DocumentPuller;
use textsift_domain::EngineError;
use tracing::debug;

const ENGINE_NAME: &str = "docx-rs";

/// Pulls paragraph text out of `.docx` documents
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxPuller;

impl DocxPuller {
    /// Create the puller
    pub fn new() -> Self {
        Self
    }
}

impl DocumentPuller for DocxPuller {
    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn pull(&self, path: &Path) -> Result<String, EngineError> {
        let bytes = fs::read(path).map_err(|e| {
            EngineError::new(ENGINE_NAME, format!("cannot read '{}': {}", path.display(), e))
        })?;

        let docx = guard(ENGINE_NAME, || {
            read_docx(&bytes)
                .map_err(|e| EngineError::new(ENGINE_NAME, format!("parse error: {:?}", e)))
        })?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .collect();

        debug!("docx-rs read {} paragraphs from {}", paragraphs.len(), path.display());

        // Empty paragraphs are kept as blank lines; the segmenter discards them
        Ok(paragraphs.join("\n"))
    }
}

/// Concatenate the runs of one paragraph; runs are fragments of the same line
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();

    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                match rc {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    _ => {}
                }
            }
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Run};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_pull_paragraphs() {
        let file = NamedTempFile::new().unwrap();
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("First paragraph.")))
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Second "))
                    .add_run(Run::new().add_text("paragraph.")),
            )
            .build()
            .pack(std::fs::File::create(file.path()).unwrap())
            .unwrap();

        let text = DocxPuller::new().pull(file.path()).unwrap();
        assert_eq!(text, "First paragraph.\nSecond paragraph.");
    }

    #[test]
    fn test_pull_rejects_non_docx() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not a zip archive").unwrap();

        let err = DocxPuller::new().pull(file.path()).unwrap_err();
        assert_eq!(err.engine(), "docx-rs");
        assert!(err.message().starts_with("parse error"));
    }
}
