//! Type dispatcher: routes a source document to its extraction routine

use crate::cascade::PdfCascade;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::registry::EngineRegistry;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use textsift_domain::{
    Diagnostic, DocumentType, ExtractionMethod, ExtractionOutcome, SourceDocument,
};
use textsift_engines::guard;
use tracing::{info, warn};

const UTF8_BOM: char = '\u{feff}';

/// Extract the raw text of `source`
///
/// Input problems (missing file, unsupported type, absent or failing engine)
/// become unsuccessful outcomes. Only unexpected I/O errors are returned as
/// `Err`.
pub fn dispatch(
    source: &SourceDocument,
    registry: &EngineRegistry,
    config: &PipelineConfig,
) -> Result<ExtractionOutcome, PipelineError> {
    let path = source.path();

    match fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("File not found: {}", path.display());
            return Ok(ExtractionOutcome::unsuccessful(Diagnostic::MissingFile {
                path: path.display().to_string(),
            }));
        }
        Err(e) => return Err(e.into()),
    }

    info!(
        "Extracting {} as {}",
        path.display(),
        source.declared_type()
    );

    match source.declared_type() {
        DocumentType::Text => {
            let text = read_text_lossy(path)?;
            Ok(ExtractionOutcome::extracted(text, ExtractionMethod::PlainText))
        }
        DocumentType::Pdf => {
            if !registry.capabilities().has_pdf_engine() {
                return Ok(ExtractionOutcome::unsuccessful(
                    Diagnostic::EngineUnavailable {
                        document_type: DocumentType::Pdf.to_string(),
                        requirement: "a PDF text extraction engine".to_string(),
                    },
                ));
            }
            Ok(PdfCascade::new(registry, &config.cascade_order).extract(path))
        }
        DocumentType::Docx => Ok(pull_document(registry, path)),
        DocumentType::Unknown => {
            warn!("Unsupported file type: {:?}", source.extension());
            Ok(ExtractionOutcome::unsuccessful(Diagnostic::Unsupported {
                extension: source.extension().map(str::to_string),
            }))
        }
    }
}

fn pull_document(registry: &EngineRegistry, path: &Path) -> ExtractionOutcome {
    let Some(puller) = registry.document_puller() else {
        return ExtractionOutcome::unsuccessful(Diagnostic::EngineUnavailable {
            document_type: DocumentType::Docx.to_string(),
            requirement: "a word document reader".to_string(),
        });
    };

    info!("Attempting extraction with {}", puller.name());
    match guard(puller.name(), || puller.pull(path)) {
        Ok(text) => ExtractionOutcome::extracted(text, ExtractionMethod::DocumentPuller),
        Err(e) => {
            warn!("DOCX extraction error: {}", e);
            ExtractionOutcome::unsuccessful(Diagnostic::EngineFailed {
                document_type: DocumentType::Docx.to_string(),
                message: e.message().to_string(),
            })
        }
    }
}

/// Read a file as UTF-8, dropping undecodable bytes and a leading BOM
pub fn read_text_lossy(path: &Path) -> Result<String, PipelineError> {
    let bytes = fs::read(path)?;
    Ok(decode_lossy(&bytes))
}

fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    }
}
