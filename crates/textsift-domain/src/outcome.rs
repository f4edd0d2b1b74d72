//! Extraction outcomes

use crate::method::ExtractionMethod;
use std::fmt;

/// Why an outcome carries no text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Nothing exists at the source path
    MissingFile {
        /// Path as given by the caller
        path: String,
    },

    /// The declared type needs an engine that is not available
    EngineUnavailable {
        /// Declared document type
        document_type: String,
        /// Human-readable name of the missing dependency
        requirement: String,
    },

    /// The declared type is not supported at all
    Unsupported {
        /// Suffix that declared the type, if any
        extension: Option<String>,
    },

    /// The only engine for the declared type failed
    EngineFailed {
        /// Declared document type
        document_type: String,
        /// Failure message reported by the engine
        message: String,
    },

    /// All strategies ran and none produced text
    NothingExtracted,
}

impl Diagnostic {
    /// Method an outcome with this diagnostic is tagged with
    pub fn method(&self) -> ExtractionMethod {
        match self {
            Diagnostic::NothingExtracted => ExtractionMethod::Failed,
            _ => ExtractionMethod::Error,
        }
    }

    /// Whether the diagnostic is an input error the caller must fix
    pub fn is_input_error(&self) -> bool {
        matches!(self, Diagnostic::MissingFile { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingFile { path } => write!(f, "File not found: {}", path),
            Diagnostic::EngineUnavailable {
                document_type,
                requirement,
            } => write!(
                f,
                "Cannot extract {} documents: {} is not available",
                document_type.to_uppercase(),
                requirement
            ),
            Diagnostic::Unsupported { extension: Some(ext) } if !ext.is_empty() => {
                write!(f, "Unsupported file type: .{}", ext)
            }
            Diagnostic::Unsupported { .. } => {
                write!(f, "Unsupported file type: file name has no extension")
            }
            Diagnostic::EngineFailed {
                document_type,
                message,
            } => write!(
                f,
                "Error extracting {}: {}",
                document_type.to_uppercase(),
                message
            ),
            Diagnostic::NothingExtracted => write!(
                f,
                "Text extraction failed: no extraction strategy produced any text"
            ),
        }
    }
}

/// Text produced by exactly one extraction routine
///
/// Invariant: an outcome tagged `error` or `failed` carries a diagnostic and
/// its text is the diagnostic message, except for a missing file, whose text
/// is empty. Any other outcome has no diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    raw_text: String,
    method: ExtractionMethod,
    diagnostic: Option<Diagnostic>,
}

impl ExtractionOutcome {
    /// Outcome of a routine that produced text (possibly empty)
    ///
    /// # Panics
    ///
    /// Debug builds assert that `method` is not `error` or `failed`; use
    /// [`ExtractionOutcome::unsuccessful`] for those.
    pub fn extracted(raw_text: impl Into<String>, method: ExtractionMethod) -> Self {
        debug_assert!(
            !method.is_unsuccessful(),
            "unsuccessful outcomes must carry a diagnostic"
        );
        Self {
            raw_text: raw_text.into(),
            method,
            diagnostic: None,
        }
    }

    /// Outcome of a routine that produced no text
    pub fn unsuccessful(diagnostic: Diagnostic) -> Self {
        let raw_text = if diagnostic.is_input_error() {
            String::new()
        } else {
            diagnostic.to_string()
        };
        Self {
            raw_text,
            method: diagnostic.method(),
            diagnostic: Some(diagnostic),
        }
    }

    /// Sentinel outcome for an exhausted cascade
    pub fn failed() -> Self {
        Self::unsuccessful(Diagnostic::NothingExtracted)
    }

    /// Raw extracted text, untouched by normalization
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Provenance tag
    pub fn method(&self) -> ExtractionMethod {
        self.method
    }

    /// Diagnostic of an unsuccessful outcome
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracted_outcome() {
        let outcome = ExtractionOutcome::extracted("Hello.", ExtractionMethod::PlainText);
        assert_eq!(outcome.raw_text(), "Hello.");
        assert_eq!(outcome.method(), ExtractionMethod::PlainText);
        assert!(outcome.diagnostic().is_none());
    }

    #[test]
    fn test_failed_outcome_text_is_the_message() {
        let outcome = ExtractionOutcome::failed();
        assert_eq!(outcome.method(), ExtractionMethod::Failed);
        assert!(outcome.raw_text().starts_with("Text extraction failed"));
        assert_eq!(outcome.diagnostic(), Some(&Diagnostic::NothingExtracted));
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let diagnostic = Diagnostic::MissingFile {
            path: "/nope.txt".to_string(),
        };
        assert!(diagnostic.is_input_error());
        assert_eq!(diagnostic.method(), ExtractionMethod::Error);
        assert_eq!(diagnostic.to_string(), "File not found: /nope.txt");

        let outcome = ExtractionOutcome::unsuccessful(diagnostic);
        assert_eq!(outcome.raw_text(), "");
    }

    #[test]
    fn test_unsupported_messages() {
        let named = Diagnostic::Unsupported {
            extension: Some("xyz".to_string()),
        };
        assert_eq!(named.to_string(), "Unsupported file type: .xyz");

        let unnamed = Diagnostic::Unsupported { extension: None };
        assert!(unnamed.to_string().contains("no extension"));
        assert!(!unnamed.is_input_error());
    }

    #[test]
    fn test_engine_failed_message_embeds_cause() {
        let outcome = ExtractionOutcome::unsuccessful(Diagnostic::EngineFailed {
            document_type: "docx".to_string(),
            message: "invalid zip header".to_string(),
        });
        assert_eq!(outcome.method(), ExtractionMethod::Error);
        let message = outcome.diagnostic().unwrap().to_string();
        assert_eq!(message, "Error extracting DOCX: invalid zip header");
        assert_eq!(outcome.raw_text(), message);
    }
}
