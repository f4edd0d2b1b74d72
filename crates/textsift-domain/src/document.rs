//! Source documents and their declared types

use std::fmt;
use std::path::{Path, PathBuf};

/// Document type declared by the uploaded file name
///
/// The type is a claim made by the caller, not a sniffed content type:
/// a `.pdf` name is routed to the PDF cascade whatever the bytes contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    /// Plain text (`.txt`, `.text`, `.md`)
    Text,

    /// Portable Document Format (`.pdf`)
    Pdf,

    /// Office Open XML word document (`.docx`)
    Docx,

    /// Missing or unrecognized suffix
    Unknown,
}

impl DocumentType {
    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Text => "text",
            DocumentType::Pdf => "pdf",
            DocumentType::Docx => "docx",
            DocumentType::Unknown => "unknown",
        }
    }

    /// Map a file suffix (without the dot) to a document type, case-insensitively
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_lowercase().as_str() {
            "txt" | "text" | "md" => DocumentType::Text,
            "pdf" => DocumentType::Pdf,
            "docx" => DocumentType::Docx,
            _ => DocumentType::Unknown,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return the lowercased text after the last `.` of a file name
///
/// A name without a dot has no extension. A trailing dot yields an empty
/// extension, which maps to [`DocumentType::Unknown`].
pub fn file_extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// A file to extract text from
///
/// Built once per invocation from the two positional inputs and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    path: PathBuf,
    declared_type: DocumentType,
    extension: Option<String>,
}

impl SourceDocument {
    /// Create a source document from a path and the file name that declares its type
    ///
    /// The file name is only used to derive the declared type; it may differ
    /// from the path (uploads are usually stored under a temporary name).
    pub fn new(path: impl Into<PathBuf>, file_name: &str) -> Self {
        let extension = file_extension(file_name);
        let declared_type = extension
            .as_deref()
            .map(DocumentType::from_extension)
            .unwrap_or(DocumentType::Unknown);

        Self {
            path: path.into(),
            declared_type,
            extension,
        }
    }

    /// Create a source document with an explicit type
    pub fn with_type(path: impl Into<PathBuf>, declared_type: DocumentType) -> Self {
        Self {
            path: path.into(),
            declared_type,
            extension: None,
        }
    }

    /// Path of the materialized file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Type declared by the file name
    pub fn declared_type(&self) -> DocumentType {
        self.declared_type
    }

    /// Lowercased suffix of the file name, if any
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}
