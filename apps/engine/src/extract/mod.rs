//! Text-extraction adapter boundary.
//!
//! The analysis core consumes an already-extracted text blob; everything in
//! this module exists to produce that blob from a file on disk. PDF parsing
//! happens in-process via `pdf-extract`. DOC/DOCX conversion and image OCR
//! run in the upstream upload service, so those formats are recognized here
//! but reported as an extraction error when handed to the local adapter.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::EngineError;

/// Recognized upload formats. Anything else is rejected at the boundary
/// before the pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Doc,
    Docx,
    Jpg,
    Jpeg,
    Png,
}

impl FileType {
    /// Maps a file name's extension onto a recognized format.
    pub fn from_file_name(file_name: &str) -> Result<Self, EngineError> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Ok(FileType::Pdf),
            "doc" => Ok(FileType::Doc),
            "docx" => Ok(FileType::Docx),
            "jpg" => Ok(FileType::Jpg),
            "jpeg" => Ok(FileType::Jpeg),
            "png" => Ok(FileType::Png),
            "" => Err(EngineError::UnsupportedFormat(format!(
                "'{file_name}' has no file extension"
            ))),
            other => Err(EngineError::UnsupportedFormat(format!(".{other}"))),
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, FileType::Jpg | FileType::Jpeg | FileType::Png)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ext = match self {
            FileType::Pdf => "pdf",
            FileType::Doc => "doc",
            FileType::Docx => "docx",
            FileType::Jpg => "jpg",
            FileType::Jpeg => "jpeg",
            FileType::Png => "png",
        };
        write!(f, "{ext}")
    }
}

/// Input contract of the analysis core: extracted text plus file metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    pub text: String,
    pub file_name: String,
    pub file_type: FileType,
}

impl RawDocument {
    pub fn new(text: impl Into<String>, file_name: impl Into<String>, file_type: FileType) -> Self {
        let text = text.into();
        RawDocument {
            text: text.trim().to_string(),
            file_name: file_name.into(),
            file_type,
        }
    }
}

/// Adapter trait: turn a file on disk into a `RawDocument`.
///
/// Implementations own all file I/O; the pipeline never touches the
/// filesystem.
pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<RawDocument, EngineError>;
}

/// Local adapter. Handles PDFs in-process; defers the formats that need the
/// conversion/OCR service.
pub struct FileTextExtractor;

impl TextExtractor for FileTextExtractor {
    fn extract(&self, path: &Path) -> Result<RawDocument, EngineError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let file_type = FileType::from_file_name(&file_name)?;
        debug!("Extracting text from '{file_name}' ({file_type})");

        match file_type {
            FileType::Pdf => {
                let text = pdf_extract::extract_text(path)
                    .map_err(|e| EngineError::Extraction(format!("unreadable PDF: {e}")))?;
                Ok(RawDocument::new(text, file_name, file_type))
            }
            FileType::Doc | FileType::Docx => Err(EngineError::Extraction(format!(
                "'{file_name}': Word documents are converted by the upload service, not locally"
            ))),
            _ => Err(EngineError::Extraction(format!(
                "'{file_name}': image OCR runs in the upload service, not locally"
            ))),
        }
    }
}
