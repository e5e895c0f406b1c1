//! Converts an uploaded resume file into raw text for the analyzer.

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Detects the kind from the uploaded file name. Only `.pdf` and `.txt` are accepted.
    pub fn from_filename(filename: &str) -> Result<Self, AppError> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Ok(DocumentKind::Pdf)
        } else if lower.ends_with(".txt") {
            Ok(DocumentKind::PlainText)
        } else {
            Err(AppError::InvalidInput(format!(
                "Unsupported file type for '{filename}': only .pdf and .txt resumes are accepted"
            )))
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::PlainText => "text/plain",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::PlainText => "txt",
        }
    }
}

/// Extracts text from the document bytes.
///
/// PDF parsing is CPU-bound; callers on the async runtime should run this on
/// `spawn_blocking`.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, AppError> {
    let text = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            AppError::UnprocessableEntity(format!("Could not read text from PDF: {e}"))
        })?,
        DocumentKind::PlainText => String::from_utf8_lossy(bytes).into_owned(),
    };
    Ok(text.trim().to_string())
}
