//! Document ingestion seam.
//!
//! Uploaded project documents (descriptive memoranda, forms, annexes) are
//! turned into per-page plain text before being embedded in narrative
//! requests. The extraction itself is a collaborator concern (PDF parsing
//! lives outside this crate, behind [`TextExtractor`]); the document model,
//! page tagging and checksum identity live here.

use serde::{Deserialize, Serialize};

use crate::db::checksum::document_checksum;

/// An uploaded file, as received from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Content identity, used to skip re-extraction of duplicates.
    pub fn checksum(&self) -> String {
        document_checksum(&self.bytes)
    }
}

/// Extracted text of one document, page by page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    pub filename: String,
    pub checksum: String,
    pub pages: Vec<String>,
}

impl ExtractedText {
    /// Concatenated text with per-page markers, the form embedded in
    /// narrative requests so the model can cite page numbers.
    pub fn tagged(&self) -> String {
        let mut out = String::new();
        for (index, page) in self.pages.iter().enumerate() {
            out.push_str(&format!(
                "--- Página {} ({}) ---\n{}\n",
                index + 1,
                self.filename,
                page
            ));
        }
        out
    }

    /// Total character count across pages.
    pub fn len(&self) -> usize {
        self.pages.iter().map(|p| p.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(|p| p.is_empty())
    }
}

/// Error type for text extraction.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("document '{filename}' could not be read: {reason}")]
    Unreadable { filename: String, reason: String },
}

/// Turns an uploaded document into per-page plain text.
///
/// Implementations for rich formats (PDF and friends) are supplied by the
/// embedding application; failures are recoverable and reported per
/// document, never fatal to the session.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &UploadedDocument) -> Result<ExtractedText, IngestError>;
}

/// Extractor for documents that are already plain text. Pages are separated
/// by form-feed characters, the convention used by text dumps of paginated
/// documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, document: &UploadedDocument) -> Result<ExtractedText, IngestError> {
        let text =
            String::from_utf8(document.bytes.clone()).map_err(|e| IngestError::Unreadable {
                filename: document.filename.clone(),
                reason: e.to_string(),
            })?;
        let pages = text.split('\u{c}').map(str::to_string).collect();
        Ok(ExtractedText {
            filename: document.filename.clone(),
            checksum: document.checksum(),
            pages,
        })
    }
}
