//! PDF text extraction using lopdf and pdf-extract.
//!
//! This is the `extract_text(document) -> string` collaborator the booking
//! pipeline consumes: it turns a page-based binary document into raw text,
//! pages joined by newlines. Whitespace is left untouched here; the pipeline
//! normalizes before matching.

use lopdf::Document;
use tracing::debug;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text source for one loaded PDF document.
pub struct PdfText {
    document: Document,
    raw_data: Vec<u8>,
}

impl PdfText {
    /// Load a PDF from bytes. Encrypted documents are rejected up front.
    pub fn load(data: &[u8]) -> Result<Self> {
        let document =
            Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;
        if document.is_encrypted() {
            return Err(PdfError::Encrypted);
        }
        Ok(Self {
            document,
            raw_data: data.to_vec(),
        })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    /// Extract the document's embedded text. Empty pages contribute nothing.
    pub fn extract_text(&self) -> Result<String> {
        if self.page_count() == 0 {
            return Err(PdfError::NoPages);
        }
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        debug!(
            pages = self.page_count(),
            chars = text.len(),
            "extracted PDF text"
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_pdf_bytes() {
        assert!(matches!(
            PdfText::load(b"plain text, not a pdf"),
            Err(PdfError::Parse(_))
        ));
    }
}
