//! Error types for the otax-core library.

use thiserror::Error;

/// Main error type for the otax library.
#[derive(Error, Debug)]
pub enum OtaxError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Booking extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to booking field extraction.
///
/// Missing fields are not errors: extraction is best-effort and a field
/// that cannot be matched simply keeps its schema default. The only failure
/// the pipeline surfaces is a document whose vendor cannot be identified.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Neither vendor fingerprint was found in the document text.
    #[error("cannot identify OTA source (supported: Expedia, Agoda)")]
    UnrecognizedSource,
}

/// Result type for the otax library.
pub type Result<T> = std::result::Result<T, OtaxError>;
