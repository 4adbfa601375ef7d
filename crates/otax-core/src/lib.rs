//! Core library for OTA booking email extraction.
//!
//! This crate provides:
//! - Whitespace normalization of extracted document text
//! - Vendor source detection (Expedia, Agoda)
//! - Per-vendor field extraction into one fixed booking schema
//! - Plain-text and HTML report rendering
//! - PDF text extraction for callers feeding the pipeline

pub mod booking;
pub mod error;
pub mod models;
pub mod pdf;
pub mod report;
pub mod text;

pub use booking::{BookingExtractor, BookingParser, ExtractionResult, Source};
pub use error::{ExtractionError, OtaxError, PdfError, Result};
pub use models::booking::{
    BillingDetails, BookingRecord, BookingStatus, PartialBooking, BILLING_ORDER, FIELD_ORDER,
};
pub use models::config::OtaxConfig;
pub use pdf::PdfText;
pub use report::{render_html, render_text};
