//! Booking extraction pipeline.
//!
//! One document per call: normalize the raw text, detect the vendor, run
//! that vendor's extractor, normalize into the fixed schema. The pipeline
//! holds no state between calls, so independent documents can be processed
//! concurrently without locking.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::booking::BookingRecord;
use crate::text;

use super::{detect, AgodaExtractor, BookingExtractor, ExpediaExtractor, Result, Source};

/// Result of extracting one booking document.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// The normalized booking record.
    pub record: BookingRecord,
    /// Which vendor's extractor produced the record.
    pub source: Source,
    /// The whitespace-normalized text the extractor consumed.
    pub text: String,
    /// Fields that fell back to their schema default.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// End-to-end booking parser.
pub struct BookingParser;

impl BookingParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one document's raw extracted text.
    ///
    /// The only error is [`crate::error::ExtractionError::UnrecognizedSource`];
    /// every other irregularity is absorbed into a field default and reported
    /// through `warnings`.
    pub fn parse(&self, raw: &str) -> Result<ExtractionResult> {
        let start = Instant::now();

        let normalized = text::normalize(raw);
        let source = detect(&normalized)?;
        info!("detected {} document, {} chars", source, normalized.len());

        let partial = match source {
            Source::Expedia => ExpediaExtractor::new().extract(&normalized),
            Source::Agoda => AgodaExtractor::new().extract(&normalized),
        };
        let record = partial.normalize();

        let mut warnings = Vec::new();
        for (label, value) in [
            ("BookingID", &record.booking_id),
            ("Check in", &record.check_in),
            ("Check out", &record.check_out),
            ("Total Booking", &record.total_booking),
        ] {
            if value.is_empty() {
                warnings.push(format!("could not extract {label}"));
            }
        }

        debug!(
            booking_id = record.booking_id.as_str(),
            warnings = warnings.len(),
            "extraction finished"
        );

        Ok(ExtractionResult {
            record,
            source,
            text: normalized,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl Default for BookingParser {
    fn default() -> Self {
        Self::new()
    }
}
