//! Booking field extraction: detection, vendor extractors, orchestration.

mod agoda;
mod detect;
mod expedia;
mod parser;
pub mod rules;

pub use agoda::AgodaExtractor;
pub use detect::{detect, Source};
pub use expedia::ExpediaExtractor;
pub use parser::{BookingParser, ExtractionResult};

use crate::error::ExtractionError;
use crate::models::booking::PartialBooking;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for vendor-specific booking extractors.
///
/// Extraction is all-best-effort: a rule that fails to match leaves its
/// field unset in the partial record, and never fails the whole document.
pub trait BookingExtractor {
    /// Extract booking fields from whitespace-normalized text.
    fn extract(&self, text: &str) -> PartialBooking;
}
