//! Vendor source detection.

use crate::error::ExtractionError;

use super::Result;

/// The closed set of supported OTA vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Expedia,
    Agoda,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expedia => "Expedia",
            Self::Agoda => "Agoda",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inspect normalized text for vendor fingerprints.
///
/// Tested in order: the Expedia brand/partner-portal tokens win first; Agoda
/// requires both its brand token and a literal `"booking id"` label, which
/// guards against incidental brand mentions. This is a terminal decision,
/// with no scoring or ambiguity resolution.
pub fn detect(text: &str) -> Result<Source> {
    let low = text.to_lowercase();
    if low.contains("expedia") || low.contains("expediapartnercentral") {
        Ok(Source::Expedia)
    } else if low.contains("agoda") && low.contains("booking id") {
        Ok(Source::Agoda)
    } else {
        Err(ExtractionError::UnrecognizedSource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_expedia() {
        let text = "Reservation from expediapartnercentral.com\nReservation ID: 1";
        assert_eq!(detect(text).unwrap(), Source::Expedia);
    }

    #[test]
    fn test_detects_agoda_with_booking_id_guard() {
        let text = "Agoda Booking Confirmation\nBooking ID 123456";
        assert_eq!(detect(text).unwrap(), Source::Agoda);

        // Brand mention alone is not enough.
        assert!(matches!(
            detect("I once stayed via agoda and it was fine"),
            Err(ExtractionError::UnrecognizedSource)
        ));
    }

    #[test]
    fn test_unrecognized_source() {
        assert!(matches!(
            detect("Booking.com confirmation 987"),
            Err(ExtractionError::UnrecognizedSource)
        ));
    }
}
