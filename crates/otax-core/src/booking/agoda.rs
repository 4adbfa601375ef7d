//! Field extraction for Agoda-formatted booking documents.
//!
//! Agoda confirmations differ from Expedia in structure: rates appear as a
//! currency marker above a comma-grouped numeral, names are upper-cased
//! under their own labels, and payment-card detail is never exposed. The
//! cancellation flow is out of scope for this vendor, so status is always
//! Confirmed.

use tracing::debug;

use crate::models::booking::{BookingStatus, PartialBooking};

use super::rules::dates::{compose_month_day_year, parse_localized_sent_date};
use super::rules::patterns::*;
use super::BookingExtractor;

/// Extractor for Agoda confirmation documents.
pub struct AgodaExtractor;

impl AgodaExtractor {
    pub fn new() -> Self {
        Self
    }

    /// First daily rate after the `From - To / Rates` table header. Scoping
    /// to the table tail keeps unrelated numerals earlier in the document
    /// from matching.
    fn first_daily_rate(&self, text: &str) -> Option<String> {
        let tail = match AGODA_RATES_HEADER.find(text) {
            Some(anchor) => &text[anchor.end()..],
            None => text,
        };
        VND_RATE_LINE
            .captures(tail)
            .map(|caps| format!("{} VND", &caps[1]))
    }

    /// Total booking amount: the gross "Reference sell rate" wins; the net
    /// rate (incl. taxes & fees) is only a fallback.
    fn total_booking(&self, text: &str) -> Option<String> {
        if let Some(caps) = REFERENCE_SELL_RATE.captures(text) {
            return Some(format!("{} VND", &caps[1]));
        }
        NET_RATE
            .captures(text)
            .map(|caps| format!("{} VND", &caps[1]))
    }

    /// Room type and counts from the single data row beneath the table
    /// header: leading non-numeric tokens form the room name, the first
    /// numeral is the room count, the second the adult occupancy.
    fn extract_room_table(&self, text: &str, booking: &mut PartialBooking) {
        let Some(caps) = AGODA_ROOM_TABLE.captures(text) else {
            return;
        };

        let mut room_tokens: Vec<&str> = Vec::new();
        let mut numbers: Vec<&str> = Vec::new();
        for token in caps[1].split_whitespace() {
            if token.chars().all(|c| c.is_ascii_digit()) {
                numbers.push(token);
            } else if numbers.is_empty() {
                room_tokens.push(token);
            }
        }

        if !room_tokens.is_empty() {
            booking.room_type_code = Some(room_tokens.join(" "));
        }
        if let Some(rooms) = numbers.first() {
            booking.room_count = Some(rooms.to_string());
        }
        if let Some(adults) = numbers.get(1) {
            booking.occupancy_adult = Some(adults.to_string());
        }
    }
}

impl Default for AgodaExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingExtractor for AgodaExtractor {
    fn extract(&self, text: &str) -> PartialBooking {
        let mut booking = PartialBooking::default();

        booking.status = Some(BookingStatus::Confirmed);
        booking.has_prepaid = Some(AGODA_PREPAID.is_match(text));

        if let Some(caps) = AGODA_BOOKING_ID.captures(text) {
            booking.booking_id = Some(caps[1].to_string());
        }

        if let Some(caps) = AGODA_FIRST_NAME.captures(text) {
            booking.first_name = Some(title_case(caps[1].trim()));
        }
        if let Some(caps) = AGODA_LAST_NAME.captures(text) {
            booking.last_name = Some(title_case(caps[1].trim()));
        }

        if let Some(caps) = AGODA_EMAIL.captures(text) {
            booking.email = Some(caps[1].to_string());
        }

        let booked_on = parse_localized_sent_date(text);
        if !booked_on.is_empty() {
            booking.booked_on = Some(booked_on);
        }

        // Month name and day/year may be separated by a line break; the
        // captures feed the lexicon rather than a single date token.
        if let Some(caps) = AGODA_CHECK_IN.captures(text) {
            booking.check_in = Some(compose_month_day_year(&caps[1], &caps[2], &caps[3]));
        }
        if let Some(caps) = AGODA_CHECK_OUT.captures(text) {
            booking.check_out = Some(compose_month_day_year(&caps[1], &caps[2], &caps[3]));
        }

        self.extract_room_table(text, &mut booking);

        // Independent fallbacks when the table is absent or malformed,
        // then the baseline occupancy of one adult, zero children, one room.
        if booking.occupancy_adult.is_none() {
            if let Some(caps) = ADULT_COUNT.captures(text) {
                booking.occupancy_adult = Some(caps[1].to_string());
            }
        }
        if let Some(caps) = CHILD_COUNT.captures(text) {
            booking.occupancy_children = Some(caps[1].to_string());
        } else {
            booking.occupancy_children = Some("0".to_string());
        }
        booking.occupancy_adult.get_or_insert_with(|| "1".to_string());
        booking.room_count.get_or_insert_with(|| "1".to_string());

        booking.daily_rate = self.first_daily_rate(text);
        booking.total_booking = self.total_booking(text);

        // Not applicable for this vendor: emitted empty, never defaulted
        // from some other part of the document.
        booking.amount_to_charge = Some(String::new());

        debug!(
            booking_id = booking.booking_id.as_deref().unwrap_or(""),
            "extracted Agoda booking"
        );
        booking
    }
}

/// Re-case an upper-case name token to title case, keeping accents,
/// apostrophes and hyphens (`NGUYỄN VĂN` -> `Nguyễn Văn`).
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_alphabetic = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    const CONFIRMATION: &str = "\
Agoda Booking Confirmation PREPAID\n\
Ngày T2 10/11/2025 10:51\n\
Booking ID 987654321\n\
Customer First Name THI MAI\n\
Customer Last Name TRAN\n\
Email: guest.987654321@mail.agoda-messaging.com\n\
Check-in Nov\n\
12, 2025\n\
Check-out Nov 14, 2025\n\
Room Type No. of Rooms Occupancy\n\
Superior Twin 2 3\n\
From - To Rates\n\
12 November 2025\n\
VND\n\
1,197,000.00\n\
Reference sell rate\n\
VND 7,581,000.00\n";

    #[test]
    fn test_confirmation_end_to_end() {
        let record = AgodaExtractor::new()
            .extract(&text::normalize(CONFIRMATION))
            .normalize();

        assert_eq!(record.status_label(), "Confirmed");
        assert!(record.has_prepaid);
        assert_eq!(record.booking_id, "987654321");
        assert_eq!(record.first_name, "Thi Mai");
        assert_eq!(record.last_name, "Tran");
        assert_eq!(record.email, "guest.987654321@mail.agoda-messaging.com");
        assert_eq!(record.booked_on, "11/10/2025");
        assert_eq!(record.check_in, "11/12/2025");
        assert_eq!(record.check_out, "11/14/2025");
        assert_eq!(record.room_type_code, "Superior Twin");
        assert_eq!(record.room_count, "2");
        assert_eq!(record.occupancy_adult, "3");
        assert_eq!(record.occupancy_children, "0");
        assert_eq!(record.daily_rate, "1,197,000 VND");
        assert_eq!(record.total_booking, "7,581,000 VND");
        assert_eq!(record.amount_to_charge, "");
        assert_eq!(record.billing.card_number, "");
    }

    #[test]
    fn test_occupancy_defaults_without_table_or_tokens() {
        let text = text::normalize("Agoda\nBooking ID 11\n");
        let record = AgodaExtractor::new().extract(&text).normalize();
        assert_eq!(record.room_count, "1");
        assert_eq!(record.occupancy_adult, "1");
        assert_eq!(record.occupancy_children, "0");
    }

    #[test]
    fn test_occupancy_token_fallbacks() {
        let text = text::normalize("Agoda\nBooking ID 11\n2 Adult\n1 Child\n");
        let record = AgodaExtractor::new().extract(&text).normalize();
        assert_eq!(record.occupancy_adult, "2");
        assert_eq!(record.occupancy_children, "1");
    }

    #[test]
    fn test_daily_rate_scoped_to_rates_table() {
        let text = "Fee summary\nVND\n9,999,999\nFrom - To Rates\nVND\n1,197,000.00\n";
        let booking = AgodaExtractor::new().extract(text);
        assert_eq!(booking.daily_rate.as_deref(), Some("1,197,000 VND"));
    }

    #[test]
    fn test_total_booking_net_rate_fallback() {
        let text = "Net rate (incl. taxes & fees)\nVND 6,700,000.00\n";
        let booking = AgodaExtractor::new().extract(text);
        assert_eq!(booking.total_booking.as_deref(), Some("6,700,000 VND"));
    }

    #[test]
    fn test_email_requires_relay_domain() {
        let booking = AgodaExtractor::new().extract("Email: guest@gmail.com\n");
        assert_eq!(booking.email, None);
    }

    #[test]
    fn test_title_case_keeps_accents_and_separators() {
        assert_eq!(title_case("NGUYỄN VĂN"), "Nguyễn Văn");
        assert_eq!(title_case("O'BRIEN-SMITH"), "O'Brien-Smith");
    }
}
