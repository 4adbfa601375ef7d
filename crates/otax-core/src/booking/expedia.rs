//! Field extraction for Expedia-formatted booking documents.
//!
//! Each rule is independent: a rule that does not match leaves its field
//! unset. The layouts vary between confirmation and cancellation variants
//! and between wrapped and unwrapped lines, which is why several fields
//! carry tiered fallbacks.

use tracing::debug;

use crate::models::booking::{BookingStatus, PartialBooking};

use super::rules::dates::{last_day_of_month, month_number, parse_long_date};
use super::rules::patterns::*;
use super::BookingExtractor;

/// Labels that can follow the guest name on the same line.
const GUEST_NAME_STOPS: [&str; 5] = [
    "guest email",
    "reservation id",
    "booked on",
    "room type",
    "confirmation",
];

/// Extractor for Expedia confirmation and cancellation documents.
pub struct ExpediaExtractor;

impl ExpediaExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Guest name: capture after the `Guest:` label up to the next known
    /// label or end of line, then split into first/last on whitespace. The
    /// final token is the last name; a single-token name has no last name.
    fn extract_guest_name(&self, text: &str) -> Option<(String, String)> {
        let caps = GUEST_NAME.captures(text)?;
        let mut raw = caps[1].trim().to_string();

        // ASCII-only lowering keeps byte offsets valid for accented names.
        let low = raw.to_ascii_lowercase();
        if let Some(cut) = GUEST_NAME_STOPS.iter().filter_map(|stop| low.find(stop)).min() {
            raw.truncate(cut);
        }

        let tokens: Vec<&str> = raw.split_whitespace().collect();
        match tokens.as_slice() {
            [] => None,
            [only] => Some((only.to_string(), String::new())),
            [firsts @ .., last] => Some((firsts.join(" "), last.to_string())),
        }
    }

    /// Room type: prefer the explicit code label, fall back to the display
    /// name with any trailing refundability qualifier stripped.
    fn extract_room_type(&self, text: &str) -> Option<String> {
        if let Some(caps) = ROOM_TYPE_CODE.captures(text) {
            return Some(caps[1].trim().to_string());
        }
        ROOM_TYPE_NAME
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }

    /// Amount to charge: three patterns in order of decreasing strictness,
    /// then a bounded window scan for a bare numeral with no currency.
    fn extract_amount_to_charge(&self, text: &str) -> Option<String> {
        for pattern in [
            &*AMOUNT_CHARGE_INLINE,
            &*AMOUNT_CHARGE_WRAPPED,
            &*AMOUNT_CHARGE_NO_COLON,
        ] {
            if let Some(caps) = pattern.captures(text) {
                return Some(format!("{} {}", &caps[1], &caps[2]));
            }
        }

        let anchor = AMOUNT_CHARGE_LABEL.find(text)?;
        let mut end = (anchor.end() + 200).min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let window = &text[anchor.end()..end];

        for m in NUMBER_TOKEN.find_iter(window) {
            let prev = window[..m.start()].chars().next_back();
            let next = window[m.end()..].chars().next();
            let starts_clean = prev.is_none_or(|c| !c.is_ascii_digit());
            let ends_clean = next.is_none_or(|c| !c.is_ascii_digit() && c != ',');
            if starts_clean && ends_clean {
                return Some(m.as_str().to_string());
            }
        }
        None
    }

    /// Expiration dates sometimes carry only month and year, optionally
    /// followed by extraneous tokens such as a city name. A recognized
    /// month/year pair becomes the last calendar day of that month; anything
    /// else is kept verbatim.
    fn normalize_expiration(&self, raw: &str) -> String {
        let raw = raw.trim();
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.len() < 2 {
            return raw.to_string();
        }

        let month_key: String = tokens[0].chars().take(3).collect();
        let year_token = tokens[1].trim_end_matches(',');
        match (month_number(&month_key), year_token.parse::<i32>()) {
            (Some(month), Ok(year)) => {
                let day = last_day_of_month(month, year);
                format!("{month:02}/{day:02}/{year}")
            }
            _ => raw.to_string(),
        }
    }
}

impl Default for ExpediaExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingExtractor for ExpediaExtractor {
    fn extract(&self, text: &str) -> PartialBooking {
        let mut booking = PartialBooking::default();

        booking.status = Some(if CANCELLATION_MARKER.is_match(text) {
            BookingStatus::Cancelled
        } else {
            BookingStatus::Confirmed
        });

        if let Some((first, last)) = self.extract_guest_name(text) {
            booking.first_name = Some(first);
            booking.last_name = Some(last);
        }

        if let Some(caps) = GUEST_EMAIL.captures(text) {
            booking.email = Some(caps[1].to_string());
        }

        if let Some(caps) = RESERVATION_ID.captures(text) {
            booking.booking_id = Some(caps[1].to_string());
        }

        booking.has_prepaid = Some(EXPEDIA_PREPAID.is_match(text));

        if let Some(caps) = BOOKED_ON.captures(text) {
            booking.booked_on = Some(parse_long_date(caps[1].trim()));
        }

        booking.room_type_code = self.extract_room_type(text);

        if let Some(caps) = DAILY_BASE_RATE.captures(text) {
            booking.daily_rate = Some(format!("{} {}", &caps[1], &caps[2]));
        }

        if let Some(caps) = TOTAL_BOOKING_AMOUNT.captures(text) {
            booking.total_booking = Some(format!("{} {}", &caps[1], &caps[2]));
        }

        booking.amount_to_charge = self.extract_amount_to_charge(text);

        // Check-in/out and occupancy come from one match of the stay table
        // so the four values are guaranteed to belong to the same row.
        if let Some(caps) = STAY_TABLE.captures(text) {
            booking.check_in = Some(parse_long_date(&caps[1]));
            booking.check_out = Some(parse_long_date(&caps[2]));
            booking.occupancy_adult = Some(caps[3].to_string());
            booking.occupancy_children = Some(caps[4].to_string());
        }

        // Expedia documents rarely carry a special request and are
        // single-room bookings by convention.
        booking.room_count = Some("1".to_string());

        if let Some(caps) = CARD_NUMBER.captures(text) {
            booking.billing.card_number = Some(caps[1].to_string());
        }
        if let Some(caps) = ACTIVATION_DATE.captures(text) {
            booking.billing.activation_date = Some(parse_long_date(&caps[1]));
        }
        if let Some(caps) = EXPIRATION_DATE.captures(text) {
            booking.billing.expiration_date = Some(self.normalize_expiration(&caps[1]));
        }
        if let Some(caps) = VALIDATION_CODE.captures(text) {
            booking.billing.validation_code = Some(caps[1].to_string());
        }

        debug!(
            booking_id = booking.booking_id.as_deref().unwrap_or(""),
            "extracted Expedia booking"
        );
        booking
    }
}
