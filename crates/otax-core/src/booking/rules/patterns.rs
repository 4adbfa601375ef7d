//! Common regex patterns for OTA booking extraction.
//!
//! All patterns assume whitespace-normalized text (see [`crate::text`]).

use lazy_static::lazy_static;
use regex::Regex;

/// Allowed currency codes for rate extraction. A rate match lacking one of
/// these codes is not accepted.
pub const CURRENCY_CODES: &str = "VND|USD|EUR|JPY|THB|SGD|AUD|GBP|KRW|CNY";

lazy_static! {
    // ------------------------------------------------------------------
    // Expedia

    pub static ref CANCELLATION_MARKER: Regex = Regex::new(
        r"(?i)\b(?:Cancellation|Cancelled on)\b"
    ).unwrap();

    pub static ref GUEST_EMAIL: Regex = Regex::new(
        r"(?i)Guest Email:\s*(\S+@\S+)"
    ).unwrap();

    pub static ref RESERVATION_ID: Regex = Regex::new(
        r"(?i)Reservation ID:\s*(\d+)"
    ).unwrap();

    pub static ref EXPEDIA_PREPAID: Regex = Regex::new(
        r"(?i)Guest has PRE-PAID"
    ).unwrap();

    pub static ref BOOKED_ON: Regex = Regex::new(
        r"(?i)Booked on:\s*([^\n]+)"
    ).unwrap();

    pub static ref GUEST_NAME: Regex = Regex::new(
        r"(?i)Guest:\s*([^\n]+)"
    ).unwrap();

    // Room type may be labelled as a code or as a display name with an
    // optional refundability qualifier appended.
    pub static ref ROOM_TYPE_CODE: Regex = Regex::new(
        r"Room Type Code:\s*([^\n]+)"
    ).unwrap();

    pub static ref ROOM_TYPE_NAME: Regex = Regex::new(
        r"Room Type Name:\s*(.+?)(?:\s*-\s*Non-refundable)?\s*(?:\n|$)"
    ).unwrap();

    pub static ref DAILY_BASE_RATE: Regex = Regex::new(
        &format!(r"(?is)Daily Base Rate.*?-\s*([\d,.]+)\s*({CURRENCY_CODES})")
    ).unwrap();

    pub static ref TOTAL_BOOKING_AMOUNT: Regex = Regex::new(
        &format!(r"(?is)(?:Total Booking Amount|Total Booking Price)\s*:?\s*([\d,.]+)\s*({CURRENCY_CODES})")
    ).unwrap();

    // Amount-to-charge renders inconsistently depending on line wrap, so the
    // extractor tries these in order of decreasing strictness.
    pub static ref AMOUNT_CHARGE_INLINE: Regex = Regex::new(
        &format!(r"(?is)Amount to Charge Expedia(?:\s*Group)?\s*:\s*([\d,.]+)\s*({CURRENCY_CODES})")
    ).unwrap();

    pub static ref AMOUNT_CHARGE_WRAPPED: Regex = Regex::new(
        &format!(r"(?is)Amount to Charge Expedia(?:\s*Group)?\s*:\s*[\r\n ]+([\d,.]+)\s*({CURRENCY_CODES})")
    ).unwrap();

    pub static ref AMOUNT_CHARGE_NO_COLON: Regex = Regex::new(
        &format!(r"(?is)Amount to Charge Expedia(?:\s*Group)?\s+([\d,.]+)\s*({CURRENCY_CODES})")
    ).unwrap();

    pub static ref AMOUNT_CHARGE_LABEL: Regex = Regex::new(
        r"(?i)Amount to Charge Expedia"
    ).unwrap();

    // Candidate numeral for the windowed fallback scan: grouped thousands
    // preferred, bare digit run otherwise. Boundary checks happen in code.
    pub static ref NUMBER_TOKEN: Regex = Regex::new(
        r"\d{1,3}(?:[.,]\d{3})+|\d+"
    ).unwrap();

    // Fixed-layout stay table: one header, one data row. All four values
    // come from a single match so they stay mutually consistent.
    pub static ref STAY_TABLE: Regex = Regex::new(
        r"(?is)Check-In\s+Check-Out\s+Adults\s+Kids/Ages.*?\n([A-Za-z]{3,9}\s+\d{1,2},\s*\d{4})\s+([A-Za-z]{3,9}\s+\d{1,2},\s*\d{4})\s+(\d+)\s+(\d+)"
    ).unwrap();

    // Virtual-card billing block.
    pub static ref CARD_NUMBER: Regex = Regex::new(
        r"(?i)Card Number\s+([\d-]+)"
    ).unwrap();

    pub static ref ACTIVATION_DATE: Regex = Regex::new(
        r"(?i)Activation Date\s+([A-Za-z]{3,9}\s+\d{1,2},\s*\d{4})"
    ).unwrap();

    pub static ref EXPIRATION_DATE: Regex = Regex::new(
        r"(?i)Expiration Date\s*([^\n]+)"
    ).unwrap();

    pub static ref VALIDATION_CODE: Regex = Regex::new(
        r"(?i)Validation Code\s+(\d+)"
    ).unwrap();

    // ------------------------------------------------------------------
    // Agoda

    pub static ref AGODA_PREPAID: Regex = Regex::new(
        r"(?i)\bPREPAID\b"
    ).unwrap();

    pub static ref AGODA_BOOKING_ID: Regex = Regex::new(
        r"(?i)Booking ID\s*(\d+)"
    ).unwrap();

    // Names appear as upper-case tokens, possibly with Vietnamese accents,
    // apostrophes or hyphens.
    pub static ref AGODA_FIRST_NAME: Regex = Regex::new(
        r"Customer First Name\s+([A-ZÀ-Ỹ' \-]+)"
    ).unwrap();

    pub static ref AGODA_LAST_NAME: Regex = Regex::new(
        r"Customer Last Name\s+([A-ZÀ-Ỹ' \-]+)"
    ).unwrap();

    // Only the vendor's message-relay address counts, not any email.
    pub static ref AGODA_EMAIL: Regex = Regex::new(
        r"(?i)Email:\s*(\S+@\S+agoda-messaging\.com)"
    ).unwrap();

    pub static ref AGODA_CHECK_IN: Regex = Regex::new(
        r"(?is)Check[- ]in\s+([A-Za-z]{3,9})\s*(\d{1,2}),\s*(\d{4})"
    ).unwrap();

    pub static ref AGODA_CHECK_OUT: Regex = Regex::new(
        r"(?is)Check[- ]out\s+([A-Za-z]{3,9})\s*(\d{1,2}),\s*(\d{4})"
    ).unwrap();

    // Table header and the single data row beneath it.
    pub static ref AGODA_ROOM_TABLE: Regex = Regex::new(
        r"(?i)Room Type\s+No\. of Rooms\s+Occupancy[^\n]*\n([^\n]+)"
    ).unwrap();

    pub static ref ADULT_COUNT: Regex = Regex::new(
        r"(\d+)\s+Adult"
    ).unwrap();

    pub static ref CHILD_COUNT: Regex = Regex::new(
        r"(\d+)\s+Child"
    ).unwrap();

    // Rates table scope anchor; numerals before it are unrelated.
    pub static ref AGODA_RATES_HEADER: Regex = Regex::new(
        r"(?i)From\s*-\s*To\s*Rates"
    ).unwrap();

    // Currency marker on its own line, comma-grouped numeral on the next.
    pub static ref VND_RATE_LINE: Regex = Regex::new(
        r"(?i)\bVND\b\s*\n\s*(\d{1,3}(?:,\d{3})+)(?:\.\d+)?"
    ).unwrap();

    pub static ref REFERENCE_SELL_RATE: Regex = Regex::new(
        r"(?is)Reference sell rate.*?\bVND\b\s*(\d{1,3}(?:,\d{3})+)(?:\.\d+)?"
    ).unwrap();

    pub static ref NET_RATE: Regex = Regex::new(
        r"(?i)Net rate\s*\(incl\. taxes & fees\)\s*\n\s*VND\s*(\d{1,3}(?:,\d{3})+)(?:\.\d+)?"
    ).unwrap();

    // ------------------------------------------------------------------
    // Localized sent-date header forms (see rules::dates)

    pub static ref SENT_DATE_NUMERIC: Regex = Regex::new(
        r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b"
    ).unwrap();

    pub static ref SENT_DATE_THANG: Regex = Regex::new(
        r"(?i)(\d{1,2})\s+th[aá]ng\s+(\d{1,2}),\s*(\d{4})"
    ).unwrap();

    pub static ref LONG_DATE: Regex = Regex::new(
        r"([A-Za-z]+)\s+(\d{1,2}),\s*(\d{4})"
    ).unwrap();
}
