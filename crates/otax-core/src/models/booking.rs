//! Booking record models and the fixed output schema.
//!
//! Every vendor extractor produces a [`PartialBooking`]; the only object the
//! renderers and callers ever see is the [`BookingRecord`] obtained from
//! [`PartialBooking::normalize`], which always carries the full field set in
//! the order given by [`FIELD_ORDER`].

use serde::{Deserialize, Serialize};

/// Exact order of the fields in the final output. This order is preserved in
/// the generated text and HTML reports and in JSON serialization. The field
/// names (including their historical spellings) are the output schema; do not
/// rename them without updating downstream consumers.
pub const FIELD_ORDER: [&str; 18] = [
    "Status booking Reservation",
    "Customer First Name",
    "Customer Last Name",
    "Email Customer",
    "BookingID",
    "Has Prepaid",
    "Booked on",
    "Check in",
    "Check out",
    "Special Request",
    "Room Type Code",
    "No. of room",
    "Occupancy Adult",
    "Occupancy Childrent",
    "Daily Rate",
    "Total Booking",
    "Amount to Charge Expedia",
    "Billing Details:",
];

/// Order of subfields inside the billing details record.
pub const BILLING_ORDER: [&str; 4] = [
    "Card Number",
    "Activation Date",
    "Expiration Date",
    "Validation Code",
];

/// Booking reservation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Payment-card details captured verbatim from the document.
///
/// Always present on a normalized record with all four subfields, empty
/// string when the vendor does not expose them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingDetails {
    #[serde(rename = "Card Number")]
    pub card_number: String,

    #[serde(rename = "Activation Date")]
    pub activation_date: String,

    #[serde(rename = "Expiration Date")]
    pub expiration_date: String,

    #[serde(rename = "Validation Code")]
    pub validation_code: String,
}

/// Billing subfields as an extractor found them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialBilling {
    pub card_number: Option<String>,
    pub activation_date: Option<String>,
    pub expiration_date: Option<String>,
    pub validation_code: Option<String>,
}

/// Raw extractor output: whatever fields the vendor document yielded.
///
/// Absence of a field is expected and carries no error; normalization
/// substitutes the schema default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialBooking {
    pub status: Option<BookingStatus>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub booking_id: Option<String>,
    pub has_prepaid: Option<bool>,
    pub booked_on: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub special_request: Option<String>,
    pub room_type_code: Option<String>,
    pub room_count: Option<String>,
    pub occupancy_adult: Option<String>,
    pub occupancy_children: Option<String>,
    pub daily_rate: Option<String>,
    pub total_booking: Option<String>,
    pub amount_to_charge: Option<String>,
    pub billing: PartialBilling,
}

impl PartialBooking {
    /// Normalize into the fixed schema: every field present, missing values
    /// replaced by their documented default (empty string, `false` for the
    /// prepaid flag). Never fails; normalizing an already-normalized record
    /// is a no-op.
    pub fn normalize(self) -> BookingRecord {
        BookingRecord {
            status: self.status,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            booking_id: self.booking_id.unwrap_or_default(),
            has_prepaid: self.has_prepaid.unwrap_or(false),
            booked_on: self.booked_on.unwrap_or_default(),
            check_in: self.check_in.unwrap_or_default(),
            check_out: self.check_out.unwrap_or_default(),
            special_request: self.special_request.unwrap_or_default(),
            room_type_code: self.room_type_code.unwrap_or_default(),
            room_count: self.room_count.unwrap_or_default(),
            occupancy_adult: self.occupancy_adult.unwrap_or_default(),
            occupancy_children: self.occupancy_children.unwrap_or_default(),
            daily_rate: self.daily_rate.unwrap_or_default(),
            total_booking: self.total_booking.unwrap_or_default(),
            amount_to_charge: self.amount_to_charge.unwrap_or_default(),
            billing: BillingDetails {
                card_number: self.billing.card_number.unwrap_or_default(),
                activation_date: self.billing.activation_date.unwrap_or_default(),
                expiration_date: self.billing.expiration_date.unwrap_or_default(),
                validation_code: self.billing.validation_code.unwrap_or_default(),
            },
        }
    }
}

/// A fully-keyed booking record in the fixed output schema.
///
/// Serde field names match [`FIELD_ORDER`] exactly, so JSON output carries
/// the schema labels in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    #[serde(rename = "Status booking Reservation", with = "status_serde")]
    pub status: Option<BookingStatus>,

    #[serde(rename = "Customer First Name")]
    pub first_name: String,

    #[serde(rename = "Customer Last Name")]
    pub last_name: String,

    #[serde(rename = "Email Customer")]
    pub email: String,

    #[serde(rename = "BookingID")]
    pub booking_id: String,

    #[serde(rename = "Has Prepaid")]
    pub has_prepaid: bool,

    #[serde(rename = "Booked on")]
    pub booked_on: String,

    #[serde(rename = "Check in")]
    pub check_in: String,

    #[serde(rename = "Check out")]
    pub check_out: String,

    #[serde(rename = "Special Request")]
    pub special_request: String,

    #[serde(rename = "Room Type Code")]
    pub room_type_code: String,

    #[serde(rename = "No. of room")]
    pub room_count: String,

    #[serde(rename = "Occupancy Adult")]
    pub occupancy_adult: String,

    #[serde(rename = "Occupancy Childrent")]
    pub occupancy_children: String,

    #[serde(rename = "Daily Rate")]
    pub daily_rate: String,

    #[serde(rename = "Total Booking")]
    pub total_booking: String,

    #[serde(rename = "Amount to Charge Expedia")]
    pub amount_to_charge: String,

    #[serde(rename = "Billing Details:")]
    pub billing: BillingDetails,
}

/// Unset status serializes as the empty-string sentinel, not null.
mod status_serde {
    use super::BookingStatus;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        status: &Option<BookingStatus>,
        ser: S,
    ) -> Result<S::Ok, S::Error> {
        ser.serialize_str(status.map(|s| s.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        de: D,
    ) -> Result<Option<BookingStatus>, D::Error> {
        let s = String::deserialize(de)?;
        match s.as_str() {
            "Confirmed" => Ok(Some(BookingStatus::Confirmed)),
            "Cancelled" => Ok(Some(BookingStatus::Cancelled)),
            _ => Ok(None),
        }
    }
}

impl BookingRecord {
    /// Status as rendered in reports (empty string when unset).
    pub fn status_label(&self) -> &'static str {
        self.status.map(|s| s.as_str()).unwrap_or("")
    }

    /// The scalar fields as `(label, value)` pairs in schema order. Billing
    /// details are excluded; renderers emit them as their own section via
    /// [`BookingRecord::billing_fields`].
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Status booking Reservation", self.status_label().to_string()),
            ("Customer First Name", self.first_name.clone()),
            ("Customer Last Name", self.last_name.clone()),
            ("Email Customer", self.email.clone()),
            ("BookingID", self.booking_id.clone()),
            ("Has Prepaid", self.has_prepaid.to_string()),
            ("Booked on", self.booked_on.clone()),
            ("Check in", self.check_in.clone()),
            ("Check out", self.check_out.clone()),
            ("Special Request", self.special_request.clone()),
            ("Room Type Code", self.room_type_code.clone()),
            ("No. of room", self.room_count.clone()),
            ("Occupancy Adult", self.occupancy_adult.clone()),
            ("Occupancy Childrent", self.occupancy_children.clone()),
            ("Daily Rate", self.daily_rate.clone()),
            ("Total Booking", self.total_booking.clone()),
            ("Amount to Charge Expedia", self.amount_to_charge.clone()),
        ]
    }

    /// Billing subfields as `(label, value)` pairs in schema order.
    pub fn billing_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Card Number", self.billing.card_number.clone()),
            ("Activation Date", self.billing.activation_date.clone()),
            ("Expiration Date", self.billing.expiration_date.clone()),
            ("Validation Code", self.billing.validation_code.clone()),
        ]
    }

    /// Reverse of normalization, used to show idempotence: every field comes
    /// back as `Some`, so normalizing again reproduces the record.
    pub fn into_partial(self) -> PartialBooking {
        PartialBooking {
            status: self.status,
            first_name: Some(self.first_name),
            last_name: Some(self.last_name),
            email: Some(self.email),
            booking_id: Some(self.booking_id),
            has_prepaid: Some(self.has_prepaid),
            booked_on: Some(self.booked_on),
            check_in: Some(self.check_in),
            check_out: Some(self.check_out),
            special_request: Some(self.special_request),
            room_type_code: Some(self.room_type_code),
            room_count: Some(self.room_count),
            occupancy_adult: Some(self.occupancy_adult),
            occupancy_children: Some(self.occupancy_children),
            daily_rate: Some(self.daily_rate),
            total_booking: Some(self.total_booking),
            amount_to_charge: Some(self.amount_to_charge),
            billing: PartialBilling {
                card_number: Some(self.billing.card_number),
                activation_date: Some(self.billing.activation_date),
                expiration_date: Some(self.billing.expiration_date),
                validation_code: Some(self.billing.validation_code),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schema_completeness() {
        let record = PartialBooking::default().normalize();

        let mut labels: Vec<&str> = record.fields().iter().map(|(k, _)| *k).collect();
        labels.push("Billing Details:");
        assert_eq!(labels, FIELD_ORDER.to_vec());

        let billing_labels: Vec<&str> =
            record.billing_fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(billing_labels, BILLING_ORDER.to_vec());
    }

    #[test]
    fn test_defaults_when_absent() {
        let record = PartialBooking::default().normalize();

        assert_eq!(record.status_label(), "");
        assert!(!record.has_prepaid);
        for (_, value) in record.fields().iter().skip(1) {
            if value != "false" {
                assert_eq!(value, "");
            }
        }
        for (_, value) in record.billing_fields() {
            assert_eq!(value, "");
        }
    }

    #[test]
    fn test_normalize_idempotent() {
        let partial = PartialBooking {
            status: Some(BookingStatus::Confirmed),
            booking_id: Some("2307501514".to_string()),
            has_prepaid: Some(true),
            billing: PartialBilling {
                card_number: Some("4111-1111".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let once = partial.normalize();
        let twice = once.clone().into_partial().normalize();
        assert_eq!(twice, once);
    }

    #[test]
    fn test_json_uses_schema_labels() {
        let record = PartialBooking {
            status: Some(BookingStatus::Cancelled),
            booking_id: Some("123".to_string()),
            ..Default::default()
        }
        .normalize();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"Status booking Reservation\":\"Cancelled\""));
        assert!(json.contains("\"BookingID\":\"123\""));
        assert!(json.contains("\"Occupancy Childrent\":\"\""));
        assert!(json.contains("\"Billing Details:\""));
        assert!(json.contains("\"Has Prepaid\":false"));
    }

    #[test]
    fn test_status_round_trips_through_json() {
        let record = PartialBooking::default().normalize();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"Status booking Reservation\":\"\""));

        let back: BookingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
