//! Report rendering for normalized booking records.
//!
//! The plain-text grammar is consumed by downstream tooling and must be
//! reproduced byte-exactly: one `"<FieldName>: <value>"` line per scalar
//! field in schema order, a billing section header, then one indented line
//! per billing subfield.

use crate::models::booking::BookingRecord;

/// Render a record as the plain-text report.
pub fn render_text(record: &BookingRecord) -> String {
    let mut out = String::new();
    for (label, value) in record.fields() {
        out.push_str(label);
        out.push_str(": ");
        out.push_str(&value);
        out.push('\n');
    }
    out.push_str("\n--- Billing Details: ---\n");
    for (label, value) in record.billing_fields() {
        out.push_str("  ");
        out.push_str(label);
        out.push_str(": ");
        out.push_str(&value);
        out.push('\n');
    }
    out
}

/// Render a record as a minimal self-contained HTML document: title from the
/// booking id, a status badge, one table row per field in schema order, a
/// billing sub-section, and an informational footer row.
///
/// Field values come from untrusted documents and are escaped before being
/// inserted into markup.
pub fn render_html(record: &BookingRecord) -> String {
    let mut rows = String::new();
    for (label, value) in record.fields() {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(label),
            escape_html(&value)
        ));
    }

    let mut bill_rows = String::new();
    for (label, value) in record.billing_fields() {
        bill_rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(label),
            escape_html(&value)
        ));
    }

    format!(
        r#"<!doctype html>
<html lang="en"><meta charset="utf-8"><title>{title}-report</title>
<style>
body{{font-family:system-ui,-apple-system,Segoe UI,Roboto,Arial,sans-serif;margin:24px;line-height:1.45}}
h1{{font-size:20px;margin:0 0 8px}}
.badge{{display:inline-block;padding:2px 8px;border-radius:999px;background:#fee2e2;color:#991b1b;
       font-weight:700;font-size:12px;margin-left:6px}}
table{{border-collapse:collapse;min-width:720px;max-width:980px;box-shadow:0 2px 8px rgba(0,0,0,.06)}}
td,th{{border:1px solid #e5e7eb;padding:8px 10px;vertical-align:top}}
td:first-child{{background:#f9fafb;font-weight:600;width:260px}}
tfoot td{{border:none;color:#6b7280;padding-top:10px}}
</style>
<h1>Normalized Booking <span class="badge">{status}</span></h1>
<table><tbody>
{rows}<tr><th colspan="2" style="text-align:left">Billing Details</th></tr>
{bill_rows}</tbody>
<tfoot><tr><td colspan="2">Source: OTA confirmation email PDF.</td></tr></tfoot>
</table></html>
"#,
        title = escape_html(&record.booking_id),
        status = escape_html(record.status_label()),
    )
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::{BookingStatus, PartialBooking};
    use pretty_assertions::assert_eq;

    fn sample_record() -> BookingRecord {
        PartialBooking {
            status: Some(BookingStatus::Confirmed),
            first_name: Some("Thi Mai".into()),
            last_name: Some("Tran".into()),
            booking_id: Some("987654321".into()),
            has_prepaid: Some(true),
            check_in: Some("11/12/2025".into()),
            check_out: Some("11/14/2025".into()),
            room_count: Some("1".into()),
            occupancy_adult: Some("2".into()),
            occupancy_children: Some("0".into()),
            total_booking: Some("7,581,000 VND".into()),
            ..Default::default()
        }
        .normalize()
    }

    #[test]
    fn test_text_grammar_is_byte_exact() {
        // Empty values still carry the space after the colon.
        let expected = concat!(
            "Status booking Reservation: Confirmed\n",
            "Customer First Name: Thi Mai\n",
            "Customer Last Name: Tran\n",
            "Email Customer: \n",
            "BookingID: 987654321\n",
            "Has Prepaid: true\n",
            "Booked on: \n",
            "Check in: 11/12/2025\n",
            "Check out: 11/14/2025\n",
            "Special Request: \n",
            "Room Type Code: \n",
            "No. of room: 1\n",
            "Occupancy Adult: 2\n",
            "Occupancy Childrent: 0\n",
            "Daily Rate: \n",
            "Total Booking: 7,581,000 VND\n",
            "Amount to Charge Expedia: \n",
            "\n--- Billing Details: ---\n",
            "  Card Number: \n",
            "  Activation Date: \n",
            "  Expiration Date: \n",
            "  Validation Code: \n",
        );
        assert_eq!(render_text(&sample_record()), expected);
    }

    #[test]
    fn test_html_contains_schema_rows() {
        let html = render_html(&sample_record());
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>987654321-report</title>"));
        assert!(html.contains(r#"<span class="badge">Confirmed</span>"#));
        assert!(html.contains("<td>Total Booking</td><td>7,581,000 VND</td>"));
        assert!(html.contains(">Billing Details</th>"));
        // 17 scalar rows + 4 billing rows.
        assert_eq!(html.matches("<tr><td>").count(), 21);
    }

    #[test]
    fn test_html_escapes_field_values() {
        let record = PartialBooking {
            room_type_code: Some("<script>alert('x')</script> & co".into()),
            ..Default::default()
        }
        .normalize();

        let html = render_html(&record);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; co"));
    }
}
