//! Date vocabulary and conversion for OTA booking documents.
//!
//! Every function here is pure and total: unparsable input degrades to a
//! documented fallback value instead of an error, so one bad date never
//! aborts extraction of the rest of the record.

use chrono::{Datelike, NaiveDate};

use super::patterns::{LONG_DATE, SENT_DATE_NUMERIC, SENT_DATE_THANG};

/// Convert a month name (abbreviated or full, any case) to its 1-based
/// number. Returns `None` for anything else.
pub fn month_number(name: &str) -> Option<u32> {
    let name = name.trim().to_lowercase();
    let number = match name.as_str() {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    };
    Some(number)
}

/// Compose textual month/day/year parts into `MM/DD/YYYY`.
///
/// If the month is not recognized (or day/year are not numeric) the parts
/// come back as the human-readable string `"<month> <day>, <year>"`.
pub fn compose_month_day_year(month: &str, day: &str, year: &str) -> String {
    match (month_number(month), day.trim().parse::<u32>(), year.trim().parse::<i32>()) {
        (Some(mm), Ok(dd), Ok(yyyy)) => format!("{mm:02}/{dd:02}/{yyyy}"),
        _ => format!("{month} {day}, {year}"),
    }
}

/// Convert a date string like `"November 16, 2025"` or `"Nov 16, 2025"` to
/// `"11/16/2025"`. If no recognized pattern matches, the original string is
/// returned unchanged.
pub fn parse_long_date(date_str: &str) -> String {
    if date_str.is_empty() {
        return String::new();
    }
    let cleaned = date_str.replace('\u{00a0}', " ");
    let cleaned = cleaned.trim();

    for fmt in ["%b %d, %Y", "%B %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(cleaned, fmt) {
            return date.format("%m/%d/%Y").to_string();
        }
    }

    // Manual fallback for slightly irregular spacing or casing.
    if let Some(caps) = LONG_DATE.captures(cleaned) {
        return compose_month_day_year(&caps[1], &caps[2], &caps[3]);
    }

    date_str.to_string()
}

/// Extract a booking "sent" date from a Vietnamese-locale header line.
///
/// Recognizes the numeric form `"Ngày T2 10/11/2025 10:51"` (day precedes
/// month, so the parts are swapped into month/day order) and the worded form
/// `"10 tháng 11, 2025"`. Returns an empty string when neither matches;
/// that is a not-found signal, not an error.
pub fn parse_localized_sent_date(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    if let Some(caps) = SENT_DATE_NUMERIC.captures(text) {
        let dd: u32 = caps[1].parse().unwrap_or(0);
        let mm: u32 = caps[2].parse().unwrap_or(0);
        let yyyy = &caps[3];
        return format!("{mm:02}/{dd:02}/{yyyy}");
    }

    if let Some(caps) = SENT_DATE_THANG.captures(text) {
        let dd: u32 = caps[1].parse().unwrap_or(0);
        let mm: u32 = caps[2].parse().unwrap_or(0);
        let yyyy = &caps[3];
        return format!("{mm:02}/{dd:02}/{yyyy}");
    }

    String::new()
}

/// Calendar-correct last day of the given month/year.
///
/// Out-of-range months fall back to 31 rather than failing.
pub fn last_day_of_month(month: u32, year: i32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_number() {
        assert_eq!(month_number("Nov"), Some(11));
        assert_eq!(month_number("november"), Some(11));
        assert_eq!(month_number("MAY"), Some(5));
        assert_eq!(month_number("Novem"), None);
        assert_eq!(month_number(""), None);
    }

    #[test]
    fn test_compose_month_day_year() {
        assert_eq!(compose_month_day_year("Nov", "16", "2025"), "11/16/2025");
        assert_eq!(compose_month_day_year("march", "5", "2024"), "03/05/2024");
        assert_eq!(
            compose_month_day_year("Frimaire", "16", "2025"),
            "Frimaire 16, 2025"
        );
    }

    #[test]
    fn test_parse_long_date() {
        assert_eq!(parse_long_date("Nov 16, 2025"), "11/16/2025");
        assert_eq!(parse_long_date("November 16, 2025"), "11/16/2025");
        assert_eq!(parse_long_date("  Nov 16, 2025  "), "11/16/2025");
        assert_eq!(parse_long_date("not-a-date"), "not-a-date");
        assert_eq!(parse_long_date(""), "");
    }

    #[test]
    fn test_parse_localized_sent_date_swaps_day_month() {
        assert_eq!(
            parse_localized_sent_date("Ngày T2 10/11/2025 10:51"),
            "11/10/2025"
        );
    }

    #[test]
    fn test_parse_localized_sent_date_thang_form() {
        assert_eq!(
            parse_localized_sent_date("Đã gửi: Thứ Hai, 10 tháng 11, 2025 10:51"),
            "11/10/2025"
        );
        assert_eq!(parse_localized_sent_date("no date here"), "");
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2, 2024), 29);
        assert_eq!(last_day_of_month(2, 2025), 28);
        assert_eq!(last_day_of_month(12, 2025), 31);
        assert_eq!(last_day_of_month(9, 2030), 30);
    }
}
