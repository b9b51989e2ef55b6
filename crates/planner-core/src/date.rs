//! The fixed textual date form shared by storage and the HTTP API.
//!
//! Every date crossing a boundary is written as 8 digits, year-month-day,
//! without separators (`20250310`). Existing clients depend on this exact
//! shape, so parsing is strict: no padding, no separators, no time part.

use chrono::{Local, NaiveDate};

/// `strftime` pattern for the wire/storage form.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Formats a date in the 8-digit form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses an 8-digit date. Returns `None` for anything else.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    // chrono accepts fewer digits per field; the wire form does not.
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Today's date on the local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_format_pads_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(format_date(date), "20250301");
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(
            parse_date("20240229"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[rstest]
    #[case("")]
    #[case("2025031")]
    #[case("202503100")]
    #[case("2025-03-10")]
    #[case("20250230")]
    #[case("20251301")]
    #[case("2025031a")]
    #[case("+2025031")]
    fn test_parse_rejects(#[case] raw: &str) {
        assert_eq!(parse_date(raw), None);
    }
}
