//! Calendar-date validation for search bounds.

use chrono::NaiveDate;

/// Check that `s` is a valid `YYYY-MM-DD` calendar date.
///
/// The shape is strict: four-digit year, two-digit month, two-digit day.
/// `2020-1-5` and `+2020-01-05` are rejected even though chrono would parse them.
pub fn is_valid_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return false;
    }

    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });

    shape_ok && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}
