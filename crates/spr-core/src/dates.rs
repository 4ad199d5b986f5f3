//! ISO-8601 calendar date parsing for request payloads.
//!
//! Accepts a plain calendar date (`2025-05-10`) or a datetime from which the
//! calendar date is taken (`2025-05-10T09:30:00`, `2025-05-10 09:30:00`,
//! `2025-05-10T09:30:00+05:30`).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::CoreError;

/// Parse an ISO date or datetime string into a calendar date.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming `field` if the string matches none
/// of the accepted formats.
pub fn parse_iso_date(field: &str, s: &str) -> Result<NaiveDate, CoreError> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.date());
        }
    }
    Err(CoreError::Validation(format!(
        "{field}: '{s}' is not an ISO-8601 date (expected YYYY-MM-DD)"
    )))
}

/// The current calendar date in UTC, used when a date is omitted on create.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("2025-05-10")]
    #[case(" 2025-05-10 ")]
    #[case("2025-05-10T09:30:00")]
    #[case("2025-05-10T09:30")]
    #[case("2025-05-10 09:30:00.250")]
    #[case("2025-05-10T23:30:00+05:30")]
    fn accepts_iso_forms(#[case] input: &str) {
        let date = parse_iso_date("date", input).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 5, 10).unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("10/05/2025")]
    #[case("2025-13-01")]
    #[case("2025-02-30")]
    #[case("yesterday")]
    fn rejects_malformed(#[case] input: &str) {
        let err = parse_iso_date("start_date", input).unwrap_err();
        let CoreError::Validation(msg) = err;
        assert!(msg.starts_with("start_date:"), "{msg}");
    }
}
