//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. Dates are stored as `YYYY-MM-DD` text and statuses as their
//! display strings.

use chrono::NaiveDate;

use crate::error::DatabaseError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a required TEXT column as a calendar date.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the stored text is not `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<NaiveDate>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_date(s)?)),
        _ => Ok(None),
    }
}

/// Render a date the way it is stored.
#[must_use]
pub fn date_to_sql(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with the spr-core status enums, whose serde names are the stored strings.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read a `COUNT(*)` column.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for a negative count.
pub fn get_count(row: &libsql::Row, idx: i32) -> Result<u64, DatabaseError> {
    let n = row.get::<i64>(idx)?;
    u64::try_from(n).map_err(|_| DatabaseError::InvalidState(format!("negative count {n}")))
}

/// Detect a UNIQUE constraint failure.
///
/// libSQL surfaces `SQLite` constraint errors as text; the predicate matches the
/// `SQLite` message prefix only.
#[must_use]
pub fn is_unique_violation(e: &libsql::Error) -> bool {
    e.to_string().contains("UNIQUE constraint failed")
}

/// Convert a write error, turning UNIQUE failures into `UniqueViolation`.
pub fn map_write_error(e: libsql::Error, what: &str) -> DatabaseError {
    if is_unique_violation(&e) {
        DatabaseError::UniqueViolation(what.to_string())
    } else {
        DatabaseError::LibSql(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use spr_core::enums::{InternshipStatus, OfferStatus};

    #[test]
    fn date_roundtrip_through_sql_text() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
        assert_eq!(date_to_sql(date), "2025-08-31");
        assert_eq!(parse_date("2025-08-31").unwrap(), date);
    }

    #[test]
    fn optional_date_treats_empty_as_none() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        assert!(parse_optional_date(Some("31/08/2025")).is_err());
    }

    #[test]
    fn parse_status_enums() {
        assert_eq!(parse_enum::<OfferStatus>("Joined").unwrap(), OfferStatus::Joined);
        assert_eq!(
            parse_enum::<InternshipStatus>("Completed").unwrap(),
            InternshipStatus::Completed
        );
        assert!(parse_enum::<OfferStatus>("Pending").is_err());
    }
}
