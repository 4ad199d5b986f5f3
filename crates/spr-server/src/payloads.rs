//! Request bodies and their conversion into store inputs.
//!
//! Every field is read with explicit presence: an absent key leaves the stored
//! value alone, an explicit `null` clears a nullable column and is rejected on
//! a required one. Dates arrive as ISO strings; an empty string counts as
//! absent.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use spr_core::dates::parse_iso_date;
use spr_core::enums::{InternshipStatus, OfferStatus};
use spr_db::repos::internship::NewInternship;
use spr_db::repos::offer::NewOffer;
use spr_db::repos::report::NewReport;
use spr_db::repos::student::NewStudent;
use spr_db::updates::internship::InternshipUpdate;
use spr_db::updates::offer::OfferUpdate;
use spr_db::updates::report::ReportUpdate;
use spr_db::updates::student::StudentUpdate;

use crate::error::ApiError;

/// `None` when the key is absent, `Some(None)` for an explicit `null`.
type Field<T> = Option<Option<T>>;

fn present<'de, T, D>(deserializer: D) -> Result<Field<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A required field on create: absent and `null` are both rejected.
fn required<T>(field: &str, value: Field<T>) -> Result<T, ApiError> {
    value
        .flatten()
        .ok_or_else(|| ApiError::Validation(format!("{field} is required")))
}

/// A non-nullable field on update: absent keeps, `null` is rejected.
fn not_null<T>(field: &str, value: Field<T>) -> Result<Option<T>, ApiError> {
    match value {
        None => Ok(None),
        Some(None) => Err(ApiError::Validation(format!("{field} cannot be null"))),
        Some(Some(v)) => Ok(Some(v)),
    }
}

/// Parse a date field, treating `""` as absent.
fn date_field(field: &str, value: Field<String>) -> Result<Field<NaiveDate>, ApiError> {
    match value {
        None => Ok(None),
        Some(None) => Ok(Some(None)),
        Some(Some(s)) if s.trim().is_empty() => Ok(None),
        Some(Some(s)) => Ok(Some(Some(parse_iso_date(field, &s)?))),
    }
}

// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct StudentPayload {
    #[serde(default, deserialize_with = "present")]
    pub roll_no: Field<String>,
    #[serde(default, deserialize_with = "present")]
    pub name: Field<String>,
    #[serde(default, deserialize_with = "present")]
    pub dept: Field<String>,
    #[serde(default, deserialize_with = "present")]
    pub year: Field<String>,
    #[serde(default, deserialize_with = "present")]
    pub email: Field<String>,
}

impl StudentPayload {
    /// # Errors
    ///
    /// `Validation` if `roll_no` or `name` is missing.
    pub fn into_new(self) -> Result<NewStudent, ApiError> {
        Ok(NewStudent {
            roll_no: required("roll_no", self.roll_no)?,
            name: required("name", self.name)?,
            dept: self.dept.flatten(),
            year: self.year.flatten(),
            email: self.email.flatten(),
        })
    }

    /// # Errors
    ///
    /// `Validation` if `roll_no` or `name` is `null`.
    pub fn into_update(self) -> Result<StudentUpdate, ApiError> {
        Ok(StudentUpdate {
            roll_no: not_null("roll_no", self.roll_no)?,
            name: not_null("name", self.name)?,
            dept: self.dept,
            year: self.year,
            email: self.email,
        })
    }
}

// ---------------------------------------------------------------------------
// Offer
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct OfferPayload {
    #[serde(default, deserialize_with = "present")]
    pub student_id: Field<i64>,
    #[serde(default, deserialize_with = "present")]
    pub company: Field<String>,
    #[serde(default, deserialize_with = "present")]
    pub role: Field<String>,
    #[serde(default, deserialize_with = "present")]
    pub ctc: Field<String>,
    #[serde(default, deserialize_with = "present")]
    pub status: Field<OfferStatus>,
    #[serde(default, deserialize_with = "present")]
    pub date: Field<String>,
}

impl OfferPayload {
    /// # Errors
    ///
    /// `Validation` if `student_id` is missing, `status` is `null`, or `date`
    /// is malformed.
    pub fn into_new(self) -> Result<NewOffer, ApiError> {
        Ok(NewOffer {
            student_id: required("student_id", self.student_id)?,
            company: self.company.flatten(),
            role: self.role.flatten(),
            ctc: self.ctc.flatten(),
            status: not_null("status", self.status)?,
            date: date_field("date", self.date)?.flatten(),
        })
    }

    /// `student_id` is ignored: offers do not move between students.
    ///
    /// # Errors
    ///
    /// `Validation` if `status` or `date` is `null`, or `date` is malformed.
    pub fn into_update(self) -> Result<OfferUpdate, ApiError> {
        Ok(OfferUpdate {
            company: self.company,
            role: self.role,
            ctc: self.ctc,
            status: not_null("status", self.status)?,
            date: not_null("date", date_field("date", self.date)?)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Internship
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct InternshipPayload {
    #[serde(default, deserialize_with = "present")]
    pub student_id: Field<i64>,
    #[serde(default, deserialize_with = "present")]
    pub company: Field<String>,
    #[serde(default, deserialize_with = "present")]
    pub role: Field<String>,
    #[serde(default, deserialize_with = "present")]
    pub start_date: Field<String>,
    #[serde(default, deserialize_with = "present")]
    pub end_date: Field<String>,
    #[serde(default, deserialize_with = "present")]
    pub status: Field<InternshipStatus>,
}

impl InternshipPayload {
    /// # Errors
    ///
    /// `Validation` if `student_id` is missing, `status` is `null`, or a date
    /// is malformed.
    pub fn into_new(self) -> Result<NewInternship, ApiError> {
        Ok(NewInternship {
            student_id: required("student_id", self.student_id)?,
            company: self.company.flatten(),
            role: self.role.flatten(),
            start_date: date_field("start_date", self.start_date)?.flatten(),
            end_date: date_field("end_date", self.end_date)?.flatten(),
            status: not_null("status", self.status)?,
        })
    }

    /// # Errors
    ///
    /// `Validation` if `status` is `null` or a date is malformed.
    pub fn into_update(self) -> Result<InternshipUpdate, ApiError> {
        Ok(InternshipUpdate {
            company: self.company,
            role: self.role,
            start_date: date_field("start_date", self.start_date)?,
            end_date: date_field("end_date", self.end_date)?,
            status: not_null("status", self.status)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ReportPayload {
    #[serde(default, deserialize_with = "present")]
    pub internship_id: Field<i64>,
    #[serde(default, deserialize_with = "present")]
    pub date: Field<String>,
    #[serde(default, deserialize_with = "present")]
    pub title: Field<String>,
    #[serde(default, deserialize_with = "present")]
    pub content: Field<String>,
    #[serde(default, deserialize_with = "present")]
    pub evaluation: Field<String>,
}

impl ReportPayload {
    /// # Errors
    ///
    /// `Validation` if `internship_id` is missing or `date` is malformed.
    pub fn into_new(self) -> Result<NewReport, ApiError> {
        Ok(NewReport {
            internship_id: required("internship_id", self.internship_id)?,
            date: date_field("date", self.date)?.flatten(),
            title: self.title.flatten(),
            content: self.content.flatten(),
            evaluation: self.evaluation.flatten(),
        })
    }

    /// # Errors
    ///
    /// `Validation` if `date` is `null` or malformed.
    pub fn into_update(self) -> Result<ReportUpdate, ApiError> {
        Ok(ReportUpdate {
            date: not_null("date", date_field("date", self.date)?)?,
            title: self.title,
            content: self.content,
            evaluation: self.evaluation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse<T: for<'de> Deserialize<'de>>(value: serde_json::Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn absent_and_null_are_distinguished() {
        let payload: StudentPayload = parse(json!({ "email": null }));
        let update = payload.into_update().unwrap();
        assert_eq!(update.email, Some(None));
        assert_eq!(update.dept, None);
        assert_eq!(update.name, None);
    }

    #[test]
    fn student_create_requires_roll_no_and_name() {
        let err = parse::<StudentPayload>(json!({ "name": "A" }))
            .into_new()
            .unwrap_err();
        assert_eq!(err.to_string(), "roll_no is required");

        let err = parse::<StudentPayload>(json!({ "roll_no": "BT1", "name": null }))
            .into_new()
            .unwrap_err();
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn null_on_required_update_field_is_rejected() {
        let err = parse::<StudentPayload>(json!({ "roll_no": null }))
            .into_update()
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = parse::<OfferPayload>(json!({ "status": null }))
            .into_update()
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn offer_create_parses_date_and_status() {
        let new = parse::<OfferPayload>(json!({
            "student_id": 2,
            "company": "Zomato",
            "status": "Accepted",
            "date": "2025-05-10T09:30:00"
        }))
        .into_new()
        .unwrap();

        assert_eq!(new.student_id, 2);
        assert_eq!(new.status, Some(OfferStatus::Accepted));
        assert_eq!(new.date, NaiveDate::from_ymd_opt(2025, 5, 10));
    }

    #[test]
    fn offer_create_without_student_id_is_rejected() {
        let err = parse::<OfferPayload>(json!({ "company": "X" }))
            .into_new()
            .unwrap_err();
        assert_eq!(err.to_string(), "student_id is required");
    }

    #[test]
    fn empty_date_string_is_absent() {
        let new = parse::<ReportPayload>(json!({ "internship_id": 1, "date": "" }))
            .into_new()
            .unwrap();
        assert_eq!(new.date, None);

        let update = parse::<InternshipPayload>(json!({ "end_date": "" }))
            .into_update()
            .unwrap();
        assert_eq!(update.end_date, None);
    }

    #[test]
    fn null_clears_internship_dates() {
        let update = parse::<InternshipPayload>(json!({ "start_date": null }))
            .into_update()
            .unwrap();
        assert_eq!(update.start_date, Some(None));
        assert_eq!(update.end_date, None);
    }

    #[test]
    fn malformed_date_is_validation_error() {
        let err = parse::<ReportPayload>(json!({ "internship_id": 1, "date": "10/05/2025" }))
            .into_new()
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(err.to_string().contains("date"));
    }

    #[test]
    fn unknown_status_fails_to_deserialize() {
        let result: Result<OfferPayload, _> =
            serde_json::from_value(json!({ "status": "Pending" }));
        assert!(result.is_err());
    }
}
