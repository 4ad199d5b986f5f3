use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::OfferStatus;

/// A job offer extended to a student.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Offer {
    pub id: i64,
    pub student_id: i64,
    pub company: Option<String>,
    pub role: Option<String>,
    /// Free-form compensation, e.g. `"6 LPA"`.
    pub ctc: Option<String>,
    pub status: OfferStatus,
    pub date: NaiveDate,
}
