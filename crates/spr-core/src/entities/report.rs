use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A progress report filed against an internship.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Report {
    pub id: i64,
    pub internship_id: i64,
    pub date: NaiveDate,
    pub title: Option<String>,
    pub content: Option<String>,
    pub evaluation: Option<String>,
}
