use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A student whose placement activity is being tracked.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub roll_no: String,
    pub name: String,
    pub dept: Option<String>,
    pub year: Option<String>,
    pub email: Option<String>,
}
