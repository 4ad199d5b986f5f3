//! Response types returned by the HTTP API that are not entity records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response from `GET /dashboard/summary`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_students: u64,
    pub total_offers: u64,
    pub accepted_offers: u64,
    pub joined_offers: u64,
    pub ongoing_internships: u64,
}

/// Confirmation body returned by every delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    #[must_use]
    pub fn deleted() -> Self {
        Self {
            message: "deleted".to_string(),
        }
    }
}
