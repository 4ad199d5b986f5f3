//! Dashboard counts, recomputed on every call.

use spr_core::responses::DashboardSummary;

use crate::error::DatabaseError;
use crate::helpers::get_count;
use crate::service::SprService;

impl SprService {
    /// Totals over the current state, read in a single statement.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, DatabaseError> {
        let _gate = self.exclusive().await;
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT
                    (SELECT COUNT(*) FROM students),
                    (SELECT COUNT(*) FROM offers),
                    (SELECT COUNT(*) FROM offers WHERE status = 'Accepted'),
                    (SELECT COUNT(*) FROM offers WHERE status = 'Joined'),
                    (SELECT COUNT(*) FROM internships WHERE status = 'Ongoing')",
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;

        Ok(DashboardSummary {
            total_students: get_count(&row, 0)?,
            total_offers: get_count(&row, 1)?,
            accepted_offers: get_count(&row, 2)?,
            joined_offers: get_count(&row, 3)?,
            ongoing_internships: get_count(&row, 4)?,
        })
    }
}
