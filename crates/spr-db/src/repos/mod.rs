//! Repository modules implementing CRUD operations for all SPR entities.
//!
//! Each module adds methods to `SprService` via `impl SprService` blocks.
//! Row loaders that run inside an open transaction take `&libsql::Connection`
//! (a `Transaction` derefs to one) and never touch the gate.

pub mod dashboard;
pub mod internship;
pub mod offer;
pub mod report;
pub mod student;

use spr_core::enums::EntityKind;

use crate::error::DatabaseError;

/// Map `EntityKind` to the corresponding SQL table name.
#[must_use]
pub const fn entity_table(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Student => "students",
        EntityKind::Offer => "offers",
        EntityKind::Internship => "internships",
        EntityKind::Report => "reports",
    }
}

/// Fail with `NotFound` unless a row with `id` exists in `entity`'s table.
pub(crate) async fn ensure_exists(
    conn: &libsql::Connection,
    entity: EntityKind,
    id: i64,
) -> Result<(), DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT 1 FROM {} WHERE id = ?1", entity_table(entity)),
            [id],
        )
        .await?;
    match rows.next().await? {
        Some(_) => Ok(()),
        None => Err(DatabaseError::NotFound { entity, id }),
    }
}

/// Turn "zero rows affected" into `NotFound`.
pub(crate) fn affected_or_not_found(
    affected: u64,
    entity: EntityKind,
    id: i64,
) -> Result<(), DatabaseError> {
    if affected == 0 {
        Err(DatabaseError::NotFound { entity, id })
    } else {
        Ok(())
    }
}

/// Store blank optional text as NULL.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Reject blank required text.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), DatabaseError> {
    if value.trim().is_empty() {
        Err(DatabaseError::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}
