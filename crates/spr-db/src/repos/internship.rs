//! Internship repository. Reads nest each internship's reports; deletes
//! cascade to them.

use chrono::NaiveDate;
use spr_core::entities::Internship;
use spr_core::enums::{EntityKind, InternshipStatus};
use spr_core::records::{InternshipRecord, assemble_internships};

use super::{affected_or_not_found, ensure_exists, non_blank};
use crate::error::DatabaseError;
use crate::helpers::{date_to_sql, get_count, get_opt_string, parse_enum, parse_optional_date};
use crate::repos::report::{load_reports, load_reports_for_internship};
use crate::service::{SprService, finish};
use crate::updates::SetClauses;
use crate::updates::internship::InternshipUpdate;

const SELECT_COLS: &str = "id, student_id, company, role, start_date, end_date, status";

/// Fields for a new internship. `status` defaults to `Ongoing`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewInternship {
    pub student_id: i64,
    pub company: Option<String>,
    pub role: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<InternshipStatus>,
}

fn row_to_internship(row: &libsql::Row) -> Result<Internship, DatabaseError> {
    let start_date = get_opt_string(row, 4)?;
    let end_date = get_opt_string(row, 5)?;
    let status: String = row.get(6)?;
    Ok(Internship {
        id: row.get(0)?,
        student_id: row.get(1)?,
        company: get_opt_string(row, 2)?,
        role: get_opt_string(row, 3)?,
        start_date: parse_optional_date(start_date.as_deref())?,
        end_date: parse_optional_date(end_date.as_deref())?,
        status: parse_enum(&status)?,
    })
}

async fn collect(mut rows: libsql::Rows) -> Result<Vec<Internship>, DatabaseError> {
    let mut internships = Vec::new();
    while let Some(row) = rows.next().await? {
        internships.push(row_to_internship(&row)?);
    }
    Ok(internships)
}

pub(crate) async fn load_internships(
    conn: &libsql::Connection,
) -> Result<Vec<Internship>, DatabaseError> {
    let rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM internships ORDER BY id"), ())
        .await?;
    collect(rows).await
}

pub(crate) async fn load_internships_for_student(
    conn: &libsql::Connection,
    student_id: i64,
) -> Result<Vec<Internship>, DatabaseError> {
    let rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM internships WHERE student_id = ?1 ORDER BY id"),
            [student_id],
        )
        .await?;
    collect(rows).await
}

async fn load_record(conn: &libsql::Connection, id: i64) -> Result<InternshipRecord, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM internships WHERE id = ?1"), [id])
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NotFound {
        entity: EntityKind::Internship,
        id,
    })?;
    let internship = row_to_internship(&row)?;
    drop(rows);

    let reports = load_reports_for_internship(conn, id).await?;
    Ok(InternshipRecord {
        internship,
        reports,
    })
}

/// Insert an internship on `conn` after checking its student exists.
pub(crate) async fn insert_internship(
    conn: &libsql::Connection,
    new: &NewInternship,
) -> Result<InternshipRecord, DatabaseError> {
    let status = new.status.unwrap_or_default();

    ensure_exists(conn, EntityKind::Student, new.student_id).await?;
    conn.execute(
        "INSERT INTO internships (student_id, company, role, start_date, end_date, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        libsql::params![
            new.student_id,
            non_blank(new.company.as_deref()),
            non_blank(new.role.as_deref()),
            new.start_date.map(date_to_sql),
            new.end_date.map(date_to_sql),
            status.as_str()
        ],
    )
    .await?;
    load_record(conn, conn.last_insert_rowid()).await
}

impl SprService {
    /// Record an internship for an existing student.
    ///
    /// # Errors
    ///
    /// `NotFound` if the student does not exist; nothing is written.
    pub async fn create_internship(
        &self,
        new: &NewInternship,
    ) -> Result<InternshipRecord, DatabaseError> {
        let _gate = self.exclusive().await;
        let tx = self.begin().await?;
        let result = insert_internship(&tx, new).await;
        let record = finish(tx, result).await?;

        tracing::debug!(
            id = record.internship.id,
            student_id = record.internship.student_id,
            status = %record.internship.status,
            "internship created"
        );
        Ok(record)
    }

    pub async fn get_internship(&self, id: i64) -> Result<InternshipRecord, DatabaseError> {
        let _gate = self.exclusive().await;
        load_record(self.db().conn(), id).await
    }

    /// All internships ordered by id, each with its reports.
    pub async fn list_internships(&self) -> Result<Vec<InternshipRecord>, DatabaseError> {
        let _gate = self.exclusive().await;
        let conn = self.db().conn();
        let internships = load_internships(conn).await?;
        let reports = load_reports(conn).await?;
        Ok(assemble_internships(internships, reports))
    }

    pub async fn update_internship(
        &self,
        id: i64,
        update: InternshipUpdate,
    ) -> Result<InternshipRecord, DatabaseError> {
        let mut clauses = SetClauses::default();
        if let Some(ref company) = update.company {
            clauses.set_nullable("company", non_blank(company.as_deref()));
        }
        if let Some(ref role) = update.role {
            clauses.set_nullable("role", non_blank(role.as_deref()));
        }
        if let Some(start_date) = update.start_date {
            clauses.set_nullable("start_date", start_date.map(date_to_sql));
        }
        if let Some(end_date) = update.end_date {
            clauses.set_nullable("end_date", end_date.map(date_to_sql));
        }
        if let Some(status) = update.status {
            clauses.set("status", status.as_str());
        }

        let _gate = self.exclusive().await;
        if update.is_empty() {
            return load_record(self.db().conn(), id).await;
        }

        let (sql, params) = clauses.into_update("internships", id);
        let tx = self.begin().await?;
        let result: Result<_, DatabaseError> = async {
            let affected = tx.execute(&sql, libsql::params_from_iter(params)).await?;
            affected_or_not_found(affected, EntityKind::Internship, id)?;
            load_record(&tx, id).await
        }
        .await;
        let record = finish(tx, result).await?;

        tracing::debug!(id, ?update, "internship updated");
        Ok(record)
    }

    /// Delete an internship together with its reports.
    pub async fn delete_internship(&self, id: i64) -> Result<(), DatabaseError> {
        let _gate = self.exclusive().await;
        let tx = self.begin().await?;
        let result: Result<_, DatabaseError> = async {
            let mut rows = tx
                .query("SELECT COUNT(*) FROM reports WHERE internship_id = ?1", [id])
                .await?;
            let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
            let reports = get_count(&row, 0)?;
            drop(rows);

            let affected = tx.execute("DELETE FROM internships WHERE id = ?1", [id]).await?;
            affected_or_not_found(affected, EntityKind::Internship, id)?;
            Ok(reports)
        }
        .await;
        let reports = finish(tx, result).await?;

        tracing::debug!(id, reports, "internship deleted with cascade");
        Ok(())
    }
}
