//! Report repository. Reports are listed only through their internship.

use chrono::NaiveDate;
use spr_core::dates::today;
use spr_core::entities::Report;
use spr_core::enums::EntityKind;

use super::{affected_or_not_found, ensure_exists, non_blank};
use crate::error::DatabaseError;
use crate::helpers::{date_to_sql, get_opt_string, parse_date};
use crate::service::{SprService, finish};
use crate::updates::SetClauses;
use crate::updates::report::ReportUpdate;

const SELECT_COLS: &str = "id, internship_id, date, title, content, evaluation";

/// Fields for a new report. `date` defaults to today.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewReport {
    pub internship_id: i64,
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub evaluation: Option<String>,
}

fn row_to_report(row: &libsql::Row) -> Result<Report, DatabaseError> {
    let date: String = row.get(2)?;
    Ok(Report {
        id: row.get(0)?,
        internship_id: row.get(1)?,
        date: parse_date(&date)?,
        title: get_opt_string(row, 3)?,
        content: get_opt_string(row, 4)?,
        evaluation: get_opt_string(row, 5)?,
    })
}

async fn collect(mut rows: libsql::Rows) -> Result<Vec<Report>, DatabaseError> {
    let mut reports = Vec::new();
    while let Some(row) = rows.next().await? {
        reports.push(row_to_report(&row)?);
    }
    Ok(reports)
}

async fn fetch_report(conn: &libsql::Connection, id: i64) -> Result<Report, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM reports WHERE id = ?1"), [id])
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NotFound {
        entity: EntityKind::Report,
        id,
    })?;
    row_to_report(&row)
}

pub(crate) async fn load_reports(conn: &libsql::Connection) -> Result<Vec<Report>, DatabaseError> {
    let rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM reports ORDER BY id"), ())
        .await?;
    collect(rows).await
}

pub(crate) async fn load_reports_for_internship(
    conn: &libsql::Connection,
    internship_id: i64,
) -> Result<Vec<Report>, DatabaseError> {
    let rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM reports WHERE internship_id = ?1 ORDER BY id"),
            [internship_id],
        )
        .await?;
    collect(rows).await
}

/// Reports on any of a student's internships.
pub(crate) async fn load_reports_for_student(
    conn: &libsql::Connection,
    student_id: i64,
) -> Result<Vec<Report>, DatabaseError> {
    let rows = conn
        .query(
            "SELECT r.id, r.internship_id, r.date, r.title, r.content, r.evaluation
             FROM reports r
             JOIN internships i ON i.id = r.internship_id
             WHERE i.student_id = ?1
             ORDER BY r.id",
            [student_id],
        )
        .await?;
    collect(rows).await
}

impl SprService {
    /// File a report against an existing internship.
    ///
    /// # Errors
    ///
    /// `NotFound` if the internship does not exist; nothing is written.
    pub async fn create_report(&self, new: &NewReport) -> Result<Report, DatabaseError> {
        let date = new.date.unwrap_or_else(today);

        let _gate = self.exclusive().await;
        let tx = self.begin().await?;
        let result: Result<_, DatabaseError> = async {
            ensure_exists(&tx, EntityKind::Internship, new.internship_id).await?;
            tx.execute(
                "INSERT INTO reports (internship_id, date, title, content, evaluation)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    new.internship_id,
                    date_to_sql(date),
                    non_blank(new.title.as_deref()),
                    non_blank(new.content.as_deref()),
                    non_blank(new.evaluation.as_deref())
                ],
            )
            .await?;
            fetch_report(&tx, tx.last_insert_rowid()).await
        }
        .await;
        let report = finish(tx, result).await?;

        tracing::debug!(id = report.id, internship_id = report.internship_id, "report created");
        Ok(report)
    }

    pub async fn get_report(&self, id: i64) -> Result<Report, DatabaseError> {
        let _gate = self.exclusive().await;
        fetch_report(self.db().conn(), id).await
    }

    pub async fn update_report(&self, id: i64, update: ReportUpdate) -> Result<Report, DatabaseError> {
        let mut clauses = SetClauses::default();
        if let Some(date) = update.date {
            clauses.set("date", date_to_sql(date));
        }
        if let Some(ref title) = update.title {
            clauses.set_nullable("title", non_blank(title.as_deref()));
        }
        if let Some(ref content) = update.content {
            clauses.set_nullable("content", non_blank(content.as_deref()));
        }
        if let Some(ref evaluation) = update.evaluation {
            clauses.set_nullable("evaluation", non_blank(evaluation.as_deref()));
        }

        let _gate = self.exclusive().await;
        if update.is_empty() {
            return fetch_report(self.db().conn(), id).await;
        }

        let (sql, params) = clauses.into_update("reports", id);
        let tx = self.begin().await?;
        let result: Result<_, DatabaseError> = async {
            let affected = tx.execute(&sql, libsql::params_from_iter(params)).await?;
            affected_or_not_found(affected, EntityKind::Report, id)?;
            fetch_report(&tx, id).await
        }
        .await;
        let report = finish(tx, result).await?;

        tracing::debug!(id, ?update, "report updated");
        Ok(report)
    }

    pub async fn delete_report(&self, id: i64) -> Result<(), DatabaseError> {
        let _gate = self.exclusive().await;
        let tx = self.begin().await?;
        let result: Result<_, DatabaseError> = async {
            let affected = tx.execute("DELETE FROM reports WHERE id = ?1", [id]).await?;
            affected_or_not_found(affected, EntityKind::Report, id)
        }
        .await;
        finish(tx, result).await?;

        tracing::debug!(id, "report deleted");
        Ok(())
    }
}
