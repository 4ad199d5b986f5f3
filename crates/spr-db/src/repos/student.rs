//! Student repository: CRUD with nested offers/internships/reports on read
//! and cascading delete.

use spr_core::entities::Student;
use spr_core::enums::EntityKind;
use spr_core::records::{StudentRecord, assemble_students};

use super::{affected_or_not_found, non_blank, require_text};
use crate::error::DatabaseError;
use crate::helpers::{get_count, get_opt_string, map_write_error};
use crate::repos::internship::{load_internships, load_internships_for_student};
use crate::repos::offer::{load_offers, load_offers_for_student};
use crate::repos::report::{load_reports, load_reports_for_student};
use crate::service::{SprService, finish};
use crate::updates::SetClauses;
use crate::updates::student::StudentUpdate;

const SELECT_COLS: &str = "id, roll_no, name, dept, year, email";

/// Fields for a new student.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStudent {
    pub roll_no: String,
    pub name: String,
    pub dept: Option<String>,
    pub year: Option<String>,
    pub email: Option<String>,
}

fn row_to_student(row: &libsql::Row) -> Result<Student, DatabaseError> {
    Ok(Student {
        id: row.get(0)?,
        roll_no: row.get(1)?,
        name: row.get(2)?,
        dept: get_opt_string(row, 3)?,
        year: get_opt_string(row, 4)?,
        email: get_opt_string(row, 5)?,
    })
}

pub(crate) async fn fetch_student(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Student, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM students WHERE id = ?1"), [id])
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NotFound {
        entity: EntityKind::Student,
        id,
    })?;
    row_to_student(&row)
}

async fn load_students(conn: &libsql::Connection) -> Result<Vec<Student>, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM students ORDER BY id"), ())
        .await?;
    let mut students = Vec::new();
    while let Some(row) = rows.next().await? {
        students.push(row_to_student(&row)?);
    }
    Ok(students)
}

/// Insert a student on `conn` without touching the gate.
pub(crate) async fn insert_student(
    conn: &libsql::Connection,
    new: &NewStudent,
) -> Result<Student, DatabaseError> {
    require_text("roll_no", &new.roll_no)?;
    require_text("name", &new.name)?;

    conn.execute(
        "INSERT INTO students (roll_no, name, dept, year, email)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        libsql::params![
            new.roll_no.as_str(),
            new.name.as_str(),
            non_blank(new.dept.as_deref()),
            non_blank(new.year.as_deref()),
            non_blank(new.email.as_deref())
        ],
    )
    .await
    .map_err(|e| map_write_error(e, &format!("roll_no '{}' already exists", new.roll_no)))?;
    fetch_student(conn, conn.last_insert_rowid()).await
}

pub(crate) async fn count_students_on(conn: &libsql::Connection) -> Result<u64, DatabaseError> {
    let mut rows = conn.query("SELECT COUNT(*) FROM students", ()).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    get_count(&row, 0)
}

/// Load one student with everything it owns.
async fn load_record(conn: &libsql::Connection, id: i64) -> Result<StudentRecord, DatabaseError> {
    let student = fetch_student(conn, id).await?;
    let offers = load_offers_for_student(conn, id).await?;
    let internships = load_internships_for_student(conn, id).await?;
    let reports = load_reports_for_student(conn, id).await?;
    assemble_students(vec![student], offers, internships, reports)
        .pop()
        .ok_or(DatabaseError::NoResult)
}

impl SprService {
    pub async fn create_student(&self, new: &NewStudent) -> Result<StudentRecord, DatabaseError> {
        let _gate = self.exclusive().await;
        let tx = self.begin().await?;
        let result = insert_student(&tx, new).await;
        let student = finish(tx, result).await?;

        tracing::debug!(id = student.id, roll_no = %student.roll_no, "student created");
        Ok(StudentRecord::bare(student))
    }

    pub async fn get_student(&self, id: i64) -> Result<StudentRecord, DatabaseError> {
        let _gate = self.exclusive().await;
        load_record(self.db().conn(), id).await
    }

    /// All students ordered by id, each with nested offers and internships.
    pub async fn list_students(&self) -> Result<Vec<StudentRecord>, DatabaseError> {
        let _gate = self.exclusive().await;
        let conn = self.db().conn();
        let students = load_students(conn).await?;
        let offers = load_offers(conn).await?;
        let internships = load_internships(conn).await?;
        let reports = load_reports(conn).await?;
        Ok(assemble_students(students, offers, internships, reports))
    }

    pub async fn update_student(
        &self,
        id: i64,
        update: StudentUpdate,
    ) -> Result<StudentRecord, DatabaseError> {
        if let Some(ref roll_no) = update.roll_no {
            require_text("roll_no", roll_no)?;
        }
        if let Some(ref name) = update.name {
            require_text("name", name)?;
        }

        let mut clauses = SetClauses::default();
        if let Some(ref roll_no) = update.roll_no {
            clauses.set("roll_no", roll_no.as_str());
        }
        if let Some(ref name) = update.name {
            clauses.set("name", name.as_str());
        }
        if let Some(ref dept) = update.dept {
            clauses.set_nullable("dept", non_blank(dept.as_deref()));
        }
        if let Some(ref year) = update.year {
            clauses.set_nullable("year", non_blank(year.as_deref()));
        }
        if let Some(ref email) = update.email {
            clauses.set_nullable("email", non_blank(email.as_deref()));
        }

        let _gate = self.exclusive().await;
        if update.is_empty() {
            return load_record(self.db().conn(), id).await;
        }

        let (sql, params) = clauses.into_update("students", id);
        let tx = self.begin().await?;
        let result: Result<_, DatabaseError> = async {
            let affected = tx
                .execute(&sql, libsql::params_from_iter(params))
                .await
                .map_err(|e| map_write_error(e, "roll_no already exists"))?;
            affected_or_not_found(affected, EntityKind::Student, id)?;
            load_record(&tx, id).await
        }
        .await;
        let record = finish(tx, result).await?;

        tracing::debug!(id, ?update, "student updated");
        Ok(record)
    }

    /// Delete a student; offers, internships and their reports go with it.
    pub async fn delete_student(&self, id: i64) -> Result<(), DatabaseError> {
        let _gate = self.exclusive().await;
        let tx = self.begin().await?;
        let result: Result<_, DatabaseError> = async {
            let mut rows = tx
                .query(
                    "SELECT (SELECT COUNT(*) FROM offers WHERE student_id = ?1),
                            (SELECT COUNT(*) FROM internships WHERE student_id = ?1)",
                    [id],
                )
                .await?;
            let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
            let counts = (get_count(&row, 0)?, get_count(&row, 1)?);
            drop(rows);

            let affected = tx.execute("DELETE FROM students WHERE id = ?1", [id]).await?;
            affected_or_not_found(affected, EntityKind::Student, id)?;
            Ok(counts)
        }
        .await;
        let (offers, internships) = finish(tx, result).await?;

        tracing::debug!(id, offers, internships, "student deleted with cascade");
        Ok(())
    }

    pub async fn count_students(&self) -> Result<u64, DatabaseError> {
        let _gate = self.exclusive().await;
        count_students_on(self.db().conn()).await
    }
}
