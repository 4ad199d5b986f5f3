//! Offer repository.

use chrono::NaiveDate;
use spr_core::dates::today;
use spr_core::entities::Offer;
use spr_core::enums::{EntityKind, OfferStatus};

use super::{affected_or_not_found, ensure_exists, non_blank};
use crate::error::DatabaseError;
use crate::helpers::{date_to_sql, get_opt_string, parse_date, parse_enum};
use crate::service::{SprService, finish};
use crate::updates::SetClauses;
use crate::updates::offer::OfferUpdate;

const SELECT_COLS: &str = "id, student_id, company, role, ctc, status, date";

/// Fields for a new offer. `status` defaults to `Offered`, `date` to today.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewOffer {
    pub student_id: i64,
    pub company: Option<String>,
    pub role: Option<String>,
    pub ctc: Option<String>,
    pub status: Option<OfferStatus>,
    pub date: Option<NaiveDate>,
}

fn row_to_offer(row: &libsql::Row) -> Result<Offer, DatabaseError> {
    let status: String = row.get(5)?;
    let date: String = row.get(6)?;
    Ok(Offer {
        id: row.get(0)?,
        student_id: row.get(1)?,
        company: get_opt_string(row, 2)?,
        role: get_opt_string(row, 3)?,
        ctc: get_opt_string(row, 4)?,
        status: parse_enum(&status)?,
        date: parse_date(&date)?,
    })
}

async fn collect(mut rows: libsql::Rows) -> Result<Vec<Offer>, DatabaseError> {
    let mut offers = Vec::new();
    while let Some(row) = rows.next().await? {
        offers.push(row_to_offer(&row)?);
    }
    Ok(offers)
}

pub(crate) async fn fetch_offer(conn: &libsql::Connection, id: i64) -> Result<Offer, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM offers WHERE id = ?1"), [id])
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NotFound {
        entity: EntityKind::Offer,
        id,
    })?;
    row_to_offer(&row)
}

pub(crate) async fn load_offers(conn: &libsql::Connection) -> Result<Vec<Offer>, DatabaseError> {
    let rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM offers ORDER BY id"), ())
        .await?;
    collect(rows).await
}

pub(crate) async fn load_offers_for_student(
    conn: &libsql::Connection,
    student_id: i64,
) -> Result<Vec<Offer>, DatabaseError> {
    let rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM offers WHERE student_id = ?1 ORDER BY id"),
            [student_id],
        )
        .await?;
    collect(rows).await
}

/// Insert an offer on `conn` after checking its student exists, applying the
/// status and date defaults.
pub(crate) async fn insert_offer(
    conn: &libsql::Connection,
    new: &NewOffer,
) -> Result<Offer, DatabaseError> {
    let status = new.status.unwrap_or_default();
    let date = new.date.unwrap_or_else(today);

    ensure_exists(conn, EntityKind::Student, new.student_id).await?;
    conn.execute(
        "INSERT INTO offers (student_id, company, role, ctc, status, date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        libsql::params![
            new.student_id,
            non_blank(new.company.as_deref()),
            non_blank(new.role.as_deref()),
            non_blank(new.ctc.as_deref()),
            status.as_str(),
            date_to_sql(date)
        ],
    )
    .await?;
    fetch_offer(conn, conn.last_insert_rowid()).await
}

impl SprService {
    /// Record an offer for an existing student.
    ///
    /// # Errors
    ///
    /// `NotFound` if the student does not exist; nothing is written.
    pub async fn create_offer(&self, new: &NewOffer) -> Result<Offer, DatabaseError> {
        let _gate = self.exclusive().await;
        let tx = self.begin().await?;
        let result = insert_offer(&tx, new).await;
        let offer = finish(tx, result).await?;

        tracing::debug!(id = offer.id, student_id = offer.student_id, status = %offer.status, "offer created");
        Ok(offer)
    }

    pub async fn get_offer(&self, id: i64) -> Result<Offer, DatabaseError> {
        let _gate = self.exclusive().await;
        fetch_offer(self.db().conn(), id).await
    }

    pub async fn list_offers(&self) -> Result<Vec<Offer>, DatabaseError> {
        let _gate = self.exclusive().await;
        load_offers(self.db().conn()).await
    }

    pub async fn update_offer(&self, id: i64, update: OfferUpdate) -> Result<Offer, DatabaseError> {
        let mut clauses = SetClauses::default();
        if let Some(ref company) = update.company {
            clauses.set_nullable("company", non_blank(company.as_deref()));
        }
        if let Some(ref role) = update.role {
            clauses.set_nullable("role", non_blank(role.as_deref()));
        }
        if let Some(ref ctc) = update.ctc {
            clauses.set_nullable("ctc", non_blank(ctc.as_deref()));
        }
        if let Some(status) = update.status {
            clauses.set("status", status.as_str());
        }
        if let Some(date) = update.date {
            clauses.set("date", date_to_sql(date));
        }

        let _gate = self.exclusive().await;
        if update.is_empty() {
            return fetch_offer(self.db().conn(), id).await;
        }

        let (sql, params) = clauses.into_update("offers", id);
        let tx = self.begin().await?;
        let result: Result<_, DatabaseError> = async {
            let affected = tx.execute(&sql, libsql::params_from_iter(params)).await?;
            affected_or_not_found(affected, EntityKind::Offer, id)?;
            fetch_offer(&tx, id).await
        }
        .await;
        let offer = finish(tx, result).await?;

        tracing::debug!(id, ?update, "offer updated");
        Ok(offer)
    }

    pub async fn delete_offer(&self, id: i64) -> Result<(), DatabaseError> {
        let _gate = self.exclusive().await;
        let tx = self.begin().await?;
        let result: Result<_, DatabaseError> = async {
            let affected = tx.execute("DELETE FROM offers WHERE id = ?1", [id]).await?;
            affected_or_not_found(affected, EntityKind::Offer, id)
        }
        .await;
        finish(tx, result).await?;

        tracing::debug!(id, "offer deleted");
        Ok(())
    }
}
