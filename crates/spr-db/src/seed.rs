//! Sample data for a fresh store.
//!
//! Inserted through the same insert functions as API writes, so it obeys the
//! same validation and defaults.

use chrono::NaiveDate;
use spr_core::enums::{InternshipStatus, OfferStatus};

use crate::error::DatabaseError;
use crate::repos::internship::{NewInternship, insert_internship};
use crate::repos::offer::{NewOffer, insert_offer};
use crate::repos::student::{NewStudent, count_students_on, insert_student};
use crate::service::{SprService, finish};

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DatabaseError::InvalidState(format!("bad seed date {year}-{month}-{day}")))
}

fn student(roll_no: &str, name: &str, dept: &str, email: &str) -> NewStudent {
    NewStudent {
        roll_no: roll_no.to_string(),
        name: name.to_string(),
        dept: Some(dept.to_string()),
        year: Some("3".to_string()),
        email: Some(email.to_string()),
    }
}

/// Seed two students, one accepted offer and one completed internship if the
/// store has no students yet.
///
/// The check and every insert share one transaction, so a failure leaves the
/// store as it was.
///
/// Returns `true` if data was inserted.
///
/// # Errors
///
/// Returns `DatabaseError` if any insert fails.
pub async fn seed_sample_data(svc: &SprService) -> Result<bool, DatabaseError> {
    let _gate = svc.exclusive().await;
    let tx = svc.begin().await?;
    let result: Result<_, DatabaseError> = async {
        if count_students_on(&tx).await? > 0 {
            return Ok(false);
        }

        let aman = insert_student(
            &tx,
            &student("BT123", "Aman Verma", "CSE", "aman@example.com"),
        )
        .await?;
        let priyanshu = insert_student(
            &tx,
            &student("BT124", "Priyanshu Agarwal", "IT", "priyanshu@example.com"),
        )
        .await?;

        insert_offer(
            &tx,
            &NewOffer {
                student_id: priyanshu.id,
                company: Some("Zomato".to_string()),
                role: Some("SDE Intern".to_string()),
                ctc: Some("6 LPA".to_string()),
                status: Some(OfferStatus::Accepted),
                date: Some(ymd(2025, 5, 10)?),
            },
        )
        .await?;

        insert_internship(
            &tx,
            &NewInternship {
                student_id: aman.id,
                company: Some("ABC Corp".to_string()),
                role: Some("Data Analyst Intern".to_string()),
                start_date: Some(ymd(2025, 6, 1)?),
                end_date: Some(ymd(2025, 8, 31)?),
                status: Some(InternshipStatus::Completed),
            },
        )
        .await?;

        Ok(true)
    }
    .await;
    let seeded = finish(tx, result).await?;

    if seeded {
        tracing::info!("seeded sample data");
    } else {
        tracing::debug!("store not empty, skipping sample data");
    }
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{new_student, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn seeds_empty_store_once() {
        let svc = test_service().await;

        assert!(seed_sample_data(&svc).await.unwrap());
        assert!(!seed_sample_data(&svc).await.unwrap());

        let students = svc.list_students().await.unwrap();
        let rolls: Vec<_> = students.iter().map(|s| s.student.roll_no.as_str()).collect();
        assert_eq!(rolls, vec!["BT123", "BT124"]);
        assert_eq!(students[1].offers.len(), 1);
        assert_eq!(students[1].offers[0].status, OfferStatus::Accepted);
        assert_eq!(students[0].internships.len(), 1);
        assert_eq!(
            students[0].internships[0].internship.status,
            InternshipStatus::Completed
        );
    }

    #[tokio::test]
    async fn skips_non_empty_store() {
        let svc = test_service().await;
        svc.create_student(&new_student("X1", "Existing")).await.unwrap();

        assert!(!seed_sample_data(&svc).await.unwrap());
        assert_eq!(svc.count_students().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn failed_seed_leaves_store_empty() {
        let svc = test_service().await;
        svc.db()
            .conn()
            .execute(
                "CREATE TRIGGER reject_internships BEFORE INSERT ON internships
                 BEGIN SELECT RAISE(ABORT, 'internships are read-only'); END",
                (),
            )
            .await
            .unwrap();

        assert!(seed_sample_data(&svc).await.is_err());
        assert_eq!(svc.count_students().await.unwrap(), 0);
        assert!(svc.list_offers().await.unwrap().is_empty());
    }
}
