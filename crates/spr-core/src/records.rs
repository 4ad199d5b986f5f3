//! Transport records: entities with their owned children nested.
//!
//! Repositories load flat rows; the functions here group children under their
//! owners by foreign key. Children keep the order they were supplied in (the
//! repositories load them ordered by id).

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Internship, Offer, Report, Student};

/// An internship with its reports, as returned by the internship and student
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InternshipRecord {
    #[serde(flatten)]
    pub internship: Internship,
    pub reports: Vec<Report>,
}

/// A student with offers and internships (each with reports).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudentRecord {
    #[serde(flatten)]
    pub student: Student,
    pub offers: Vec<Offer>,
    pub internships: Vec<InternshipRecord>,
}

impl StudentRecord {
    /// A freshly created student: no offers, no internships.
    #[must_use]
    pub const fn bare(student: Student) -> Self {
        Self {
            student,
            offers: Vec::new(),
            internships: Vec::new(),
        }
    }
}

fn group_by<T, F>(items: Vec<T>, key: F) -> HashMap<i64, Vec<T>>
where
    F: Fn(&T) -> i64,
{
    let mut groups: HashMap<i64, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Nest reports under their internships.
///
/// Reports whose `internship_id` matches none of `internships` are dropped;
/// foreign keys make that impossible for rows read in one consistent view.
#[must_use]
pub fn assemble_internships(
    internships: Vec<Internship>,
    reports: Vec<Report>,
) -> Vec<InternshipRecord> {
    let mut reports = group_by(reports, |r| r.internship_id);
    internships
        .into_iter()
        .map(|internship| InternshipRecord {
            reports: reports.remove(&internship.id).unwrap_or_default(),
            internship,
        })
        .collect()
}

/// Nest offers, internships and reports under their students.
#[must_use]
pub fn assemble_students(
    students: Vec<Student>,
    offers: Vec<Offer>,
    internships: Vec<Internship>,
    reports: Vec<Report>,
) -> Vec<StudentRecord> {
    let mut offers = group_by(offers, |o| o.student_id);
    let mut internships = group_by(assemble_internships(internships, reports), |i| {
        i.internship.student_id
    });
    students
        .into_iter()
        .map(|student| StudentRecord {
            offers: offers.remove(&student.id).unwrap_or_default(),
            internships: internships.remove(&student.id).unwrap_or_default(),
            student,
        })
        .collect()
}
