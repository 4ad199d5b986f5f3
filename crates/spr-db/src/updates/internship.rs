//! Internship update builder.
//!
//! Start and end dates are independent: setting one never touches the other.

use chrono::NaiveDate;
use spr_core::enums::InternshipStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternshipUpdate {
    pub company: Option<Option<String>>,
    pub role: Option<Option<String>>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub status: Option<InternshipStatus>,
}

impl InternshipUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.role.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.status.is_none()
    }
}

pub struct InternshipUpdateBuilder(InternshipUpdate);

impl InternshipUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(InternshipUpdate::default())
    }

    #[must_use]
    pub fn company(mut self, company: Option<String>) -> Self {
        self.0.company = Some(company);
        self
    }

    #[must_use]
    pub fn role(mut self, role: Option<String>) -> Self {
        self.0.role = Some(role);
        self
    }

    #[must_use]
    pub fn start_date(mut self, start_date: Option<NaiveDate>) -> Self {
        self.0.start_date = Some(start_date);
        self
    }

    #[must_use]
    pub fn end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.0.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub fn status(mut self, status: InternshipStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn build(self) -> InternshipUpdate {
        self.0
    }
}

impl Default for InternshipUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
