//! Offer update builder.

use chrono::NaiveDate;
use spr_core::enums::OfferStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferUpdate {
    pub company: Option<Option<String>>,
    pub role: Option<Option<String>>,
    pub ctc: Option<Option<String>>,
    pub status: Option<OfferStatus>,
    pub date: Option<NaiveDate>,
}

impl OfferUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.role.is_none()
            && self.ctc.is_none()
            && self.status.is_none()
            && self.date.is_none()
    }
}

pub struct OfferUpdateBuilder(OfferUpdate);

impl OfferUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(OfferUpdate::default())
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
    pub fn ctc(mut self, ctc: Option<String>) -> Self {
        self.0.ctc = Some(ctc);
        self
    }

    #[must_use]
    pub fn status(mut self, status: OfferStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.0.date = Some(date);
        self
    }

    #[must_use]
    pub fn build(self) -> OfferUpdate {
        self.0
    }
}

impl Default for OfferUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
