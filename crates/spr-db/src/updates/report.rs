//! Report update builder.

use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportUpdate {
    pub date: Option<NaiveDate>,
    pub title: Option<Option<String>>,
    pub content: Option<Option<String>>,
    pub evaluation: Option<Option<String>>,
}

impl ReportUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.title.is_none()
            && self.content.is_none()
            && self.evaluation.is_none()
    }
}

pub struct ReportUpdateBuilder(ReportUpdate);

impl ReportUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ReportUpdate::default())
    }

    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.0.date = Some(date);
        self
    }

    #[must_use]
    pub fn title(mut self, title: Option<String>) -> Self {
        self.0.title = Some(title);
        self
    }

    #[must_use]
    pub fn content(mut self, content: Option<String>) -> Self {
        self.0.content = Some(content);
        self
    }

    #[must_use]
    pub fn evaluation(mut self, evaluation: Option<String>) -> Self {
        self.0.evaluation = Some(evaluation);
        self
    }

    #[must_use]
    pub fn build(self) -> ReportUpdate {
        self.0
    }
}

impl Default for ReportUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
