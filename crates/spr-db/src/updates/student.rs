//! Student update builder.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub roll_no: Option<String>,
    pub name: Option<String>,
    pub dept: Option<Option<String>>,
    pub year: Option<Option<String>>,
    pub email: Option<Option<String>>,
}

impl StudentUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.roll_no.is_none()
            && self.name.is_none()
            && self.dept.is_none()
            && self.year.is_none()
            && self.email.is_none()
    }
}

pub struct StudentUpdateBuilder(StudentUpdate);

impl StudentUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(StudentUpdate::default())
    }

    #[must_use]
    pub fn roll_no(mut self, roll_no: impl Into<String>) -> Self {
        self.0.roll_no = Some(roll_no.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn dept(mut self, dept: Option<String>) -> Self {
        self.0.dept = Some(dept);
        self
    }

    #[must_use]
    pub fn year(mut self, year: Option<String>) -> Self {
        self.0.year = Some(year);
        self
    }

    #[must_use]
    pub fn email(mut self, email: Option<String>) -> Self {
        self.0.email = Some(email);
        self
    }

    #[must_use]
    pub fn build(self) -> StudentUpdate {
        self.0
    }
}

impl Default for StudentUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
