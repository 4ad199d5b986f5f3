//! Shared test utilities for spr-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use crate::repos::student::NewStudent;
    use crate::service::SprService;

    /// Create an in-memory `SprService` with an empty schema.
    pub async fn test_service() -> SprService {
        SprService::new_local(":memory:").await.unwrap()
    }

    /// A student with only the required fields set.
    pub fn new_student(roll_no: &str, name: &str) -> NewStudent {
        NewStudent {
            roll_no: roll_no.to_string(),
            name: name.to_string(),
            ..NewStudent::default()
        }
    }
}
