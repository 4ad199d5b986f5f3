//! Cross-cutting error types for SPR.
//!
//! Storage errors (`DatabaseError`) live in `spr-db` and HTTP errors
//! (`ApiError`) in `spr-server`, which converts from `CoreError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation (malformed date).
    #[error("Validation error: {0}")]
    Validation(String),
}
