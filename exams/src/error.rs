//! Error types for the exams crate
//!
//! Repository ports report failures as `DomainError`. The service layer
//! passes them through untouched; "not found" is modelled as `Option`, never
//! as an error.

use thiserror::Error;

/// Domain layer errors - raised by repository adapters
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
