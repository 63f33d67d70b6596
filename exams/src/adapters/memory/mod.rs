//! In-memory adapters
//!
//! Implementations of repository traits backed by process memory, optionally
//! seeded with the built-in catalog.

pub mod catalog;
pub mod exam_repo;
pub mod question_repo;

pub use exam_repo::InMemoryExamRepository;
pub use question_repo::InMemoryQuestionRepository;

use crate::error::DomainError;

fn poisoned<T>(e: std::sync::PoisonError<T>) -> DomainError {
    DomainError::Internal(format!("Store lock poisoned: {}", e))
}
