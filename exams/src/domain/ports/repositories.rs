//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., the in-memory store).

use async_trait::async_trait;

use crate::domain::entities::{Exam, ExamId};
use crate::error::DomainError;

/// Repository for Exam entities
#[async_trait]
pub trait ExamRepository: Send + Sync {
    /// Persist an exam, returning the stored representation
    ///
    /// The returned exam may differ from the input (e.g. an assigned id).
    async fn save(&self, exam: &Exam) -> Result<Exam, DomainError>;

    /// List every known exam
    ///
    /// Order is up to the adapter but must be stable for a given store.
    async fn find_all(&self) -> Result<Vec<Exam>, DomainError>;
}

/// Repository for question texts
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Persist a batch of question texts
    async fn save_many(&self, questions: &[String]) -> Result<(), DomainError>;

    /// Ordered questions belonging to an exam; empty if it has none
    async fn find_by_exam_id(&self, id: &ExamId) -> Result<Vec<String>, DomainError>;
}
