//! In-memory adapter for QuestionRepository

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::adapters::memory::{catalog, poisoned};
use crate::domain::entities::ExamId;
use crate::domain::ports::QuestionRepository;
use crate::error::DomainError;

/// Process-local question store
///
/// `save_many` carries no exam id, so saved batches are kept in a log of
/// their own and never show up in `find_by_exam_id`.
#[derive(Default)]
pub struct InMemoryQuestionRepository {
    by_exam: RwLock<HashMap<ExamId, Vec<String>>>,
    batches: RwLock<Vec<Vec<String>>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the questions of the built-in catalog
    pub fn seeded() -> Self {
        Self::new().with_questions(catalog::MATH_EXAM_ID, catalog::math_questions())
    }

    /// Attach questions to an exam id
    pub fn with_questions(mut self, id: ExamId, questions: Vec<String>) -> Self {
        self.by_exam
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, questions);
        self
    }

    /// Batches received by `save_many`, oldest first
    pub fn saved_batches(&self) -> Result<Vec<Vec<String>>, DomainError> {
        let batches = self.batches.read().map_err(poisoned)?;
        Ok(batches.clone())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn save_many(&self, questions: &[String]) -> Result<(), DomainError> {
        let mut batches = self.batches.write().map_err(poisoned)?;
        batches.push(questions.to_vec());
        Ok(())
    }

    async fn find_by_exam_id(&self, id: &ExamId) -> Result<Vec<String>, DomainError> {
        let by_exam = self.by_exam.read().map_err(poisoned)?;
        Ok(by_exam.get(id).cloned().unwrap_or_default())
    }
}
