//! In-memory adapter for ExamRepository

use std::sync::RwLock;

use async_trait::async_trait;

use crate::adapters::memory::{catalog, poisoned};
use crate::domain::entities::{Exam, ExamId};
use crate::domain::ports::ExamRepository;
use crate::error::DomainError;

/// Process-local exam store, kept in insertion order
#[derive(Default)]
pub struct InMemoryExamRepository {
    exams: RwLock<Vec<Exam>>,
}

impl InMemoryExamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the built-in catalog
    pub fn seeded() -> Self {
        Self {
            exams: RwLock::new(catalog::exams()),
        }
    }

    fn next_id(exams: &[Exam]) -> Result<ExamId, DomainError> {
        match exams.iter().filter_map(|e| e.id).map(|id| id.0).max() {
            None => Ok(ExamId(1)),
            Some(max) => max
                .checked_add(1)
                .map(ExamId)
                .ok_or_else(|| DomainError::Storage("exam id space exhausted".to_string())),
        }
    }
}

#[async_trait]
impl ExamRepository for InMemoryExamRepository {
    async fn save(&self, exam: &Exam) -> Result<Exam, DomainError> {
        let mut exams = self.exams.write().map_err(poisoned)?;

        let mut stored = exam.clone();
        if stored.id.is_none() {
            stored.id = Some(Self::next_id(&exams)?);
        }

        match exams.iter().position(|e| e.id == stored.id) {
            Some(index) => exams[index] = stored.clone(),
            None => exams.push(stored.clone()),
        }

        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Exam>, DomainError> {
        let exams = self.exams.read().map_err(poisoned)?;
        Ok(exams.clone())
    }
}
