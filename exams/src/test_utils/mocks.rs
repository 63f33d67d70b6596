//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! Every call is recorded so tests can verify how the service used them.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Exam, ExamId};
use crate::domain::ports::{ExamRepository, QuestionRepository};
use crate::error::DomainError;

/// Ordered record of port calls, shareable between mocks
pub type CallLog = Arc<RwLock<Vec<&'static str>>>;

pub fn new_call_log() -> CallLog {
    Arc::new(RwLock::new(Vec::new()))
}

fn count(log: &CallLog, call: &str) -> usize {
    log.read().unwrap().iter().filter(|c| **c == call).count()
}

// ============================================================================
// Mock Exam Repository
// ============================================================================

/// A mock exam repository that tracks calls and returns configurable responses
#[derive(Default)]
pub struct MockExamRepository {
    /// Catalogs answered by successive `find_all` calls; the last one repeats
    catalogs: Arc<RwLock<Vec<Vec<Exam>>>>,
    /// What `save` answers; echoes the input when unset
    save_result: Arc<RwLock<Option<Exam>>>,
    saved: Arc<RwLock<Vec<Exam>>>,
    calls: CallLog,
    pub should_fail: Arc<RwLock<bool>>,
}

impl MockExamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: Arc::new(RwLock::new(true)),
            ..Self::default()
        }
    }

    /// Catalog answered by the first `find_all` call
    pub fn with_exams(self, exams: Vec<Exam>) -> Self {
        {
            let mut catalogs = self.catalogs.write().unwrap();
            catalogs.clear();
            catalogs.push(exams);
        }
        self
    }

    /// Catalog answered by the next `find_all` call after those already configured
    pub fn then_exams(self, exams: Vec<Exam>) -> Self {
        self.catalogs.write().unwrap().push(exams);
        self
    }

    /// Configure what `save` returns
    pub fn returning(self, exam: Exam) -> Self {
        *self.save_result.write().unwrap() = Some(exam);
        self
    }

    /// Record calls into a log shared with other mocks
    pub fn with_log(self, log: CallLog) -> Self {
        Self { calls: log, ..self }
    }

    pub fn find_all_count(&self) -> usize {
        count(&self.calls, "exams.find_all")
    }

    pub fn save_count(&self) -> usize {
        count(&self.calls, "exams.save")
    }

    /// Exams passed to `save`, in call order
    pub fn saved_exams(&self) -> Vec<Exam> {
        self.saved.read().unwrap().clone()
    }
}

#[async_trait]
impl ExamRepository for MockExamRepository {
    async fn save(&self, exam: &Exam) -> Result<Exam, DomainError> {
        self.calls.write().unwrap().push("exams.save");

        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Storage("Mock failure".to_string()));
        }

        self.saved.write().unwrap().push(exam.clone());

        let result = self.save_result.read().unwrap().clone();
        Ok(result.unwrap_or_else(|| exam.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Exam>, DomainError> {
        self.calls.write().unwrap().push("exams.find_all");

        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Storage("Mock failure".to_string()));
        }

        let call = self.find_all_count() - 1;
        let catalogs = self.catalogs.read().unwrap();
        Ok(catalogs
            .get(call)
            .or_else(|| catalogs.last())
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// Mock Question Repository
// ============================================================================

/// A mock question repository that tracks calls and returns configured questions
#[derive(Default)]
pub struct MockQuestionRepository {
    questions: Arc<RwLock<HashMap<ExamId, Vec<String>>>>,
    batches: Arc<RwLock<Vec<Vec<String>>>>,
    requested: Arc<RwLock<Vec<ExamId>>>,
    calls: CallLog,
    pub should_fail: Arc<RwLock<bool>>,
}

impl MockQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: Arc::new(RwLock::new(true)),
            ..Self::default()
        }
    }

    /// Configure the questions answered for an exam id
    pub fn with_questions(self, id: ExamId, questions: Vec<String>) -> Self {
        self.questions.write().unwrap().insert(id, questions);
        self
    }

    /// Record calls into a log shared with other mocks
    pub fn with_log(self, log: CallLog) -> Self {
        Self { calls: log, ..self }
    }

    pub fn save_many_count(&self) -> usize {
        count(&self.calls, "questions.save_many")
    }

    pub fn find_by_exam_id_count(&self) -> usize {
        self.requested.read().unwrap().len()
    }

    /// Calls made to this repository, whatever the operation
    pub fn total_calls(&self) -> usize {
        self.save_many_count() + self.find_by_exam_id_count()
    }

    /// Batches passed to `save_many`, in call order
    pub fn saved_batches(&self) -> Vec<Vec<String>> {
        self.batches.read().unwrap().clone()
    }

    /// Ids passed to `find_by_exam_id`, in call order
    pub fn requested_ids(&self) -> Vec<ExamId> {
        self.requested.read().unwrap().clone()
    }
}

#[async_trait]
impl QuestionRepository for MockQuestionRepository {
    async fn save_many(&self, questions: &[String]) -> Result<(), DomainError> {
        self.calls.write().unwrap().push("questions.save_many");

        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Storage("Mock failure".to_string()));
        }

        self.batches.write().unwrap().push(questions.to_vec());
        Ok(())
    }

    async fn find_by_exam_id(&self, id: &ExamId) -> Result<Vec<String>, DomainError> {
        self.calls.write().unwrap().push("questions.find_by_exam_id");
        self.requested.write().unwrap().push(*id);

        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Storage("Mock failure".to_string()));
        }

        let questions = self.questions.read().unwrap();
        Ok(questions.get(id).cloned().unwrap_or_default())
    }
}
