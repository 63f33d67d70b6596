//! Exam service
//!
//! Looks exams up by name, loads their questions and saves them along with
//! their questions. Holds no state beyond the two repositories.

use std::sync::Arc;

use crate::domain::entities::Exam;
use crate::domain::ports::{ExamRepository, QuestionRepository};
use crate::error::DomainError;

/// Service orchestrating the exam and question repositories
pub struct ExamService<ER, QR>
where
    ER: ExamRepository,
    QR: QuestionRepository,
{
    exams: Arc<ER>,
    questions: Arc<QR>,
}

impl<ER, QR> ExamService<ER, QR>
where
    ER: ExamRepository,
    QR: QuestionRepository,
{
    pub fn new(exams: Arc<ER>, questions: Arc<QR>) -> Self {
        Self { exams, questions }
    }

    /// Find the first exam whose name contains `name`
    ///
    /// Matching is a case-sensitive substring test in repository order.
    /// The catalog is read exactly once per call.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Exam>, DomainError> {
        let exams = self.exams.find_all().await?;
        let scanned = exams.len();
        let found = exams.into_iter().find(|exam| exam.name.contains(name));

        tracing::debug!(
            query = name,
            scanned = scanned,
            found = ?found.as_ref().and_then(|exam| exam.id),
            "Exam lookup by name"
        );

        Ok(found)
    }

    /// Like [`find_by_name`](Self::find_by_name), with the exam's questions
    /// loaded from the question repository
    ///
    /// The question repository is not touched when nothing matches.
    pub async fn find_by_name_with_questions(
        &self,
        name: &str,
    ) -> Result<Option<Exam>, DomainError> {
        let Some(mut exam) = self.find_by_name(name).await? else {
            return Ok(None);
        };

        let Some(id) = exam.id else {
            tracing::warn!(exam = %exam.name, "Matched exam has no id, cannot load questions");
            return Err(DomainError::Validation(format!(
                "Exam '{}' has no id",
                exam.name
            )));
        };

        exam.questions = self.questions.find_by_exam_id(&id).await?;
        tracing::debug!(exam_id = %id, questions = exam.questions.len(), "Loaded exam questions");

        Ok(Some(exam))
    }

    /// Save an exam, persisting its questions first
    ///
    /// An exam without questions skips the question repository entirely.
    /// Returns whatever the exam repository returns.
    pub async fn save(&self, exam: Exam) -> Result<Exam, DomainError> {
        if exam.has_questions() {
            self.questions.save_many(&exam.questions).await?;
        }

        let saved = self.exams.save(&exam).await?;

        tracing::info!(
            exam_id = ?saved.id,
            name = %saved.name,
            questions = exam.questions.len(),
            "Exam saved"
        );

        Ok(saved)
    }
}
