//! Exam domain entity
//!
//! An exam is a named, free-standing aggregate holding an ordered list of
//! question texts.

use serde::{Deserialize, Serialize};

/// Identifier assigned to an exam by whatever persists it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExamId(pub i64);

impl From<i64> for ExamId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ExamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An exam and, once loaded, its questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    /// `None` until a repository has persisted the exam
    pub id: Option<ExamId>,
    pub name: String,
    #[serde(default)]
    pub questions: Vec<String>,
}

impl Exam {
    /// A new, not yet persisted exam
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            questions: Vec::new(),
        }
    }

    pub fn with_id(id: impl Into<ExamId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            questions: Vec::new(),
        }
    }

    /// Replace the question list
    pub fn with_questions<I, S>(mut self, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.questions = questions.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }
}
