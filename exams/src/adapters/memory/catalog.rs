//! Built-in exam catalog
//!
//! Seed data for the in-memory adapters.

use crate::domain::entities::{Exam, ExamId};

/// Id of the mathematics exam, the only one with seeded questions
pub const MATH_EXAM_ID: ExamId = ExamId(5);

pub fn exams() -> Vec<Exam> {
    vec![
        Exam::with_id(MATH_EXAM_ID, "Matemáticas"),
        Exam::with_id(6, "Lenguaje"),
        Exam::with_id(7, "Historia"),
    ]
}

pub fn math_questions() -> Vec<String> {
    [
        "Aritmética",
        "Integrales",
        "Derivadas",
        "Trigonometría",
        "Geometría",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
