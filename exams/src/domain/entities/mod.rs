//! Domain entities

pub mod exam;

pub use exam::{Exam, ExamId};
