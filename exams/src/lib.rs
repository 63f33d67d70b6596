//! Exams
//!
//! An exam service composed over two repository ports, with in-memory
//! adapters and call-recording mocks for testing.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;



pub use app::ExamService;
pub use domain::entities::{Exam, ExamId};
pub use domain::ports::{ExamRepository, QuestionRepository};
pub use error::DomainError;
