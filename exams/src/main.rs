//! Exams demo binary
//!
//! Wires the in-memory adapters into the exam service and looks up one exam.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exams::adapters::{InMemoryExamRepository, InMemoryQuestionRepository};
use exams::config::Config;
use exams::ExamService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,exams=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting exams...");

    let config = Config::from_env();

    // Create adapters
    let (exam_repo, question_repo) = if config.seed_catalog {
        (
            InMemoryExamRepository::seeded(),
            InMemoryQuestionRepository::seeded(),
        )
    } else {
        (
            InMemoryExamRepository::new(),
            InMemoryQuestionRepository::new(),
        )
    };

    let service = ExamService::new(Arc::new(exam_repo), Arc::new(question_repo));

    match service.find_by_name_with_questions(&config.lookup).await? {
        Some(exam) => tracing::info!(
            exam_id = ?exam.id,
            name = %exam.name,
            questions = ?exam.questions,
            "Exam found"
        ),
        None => tracing::info!(query = %config.lookup, "No exam matches"),
    }

    Ok(())
}
