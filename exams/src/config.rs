//! Runtime configuration loaded from the environment

use std::env;

/// Default name looked up by the binary
const DEFAULT_LOOKUP: &str = "Matemáticas";

#[derive(Clone, Debug)]
pub struct Config {
    /// Seed the in-memory repositories with the built-in catalog
    pub seed_catalog: bool,
    /// Exam name the binary looks up on startup
    pub lookup: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            seed_catalog: env::var("EXAMS_SEED_CATALOG")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(true),
            lookup: env::var("EXAMS_LOOKUP").unwrap_or_else(|_| DEFAULT_LOOKUP.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_catalog: true,
            lookup: DEFAULT_LOOKUP.to_string(),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
