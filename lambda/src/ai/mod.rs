//! Text generation for movie summaries

pub mod client;

use async_trait::async_trait;

use crate::errors::MovieError;

pub use client::GeminiClient;

#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    /// Sends one prompt and returns the model's plain-text answer.
    async fn generate(&self, prompt: &str) -> Result<String, MovieError>;
}
