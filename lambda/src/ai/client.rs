//! Gemini API client module
//!
//! Wraps the `generateContent` REST call used to summarize movies.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::SummaryGenerator;
use crate::core::config::AppConfig;
use crate::errors::MovieError;

/// Gemini API client for one model
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model_name: String,
    api_base: String,
}

impl GeminiClient {
    #[must_use]
    pub fn new(api_key: String, model_name: String, api_base: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            model_name,
            api_base,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig, api_key: String) -> Self {
        Self::new(
            api_key,
            config.gemini_model.clone(),
            config.gemini_api_base.clone(),
        )
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model_name
        )
    }
}

#[async_trait]
impl SummaryGenerator for GeminiClient {
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a non-2xx
    /// status, or the response carries no text.
    async fn generate(&self, prompt: &str) -> Result<String, MovieError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %self.model_name,
            prompt_len = prompt.len(),
            "Requesting summary from Gemini"
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        let response = self
            .http
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| MovieError::GenerationFailed(format!("Gemini request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(MovieError::GenerationFailed(format!(
                "Gemini API error (status {status}): {error_text}"
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            MovieError::GenerationFailed(format!("Failed to parse Gemini response: {e}"))
        })?;

        let text = extract_text(&body)?;
        debug!(summary_len = text.len(), "Received Gemini summary");
        Ok(text)
    }
}

/// Joins the text parts of the first candidate.
fn extract_text(body: &GenerateContentResponse) -> Result<String, MovieError> {
    let Some(candidate) = body.candidates.first() else {
        let reason = body
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
            .unwrap_or("no candidates");
        return Err(MovieError::GenerationFailed(format!(
            "Gemini returned no candidates: {reason}"
        )));
    };

    let text: String = candidate
        .content
        .as_ref()
        .map(|c| {
            c.parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect::<Vec<_>>()
                .concat()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
        return Err(MovieError::GenerationFailed(format!(
            "Gemini candidate has no text (finish reason: {reason})"
        )));
    }

    Ok(text)
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}
