//! Completion Client - HTTP client for OpenAI-compatible APIs
//!
//! Uses reqwest to call the chat completion endpoint. Compatible with:
//! - OpenAI
//! - Azure OpenAI
//! - Other OpenAI-compatible APIs

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ProviderConfig;

use super::error::ExplainerError;

/// System message framing the assistant for every request
const SYSTEM_PROMPT: &str = "You are a helpful AI assistant that provides clear, \
    accurate explanations of terms and concepts. Keep explanations concise and \
    relevant to the context provided.";

/// Completion HTTP client
pub struct CompletionClient {
    http_client: Client,
}

impl CompletionClient {
    pub fn new(timeout_seconds: u64) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { http_client }
    }

    /// Call the chat completion API with the built prompt as the user turn.
    ///
    /// Exactly one request per call; no retries.
    pub async fn chat_completion(
        &self,
        provider: &ProviderConfig,
        prompt: &str,
    ) -> Result<String, ExplainerError> {
        let api_key = provider.api_key.as_ref().ok_or(ExplainerError::NotConfigured)?;

        let chat_request = ChatCompletionRequest {
            model: provider.model.clone(),
            messages: vec![
                ChatMessage { role: "system".to_string(), content: SYSTEM_PROMPT.to_string() },
                ChatMessage { role: "user".to_string(), content: prompt.to_string() },
            ],
            max_tokens: Some(provider.max_tokens),
            temperature: Some(provider.temperature),
        };

        let url = format!("{}/chat/completions", provider.api_base.trim_end_matches('/'));

        tracing::debug!("Calling completion API: {} with model {}", url, provider.model);

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .timeout(Duration::from_secs(provider.timeout_seconds))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ExplainerError::Timeout(provider.timeout_seconds)
                } else {
                    ExplainerError::ApiError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(ExplainerError::RateLimited(retry_after));
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ExplainerError::ApiError(format!("API error {}: {}", status, error_text)));
        }

        let chat_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ExplainerError::ParseError(e.to_string()))?;

        let content = chat_response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| ExplainerError::ParseError("Empty response from provider".to_string()))?;

        Ok(content.trim().to_string())
    }
}

// ============================================================================
// OpenAI API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
