//! Explainer trait and the OpenAI-backed gateway implementation.

use async_trait::async_trait;

use crate::config::ProviderConfig;
use crate::models::ExplanationStyle;

use super::client::CompletionClient;
use super::error::ExplainerError;
use super::prompt::build_prompt;

/// Fixed degraded-mode response substituted for any provider failure
pub const FALLBACK_EXPLANATION: &str = "Sorry, I couldn't generate an explanation right now.";

/// Explanation gateway - the contract both backends implement
#[async_trait]
pub trait Explainer: Send + Sync {
    /// Generate an explanation for the selected text.
    ///
    /// Never fails on provider errors: those are absorbed into
    /// [`FALLBACK_EXPLANATION`]. The only surfaced error is rejected input.
    async fn explain(
        &self,
        text: &str,
        context: &str,
        style: ExplanationStyle,
    ) -> Result<String, ExplainerError>;

    /// Whether a provider credential is present.
    ///
    /// Health-check surface only; `explain` is attempted regardless and
    /// falls through to the fallback when unconfigured.
    fn is_configured(&self) -> bool;

    /// Backend name reported by the health endpoint
    fn name(&self) -> &'static str;
}

/// Gateway backed by an OpenAI-compatible completion API
pub struct OpenAiExplainer {
    provider: ProviderConfig,
    client: CompletionClient,
}

impl OpenAiExplainer {
    pub fn new(provider: ProviderConfig) -> Self {
        let client = CompletionClient::new(provider.timeout_seconds);
        Self { provider, client }
    }
}

#[async_trait]
impl Explainer for OpenAiExplainer {
    async fn explain(
        &self,
        text: &str,
        context: &str,
        style: ExplanationStyle,
    ) -> Result<String, ExplainerError> {
        let prompt = build_prompt(text, context, style)?;

        // Single attempt; any failure degrades to the fallback string and the
        // caller cannot distinguish failure modes from the response alone
        match self.client.chat_completion(&self.provider, &prompt).await {
            Ok(explanation) => Ok(explanation),
            Err(e) => {
                tracing::error!("Completion call failed: {}", e);
                Ok(FALLBACK_EXPLANATION.to_string())
            },
        }
    }

    fn is_configured(&self) -> bool {
        self.provider.api_key.is_some()
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
