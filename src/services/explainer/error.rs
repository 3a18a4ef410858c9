//! Explainer error types.

/// Errors raised while building prompts or calling the provider
///
/// Only `EmptyText` ever crosses the service boundary; the gateway absorbs
/// every provider-level variant into the fallback string.
#[derive(Debug, thiserror::Error)]
pub enum ExplainerError {
    #[error("Selected text cannot be empty")]
    EmptyText,

    #[error("Provider API key not configured")]
    NotConfigured,

    #[error("Provider API error: {0}")]
    ApiError(String),

    #[error("Provider response parsing error: {0}")]
    ParseError(String),

    #[error("Provider timeout after {0}s")]
    Timeout(u64),

    #[error("Provider rate limited, retry after {0}s")]
    RateLimited(u64),
}
