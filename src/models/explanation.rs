//! Request and response models for the explanation endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Available explanation styles
///
/// Closed set with an explicit catch-all: an unrecognized style tag is not
/// an error, it selects the generic instruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ExplanationStyle {
    #[default]
    Simple,
    Technical,
    Detailed,
    Other,
}

impl ExplanationStyle {
    /// Parse a style tag; anything unrecognized selects the catch-all
    pub fn parse_tag(s: &str) -> Self {
        match s {
            "simple" => Self::Simple,
            "technical" => Self::Technical,
            "detailed" => Self::Detailed,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Technical => "technical",
            Self::Detailed => "detailed",
            Self::Other => "other",
        }
    }
}

impl From<String> for ExplanationStyle {
    fn from(s: String) -> Self {
        Self::parse_tag(&s)
    }
}

/// Request model for the explanation endpoint
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ExplanationRequest {
    /// The selected text to explain
    #[validate(length(min = 1, max = 500, message = "text must be between 1 and 500 characters"))]
    #[schema(example = "variational autoencoder")]
    pub text: String,

    /// Surrounding context to help with the explanation
    #[serde(default)]
    #[validate(length(max = 2000, message = "context must be at most 2000 characters"))]
    #[schema(
        example = "In machine learning, a variational autoencoder is a type of neural network that can learn to compress and reconstruct data."
    )]
    pub context: String,

    /// Preferred explanation style
    #[serde(default)]
    pub style: ExplanationStyle,
}

/// Response model for the explanation endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExplanationResponse {
    /// The generated explanation of the selected text
    #[schema(
        example = "A variational autoencoder is a type of neural network that can learn to compress and reconstruct data by learning a probabilistic representation of the input."
    )]
    pub explanation: String,
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Selected text cannot be empty")]
    pub error: String,

    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
