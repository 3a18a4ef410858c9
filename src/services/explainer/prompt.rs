//! Prompt construction for explanation requests.
//!
//! Pure functions: deterministic, no side effects, no external resources.

use crate::models::ExplanationStyle;
use crate::utils::StringExt;

use super::error::ExplainerError;

/// Build the completion prompt for a selected text.
///
/// The text must be non-empty after trimming. Length bounds are enforced at
/// the HTTP boundary before this runs; only emptiness is re-checked here.
pub fn build_prompt(
    text: &str,
    context: &str,
    style: ExplanationStyle,
) -> Result<String, ExplainerError> {
    let text = text.clean().ok_or(ExplainerError::EmptyText)?;

    let mut prompt = format!("Explain the term or phrase '{}'", text);
    match context.clean() {
        Some(context) => {
            prompt.push_str(&format!(" based on the following context:\n\n{}\n\n", context));
        },
        None => prompt.push_str(":\n\n"),
    }
    prompt.push_str(style_instruction(style));
    prompt.push_str("\n\nExplanation:");

    Ok(prompt)
}

/// Style-specific instruction appended to every prompt.
///
/// Total over the style tag: the catch-all variant gets the generic
/// instruction instead of an error.
pub fn style_instruction(style: ExplanationStyle) -> &'static str {
    match style {
        ExplanationStyle::Simple => {
            "Provide a simple, easy-to-understand explanation in 1-2 sentences. \
             Use everyday language and avoid technical jargon."
        },
        ExplanationStyle::Technical => {
            "Provide a technical explanation in 2-3 sentences. \
             Include relevant technical details and concepts."
        },
        ExplanationStyle::Detailed => {
            "Provide a comprehensive explanation in 3-4 sentences. \
             Include context, examples, and related concepts."
        },
        ExplanationStyle::Other => "Provide a clear explanation in 2-3 sentences.",
    }
}
