//! Explanation Service
//!
//! Builds a completion prompt from a text selection and relays it to an
//! OpenAI-compatible chat completion API. Every provider failure is absorbed
//! into one fixed fallback string; callers never see provider errors.
//!
//! # Architecture
//! ```text
//! ┌──────────────┐
//! │  Explainer   │  ← Trait (generic contract)
//! └──────┬───────┘
//!        │
//!   ┌────┴─────┐
//!   ▼          ▼
//! ┌──────┐ ┌──────────┐
//! │OpenAI│ │ Template │
//! │ API  │ │ (offline)│
//! └──────┘ └──────────┘
//! ```

mod client;
mod error;
mod prompt;
mod service;
mod template;

// Re-exports for external use
pub use error::ExplainerError;
pub use prompt::{build_prompt, style_instruction};
pub use service::{Explainer, FALLBACK_EXPLANATION, OpenAiExplainer};
pub use template::TemplateExplainer;
