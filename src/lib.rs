//! Explaina Library
//!
//! This library contains all the core modules for the Explaina backend.

use std::sync::Arc;

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use services::explainer::{
    Explainer, ExplainerError, FALLBACK_EXPLANATION, OpenAiExplainer, TemplateExplainer,
};
pub use utils::{ApiError, ApiResult};

/// Application shared state
///
/// Design Philosophy: Keep it simple - Rust's type system IS our DI container.
/// The explainer is the one shared resource: constructed once at startup,
/// read-only afterwards, and held behind a trait object so tests can swap in
/// a double.
#[derive(Clone)]
pub struct AppState {
    pub explainer: Arc<dyn Explainer>,
}

#[cfg(test)]
mod tests;
