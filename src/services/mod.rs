pub mod explainer;

pub use explainer::{
    Explainer, ExplainerError, FALLBACK_EXPLANATION, OpenAiExplainer, TemplateExplainer,
};
