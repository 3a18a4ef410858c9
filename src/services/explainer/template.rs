//! Offline template explainer.
//!
//! Second implementation of the [`Explainer`] contract: serves canned,
//! style-keyed explanations with no provider call. Used for local
//! development without a credential and as the test double for the HTTP
//! surface.

use async_trait::async_trait;

use crate::models::ExplanationStyle;
use crate::utils::StringExt;

use super::error::ExplainerError;
use super::service::Explainer;

pub struct TemplateExplainer;

#[async_trait]
impl Explainer for TemplateExplainer {
    async fn explain(
        &self,
        text: &str,
        context: &str,
        style: ExplanationStyle,
    ) -> Result<String, ExplainerError> {
        let text = text.clean().ok_or(ExplainerError::EmptyText)?;
        let context = context.trimmed();

        let mut explanation = match style {
            ExplanationStyle::Simple => format!(
                "**Simple Explanation:** '{}' refers to a concept or term that is commonly \
                 used in this context. Based on the surrounding text, it appears to be \
                 related to the topic being discussed.",
                text
            ),
            ExplanationStyle::Technical => format!(
                "**Technical Analysis:** The term '{}' in this context represents a specific \
                 technical concept. From the provided context, it can be analyzed as a \
                 component within the broader subject matter, demonstrating particular \
                 characteristics and applications.",
                text
            ),
            ExplanationStyle::Detailed => format!(
                "**Detailed Explanation:** '{}' is a comprehensive term that encompasses \
                 multiple aspects. In the context provided, it functions as a key element \
                 within the broader framework. The surrounding text suggests it plays a \
                 significant role in the overall discussion, with implications for \
                 understanding the subject matter more deeply.",
                text
            ),
            ExplanationStyle::Other => format!(
                "Here's an explanation of '{}': This term appears in the context provided \
                 and relates to the topic being discussed.",
                text
            ),
        };

        if context.len() > 50 {
            explanation.push_str(
                "\n\n**Context Note:** The surrounding text provides additional context \
                 that helps clarify the meaning and usage of this term.",
            );
        }

        Ok(explanation)
    }

    fn is_configured(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "template"
    }
}
