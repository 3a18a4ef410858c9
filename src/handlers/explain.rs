//! Explanation endpoint handler.

use axum::{Json, extract::State};
use std::sync::Arc;
use validator::Validate;

use crate::AppState;
use crate::models::{ErrorResponse, ExplanationRequest, ExplanationResponse};
use crate::services::explainer::ExplainerError;
use crate::utils::{ApiError, ApiResult, StringExt};

// Generate an explanation for the selected text
#[utoipa::path(
    post,
    path = "/explain",
    request_body = ExplanationRequest,
    responses(
        (status = 200, description = "Generated explanation", body = ExplanationResponse),
        (status = 400, description = "Empty or oversized input", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "Explanations"
)]
pub async fn explain_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExplanationRequest>,
) -> ApiResult<Json<ExplanationResponse>> {
    tracing::info!("Received explanation request for: '{}'", req.text);

    // Blank text gets the fixed message; length bounds come from the model
    if req.text.clean().is_none() {
        return Err(ApiError::invalid_input("Selected text cannot be empty"));
    }
    req.validate().map_err(|e| ApiError::invalid_input(e.to_string()))?;

    let explanation = state
        .explainer
        .explain(&req.text, &req.context, req.style)
        .await
        .map_err(|e| match e {
            ExplainerError::EmptyText => ApiError::invalid_input(e.to_string()),
            other => ApiError::internal(other.to_string()),
        })?;

    tracing::info!("Successfully generated explanation for: '{}'", req.text);
    Ok(Json(ExplanationResponse { explanation }))
}
