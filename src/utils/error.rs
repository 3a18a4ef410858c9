//! API error types shared by all handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::ErrorResponse;

/// Boundary error for HTTP handlers
///
/// Two visible kinds: rejected input maps to 400 with a message the caller
/// sees; everything else maps to 500 with a generic message, detail logged
/// server side only.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::InvalidInput(message) => {
                (StatusCode::BAD_REQUEST, ErrorResponse { error: message, detail: None })
            },
            Self::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Failed to generate explanation".to_string(),
                        detail: None,
                    },
                )
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
