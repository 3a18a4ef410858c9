//! Service info and health endpoints.

use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Endpoints {
    pub explain: String,
    pub health: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    /// Whether a provider credential is present; independent of whether an
    /// explain call would succeed
    pub provider_configured: bool,
    pub current_provider: String,
}

// Liveness / service info
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service info", body = ServiceInfo)
    ),
    tag = "System"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Explaina API is running! 🤖".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: Endpoints {
            explain: "/explain".to_string(),
            health: "/health".to_string(),
        },
    })
}

// Health check reporting provider credential presence
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "explaina-api".to_string(),
        provider_configured: state.explainer.is_configured(),
        current_provider: state.explainer.name().to_string(),
    })
}
