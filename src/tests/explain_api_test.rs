//! HTTP surface tests.
//!
//! Drives the full router through `tower::ServiceExt::oneshot`, with the
//! offline template backend for happy paths and an unconfigured OpenAI
//! gateway for the degraded-mode contract.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceExt;

use crate::AppState;
use crate::config::ProviderConfig;
use crate::handlers;
use crate::services::explainer::{
    Explainer, FALLBACK_EXPLANATION, OpenAiExplainer, TemplateExplainer,
};

fn test_app(explainer: Arc<dyn Explainer>) -> Router {
    let state = Arc::new(AppState { explainer });
    Router::new()
        .route("/", get(handlers::system::root))
        .route("/health", get(handlers::system::health_check))
        .route("/explain", post(handlers::explain::explain_text))
        .with_state(state)
}

fn template_app() -> Router {
    test_app(Arc::new(TemplateExplainer))
}

/// Real gateway with no credential: every explain call degrades to the
/// fallback without touching the network
fn unconfigured_openai_app() -> Router {
    let provider = ProviderConfig { api_key: None, ..ProviderConfig::default() };
    test_app(Arc::new(OpenAiExplainer::new(provider)))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("Request failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn post_explain(app: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/explain")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .expect("Request failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

// ============================================================================
// Info & Health Endpoints
// ============================================================================

#[tokio::test]
async fn test_root_reports_service_info() {
    let (status, body) = get_json(template_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Explaina API is running"));
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["endpoints"]["explain"], "/explain");
    assert_eq!(body["endpoints"]["health"], "/health");
}

#[tokio::test]
async fn test_health_with_template_backend() {
    let (status, body) = get_json(template_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "explaina-api");
    assert_eq!(body["provider_configured"], true);
    assert_eq!(body["current_provider"], "template");
}

#[tokio::test]
async fn test_health_reports_missing_credential() {
    let (status, body) = get_json(unconfigured_openai_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["provider_configured"], false);
    assert_eq!(body["current_provider"], "openai");
}

#[tokio::test]
async fn test_health_reports_present_credential() {
    let provider = ProviderConfig {
        api_key: Some("sk-test-key-12345".to_string()),
        ..ProviderConfig::default()
    };
    let app = test_app(Arc::new(OpenAiExplainer::new(provider)));

    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["provider_configured"], true);
}

// ============================================================================
// Explain Endpoint - Validation
// ============================================================================

#[tokio::test]
async fn test_explain_rejects_empty_text() {
    let (status, body) = post_explain(template_app(), serde_json::json!({"text": ""})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Selected text cannot be empty");
}

#[tokio::test]
async fn test_explain_rejects_whitespace_only_text() {
    let (status, body) =
        post_explain(template_app(), serde_json::json!({"text": "   \n\t  "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Selected text cannot be empty");
}

#[tokio::test]
async fn test_explain_rejects_oversized_text() {
    let (status, _body) =
        post_explain(template_app(), serde_json::json!({"text": "a".repeat(501)})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_explain_rejects_oversized_context() {
    let (status, _body) = post_explain(
        template_app(),
        serde_json::json!({"text": "entropy", "context": "c".repeat(2001)}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_explain_rejects_missing_text_field() {
    let (status, _body) =
        post_explain(template_app(), serde_json::json!({"context": "physics"})).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_explain_accepts_boundary_lengths() {
    let (status, body) = post_explain(
        template_app(),
        serde_json::json!({"text": "a".repeat(500), "context": "c".repeat(2000)}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["explanation"].as_str().unwrap().is_empty());

    let (status, _body) = post_explain(template_app(), serde_json::json!({"text": "a"})).await;
    assert_eq!(status, StatusCode::OK);
}

// ============================================================================
// Explain Endpoint - Generation
// ============================================================================

#[tokio::test]
async fn test_explain_returns_explanation() {
    let (status, body) = post_explain(
        template_app(),
        serde_json::json!({"text": "entropy", "context": "", "style": "simple"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let explanation = body["explanation"].as_str().unwrap();
    assert!(!explanation.is_empty());
    assert!(explanation.contains("entropy"));
}

#[tokio::test]
async fn test_explain_defaults_context_and_style() {
    let (status, body) =
        post_explain(template_app(), serde_json::json!({"text": "entropy"})).await;

    assert_eq!(status, StatusCode::OK);
    // Absent style defaults to simple
    assert!(body["explanation"]
        .as_str()
        .unwrap()
        .starts_with("**Simple Explanation:**"));
}

#[tokio::test]
async fn test_explain_accepts_unknown_style() {
    let (status, body) = post_explain(
        template_app(),
        serde_json::json!({"text": "entropy", "style": "poetic"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["explanation"]
        .as_str()
        .unwrap()
        .starts_with("Here's an explanation of 'entropy'"));
}

#[tokio::test]
async fn test_explain_styles_select_templates() {
    let (_, technical) = post_explain(
        template_app(),
        serde_json::json!({"text": "entropy", "style": "technical"}),
    )
    .await;
    let (_, detailed) = post_explain(
        template_app(),
        serde_json::json!({"text": "entropy", "style": "detailed"}),
    )
    .await;

    assert!(technical["explanation"]
        .as_str()
        .unwrap()
        .starts_with("**Technical Analysis:**"));
    assert!(detailed["explanation"]
        .as_str()
        .unwrap()
        .starts_with("**Detailed Explanation:**"));
}

// ============================================================================
// Explain Endpoint - Degraded Mode
// ============================================================================

#[tokio::test]
async fn test_provider_failure_still_returns_200_with_fallback() {
    let (status, body) = post_explain(
        unconfigured_openai_app(),
        serde_json::json!({"text": "entropy", "context": "", "style": "simple"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["explanation"], FALLBACK_EXPLANATION);
}

#[tokio::test]
async fn test_degraded_gateway_still_validates_input() {
    let (status, body) =
        post_explain(unconfigured_openai_app(), serde_json::json!({"text": "  "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Selected text cannot be empty");
}
