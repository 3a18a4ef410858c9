use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use explaina::config::Config;
use explaina::models;
use explaina::services::explainer::{Explainer, OpenAiExplainer, TemplateExplainer};
use explaina::{AppState, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::system::root,
        handlers::system::health_check,
        handlers::explain::explain_text,
    ),
    components(
        schemas(
            models::ExplanationRequest,
            models::ExplanationResponse,
            models::ExplanationStyle,
            models::ErrorResponse,
            handlers::system::ServiceInfo,
            handlers::system::Endpoints,
            handlers::system::HealthResponse,
        )
    ),
    tags(
        (name = "System", description = "Service info and health"),
        (name = "Explanations", description = "AI-powered explanations for selected text"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first
    let config = Config::load()?;

    // Initialize logging
    let log_filter = tracing_subscriber::EnvFilter::new(&config.logging.level);

    let registry = tracing_subscriber::registry().with(log_filter);

    // Add file logging if configured; the guard must outlive the server so
    // the non-blocking writer keeps flushing
    let _appender_guard = if let Some(log_file) = &config.logging.file {
        // Ensure log directory exists
        let log_path = std::path::Path::new(log_file);
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        // Extract directory and filename prefix from config
        let log_dir = log_path.parent().and_then(|p| p.to_str()).unwrap_or("logs");
        let file_name = log_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("explaina.log");
        // Remove .log extension if present (rolling appender adds date suffix)
        let file_prefix = file_name.strip_suffix(".log").unwrap_or(file_name);

        let file_appender = tracing_appender::rolling::daily(log_dir, file_prefix);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
            .with(tracing_subscriber::fmt::layer())
            .init();
        Some(guard)
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
        None
    };

    tracing::info!("Explaina starting up");
    tracing::info!("Configuration loaded successfully");

    // Select the explainer backend; constructed once, read-only afterwards
    let explainer: Arc<dyn Explainer> = match config.provider.backend.as_str() {
        "template" => Arc::new(TemplateExplainer),
        _ => Arc::new(OpenAiExplainer::new(config.provider.clone())),
    };
    tracing::info!(
        "Explainer backend: {} (provider configured: {})",
        explainer.name(),
        explainer.is_configured()
    );

    // Wrap AppState in Arc for shared ownership across routes
    let app_state_arc = Arc::new(AppState { explainer });

    let api_routes = Router::new()
        .route("/", get(handlers::system::root))
        .route("/health", get(handlers::system::health_check))
        .route("/explain", post(handlers::explain::explain_text))
        .with_state(Arc::clone(&app_state_arc));

    // Build the main app router
    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_routes);

    // Permissive CORS is deliberate: the caller is a browser extension with
    // no fixed origin scheme
    let app = app
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::cors::CorsLayer::permissive());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Extension endpoint: http://{}/explain", addr);
    tracing::info!("API documentation available at http://{}/docs", addr);
    tracing::info!("Explaina is ready to serve requests");

    axum::serve(listener, app).await?;

    Ok(())
}
