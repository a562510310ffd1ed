//! HTTP gateway for DSA Mentor.
//!
//! Serves the JSON API under `/api`, a health check, and the embedded web
//! UI. Built on Axum.

pub mod api;
pub mod frontend;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, response::Json, routing::get};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use dsamentor_knowledge::ExplanationCatalog;
use dsamentor_tutor::Tutor;

pub use api::{ApiState, MAX_SESSIONS, SharedApiState};

/// Build the full router.
///
/// Layers applied:
/// - CORS (any origin unless `allowed_origins` is set)
/// - Request body size limit (64 KB)
/// - HTTP trace logging
pub fn build_router(state: SharedApiState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::api_router(state))
        .merge(frontend::frontend_router())
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(cors_layer(allowed_origins))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600))
}

/// Start the gateway HTTP server.
pub async fn start(config: dsamentor_config::AppConfig) -> dsamentor_core::Result<()> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let catalog = Arc::new(ExplanationCatalog::builtin());
    let router = dsamentor_providers::build_from_config(&config, catalog);
    let provider = router.default().ok_or_else(|| dsamentor_core::Error::Config {
        message: format!("unknown provider '{}'", config.provider),
    })?;

    if provider.name() == "gemini" && !config.has_api_key() {
        warn!("Gemini selected but no API key set; replies will fall back to an apology");
    }

    let tutor = Arc::new(Tutor::new(provider));
    let state = Arc::new(ApiState::new(tutor.clone(), config.tutor.default_level));
    let app = build_router(state, &config.gateway.allowed_origins);

    info!(addr = %addr, provider = tutor.provider_name(), "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
