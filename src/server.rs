use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{AppConfig, ContractConfig};
use crate::error::ApiError;
use crate::handlers;

/// Shared state for handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub contract: ContractConfig,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            contract: config.contract.clone(),
        }
    }
}

pub fn app(config: &AppConfig) -> Router {
    let mut router = router(AppState::from_config(config));

    // Global middleware
    if config.server.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if config.server.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

/// Routes without the optional middleware layers
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/hello", get(handlers::hello))
        .route("/health", get(handlers::health))
        .route("/contract", get(handlers::contract_report))
        .fallback(not_found)
        .with_state(Arc::new(state))
}

async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    tracing::info!("Dockauto demo listening on http://{}", bind_addr);

    axum::serve(listener, app(config)).await?;
    Ok(())
}
