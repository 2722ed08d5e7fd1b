//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints and the swagger mount
//! - Middleware stack (logging, compression, timeout, CORS)
//! - Storage backend construction from the configured connection string
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::docs::ApiDoc;
use crate::middleware::{log_requests, request_id};
use crate::routes::{health, not_found, products, welcome};
use crate::state::AppState;
use crate::store::{MongoStore, ProductStore, UnavailableStore};
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::{delete, get, post, put};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the Axum router with all routes and middleware.
///
/// Public so the integration tests can drive the real router with an
/// injected in-memory store.
pub fn build_router(state: AppState) -> Router {
    // CORS layer
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let timeout = TimeoutLayer::new(state.config.timeout());
    let body_limit = DefaultBodyLimit::max(state.config.max_body_size());

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health::health_check))
        // Product CRUD
        .route("/api/users", post(products::create_product))
        .route("/api/users", get(products::list_products))
        .route("/api/users/{id}", get(products::get_product))
        .route("/api/users/{id}", put(products::update_product))
        .route("/api/users/{id}", delete(products::delete_product))
        // Generated documentation
        .merge(SwaggerUi::new("/api-doc").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(body_limit)
        .layer(timeout)
        .layer(CompressionLayer::new())
        .layer(cors)
        // request_id is outermost so the completion log below it can read
        // the id from the request extensions
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the storage backend from the configuration.
///
/// A missing or rejected connection string is logged and replaced with a
/// stand-in whose every operation fails; the process keeps serving.
async fn build_store(config: &ServerConfig) -> Arc<dyn ProductStore> {
    let Some(uri) = config.mongodb_uri.as_deref() else {
        tracing::error!("MONGODB_URI is not set; data operations will fail");
        return Arc::new(UnavailableStore);
    };

    match MongoStore::connect(uri, config.mongodb_db.as_deref()).await {
        Ok(store) => {
            tracing::info!("Connected to MongoDB");
            Arc::new(store)
        }
        Err(err) => {
            tracing::error!(error = %err, "MongoDB connection rejected; data operations will fail");
            Arc::new(UnavailableStore)
        }
    }
}

/// Start the product API HTTP server.
///
/// Initializes logging, builds the shared state and router, binds the
/// configured TCP address, and serves until SIGTERM/Ctrl+C.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .with_target(false)
        .init();

    // Build storage backend and shared state
    let store = build_store(&config).await;
    let state = AppState::new(config.clone(), store);

    // Build router
    let app = build_router(state);

    // Parse bind address
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!("Starting product API server on {}", addr);
    tracing::info!(
        "Timeout: {}s, Max body: {}MB, CORS: {}",
        config.timeout_secs,
        config.max_body_size_mb,
        config.enable_cors
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
