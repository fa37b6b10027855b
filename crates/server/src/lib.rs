//! HTTP surface for the SEO health engine.
//!
//! The admin panel posts an article (optionally with a Core Web Vitals
//! reading and the bodies of other articles) and gets the report back as
//! JSON. Nothing is stored; every request is scored from its payload.
//!
//! # Routes
//! - `GET /health` liveness probe
//! - `POST /api/seo/health` scores one article
//! - `POST /api/seo/health/batch` scores a list of articles, optionally
//!   cross-checking them against each other for duplication
//!
//! # Environment
//! - `SEOSCOPE_ADDR` bind address (default `0.0.0.0:8080`)
//! - `SEOSCOPE_CONFIG` scoring config JSON (default: standard config dir, then built-ins)
//! - `SEOSCOPE_TIMEOUT_SECS` per-request timeout (default 10)
//! - `SEOSCOPE_BODY_LIMIT` maximum request body in bytes (default 2 MiB)
//! - `RUST_LOG` log filter
use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::ctrl_c;
use tokio::{net::TcpListener, signal};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::Config;
use error::StartupError;
use routes::{liveness_handler, seo_batch_handler, seo_health_handler};
use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(60 * 60));

    Router::new()
        .route("/health", get(liveness_handler))
        .route("/api/seo/health", post(seo_health_handler))
        .route("/api/seo/health/batch", post(seo_batch_handler))
        .layer(DefaultBodyLimit::max(state.config.body_limit))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, state.config.timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server() -> Result<(), StartupError> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Initializing state...");
    let config = Config::load()?;
    let state = AppState::new(config)?;
    let address = state.config.addr;

    info!("Binding to {address}");
    let listener = TcpListener::bind(address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
