//! Development API Server
//!
//! Serves the metrics and analysis endpoints the dashboard client talks to,
//! so the client can be exercised without the production service.
//!
//! # Endpoints
//!
//! ## Metrics
//! - `GET /api/v1/metrics/dashboard` - Dashboard summary
//! - `GET /api/v1/metrics/team/:team_id/metrics` - Team metrics
//! - `GET /api/v1/metrics/repository/:repo_id/metrics` - Repository metrics
//! - `GET /api/v1/metrics/security/report` - Security report
//! - `GET /api/v1/metrics/quality/trends` - Quality trends
//!
//! ## Analysis
//! - `POST /api/v1/analysis/analyze` - Analyze files
//! - `GET /api/v1/analysis/analysis/:analysis_id` - Get a result
//! - `POST /api/v1/analysis/analyze/batch` - Queue a batch
//!
//! ## Health
//! - `GET /` - Service info
//! - `GET /health` - Health status

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let metrics_routes = Router::new()
        .route("/dashboard", get(routes::metrics::dashboard))
        .route("/team/:team_id/metrics", get(routes::metrics::team_metrics))
        .route(
            "/repository/:repo_id/metrics",
            get(routes::metrics::repository_metrics),
        )
        .route("/security/report", get(routes::metrics::security_report))
        .route("/quality/trends", get(routes::metrics::quality_trends));

    let analysis_routes = Router::new()
        .route("/analyze", post(routes::analysis::analyze))
        .route("/analyze/batch", post(routes::analysis::analyze_batch))
        .route(
            "/analysis/:analysis_id",
            get(routes::analysis::get_analysis),
        );

    let api_routes = Router::new()
        .nest("/metrics", metrics_routes)
        .nest("/analysis", analysis_routes);

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server and run until a shutdown signal arrives
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Code review API listening on {}", addr);
    serve_on(listener, state, shutdown_signal()).await?;

    tracing::info!("Code review API shut down gracefully");
    Ok(())
}

/// Serve on an already-bound listener until `shutdown` resolves
pub async fn serve_on<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<(), ApiError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let router = build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
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

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
