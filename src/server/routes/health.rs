//! Health Routes
//!
//! - GET / - Service name and where to find the health check
//! - GET /health - Liveness and uptime for load balancers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::server::dto::{HealthResponse, ServiceInfo, SERVICE_NAME};
use crate::server::state::AppState;

/// GET /
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        health: "/health".to_string(),
    })
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: SERVICE_NAME.to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}
