//! Service Façades
//!
//! Named operations over the code review API. Every operation issues
//! exactly one HTTP call through the shared [`ApiClient`] and hands back
//! the unsent [`Pending`](crate::client::Pending) request.
//!
//! ## Metrics
//! - `GET /metrics/dashboard`
//! - `GET /metrics/team/{id}/metrics`
//! - `GET /metrics/repository/{id}/metrics`
//! - `GET /metrics/security/report`
//! - `GET /metrics/quality/trends`
//!
//! ## Analysis
//! - `POST /analysis/analyze`
//! - `GET /analysis/analysis/{id}`
//! - `POST /analysis/analyze/batch`

pub mod analysis;
pub mod dashboard;
pub mod models;

pub use analysis::AnalysisService;
pub use dashboard::{DashboardService, DEFAULT_LOOKBACK_DAYS};

use crate::client::ApiClient;

/// Both façades, built over one shared client
#[derive(Debug, Clone)]
pub struct Services {
    pub dashboard: DashboardService,
    pub analysis: AnalysisService,
}

impl Services {
    pub fn new(client: ApiClient) -> Self {
        Self {
            dashboard: DashboardService::new(client.clone()),
            analysis: AnalysisService::new(client),
        }
    }
}
