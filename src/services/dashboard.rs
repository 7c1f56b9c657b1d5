//! Dashboard metrics façade
//!
//! Five read-only operations over `/metrics/*`. Each takes an optional
//! lookback window in days and issues exactly one GET.

use serde::Serialize;

use super::models::{
    DashboardMetrics, QualityTrends, RepositoryMetrics, SecurityReport, TeamMetrics,
};
use crate::client::{ApiClient, Pending};

/// Lookback window used when the caller does not pass one
pub const DEFAULT_LOOKBACK_DAYS: i64 = 30;

#[derive(Debug, Serialize)]
struct Window {
    days: i64,
}

impl Window {
    fn new(days: Option<i64>) -> Self {
        Self {
            days: days.unwrap_or(DEFAULT_LOOKBACK_DAYS),
        }
    }
}

/// Metrics endpoints used by the dashboard pages
#[derive(Debug, Clone)]
pub struct DashboardService {
    client: ApiClient,
}

impl DashboardService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Base URL of the underlying client
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// `GET /metrics/dashboard?days=N`
    pub fn dashboard(&self, days: Option<i64>) -> Pending<DashboardMetrics> {
        self.client.get_with_query("/metrics/dashboard", &Window::new(days))
    }

    /// `GET /metrics/team/{team_id}/metrics?days=N`
    ///
    /// The id is inserted into the path as given.
    pub fn team_metrics(&self, team_id: &str, days: Option<i64>) -> Pending<TeamMetrics> {
        self.client.get_with_query(
            &format!("/metrics/team/{}/metrics", team_id),
            &Window::new(days),
        )
    }

    /// `GET /metrics/repository/{repo_id}/metrics?days=N`
    ///
    /// The id is inserted into the path as given.
    pub fn repository_metrics(
        &self,
        repo_id: &str,
        days: Option<i64>,
    ) -> Pending<RepositoryMetrics> {
        self.client.get_with_query(
            &format!("/metrics/repository/{}/metrics", repo_id),
            &Window::new(days),
        )
    }

    /// `GET /metrics/security/report?days=N`
    pub fn security_report(&self, days: Option<i64>) -> Pending<SecurityReport> {
        self.client.get_with_query("/metrics/security/report", &Window::new(days))
    }

    /// `GET /metrics/quality/trends?days=N`
    pub fn quality_trends(&self, days: Option<i64>) -> Pending<QualityTrends> {
        self.client.get_with_query("/metrics/quality/trends", &Window::new(days))
    }
}
