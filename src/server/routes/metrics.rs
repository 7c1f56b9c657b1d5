//! Metrics Routes
//!
//! Code quality metrics for dashboards. Payloads are placeholders until a
//! metrics store backs them; their shape is what the client pages read.
//!
//! - GET /api/v1/metrics/dashboard - Dashboard summary
//! - GET /api/v1/metrics/team/:team_id/metrics - Team metrics
//! - GET /api/v1/metrics/repository/:repo_id/metrics - Repository metrics
//! - GET /api/v1/metrics/security/report - Security issues report
//! - GET /api/v1/metrics/quality/trends - Quality trends

use axum::{
    extract::{Path, Query},
    Json,
};

use crate::server::dto::{DashboardParams, WindowParams};
use crate::services::models::{
    DashboardMetrics, DashboardSummary, QualityTrends, RepositoryMetrics, SecurityReport,
    TeamMetrics,
};

fn period(days: i64) -> String {
    format!("last_{}_days", days)
}

/// GET /api/v1/metrics/dashboard
pub async fn dashboard(Query(params): Query<DashboardParams>) -> Json<DashboardMetrics> {
    tracing::info!(
        days = params.days,
        team_id = ?params.team_id,
        "Fetching dashboard metrics"
    );

    Json(DashboardMetrics {
        period: period(params.days),
        summary: DashboardSummary {
            total_reviews: 100,
            avg_review_time_minutes: 15.0,
            issues_found: 250,
            critical_issues: 5,
            security_issues: 12,
            avg_quality_score: 85.5,
        },
        ..Default::default()
    })
}

/// GET /api/v1/metrics/team/:team_id/metrics
pub async fn team_metrics(
    Path(team_id): Path<String>,
    Query(params): Query<WindowParams>,
) -> Json<TeamMetrics> {
    tracing::info!(team_id = %team_id, days = params.days, "Fetching team metrics");

    Json(TeamMetrics {
        team_id,
        metrics: Default::default(),
    })
}

/// GET /api/v1/metrics/repository/:repo_id/metrics
pub async fn repository_metrics(
    Path(repo_id): Path<String>,
    Query(params): Query<WindowParams>,
) -> Json<RepositoryMetrics> {
    tracing::info!(repo_id = %repo_id, days = params.days, "Fetching repository metrics");

    Json(RepositoryMetrics {
        repository_id: repo_id,
        metrics: Default::default(),
    })
}

/// GET /api/v1/metrics/security/report
pub async fn security_report(Query(params): Query<WindowParams>) -> Json<SecurityReport> {
    tracing::info!(days = params.days, "Generating security report");

    Json(SecurityReport {
        period: period(params.days),
        ..Default::default()
    })
}

/// GET /api/v1/metrics/quality/trends
pub async fn quality_trends(Query(params): Query<WindowParams>) -> Json<QualityTrends> {
    tracing::info!(days = params.days, "Generating quality trends");

    Json(QualityTrends {
        period: period(params.days),
        ..Default::default()
    })
}
