//! Dashboard Pages
//!
//! Text views for each routable page. Pages fetch what they show through
//! the service façades; failures are returned to the caller untouched.

use std::fmt::Write;

use crate::client::ClientResult;
use crate::router::Page;
use crate::services::{Services, DEFAULT_LOOKBACK_DAYS};

/// Inputs a page may use besides the services
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// Lookback window; the service default applies when `None`
    pub days: Option<i64>,
    /// Repository to detail on the repositories page
    pub repository: Option<String>,
}

/// Render the body of a page (without the navigation shell)
pub async fn render(page: Page, services: &Services, ctx: &PageContext) -> ClientResult<String> {
    tracing::debug!(page = %page, days = ?ctx.days, "Rendering page");

    match page {
        Page::Dashboard => dashboard(services, ctx).await,
        Page::Repositories => repositories(services, ctx).await,
        Page::Security => security(services, ctx).await,
        Page::Settings => Ok(settings(services, ctx)),
    }
}

async fn dashboard(services: &Services, ctx: &PageContext) -> ClientResult<String> {
    let metrics = services.dashboard.dashboard(ctx.days).await?;
    let s = &metrics.summary;

    let mut out = String::new();
    let _ = writeln!(out, "Dashboard ({})", metrics.period);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Total reviews:        {}", s.total_reviews);
    let _ = writeln!(out, "  Avg review time:      {} min", s.avg_review_time_minutes);
    let _ = writeln!(out, "  Issues found:         {}", s.issues_found);
    let _ = writeln!(out, "  Critical issues:      {}", s.critical_issues);
    let _ = writeln!(out, "  Security issues:      {}", s.security_issues);
    let _ = writeln!(out, "  Avg quality score:    {:.1}", s.avg_quality_score);

    if !metrics.top_issues.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  Top issues: {}", metrics.top_issues.len());
    }

    Ok(out)
}

async fn repositories(services: &Services, ctx: &PageContext) -> ClientResult<String> {
    let trends = services.dashboard.quality_trends(ctx.days).await?;

    let mut out = String::new();
    let _ = writeln!(out, "Repositories ({})", trends.period);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Quality scores recorded: {}", trends.scores.len());
    for (name, value) in &trends.trends {
        let _ = writeln!(out, "  {:<24} {}", name, value);
    }

    if let Some(repo_id) = &ctx.repository {
        let repo = services
            .dashboard
            .repository_metrics(repo_id, ctx.days)
            .await?;

        let _ = writeln!(out);
        let _ = writeln!(out, "Repository {}", repo.repository_id);
        if repo.metrics.is_empty() {
            let _ = writeln!(out, "  No metrics recorded");
        }
        for (name, value) in &repo.metrics {
            let _ = writeln!(out, "  {:<24} {}", name, value);
        }
    }

    Ok(out)
}

async fn security(services: &Services, ctx: &PageContext) -> ClientResult<String> {
    let report = services.dashboard.security_report(ctx.days).await?;

    let mut out = String::new();
    let _ = writeln!(out, "Security ({})", report.period);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Total issues: {}", report.total_issues);
    for (severity, count) in report.by_severity.counts() {
        let _ = writeln!(out, "  {:<10} {}", severity, count);
    }
    if !report.patterns.is_empty() {
        let _ = writeln!(out, "  Patterns detected: {}", report.patterns.len());
    }

    Ok(out)
}

fn settings(services: &Services, ctx: &PageContext) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Settings");
    let _ = writeln!(out);
    let _ = writeln!(out, "  API base URL:     {}", services.dashboard.base_url());
    let _ = writeln!(
        out,
        "  Lookback window:  {} days",
        ctx.days.unwrap_or(DEFAULT_LOOKBACK_DAYS)
    );
    out
}
