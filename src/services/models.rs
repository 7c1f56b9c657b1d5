//! Request and response models
//!
//! Response shapes are owned by the remote service, so every response model
//! ignores unknown fields and falls back to the field's default when a field
//! is missing or explicitly `null`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Treat an explicit `null` like a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================
// ANALYSIS REQUESTS
// ============================================

/// A source file submitted for analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFile {
    pub path: String,
    pub content: String,
    /// Language hint; left for the service to detect when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl CodeFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            language: None,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Body of `POST /analysis/analyze`; files are sent in the given order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub files: Vec<CodeFile>,
}

// ============================================
// METRICS RESPONSES
// ============================================

/// `GET /metrics/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardMetrics {
    #[serde(deserialize_with = "nullable")]
    pub period: String,
    #[serde(deserialize_with = "nullable")]
    pub summary: DashboardSummary,
    #[serde(deserialize_with = "nullable")]
    pub trends: DashboardTrends,
    #[serde(deserialize_with = "nullable")]
    pub top_issues: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub team_stats: Vec<Value>,
}

/// Headline numbers shown on the dashboard page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSummary {
    #[serde(deserialize_with = "nullable")]
    pub total_reviews: u64,
    #[serde(deserialize_with = "nullable")]
    pub avg_review_time_minutes: f64,
    #[serde(deserialize_with = "nullable")]
    pub issues_found: u64,
    #[serde(deserialize_with = "nullable")]
    pub critical_issues: u64,
    #[serde(deserialize_with = "nullable")]
    pub security_issues: u64,
    #[serde(deserialize_with = "nullable")]
    pub avg_quality_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardTrends {
    #[serde(deserialize_with = "nullable")]
    pub issues_over_time: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub quality_score_trend: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub review_time_trend: Vec<Value>,
}

/// `GET /metrics/team/{id}/metrics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMetrics {
    #[serde(deserialize_with = "nullable")]
    pub team_id: String,
    #[serde(deserialize_with = "nullable")]
    pub metrics: Map<String, Value>,
}

/// `GET /metrics/repository/{id}/metrics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryMetrics {
    #[serde(deserialize_with = "nullable")]
    pub repository_id: String,
    #[serde(deserialize_with = "nullable")]
    pub metrics: Map<String, Value>,
}

/// `GET /metrics/security/report`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityReport {
    #[serde(deserialize_with = "nullable")]
    pub period: String,
    #[serde(deserialize_with = "nullable")]
    pub total_issues: u64,
    #[serde(deserialize_with = "nullable")]
    pub by_severity: SeverityBreakdown,
    #[serde(deserialize_with = "nullable")]
    pub patterns: Vec<Value>,
}

/// Security findings grouped by severity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityBreakdown {
    #[serde(deserialize_with = "nullable")]
    pub critical: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub high: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub medium: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub low: Vec<Value>,
}

impl SeverityBreakdown {
    /// (severity, count) pairs from most to least severe
    pub fn counts(&self) -> [(&'static str, usize); 4] {
        [
            ("critical", self.critical.len()),
            ("high", self.high.len()),
            ("medium", self.medium.len()),
            ("low", self.low.len()),
        ]
    }
}

/// `GET /metrics/quality/trends`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityTrends {
    #[serde(deserialize_with = "nullable")]
    pub period: String,
    #[serde(deserialize_with = "nullable")]
    pub scores: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub trends: Map<String, Value>,
}

// ============================================
// ANALYSIS RESPONSES
// ============================================

/// Result of `POST /analysis/analyze` and `GET /analysis/analysis/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    #[serde(deserialize_with = "nullable")]
    pub analysis_id: String,
    /// completed, in_progress, or failed
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(deserialize_with = "nullable")]
    pub comments: Vec<ReviewComment>,
    #[serde(deserialize_with = "nullable")]
    pub summary: Map<String, Value>,
    #[serde(deserialize_with = "nullable")]
    pub processing_time_seconds: f64,
}

/// A single review comment attached to a file and line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewComment {
    #[serde(deserialize_with = "nullable")]
    pub file_path: String,
    #[serde(deserialize_with = "nullable")]
    pub line_number: u32,
    /// critical, high, medium, low, or info
    #[serde(deserialize_with = "nullable")]
    pub severity: String,
    /// security, architecture, quality, or style
    #[serde(deserialize_with = "nullable")]
    pub category: String,
    #[serde(deserialize_with = "nullable")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Tracking info returned by `POST /analysis/analyze/batch`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchAnalysis {
    #[serde(deserialize_with = "nullable")]
    pub batch_id: String,
    #[serde(deserialize_with = "nullable")]
    pub jobs: Vec<BatchJob>,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
}

/// One queued job in a batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchJob {
    #[serde(deserialize_with = "nullable")]
    pub job_id: String,
    /// Number of files in the job's request
    #[serde(deserialize_with = "nullable")]
    pub files: usize,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
}
