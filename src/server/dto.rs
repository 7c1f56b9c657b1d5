//! Data Transfer Objects
//!
//! Request types accepted by the development server. Response bodies reuse
//! the client models in [`crate::services::models`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::services::models::CodeFile;
use crate::services::DEFAULT_LOOKBACK_DAYS;

fn default_days() -> i64 {
    DEFAULT_LOOKBACK_DAYS
}

fn default_true() -> bool {
    true
}

/// `?days=N` on every metrics endpoint
#[derive(Debug, Deserialize)]
pub struct WindowParams {
    #[serde(default = "default_days")]
    pub days: i64,
}

/// Query string of `GET /metrics/dashboard`
#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default = "default_days")]
    pub days: i64,
}

/// Body of `POST /analysis/analyze`
#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub files: Vec<CodeFile>,
    #[serde(default = "default_true")]
    pub check_security: bool,
    #[serde(default = "default_true")]
    pub check_architecture: bool,
    #[serde(default = "default_true")]
    pub check_quality: bool,
    #[serde(default)]
    pub custom_rules: Option<Map<String, Value>>,
}

/// Name the server reports on `/` and `/health`
pub const SERVICE_NAME: &str = "AI Code Review Assistant API";

/// `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
    pub uptime_seconds: u64,
}

/// `GET /`
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub health: String,
}
