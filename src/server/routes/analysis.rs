//! Analysis Routes
//!
//! - POST /api/v1/analysis/analyze - Analyze a set of files
//! - GET /api/v1/analysis/analysis/:analysis_id - Fetch an earlier result
//! - POST /api/v1/analysis/analyze/batch - Queue several analyses

use axum::{extract::Path, Json};
use serde_json::{json, Map, Value};
use std::time::Instant;
use uuid::Uuid;

use crate::server::dto::AnalysisRequest;
use crate::server::error::{ApiError, ApiResult};
use crate::services::models::{AnalysisResult, BatchAnalysis, BatchJob};

fn empty_summary() -> Map<String, Value> {
    let summary = json!({
        "total_issues": 0,
        "security_issues": 0,
        "architecture_issues": 0,
        "quality_issues": 0,
    });

    match summary {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// POST /api/v1/analysis/analyze
///
/// Rejects a request without files.
pub async fn analyze(Json(request): Json<AnalysisRequest>) -> ApiResult<Json<AnalysisResult>> {
    let started = Instant::now();

    if request.files.is_empty() {
        return Err(ApiError::Validation("No files provided".to_string()));
    }

    tracing::info!(
        files = request.files.len(),
        security = request.check_security,
        architecture = request.check_architecture,
        quality = request.check_quality,
        custom_rules = request.custom_rules.is_some(),
        "Analyzing files"
    );

    Ok(Json(AnalysisResult {
        analysis_id: format!("analysis_{}", Uuid::new_v4().simple()),
        status: "completed".to_string(),
        comments: Vec::new(),
        summary: empty_summary(),
        processing_time_seconds: started.elapsed().as_secs_f64(),
    }))
}

/// GET /api/v1/analysis/analysis/:analysis_id
pub async fn get_analysis(Path(analysis_id): Path<String>) -> Json<AnalysisResult> {
    tracing::info!(analysis_id = %analysis_id, "Retrieving analysis");

    Json(AnalysisResult {
        analysis_id,
        status: "completed".to_string(),
        ..Default::default()
    })
}

/// POST /api/v1/analysis/analyze/batch
///
/// Returns immediately with one queued job per request.
pub async fn analyze_batch(Json(requests): Json<Vec<AnalysisRequest>>) -> Json<BatchAnalysis> {
    tracing::info!(sets = requests.len(), "Batch analysis requested");

    let jobs = requests
        .iter()
        .map(|request| BatchJob {
            job_id: format!("job_{}", Uuid::new_v4().simple()),
            files: request.files.len(),
            status: "queued".to_string(),
        })
        .collect();

    Json(BatchAnalysis {
        batch_id: format!("batch_{}", Uuid::new_v4().simple()),
        jobs,
        status: "queued".to_string(),
    })
}
