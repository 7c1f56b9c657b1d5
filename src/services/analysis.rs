//! Code analysis façade

use super::models::{AnalysisResult, AnalyzeRequest, BatchAnalysis, CodeFile};
use crate::client::{ApiClient, Pending};

/// Submit code for review and look up earlier results
#[derive(Debug, Clone)]
pub struct AnalysisService {
    client: ApiClient,
}

impl AnalysisService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /analysis/analyze` with `{"files": [...]}`
    pub fn analyze_code(&self, files: Vec<CodeFile>) -> Pending<AnalysisResult> {
        self.client.post("/analysis/analyze", &AnalyzeRequest { files })
    }

    /// `GET /analysis/analysis/{analysis_id}`
    pub fn get_analysis(&self, analysis_id: &str) -> Pending<AnalysisResult> {
        self.client.get(&format!("/analysis/analysis/{}", analysis_id))
    }

    /// `POST /analysis/analyze/batch` with one request per file set
    pub fn analyze_batch(&self, batches: Vec<Vec<CodeFile>>) -> Pending<BatchAnalysis> {
        let requests: Vec<AnalyzeRequest> = batches
            .into_iter()
            .map(|files| AnalyzeRequest { files })
            .collect();

        self.client.post("/analysis/analyze/batch", &requests)
    }
}
