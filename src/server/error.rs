//! Server errors
//!
//! Every handler failure becomes a JSON body of the form
//! `{"error": {"code", "message"}, "request_id"}`. Rejected input is a 400;
//! anything else is a 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request was understood but its content is unusable
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    /// Binding or serving the listener failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_client_error() {
            tracing::warn!(%request_id, code, reason = %self, "Request rejected");
        } else {
            tracing::error!(%request_id, code, reason = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn parts(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_is_bad_request() {
        let (status, body) = parts(ApiError::Validation("No files provided".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Validation error: No files provided");
        assert_eq!(body["request_id"].as_str().unwrap().len(), 36);
    }

    #[tokio::test]
    async fn test_io_is_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let (status, body) = parts(ApiError::from(io)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "IO_ERROR");
        assert_eq!(body["error"]["message"], "IO error: port taken");
    }

    #[tokio::test]
    async fn test_request_ids_differ() {
        let (_, first) = parts(ApiError::Internal("boom".to_string())).await;
        let (_, second) = parts(ApiError::Internal("boom".to_string())).await;

        assert_eq!(first["error"]["code"], "INTERNAL_ERROR");
        assert_ne!(first["request_id"], second["request_id"]);
    }
}
