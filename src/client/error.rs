//! Client error types
//!
//! Failures are reported the way the transport produced them; nothing is
//! retried or reclassified beyond these three cases.

use thiserror::Error;

/// Errors that can occur when talking to the code review API
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network failure, invalid URL, or request body that failed to serialize
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            ClientError::Decode(_) => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Status {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error 404: not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::Decode(_)));
        assert_eq!(err.status(), None);
    }
}
