//! Code Review API Client
//!
//! One `ApiClient` is built per process and handed to every service
//! façade. Clones share the same connection pool and configuration.
//!
//! The base URL is only joined to request paths, never validated up front:
//! a malformed base URL shows up as a `ClientError::Request` on the first
//! call that uses it.

mod error;
mod pending;

pub use error::{ClientError, ClientResult};
pub use pending::Pending;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;

use crate::config::ApiConfig;

/// Shared HTTP client bound to the API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Arc<str>,
}

impl ApiClient {
    /// Create a client from the API configuration
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        Self::with_base_url(&config.base_url)
    }

    /// Create a client for an explicit base URL
    pub fn with_base_url(base_url: &str) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;
        let base_url = base_url.trim_end_matches('/');

        tracing::debug!(base_url, "API client created");

        Ok(Self {
            client,
            base_url: Arc::from(base_url),
        })
    }

    /// Base URL every request path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Describe a GET request
    pub fn get<T>(&self, path: &str) -> Pending<T> {
        tracing::trace!(path, "GET");
        Pending::new(self.client.get(self.url(path)))
    }

    /// Describe a GET request with query parameters
    pub fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Pending<T>
    where
        Q: Serialize + ?Sized,
    {
        tracing::trace!(path, "GET");
        Pending::new(self.client.get(self.url(path)).query(query))
    }

    /// Describe a POST request with a JSON body
    pub fn post<T, B>(&self, path: &str, body: &B) -> Pending<T>
    where
        B: Serialize + ?Sized,
    {
        tracing::trace!(path, "POST");
        Pending::new(self.client.post(self.url(path)).json(body))
    }
}
