//! Pending request handle
//!
//! A `Pending<T>` is a fully described request that has not been sent yet.
//! Nothing touches the network until the caller awaits it, so the caller
//! decides when (and whether) the call happens and how to treat failures.

use futures_util::future::BoxFuture;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::fmt;
use std::future::IntoFuture;
use std::marker::PhantomData;

use super::error::{ClientError, ClientResult};

/// A request that resolves to a `T` decoded from the JSON response body
pub struct Pending<T> {
    builder: RequestBuilder,
    _response: PhantomData<fn() -> T>,
}

impl<T> Pending<T> {
    pub(crate) fn new(builder: RequestBuilder) -> Self {
        Self {
            builder,
            _response: PhantomData,
        }
    }

    /// Reinterpret the response body as a different type
    pub fn cast<U>(self) -> Pending<U> {
        Pending::new(self.builder)
    }

    /// Build the underlying request without sending it
    ///
    /// URL, serialization, and header errors recorded while describing the
    /// request surface here.
    pub fn build(self) -> ClientResult<reqwest::Request> {
        self.builder.build().map_err(ClientError::Request)
    }

    /// Send the request and return the raw response
    ///
    /// Non-2xx responses are turned into `ClientError::Status` with the
    /// response body as the message.
    pub async fn send(self) -> ClientResult<Response> {
        let response = self.builder.send().await?;
        let status = response.status();

        tracing::debug!(
            status = status.as_u16(),
            url = %response.url(),
            "API response"
        );

        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl<T: DeserializeOwned> Pending<T> {
    /// Send the request and decode the JSON body
    pub async fn json(self) -> ClientResult<T> {
        let response = self.send().await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl<T> IntoFuture for Pending<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Output = ClientResult<T>;
    type IntoFuture = BoxFuture<'static, ClientResult<T>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.json())
    }
}

impl<T> fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pending")
            .field("request", &self.builder)
            .finish()
    }
}
