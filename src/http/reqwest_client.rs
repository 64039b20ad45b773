use crate::http::{HttpClient, HttpClientError, HttpClientResult, HttpCompletion, HttpResponse};
use futures::StreamExt;
use thiserror::Error;
use tokio::runtime::{Handle, TryCurrentError};
use url::Url;

const DEFAULT_MAX_RESPONSE_BYTES: usize = 10 * 1024 * 1024; // 10MB

/// Errors produced by [`ReqwestHttpClient`].
///
/// Delivered to the completion wrapped in an [`HttpClientError`]; recover
/// the variant with [`HttpClientError::downcast_ref`].
#[derive(Debug, Error)]
pub enum ReqwestClientError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Response body exceeded the configured size limit
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    /// Response was incomplete (received fewer bytes than Content-Length)
    #[error("Incomplete response: expected {expected} bytes, received {received}")]
    IncompleteResponse { expected: u64, received: usize },
}

impl From<ReqwestClientError> for HttpClientError {
    fn from(err: ReqwestClientError) -> Self {
        HttpClientError::new(err)
    }
}

/// [`HttpClient`] backed by a [`reqwest::Client`].
///
/// Each `get` runs as its own task on the captured tokio runtime, so the
/// completion fires on a runtime worker rather than the calling thread.
/// Requests share nothing mutable; the underlying `reqwest::Client` is an
/// `Arc` internally and cheap to clone per request.
///
/// Exactly one GET is sent per call. Retry and timeout policy belong to the
/// `reqwest::Client` the caller supplies.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    runtime: Handle,
    max_response_bytes: usize,
}

impl ReqwestHttpClient {
    /// Creates a client that spawns requests on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Fails when called outside a tokio runtime context.
    pub fn new(client: reqwest::Client) -> Result<Self, TryCurrentError> {
        Ok(Self::with_runtime(client, Handle::try_current()?))
    }

    /// Creates a client that spawns requests on the given runtime.
    pub fn with_runtime(client: reqwest::Client, runtime: Handle) -> Self {
        Self {
            client,
            runtime,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }

    /// Overrides the response body size limit (default 10MB).
    pub fn with_max_response_bytes(mut self, limit: usize) -> Self {
        self.max_response_bytes = limit;
        self
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        let client = self.client.clone();
        let url = url.clone();
        let limit = self.max_response_bytes;

        tracing::debug!(url = %url, "Dispatching GET");
        self.runtime.spawn(async move {
            let result = fetch(&client, url, limit).await;
            completion(result);
        });
    }
}

async fn fetch(client: &reqwest::Client, url: Url, limit: usize) -> HttpClientResult {
    let response = client.get(url.clone()).send().await.map_err(|e| {
        tracing::debug!(url = %url, error = %e, "GET failed before a response arrived");
        ReqwestClientError::Network(e)
    })?;

    let metadata = HttpResponse::new(response.url().clone(), response.status().as_u16());
    let bytes = read_limited_bytes(response, limit).await?;

    tracing::debug!(
        url = %metadata.url,
        status = metadata.status,
        bytes = bytes.len(),
        "GET completed"
    );
    Ok((bytes, metadata))
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, ReqwestClientError> {
    let expected_length = response.content_length();

    // Fast path: check Content-Length header
    if let Some(len) = expected_length {
        if len > limit as u64 {
            return Err(ReqwestClientError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(ReqwestClientError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(ReqwestClientError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    if let Some(expected) = expected_length {
        if (bytes.len() as u64) < expected {
            return Err(ReqwestClientError::IncompleteResponse {
                expected,
                received: bytes.len(),
            });
        }
    }

    Ok(bytes)
}
