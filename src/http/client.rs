use thiserror::Error;
use url::Url;

/// Boxed error type carried across the transport boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error reported by an [`HttpClient`] implementation.
///
/// Wraps whatever the concrete client produced. The feed loader does not
/// inspect it beyond logging; every transport error is surfaced to callers
/// as a connectivity failure.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct HttpClientError {
    #[source]
    source: BoxError,
}

impl HttpClientError {
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Returns the underlying error if it is of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.source.downcast_ref::<E>()
    }
}

/// Response metadata delivered alongside the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Final URL of the response, after redirects
    pub url: Url,
    /// Numeric HTTP status code
    pub status: u16,
}

impl HttpResponse {
    pub fn new(url: Url, status: u16) -> Self {
        Self { url, status }
    }
}

/// Outcome of a single GET: the body with its response metadata, or an error.
pub type HttpClientResult = Result<(Vec<u8>, HttpResponse), HttpClientError>;

/// Callback receiving the outcome of [`HttpClient::get`].
pub type HttpCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Transport capability used by the feed loader.
///
/// An implementation performs exactly one network attempt per `get` call and
/// invokes `completion` exactly once, whether the request succeeds or fails.
/// The completion may run on a different thread than the caller, and
/// implementations must tolerate concurrent `get` calls.
///
/// Any HTTP status is a successful transport outcome; deciding whether a
/// status is acceptable is left to the caller.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url, completion: HttpCompletion);
}
