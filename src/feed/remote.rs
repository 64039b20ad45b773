use crate::feed::{FeedItemsMapper, FeedLoader, LoadCompletion, LoadError};
use crate::http::HttpClient;
use std::sync::{Arc, Weak};
use url::Url;

/// Loads feed items from a remote endpoint through an [`HttpClient`].
///
/// Construction performs no I/O; every [`load`](FeedLoader::load) issues
/// exactly one GET against the configured URL. Transport failures become
/// [`LoadError::Connectivity`]; responses are decoded by [`FeedItemsMapper`].
///
/// # Lifetime
///
/// The transport completion only holds a weak handle to this loader's
/// liveness token. If the loader is dropped before a request completes, the
/// result is discarded and the caller's callback never runs. The request
/// itself is not cancelled.
pub struct RemoteFeedLoader {
    client: Arc<dyn HttpClient>,
    url: Url,
    alive: Arc<()>,
}

impl RemoteFeedLoader {
    pub fn new(client: Arc<dyn HttpClient>, url: Url) -> Self {
        Self {
            client,
            url,
            alive: Arc::new(()),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl FeedLoader for RemoteFeedLoader {
    fn load(&self, completion: LoadCompletion) {
        let alive: Weak<()> = Arc::downgrade(&self.alive);
        let url = self.url.clone();

        tracing::debug!(url = %url, "Loading feed");
        self.client.get(
            &self.url,
            Box::new(move |result| {
                if alive.upgrade().is_none() {
                    tracing::debug!(
                        url = %url,
                        "Feed loader dropped before completion, discarding result"
                    );
                    return;
                }

                let outcome = match result {
                    Ok((data, response)) => FeedItemsMapper::map(&data, &response),
                    Err(e) => {
                        tracing::warn!(url = %url, error = %e, "Feed request failed");
                        Err(LoadError::Connectivity)
                    }
                };

                match &outcome {
                    Ok(items) => tracing::debug!(url = %url, count = items.len(), "Feed loaded"),
                    Err(e) => tracing::debug!(url = %url, error = %e, "Feed load failed"),
                }
                completion(outcome);
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpClientError, HttpCompletion, HttpResponse};
    use std::sync::Mutex;

    /// Completes every request on the calling thread with a fixed status.
    struct ImmediateClient {
        status: u16,
        body: &'static [u8],
    }

    impl HttpClient for ImmediateClient {
        fn get(&self, url: &Url, completion: HttpCompletion) {
            completion(Ok((
                self.body.to_vec(),
                HttpResponse::new(url.clone(), self.status),
            )));
        }
    }

    struct FailingClient;

    impl HttpClient for FailingClient {
        fn get(&self, _url: &Url, completion: HttpCompletion) {
            completion(Err(HttpClientError::new("connection reset")));
        }
    }

    fn capture(loader: &RemoteFeedLoader) -> Arc<Mutex<Vec<crate::feed::LoadResult>>> {
        let results = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&results);
        loader.load(Box::new(move |r| sink.lock().unwrap().push(r)));
        results
    }

    fn url() -> Url {
        Url::parse("https://example.com/feed").unwrap()
    }

    #[test]
    fn test_synchronous_completion_is_delivered() {
        let client = Arc::new(ImmediateClient {
            status: 200,
            body: br#"{"items":[]}"#,
        });
        let loader = RemoteFeedLoader::new(client, url());

        let results = capture(&loader);
        assert_eq!(*results.lock().unwrap(), vec![Ok(Vec::new())]);
    }

    #[test]
    fn test_transport_error_becomes_connectivity() {
        let loader = RemoteFeedLoader::new(Arc::new(FailingClient), url());

        let results = capture(&loader);
        assert_eq!(
            *results.lock().unwrap(),
            vec![Err(LoadError::Connectivity)]
        );
    }

    #[test]
    fn test_url_accessor() {
        let loader = RemoteFeedLoader::new(Arc::new(FailingClient), url());
        assert_eq!(loader.url(), &url());
    }
}
