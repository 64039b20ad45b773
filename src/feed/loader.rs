use crate::feed::FeedItem;
use thiserror::Error;
use tokio::sync::oneshot;

/// Failure classes surfaced to callers of [`FeedLoader::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request never produced a response (DNS, connection, TLS, etc.)
    #[error("Could not reach the feed server")]
    Connectivity,
    /// A response arrived but was unusable: non-200 status or undecodable body
    #[error("Feed response was invalid")]
    InvalidData,
}

/// Outcome of one load: the full ordered item list, or one classified error.
pub type LoadResult = Result<Vec<FeedItem>, LoadError>;

/// Callback receiving the outcome of [`FeedLoader::load`].
pub type LoadCompletion = Box<dyn FnOnce(LoadResult) + Send + 'static>;

/// Source of feed items.
///
/// Each call to `load` is independent and delivers at most one result.
/// Delivery may happen on another thread, after `load` has returned.
pub trait FeedLoader: Send + Sync {
    fn load(&self, completion: LoadCompletion);
}

/// Awaits a single load from any [`FeedLoader`].
///
/// Returns `None` when the loader dropped the completion without delivering,
/// which happens when it was destroyed before its transport finished.
///
/// # Example
///
/// ```ignore
/// let loader = RemoteFeedLoader::new(client, url);
/// match load_feed(&loader).await {
///     Some(Ok(items)) => println!("{} items", items.len()),
///     Some(Err(e)) => eprintln!("{e}"),
///     None => {}
/// }
/// ```
pub async fn load_feed<L>(loader: &L) -> Option<LoadResult>
where
    L: FeedLoader + ?Sized,
{
    let (tx, rx) = oneshot::channel();
    loader.load(Box::new(move |result| {
        // Receiver gone means the caller stopped waiting
        let _ = tx.send(result);
    }));
    rx.await.ok()
}
