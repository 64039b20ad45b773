//! Feed loading: domain item, loader abstraction, decoding and the remote loader.
//!
//! # Architecture
//!
//! - `item` - the [`FeedItem`] value type
//! - `loader` - the [`FeedLoader`] trait, its result type and [`load_feed`]
//! - `mapper` - [`FeedItemsMapper`], turning a response into items
//! - `remote` - [`RemoteFeedLoader`], wiring an [`HttpClient`](crate::http::HttpClient)
//!   to the mapper
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use feedline::feed::{load_feed, RemoteFeedLoader};
//! use feedline::http::ReqwestHttpClient;
//!
//! let client = Arc::new(ReqwestHttpClient::new(reqwest::Client::new())?);
//! let loader = RemoteFeedLoader::new(client, url);
//! let items = load_feed(&loader).await;
//! ```

mod item;
mod loader;
mod mapper;
mod remote;

pub use item::FeedItem;
pub use loader::{load_feed, FeedLoader, LoadCompletion, LoadError, LoadResult};
pub use mapper::FeedItemsMapper;
pub use remote::RemoteFeedLoader;
