//! # feedline
//!
//! Loads a remote image feed over HTTP and decodes it into typed items.
//!
//! ```text
//! caller → RemoteFeedLoader → HttpClient::get → FeedItemsMapper → callback
//! ```
//!
//! - [`http`]: the transport trait and its `reqwest` adapter
//! - [`feed`]: feed items, the loader trait, response decoding, the remote loader
//! - [`config`]: optional TOML configuration for the binary
//! - [`util`]: URL validation

pub mod config;
pub mod feed;
pub mod http;
pub mod util;
