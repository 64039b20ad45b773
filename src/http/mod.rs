//! HTTP transport for the feed loader.
//!
//! - [`HttpClient`] - the transport capability the loader depends on
//! - [`ReqwestHttpClient`] - adapter over `reqwest`, one tokio task per request
//!
//! Tests substitute their own `HttpClient` to control when and how each
//! request completes.

mod client;
mod reqwest_client;

pub use client::{
    BoxError, HttpClient, HttpClientError, HttpClientResult, HttpCompletion, HttpResponse,
};
pub use reqwest_client::{ReqwestClientError, ReqwestHttpClient};
