//! Utility functions shared by the library and the binary.
//!
//! - **URL validation**: turns user-supplied strings into absolute http(s) URLs
//!
//! # Examples
//!
//! ```
//! use feedline::util::validate_url;
//!
//! let url = validate_url("https://example.com/feed").unwrap();
//! assert_eq!(url.scheme(), "https");
//! ```

mod url_validator;

pub use url_validator::{validate_url, UrlValidationError};
