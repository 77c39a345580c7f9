//! Extraction of API key credentials from HTTP `Authorization` headers.
//!
//! Given a request's headers, this crate locates the `Authorization` header,
//! checks that it has the form `ApiKey <token>`, and returns `<token>` or a
//! classified error. It does not verify keys, talk to the network, or keep
//! any state.
//!
//! # Core Types
//!
//! - [`HeaderSet`]: Case-insensitive, multi-valued header map
//! - [`HeaderLookup`]: Read access to headers (also implemented for
//!   `http::HeaderMap` with the `http` feature)
//! - [`ApiKey`]: Extracted credential, redacted in logs/output
//! - [`Error`]: `NoAuthHeader` or `MalformedHeader`
//! - [`ApiKeyExtractor`]: Header name and scheme configuration
//! - [`web`]: Request-level helpers that log outcomes with `tracing`
//!
//! # Examples
//!
//! ```
//! use apikey_auth::{extract_api_key, Error, HeaderSet};
//!
//! let mut headers = HeaderSet::new();
//! headers.insert("Authorization", "ApiKey test-api-key");
//!
//! let key = extract_api_key(&headers).expect("well-formed header");
//! assert_eq!(key.expose_secret(), "test-api-key");
//! println!("{:?}", key); // Prints: [REDACTED]
//!
//! let anonymous = HeaderSet::new();
//! assert_eq!(extract_api_key(&anonymous).unwrap_err(), Error::NoAuthHeader);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod api_key;
mod error;
mod extractor;
mod headers;
pub mod web;

pub use api_key::ApiKey;
pub use error::{Error, MalformedReason};
pub use extractor::{extract_api_key, ApiKeyExtractor, API_KEY_SCHEME, AUTHORIZATION};
pub use headers::{HeaderLookup, HeaderSet, Lookup};
