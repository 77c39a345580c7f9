//! Request-handling boundary for API key authentication.
//!
//! The extractor itself is silent and knows nothing about requests. This
//! module is the layer above it: it decides what each extraction outcome
//! means for a request and records that decision with `tracing`, tagged
//! with the request ID.
//!
//! # Integration Flow
//!
//! ```text
//! HTTP Request
//!   ↓
//! Framework-specific code exposes headers via HeaderLookup
//!   ↓
//! Call authenticate() or require_api_key()
//!   ↓
//! RequestAuth::Anonymous / RequestAuth::ApiKey / Error::MalformedHeader
//!   ↓
//! Application verifies the key and picks a response
//! ```
//!
//! Key verification and response status codes stay with the application.

mod middleware;

pub use middleware::{authenticate, require_api_key, RequestAuth};
