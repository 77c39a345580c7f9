use crate::api_key::ApiKey;
use crate::error::Error;
use crate::extractor::ApiKeyExtractor;
use crate::headers::HeaderLookup;

/// Authentication state of a request after header extraction.
///
/// # Examples
///
/// ```
/// use apikey_auth::web::{authenticate, RequestAuth};
/// use apikey_auth::HeaderSet;
///
/// let auth = authenticate("req-001", &HeaderSet::new()).unwrap();
/// assert!(auth.is_anonymous());
/// ```
#[derive(Debug, PartialEq, Eq)]
pub enum RequestAuth {
    /// The request carried no `Authorization` header
    Anonymous,
    /// The request carried a well-formed API key
    ApiKey(ApiKey),
}

impl RequestAuth {
    /// Returns `true` if no credentials were presented.
    pub fn is_anonymous(&self) -> bool {
        matches!(self, RequestAuth::Anonymous)
    }

    /// Returns the presented key, if any.
    pub fn api_key(&self) -> Option<&ApiKey> {
        match self {
            RequestAuth::Anonymous => None,
            RequestAuth::ApiKey(key) => Some(key),
        }
    }

    /// Consumes the state and returns the presented key, if any.
    pub fn into_api_key(self) -> Option<ApiKey> {
        match self {
            RequestAuth::Anonymous => None,
            RequestAuth::ApiKey(key) => Some(key),
        }
    }
}

/// Classifies a request for endpoints that accept anonymous callers.
///
/// A missing `Authorization` header is not an error here: it yields
/// [`RequestAuth::Anonymous`]. A malformed header is still rejected so that
/// a broken client is never silently treated as anonymous.
///
/// # Errors
///
/// Returns [`Error::MalformedHeader`] when the header is present but not of
/// the form `ApiKey <token>`.
///
/// # Examples
///
/// ```
/// use apikey_auth::web::authenticate;
/// use apikey_auth::HeaderSet;
///
/// let mut headers = HeaderSet::new();
/// headers.insert("Authorization", "ApiKey k-123");
///
/// let auth = authenticate("req-002", &headers).unwrap();
/// assert_eq!(auth.api_key().unwrap().expose_secret(), "k-123");
/// ```
pub fn authenticate<H: HeaderLookup + ?Sized>(
    request_id: &str,
    headers: &H,
) -> Result<RequestAuth, Error> {
    match ApiKeyExtractor::default().extract(headers) {
        Ok(key) => {
            tracing::debug!(request_id = %request_id, key_len = key.len(), "api key presented");
            Ok(RequestAuth::ApiKey(key))
        }
        Err(Error::NoAuthHeader) => {
            tracing::debug!(request_id = %request_id, "anonymous request");
            Ok(RequestAuth::Anonymous)
        }
        Err(err @ Error::MalformedHeader(reason)) => {
            tracing::warn!(request_id = %request_id, %reason, "rejected authorization header");
            Err(err)
        }
    }
}

/// Extracts the API key for endpoints that reject anonymous callers.
///
/// # Errors
///
/// - [`Error::NoAuthHeader`] if no credentials were presented.
/// - [`Error::MalformedHeader`] if the header has the wrong shape.
///
/// # Examples
///
/// ```
/// use apikey_auth::web::require_api_key;
/// use apikey_auth::{Error, HeaderSet};
///
/// let result = require_api_key("req-003", &HeaderSet::new());
/// assert_eq!(result.unwrap_err(), Error::NoAuthHeader);
/// ```
pub fn require_api_key<H: HeaderLookup + ?Sized>(
    request_id: &str,
    headers: &H,
) -> Result<ApiKey, Error> {
    let result = ApiKeyExtractor::default().extract(headers);
    match &result {
        Ok(key) => {
            tracing::debug!(request_id = %request_id, key_len = key.len(), "api key presented");
        }
        Err(Error::NoAuthHeader) => {
            tracing::warn!(request_id = %request_id, "missing authorization header");
        }
        Err(Error::MalformedHeader(reason)) => {
            tracing::warn!(request_id = %request_id, %reason, "rejected authorization header");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedReason;
    use crate::HeaderSet;

    fn with_auth(value: &str) -> HeaderSet {
        [("Authorization", value)].into_iter().collect()
    }

    #[test]
    fn authenticate_missing_header_is_anonymous() {
        let auth = authenticate("req-1", &HeaderSet::new()).expect("anonymous allowed");
        assert!(auth.is_anonymous());
        assert!(auth.api_key().is_none());
    }

    #[test]
    fn authenticate_valid_header_yields_key() {
        let auth = authenticate("req-2", &with_auth("ApiKey k")).expect("valid");
        assert!(!auth.is_anonymous());
        assert_eq!(auth.api_key().unwrap(), "k");
        assert_eq!(auth.into_api_key().unwrap().into_secret(), "k");
    }

    #[test]
    fn authenticate_rejects_malformed_header() {
        let result = authenticate("req-3", &with_auth("Bearer k"));
        assert_eq!(
            result.unwrap_err(),
            Error::MalformedHeader(MalformedReason::WrongScheme)
        );
    }

    #[test]
    fn require_api_key_rejects_anonymous() {
        let result = require_api_key("req-4", &HeaderSet::new());
        assert_eq!(result.unwrap_err(), Error::NoAuthHeader);
    }

    #[test]
    fn require_api_key_returns_key() {
        let key = require_api_key("req-5", &with_auth("ApiKey test-api-key")).unwrap();
        assert_eq!(key, "test-api-key");
    }

    #[test]
    fn request_auth_debug_redacts_key() {
        let auth = authenticate("req-6", &with_auth("ApiKey super-secret")).unwrap();
        let debug_output = format!("{:?}", auth);
        assert_eq!(debug_output, "ApiKey([REDACTED])");
        assert!(!debug_output.contains("super-secret"));
    }
}
