use std::fmt;

/// An API key credential taken from an `Authorization` header.
///
/// `ApiKey` keeps the credential out of logs and error output. The wrapped
/// value can only be read through the explicit
/// [`expose_secret`](Self::expose_secret) method.
///
/// # Security Properties
///
/// - Does NOT implement `Deref`, `AsRef`, `Borrow`, `Clone`, or `Copy`
/// - Debug and Display output is always `[REDACTED]`
/// - Never empty when produced by the extractor
///
/// # Examples
///
/// ```
/// use apikey_auth::{extract_api_key, HeaderSet};
///
/// let mut headers = HeaderSet::new();
/// headers.insert("Authorization", "ApiKey sk-1234567890");
///
/// let key = extract_api_key(&headers).expect("well-formed header");
/// assert_eq!(format!("{:?}", key), "[REDACTED]");
/// assert_eq!(key.expose_secret(), "sk-1234567890");
/// ```
// Do NOT derive Clone, Copy, or Default: keys must not be duplicated carelessly.
#[derive(PartialEq, Eq)]
pub struct ApiKey {
    // Must stay private; access goes through expose_secret().
    inner: String,
}

impl ApiKey {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Explicitly exposes the credential.
    ///
    /// # Security Warning
    ///
    /// The name is deliberately verbose. Do not log or display the result.
    pub fn expose_secret(&self) -> &str {
        &self.inner
    }

    /// Consumes the wrapper and returns the raw credential.
    pub fn into_secret(self) -> String {
        self.inner
    }

    /// Length of the credential in bytes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the credential is empty. Extracted keys never are.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl PartialEq<str> for ApiKey {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for ApiKey {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl fmt::Debug for ApiKey {
    /// Always `[REDACTED]`, in every build profile.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for ApiKey {
    /// Always `[REDACTED]`, in every build profile.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_redacts_debug() {
        let key = ApiKey::new("hunter2");
        let debug_output = format!("{:?}", key);

        assert_eq!(debug_output, "[REDACTED]");
        assert!(!debug_output.contains("hunter2"));
        assert!(!debug_output.contains("ApiKey")); // No type leak
    }

    #[test]
    fn api_key_redacts_display() {
        let key = ApiKey::new("sk-1234567890");
        let display_output = format!("{}", key);

        assert_eq!(display_output, "[REDACTED]");
        assert!(!display_output.contains("sk-"));
    }

    #[test]
    fn api_key_redacted_inside_result() {
        let result: Result<ApiKey, ()> = Ok(ApiKey::new("sk-live-abc"));
        assert_eq!(format!("{:?}", result), "Ok([REDACTED])");
    }

    #[test]
    fn api_key_exposes_when_explicit() {
        let key = ApiKey::new("test-api-key");
        assert_eq!(key.expose_secret(), "test-api-key");
        assert_eq!(key.len(), 12);
        assert!(!key.is_empty());
        assert_eq!(key.into_secret(), "test-api-key".to_string());
    }

    #[test]
    fn api_key_compares_with_str() {
        let key = ApiKey::new("abc");
        assert_eq!(key, "abc");
        assert!(key == *"abc");
        assert_ne!(key, "abd");
    }
}
