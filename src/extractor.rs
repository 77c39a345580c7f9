use crate::api_key::ApiKey;
use crate::error::{Error, MalformedReason};
use crate::headers::{HeaderLookup, Lookup};

/// Default header carrying the credential.
pub const AUTHORIZATION: &str = "Authorization";

/// Default scheme word preceding the credential.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extracts the API key from the `Authorization` header.
///
/// Expects a first header value of the form `ApiKey <token>` and returns
/// `<token>` verbatim. This is [`ApiKeyExtractor::extract`] with the default
/// configuration.
///
/// # Errors
///
/// - [`Error::NoAuthHeader`] if the header is absent, has no values, or its
///   first value is empty.
/// - [`Error::MalformedHeader`] if the scheme word is not exactly `ApiKey`
///   or no token follows it.
///
/// # Examples
///
/// ```
/// use apikey_auth::{extract_api_key, Error, HeaderSet};
///
/// let mut headers = HeaderSet::new();
/// headers.insert("Authorization", "ApiKey test-api-key");
/// let key = extract_api_key(&headers).unwrap();
/// assert_eq!(key.expose_secret(), "test-api-key");
///
/// let mut headers = HeaderSet::new();
/// headers.insert("Authorization", "Bearer test-api-key");
/// assert!(extract_api_key(&headers).unwrap_err().is_malformed());
/// ```
pub fn extract_api_key<H: HeaderLookup + ?Sized>(headers: &H) -> Result<ApiKey, Error> {
    ApiKeyExtractor::default().extract(headers)
}

/// Configurable API key extractor.
///
/// Holds the header name and scheme word to look for. The header name is
/// matched case-insensitively, the scheme word case-sensitively.
///
/// # Examples
///
/// ```
/// use apikey_auth::{ApiKeyExtractor, HeaderSet};
///
/// let extractor = ApiKeyExtractor::new()
///     .with_header("X-Service-Auth")
///     .with_scheme("Token");
///
/// let mut headers = HeaderSet::new();
/// headers.insert("x-service-auth", "Token abc123");
///
/// let key = extractor.extract(&headers).unwrap();
/// assert_eq!(key.expose_secret(), "abc123");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiKeyExtractor {
    header: &'static str,
    scheme: &'static str,
}

impl ApiKeyExtractor {
    /// Creates an extractor for `Authorization: ApiKey <token>`.
    pub const fn new() -> Self {
        Self {
            header: AUTHORIZATION,
            scheme: API_KEY_SCHEME,
        }
    }

    /// Sets the scheme word that must precede the credential.
    pub const fn with_scheme(mut self, scheme: &'static str) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the header the credential is read from.
    pub const fn with_header(mut self, header: &'static str) -> Self {
        self.header = header;
        self
    }

    /// Returns the configured scheme word.
    pub fn scheme(&self) -> &'static str {
        self.scheme
    }

    /// Returns the configured header name.
    pub fn header(&self) -> &'static str {
        self.header
    }

    /// Extracts the credential from `headers`.
    ///
    /// Only the first value of the header is considered. The value is split
    /// at its first whitespace character; everything after that character
    /// is the credential, taken without trimming or decoding.
    ///
    /// # Errors
    ///
    /// Same as [`extract_api_key`], relative to the configured header and
    /// scheme.
    pub fn extract<H: HeaderLookup + ?Sized>(&self, headers: &H) -> Result<ApiKey, Error> {
        let value = match headers.lookup_first(self.header) {
            Lookup::Absent | Lookup::Text("") => return Err(Error::NoAuthHeader),
            Lookup::Unreadable => return Err(MalformedReason::NotText.into()),
            Lookup::Text(value) => value,
        };

        let (scheme, token) = split_scheme(value);
        if scheme != self.scheme {
            return Err(MalformedReason::WrongScheme.into());
        }
        match token {
            Some(token) if !token.is_empty() => Ok(ApiKey::new(token)),
            _ => Err(MalformedReason::MissingToken.into()),
        }
    }
}

impl Default for ApiKeyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits at the first whitespace character, which belongs to neither side.
fn split_scheme(value: &str) -> (&str, Option<&str>) {
    match value.find(char::is_whitespace) {
        Some(idx) => {
            let sep_len = value[idx..].chars().next().map_or(1, char::len_utf8);
            (&value[..idx], Some(&value[idx + sep_len..]))
        }
        None => (value, None),
    }
}
