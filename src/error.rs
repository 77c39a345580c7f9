use std::fmt;

/// Errors returned when an API key cannot be extracted from request headers.
///
/// The two variants separate an anonymous request (no credentials at all)
/// from a request that carried credentials in the wrong shape. Callers should
/// branch on the variant, never on the message text.
///
/// # Examples
///
/// ```
/// use apikey_auth::{extract_api_key, Error, HeaderSet};
///
/// let headers = HeaderSet::new();
/// assert_eq!(extract_api_key(&headers).unwrap_err(), Error::NoAuthHeader);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The `Authorization` header is absent or empty
    NoAuthHeader,
    /// The `Authorization` header does not have the `ApiKey <token>` shape
    MalformedHeader(MalformedReason),
}

impl Error {
    /// Returns `true` for [`Error::NoAuthHeader`].
    pub fn is_no_auth_header(&self) -> bool {
        matches!(self, Error::NoAuthHeader)
    }

    /// Returns `true` for any [`Error::MalformedHeader`].
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedHeader(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoAuthHeader => write!(f, "no authorization header included"),
            Error::MalformedHeader(_) => write!(f, "malformed authorization header"),
        }
    }
}

impl std::error::Error for Error {}

impl From<MalformedReason> for Error {
    fn from(reason: MalformedReason) -> Self {
        Error::MalformedHeader(reason)
    }
}

/// Why a present `Authorization` header was rejected.
///
/// The reason never contains any part of the header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The scheme word is not the expected one
    WrongScheme,
    /// The scheme word is not followed by a token
    MissingToken,
    /// The header value is not readable as text
    NotText,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongScheme => write!(f, "wrong scheme"),
            Self::MissingToken => write!(f, "missing token"),
            Self::NotText => write!(f, "value is not text"),
        }
    }
}
