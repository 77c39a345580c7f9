//! Case-insensitive, multi-valued HTTP header storage.

use std::collections::HashMap;

/// Outcome of looking up the first value of a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// No such header, or the header has no values
    Absent,
    /// The first value, as text
    Text(&'a str),
    /// The header is present but its first value is not valid text
    Unreadable,
}

/// Read access to request headers.
///
/// This trait is the boundary between the extractor and whatever type the
/// caller stores headers in. Implementations MUST match header names
/// case-insensitively and return the first value in received order.
///
/// # Examples
///
/// ```
/// use apikey_auth::{HeaderLookup, HeaderSet, Lookup};
///
/// let mut headers = HeaderSet::new();
/// headers.insert("X-Trace", "abc");
///
/// assert_eq!(headers.lookup_first("x-trace"), Lookup::Text("abc"));
/// assert_eq!(headers.lookup_first("missing"), Lookup::Absent);
/// ```
pub trait HeaderLookup {
    /// Returns the first value of the header called `name`.
    fn lookup_first(&self, name: &str) -> Lookup<'_>;
}

impl<T: HeaderLookup + ?Sized> HeaderLookup for &T {
    fn lookup_first(&self, name: &str) -> Lookup<'_> {
        (**self).lookup_first(name)
    }
}

/// A case-insensitive mapping from header name to an ordered list of values.
///
/// Names are normalized to lowercase on insertion and lookup. Values keep
/// the order they were inserted in and are stored verbatim.
///
/// # Examples
///
/// ```
/// use apikey_auth::HeaderSet;
///
/// let headers: HeaderSet = [
///     ("Authorization", "ApiKey first"),
///     ("AUTHORIZATION", "ApiKey second"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(headers.get("authorization"), Some("ApiKey first"));
/// assert_eq!(headers.get_all("Authorization").len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: HashMap<String, Vec<String>>,
}

impl HeaderSet {
    /// Creates an empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value to the header called `name`.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .entry(normalize(name.as_ref()))
            .or_default()
            .push(value.into());
    }

    /// Replaces all values of the header called `name`.
    ///
    /// An empty `values` keeps the header name present with no values.
    pub fn set_all<I, V>(&mut self, name: impl AsRef<str>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.entries.insert(
            normalize(name.as_ref()),
            values.into_iter().map(Into::into).collect(),
        );
    }

    /// Removes the header called `name`, returning its values.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.entries.remove(&normalize(name))
    }

    /// Returns the first value of the header called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&normalize(name))
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value of the header called `name`, in insertion order.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries
            .get(&normalize(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns `true` if the header name is present, even with no values.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize(name))
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no header names are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HeaderLookup for HeaderSet {
    fn lookup_first(&self, name: &str) -> Lookup<'_> {
        match self.get(name) {
            Some(value) => Lookup::Text(value),
            None => Lookup::Absent,
        }
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for HeaderSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = HeaderSet::new();
        headers.extend(iter);
        headers
    }
}

impl<K: AsRef<str>, V: Into<String>> Extend<(K, V)> for HeaderSet {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

#[cfg(feature = "http")]
#[cfg_attr(docsrs, doc(cfg(feature = "http")))]
impl HeaderLookup for http::HeaderMap {
    fn lookup_first(&self, name: &str) -> Lookup<'_> {
        match self.get(name) {
            None => Lookup::Absent,
            Some(value) => match value.to_str() {
                Ok(text) => Lookup::Text(text),
                Err(_) => Lookup::Unreadable,
            },
        }
    }
}

fn normalize(name: &str) -> String {
    name.to_ascii_lowercase()
}
