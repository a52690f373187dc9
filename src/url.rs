//! A URL view over a parsed URI, with query-string decomposition.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::authority::Authority;
use crate::error::ParseError;
use crate::uri::Uri;

/// A URI viewed as a locator, exposing the query string as key/value pairs.
///
/// `Url` adds no validation beyond [`Uri`]; any URI reference is a valid
/// `Url`. The raw query stays available through [`Url::raw_query`] while
/// [`Url::query_pairs`] splits it on `&` and `=`.
///
/// # Examples
///
/// ```
/// use uri_grammar::Url;
///
/// let url = Url::parse("http://bath.example.com/?beginner=brass&art=bone").unwrap();
/// let pairs = url.query_pairs();
/// assert_eq!(pairs.get("beginner").map(String::as_str), Some("brass"));
/// assert_eq!(pairs.get("art").map(String::as_str), Some("bone"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Url {
    uri: Uri,
}

impl Url {
    /// Parses a URL.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the input is not a URI reference.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Uri::parse(input).map(|uri| Self { uri })
    }

    /// Assembles a URL from individual components.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] naming the first component that fails its
    /// grammar production.
    pub fn from_parts(
        path: &str,
        scheme: Option<&str>,
        authority: Option<&str>,
        query: Option<&str>,
        fragment: Option<&str>,
    ) -> Result<Self, ParseError> {
        Uri::from_parts(path, scheme, authority, query, fragment).map(|uri| Self { uri })
    }

    /// Returns the scheme, if present.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.uri.scheme()
    }

    /// Returns the authority, if present.
    #[must_use]
    pub const fn authority(&self) -> Option<&Authority> {
        self.uri.authority()
    }

    /// Returns the path.
    #[must_use]
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Returns the query string exactly as parsed, without the leading `?`.
    #[must_use]
    pub fn raw_query(&self) -> Option<&str> {
        self.uri.query()
    }

    /// Returns the fragment, if present.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.uri.fragment()
    }

    /// Splits the query into key/value pairs.
    ///
    /// Pairs are separated by `&` and split on the first `=`. A pair with no
    /// `=` keeps its text as a key with an empty value; a pair that is
    /// entirely empty is skipped. Later duplicates of a key overwrite
    /// earlier ones.
    #[must_use]
    pub fn query_pairs(&self) -> BTreeMap<String, String> {
        let mut pairs = BTreeMap::new();
        let Some(query) = self.uri.query() else {
            return pairs;
        };

        for pair in query.split('&') {
            match pair.split_once('=') {
                Some((key, value)) => {
                    pairs.insert(key.to_string(), value.to_string());
                }
                None => {
                    if !pair.is_empty() {
                        pairs.insert(pair.to_string(), String::new());
                    }
                }
            }
        }
        pairs
    }

    /// Rewrites the path in canonical form.
    pub fn normalise_path(&mut self) {
        self.uri.normalise_path();
    }

    /// Consumes the view, returning the underlying [`Uri`].
    #[must_use]
    pub fn into_uri(self) -> Uri {
        self.uri
    }
}

impl From<Uri> for Url {
    fn from(uri: Uri) -> Self {
        Self { uri }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.uri.fmt(f)
    }
}

impl FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
