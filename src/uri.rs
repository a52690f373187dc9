//! An owned, decomposed URI reference.

use std::fmt;
use std::str::FromStr;

use crate::authority::Authority;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::normalize;
use crate::parser::{self, rules};

/// A URI reference decomposed into its five components.
///
/// Parsing accepts both full URIs (`https://example.com/a?q#f`) and relative
/// references (`../a`, `//host/b`, `?q`). Each component is stored exactly as
/// it appeared in the input; no percent-decoding or case folding happens at
/// parse time. [`Uri::normalise_path`] canonicalises the path on demand.
///
/// # Examples
///
/// ```
/// use uri_grammar::Uri;
///
/// let uri = Uri::parse("https://able@218.110.62.47/explore?q=keyword#section1").unwrap();
/// assert_eq!(uri.scheme(), Some("https"));
/// assert_eq!(uri.authority().unwrap().host(), "218.110.62.47");
/// assert_eq!(uri.path(), "/explore");
/// assert_eq!(uri.query(), Some("q=keyword"));
/// assert_eq!(uri.fragment(), Some("section1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uri {
    scheme: Option<String>,
    authority: Option<Authority>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Uri {
    /// Parses a `URI-reference`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when no form of the grammar matches the entire
    /// input.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let components = parser::uri_reference(input).ok_or_else(|| ParseError::new(input))?;

        let authority = components.host.map(|host| {
            Authority::from_components(&parser::AuthorityComponents {
                user_info: components.user_info,
                host,
                // host and host_kind are set together by the parser
                host_kind: components.host_kind.unwrap_or(parser::HostKind::RegName),
                port: components.port,
            })
        });

        Ok(Self {
            scheme: components.scheme.map(str::to_string),
            authority,
            path: components.path.to_string(),
            query: components.query.map(str::to_string),
            fragment: components.fragment.map(str::to_string),
        })
    }

    /// Assembles a URI from individual components, validating each against
    /// its own grammar production.
    ///
    /// The path is required but may be empty. Passing `Some("")` for a
    /// component keeps it present but empty, the way `http://h?#` parses.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] naming the first component that fails its
    /// production.
    pub fn from_parts(
        path: &str,
        scheme: Option<&str>,
        authority: Option<&str>,
        query: Option<&str>,
        fragment: Option<&str>,
    ) -> Result<Self, ParseError> {
        let scheme = match scheme {
            Some(text) => {
                if !matches_scheme(text) {
                    return Err(ParseError::new(text));
                }
                Some(text.to_string())
            }
            None => None,
        };

        let authority = match authority {
            Some(text) => Some(Authority::parse(text)?),
            None => None,
        };

        if parser::path(path).is_none() {
            return Err(ParseError::new(path));
        }

        let query = match query {
            Some(text) => {
                if !matches_query_fragment(text) {
                    return Err(ParseError::new(text));
                }
                Some(text.to_string())
            }
            None => None,
        };

        let fragment = match fragment {
            Some(text) => {
                if !matches_query_fragment(text) {
                    return Err(ParseError::new(text));
                }
                Some(text.to_string())
            }
            None => None,
        };

        Ok(Self {
            scheme,
            authority,
            path: path.to_string(),
            query,
            fragment,
        })
    }

    /// Returns the scheme, if the reference carried one.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the authority, if a `//` introduced one.
    #[must_use]
    pub const fn authority(&self) -> Option<&Authority> {
        self.authority.as_ref()
    }

    /// Returns the path exactly as it appeared; possibly empty.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query without its leading `?`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the fragment without its leading `#`.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Rewrites the path in canonical form: percent-encoding normalised and
    /// dot-segments removed.
    ///
    /// Applying this twice changes nothing.
    pub fn normalise_path(&mut self) {
        self.path = normalize::normalise(&self.path);
    }
}

fn matches_scheme(input: &str) -> bool {
    let mut cur = Cursor::new(input);
    rules::scheme(&mut cur).is_some() && !cur.has_next()
}

fn matches_query_fragment(input: &str) -> bool {
    let mut cur = Cursor::new(input);
    rules::query_fragment(&mut cur);
    !cur.has_next()
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        if let Some(authority) = &self.authority {
            write!(f, "//{authority}")?;
        }
        write!(f, "{}", self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
