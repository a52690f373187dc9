//! Recursive-descent parser for the RFC 3986 generic URI grammar.
//!
//! One match function per ABNF production, composed by ordered alternation
//! over a backtracking [`Cursor`](crate::cursor::Cursor). Every production is
//! all-or-nothing: it either consumes a matching prefix or restores the
//! cursor to the position it was called at, so failed alternatives never
//! contaminate a later successful one. Failure is a plain return value;
//! nothing in this module panics or allocates.
//!
//! The entry points here take the raw text, run one grammar form, and demand
//! that it consume the entire input: a shorter prefix match counts as
//! failure.

pub(crate) mod host;
pub(crate) mod path;
pub(crate) mod rules;

use crate::cursor::Cursor;

/// The syntactic form a matched host took.
///
/// Present if and only if the reference carried an authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostKind {
    /// A dotted-quad `IPv4address`.
    Ipv4,
    /// A bracketed `IP-literal` (IPv6 or IPvFuture); the captured host text
    /// excludes the brackets.
    IpLiteral,
    /// The `reg-name` fallback, possibly empty.
    RegName,
}

/// The components of a matched `authority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorityComponents<'a> {
    /// Userinfo, present only when an `@` separator followed it.
    pub user_info: Option<&'a str>,
    /// The host text; may be empty (`reg-name` matches zero characters).
    pub host: &'a str,
    /// Which host form matched.
    pub host_kind: HostKind,
    /// Port digits after `:`; `Some("")` when the separator had no digits.
    pub port: Option<&'a str>,
}

/// The decomposed components of a matched URI reference.
///
/// Each field is a span of the original input. Presence is meaningful on its
/// own: `http://h` has an empty but present path, while `http:h` has no
/// authority and hence no host. `host_kind` is present exactly when `host`
/// is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriComponents<'a> {
    /// Scheme, absent for relative references.
    pub scheme: Option<&'a str>,
    /// Userinfo from the authority.
    pub user_info: Option<&'a str>,
    /// Host from the authority.
    pub host: Option<&'a str>,
    /// Host form tag, present iff `host` is.
    pub host_kind: Option<HostKind>,
    /// Port digits from the authority.
    pub port: Option<&'a str>,
    /// The path; always present on a successful parse, possibly empty.
    pub path: &'a str,
    /// Query, without the leading `?`.
    pub query: Option<&'a str>,
    /// Fragment, without the leading `#`.
    pub fragment: Option<&'a str>,
}

/// Parses `input` as a `URI-reference`, requiring full consumption.
#[must_use]
pub fn uri_reference(input: &str) -> Option<UriComponents<'_>> {
    let mut cur = Cursor::new(input);
    let components = rules::uri_reference(&mut cur);
    if cur.has_next() {
        return None;
    }
    Some(components)
}

/// Parses `input` as a `URI` (scheme required), requiring full consumption.
#[must_use]
pub fn uri(input: &str) -> Option<UriComponents<'_>> {
    let mut cur = Cursor::new(input);
    let components = rules::uri(&mut cur)?;
    if cur.has_next() {
        return None;
    }
    Some(components)
}

/// Parses `input` as an `absolute-URI` (scheme required, no fragment),
/// requiring full consumption.
#[must_use]
pub fn absolute_uri(input: &str) -> Option<UriComponents<'_>> {
    let mut cur = Cursor::new(input);
    let components = rules::absolute_uri(&mut cur)?;
    if cur.has_next() {
        return None;
    }
    Some(components)
}

/// Parses `input` as a generic `path`, requiring full consumption.
#[must_use]
pub fn path(input: &str) -> Option<&str> {
    let mut cur = Cursor::new(input);
    path::path(&mut cur)
}

/// Parses `input` as an `authority`, requiring full consumption.
#[must_use]
pub fn authority(input: &str) -> Option<AuthorityComponents<'_>> {
    let mut cur = Cursor::new(input);
    let components = rules::authority(&mut cur);
    if cur.has_next() {
        return None;
    }
    Some(components)
}
