//! Grammar-level URI parsing and path normalisation per RFC 3986.
//!
//! This crate answers one question exactly: does a string match the generic
//! URI grammar, and if so, what are its components? Parsing is a
//! recursive-descent walk of the ABNF with ordered alternation and full
//! backtracking; there is no scheme-specific interpretation, no IDNA, and no
//! resolution against a base.
//!
//! # Quick start
//!
//! ```
//! use uri_grammar::{HostKind, Uri, Url};
//!
//! let uri = Uri::parse("https://able@218.110.62.47/explore?q=keyword#section1")?;
//! assert_eq!(uri.scheme(), Some("https"));
//!
//! let auth = uri.authority().unwrap();
//! assert_eq!(auth.host(), "218.110.62.47");
//! assert_eq!(auth.host_kind(), HostKind::Ipv4);
//!
//! let url = Url::parse("http://bath.example.com/?beginner=brass&art=bone")?;
//! assert_eq!(url.query_pairs()["art"], "bone");
//! # Ok::<(), uri_grammar::ParseError>(())
//! ```
//!
//! # Path normalisation
//!
//! [`normalize::normalise`] canonicalises percent-encoding and removes
//! `.` and `..` segments without touching the filesystem:
//!
//! ```
//! use uri_grammar::normalize::normalise;
//!
//! assert_eq!(normalise("/a/./b/../c/%7e"), "/a/c/~");
//! assert_eq!(normalise(&normalise("/a/%2e%2e/b")), normalise("/a/%2e%2e/b"));
//! ```
//!
//! # Layers
//!
//! The grammar layer ([`parser`], [`cursor`], [`chars`]) works on borrowed
//! spans and never allocates. The holder layer ([`Uri`], [`Url`],
//! [`Authority`]) owns its components and renders back to text via
//! `Display`. [`normalize`] stands alone and accepts any path text, matched
//! or not.
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Uri`], [`Url`], [`Authority`],
//!   and [`HostKind`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod chars;
pub mod cursor;
pub mod normalize;
pub mod parser;

mod authority;
mod error;
mod uri;
mod url;

pub use authority::Authority;
pub use error::ParseError;
pub use parser::{AuthorityComponents, HostKind, UriComponents};
pub use uri::Uri;
pub use url::Url;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::authority::Authority;
    pub use crate::error::ParseError;
    pub use crate::normalize::normalise;
    pub use crate::parser::HostKind;
    pub use crate::uri::Uri;
    pub use crate::url::Url;
}
