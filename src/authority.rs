//! Authority component: userinfo, host, and port.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::parser::{self, AuthorityComponents, HostKind};

/// A parsed authority from a URI.
///
/// # Structure
///
/// ```text
/// [ userinfo "@" ] host [ ":" port ]
/// ```
///
/// The host may be empty: `reg-name` matches zero characters, so `http://`
/// carries a present-but-empty host. IP-literal hosts store the address text
/// without the enclosing brackets; [`Authority::host_kind`] records which
/// form matched.
///
/// # Examples
///
/// ```
/// use uri_grammar::{Authority, HostKind};
///
/// let auth = Authority::parse("able@218.110.62.47:8080").unwrap();
/// assert_eq!(auth.user_info(), Some("able"));
/// assert_eq!(auth.host(), "218.110.62.47");
/// assert_eq!(auth.host_kind(), HostKind::Ipv4);
/// assert_eq!(auth.port(), Some("8080"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Authority {
    user_info: Option<String>,
    host: String,
    host_kind: HostKind,
    port: Option<String>,
}

impl Authority {
    /// Parses an authority from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the input does not match the `authority`
    /// production in its entirety.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::authority(input)
            .map(|components| Self::from_components(&components))
            .ok_or_else(|| ParseError::new(input))
    }

    pub(crate) fn from_components(components: &AuthorityComponents<'_>) -> Self {
        Self {
            user_info: components.user_info.map(str::to_string),
            host: components.host.to_string(),
            host_kind: components.host_kind,
            port: components.port.map(str::to_string),
        }
    }

    /// Returns the userinfo, if one preceded an `@`.
    #[must_use]
    pub fn user_info(&self) -> Option<&str> {
        self.user_info.as_deref()
    }

    /// Returns the host text; empty for an empty authority.
    ///
    /// Brackets around IP literals are not included.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns which host form matched.
    #[must_use]
    pub const fn host_kind(&self) -> HostKind {
        self.host_kind
    }

    /// Returns the port digits, if a `:` separator was present.
    ///
    /// `Some("")` when the separator carried no digits, which the grammar
    /// permits.
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(user_info) = &self.user_info {
            write!(f, "{user_info}@")?;
        }

        // Re-bracket IP literals so the rendered authority re-parses.
        match self.host_kind {
            HostKind::IpLiteral => write!(f, "[{}]", self.host)?,
            HostKind::Ipv4 | HostKind::RegName => write!(f, "{}", self.host)?,
        }

        if let Some(port) = &self.port {
            write!(f, ":{port}")?;
        }

        Ok(())
    }
}

impl FromStr for Authority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
