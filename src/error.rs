//! The single error type for grammar-level failure.

use std::fmt;

/// The input does not match the requested URI production.
///
/// This is the only failure the grammar layer distinguishes: either a
/// production consumes the entire input, or the parse as a whole fails.
/// There are no finer-grained diagnostics; the grammar's structure itself is
/// the specification of validity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse.
    pub input: String,
}

impl ParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' does not match the RFC 3986 URI grammar",
            self.input
        )
    }
}

impl std::error::Error for ParseError {}
