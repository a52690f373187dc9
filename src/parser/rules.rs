//! Top-level productions: scheme, authority, hier/relative parts, and the
//! URI forms themselves.
//!
//! ```abnf
//! URI           = scheme ":" hier-part [ "?" query ] [ "#" fragment ]
//! absolute-URI  = scheme ":" hier-part [ "?" query ]
//! URI-reference = URI / relative-ref
//! relative-ref  = relative-part [ "?" query ] [ "#" fragment ]
//! hier-part     = "//" authority path-abempty / path-absolute
//!               / path-rootless / path-empty
//! relative-part = "//" authority path-abempty / path-absolute
//!               / path-noscheme / path-empty
//! scheme        = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
//! authority     = [ userinfo "@" ] host [ ":" port ]
//! userinfo      = *( unreserved / pct-encoded / sub-delims / ":" )
//! port          = *DIGIT
//! query         = *( pchar / "/" / "?" )
//! fragment      = *( pchar / "/" / "?" )
//! ```
//!
//! Every function either consumes a matching prefix or restores the cursor
//! to its entry position; productions that cannot fail return their capture
//! directly.

use crate::chars::{is_alpha, is_digit, is_hex_digit, is_sub_delims, is_unreserved};
use crate::cursor::Cursor;
use crate::parser::host::host;
use crate::parser::path::{
    path_abempty, path_absolute, path_empty, path_noscheme, path_rootless, pchar,
};
use crate::parser::{AuthorityComponents, UriComponents};

/// A matched `hier-part` or `relative-part`.
pub(crate) struct Part<'a> {
    pub(crate) authority: Option<AuthorityComponents<'a>>,
    pub(crate) path: &'a str,
}

/// Matches `pct-encoded`: `%` followed by exactly two hex digits.
pub(crate) fn pct_encoded(cur: &mut Cursor<'_>) -> bool {
    let mark = cur.checkpoint();
    if cur.consume(b'%') && consume_hex(cur) && consume_hex(cur) {
        return true;
    }
    cur.restore(mark);
    false
}

fn consume_hex(cur: &mut Cursor<'_>) -> bool {
    if cur.peek().is_some_and(is_hex_digit) {
        cur.advance();
        return true;
    }
    false
}

/// Matches `scheme`, capturing the matched text.
pub(crate) fn scheme<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    let start = cur.checkpoint();

    if !cur.peek().is_some_and(is_alpha) {
        return None;
    }
    cur.advance();

    while cur
        .peek()
        .is_some_and(|b| is_alpha(b) || is_digit(b) || matches!(b, b'+' | b'-' | b'.'))
    {
        cur.advance();
    }

    Some(cur.extract(start, cur.checkpoint()))
}

/// Matches `userinfo`, capturing the matched text. Always succeeds,
/// possibly on zero characters.
pub(crate) fn user_info<'a>(cur: &mut Cursor<'a>) -> &'a str {
    let start = cur.checkpoint();
    loop {
        if cur
            .peek()
            .is_some_and(|b| is_unreserved(b) || is_sub_delims(b) || b == b':')
        {
            cur.advance();
        } else if !pct_encoded(cur) {
            break;
        }
    }
    cur.extract(start, cur.checkpoint())
}

/// Matches `port`, capturing the matched digits. Always succeeds, possibly
/// on zero characters.
pub(crate) fn port<'a>(cur: &mut Cursor<'a>) -> &'a str {
    let start = cur.checkpoint();
    while cur.peek().is_some_and(is_digit) {
        cur.advance();
    }
    cur.extract(start, cur.checkpoint())
}

/// Matches `authority`.
///
/// The userinfo prefix is committed only when an `@` actually follows; a
/// userinfo-shaped prefix without one is handed back untouched. `host`
/// never fails, so neither does `authority`.
pub(crate) fn authority<'a>(cur: &mut Cursor<'a>) -> AuthorityComponents<'a> {
    let mark = cur.checkpoint();
    let candidate = user_info(cur);
    let user_info = if cur.consume(b'@') {
        Some(candidate)
    } else {
        cur.restore(mark);
        None
    };

    let (host, host_kind) = host(cur);

    let port = if cur.consume(b':') {
        Some(port(cur))
    } else {
        None
    };

    AuthorityComponents {
        user_info,
        host,
        host_kind,
        port,
    }
}

/// Matches `query` or `fragment` (the rules are identical), capturing the
/// matched text. Always succeeds, possibly on zero characters.
pub(crate) fn query_fragment<'a>(cur: &mut Cursor<'a>) -> &'a str {
    let start = cur.checkpoint();
    while pchar(cur) || cur.consume(b'/') || cur.consume(b'?') {}
    cur.extract(start, cur.checkpoint())
}

/// Matches `hier-part`: the authority-bearing form, then the path-only
/// alternatives. `path-empty` makes this infallible.
pub(crate) fn hier_part<'a>(cur: &mut Cursor<'a>) -> Part<'a> {
    let mark = cur.checkpoint();

    if cur.consume_literal("//") {
        let authority = authority(cur);
        let path = path_abempty(cur);
        return Part {
            authority: Some(authority),
            path,
        };
    }

    cur.restore(mark);
    if let Some(path) = path_absolute(cur) {
        return Part { authority: None, path };
    }

    if let Some(path) = path_rootless(cur) {
        return Part { authority: None, path };
    }

    Part {
        authority: None,
        path: path_empty(cur),
    }
}

/// Matches `relative-part`: like `hier-part`, but the rootless position
/// takes `path-noscheme` so the first segment cannot be mistaken for a
/// scheme.
pub(crate) fn relative_part<'a>(cur: &mut Cursor<'a>) -> Part<'a> {
    let mark = cur.checkpoint();

    if cur.consume_literal("//") {
        let authority = authority(cur);
        let path = path_abempty(cur);
        return Part {
            authority: Some(authority),
            path,
        };
    }

    cur.restore(mark);
    if let Some(path) = path_absolute(cur) {
        return Part { authority: None, path };
    }

    if let Some(path) = path_noscheme(cur) {
        return Part { authority: None, path };
    }

    Part {
        authority: None,
        path: path_empty(cur),
    }
}

/// Builds components out of a matched part plus the optional query and
/// fragment suffixes.
fn with_suffixes<'a>(
    cur: &mut Cursor<'a>,
    scheme: Option<&'a str>,
    part: Part<'a>,
    allow_fragment: bool,
) -> UriComponents<'a> {
    let query = if cur.consume(b'?') {
        Some(query_fragment(cur))
    } else {
        None
    };
    let fragment = if allow_fragment && cur.consume(b'#') {
        Some(query_fragment(cur))
    } else {
        None
    };

    let (user_info, host, host_kind, port) = match part.authority {
        Some(authority) => (
            authority.user_info,
            Some(authority.host),
            Some(authority.host_kind),
            authority.port,
        ),
        None => (None, None, None, None),
    };

    UriComponents {
        scheme,
        user_info,
        host,
        host_kind,
        port,
        path: part.path,
        query,
        fragment,
    }
}

/// Matches `URI`.
pub(crate) fn uri<'a>(cur: &mut Cursor<'a>) -> Option<UriComponents<'a>> {
    let mark = cur.checkpoint();

    let scheme = scheme(cur)?;
    if !cur.consume(b':') {
        cur.restore(mark);
        return None;
    }

    let part = hier_part(cur);
    Some(with_suffixes(cur, Some(scheme), part, true))
}

/// Matches `absolute-URI`: a `URI` with no fragment production.
pub(crate) fn absolute_uri<'a>(cur: &mut Cursor<'a>) -> Option<UriComponents<'a>> {
    let mark = cur.checkpoint();

    let scheme = scheme(cur)?;
    if !cur.consume(b':') {
        cur.restore(mark);
        return None;
    }

    let part = hier_part(cur);
    Some(with_suffixes(cur, Some(scheme), part, false))
}

/// Matches `relative-ref`. Infallible: `relative-part` always matches.
pub(crate) fn relative_ref<'a>(cur: &mut Cursor<'a>) -> UriComponents<'a> {
    let part = relative_part(cur);
    with_suffixes(cur, None, part, true)
}

/// Matches `URI-reference = URI / relative-ref`.
pub(crate) fn uri_reference<'a>(cur: &mut Cursor<'a>) -> UriComponents<'a> {
    if let Some(components) = uri(cur) {
        return components;
    }
    relative_ref(cur)
}
