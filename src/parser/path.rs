//! Segment and path productions.
//!
//! ```abnf
//! pchar         = unreserved / pct-encoded / sub-delims / ":" / "@"
//! segment       = *pchar
//! segment-nz    = 1*pchar
//! segment-nz-nc = 1*( unreserved / pct-encoded / sub-delims / "@" )
//! path-abempty  = *( "/" segment )
//! path-absolute = "/" [ segment-nz *( "/" segment ) ]
//! path-noscheme = segment-nz-nc *( "/" segment )
//! path-rootless = segment-nz *( "/" segment )
//! path-empty    = 0<pchar>
//! ```
//!
//! `segment-nz-nc` is the no-colon form: a relative reference without a
//! scheme must not start with a segment that could be read as `scheme ":"`.

use crate::chars::{is_sub_delims, is_unreserved};
use crate::cursor::Cursor;
use crate::parser::rules::pct_encoded;

/// Matches one `pchar`.
pub(crate) fn pchar(cur: &mut Cursor<'_>) -> bool {
    if cur.peek().is_some_and(|b| is_unreserved(b) || is_sub_delims(b)) {
        cur.advance();
        return true;
    }
    pct_encoded(cur) || cur.consume(b':') || cur.consume(b'@')
}

/// Matches `segment`. Always succeeds, possibly on zero characters.
pub(crate) fn segment(cur: &mut Cursor<'_>) {
    while pchar(cur) {}
}

/// Matches `segment-nz`: at least one `pchar`.
pub(crate) fn segment_nz(cur: &mut Cursor<'_>) -> bool {
    if !pchar(cur) {
        return false;
    }
    segment(cur);
    true
}

/// Matches `segment-nz-nc`: at least one `pchar` minus `:`.
pub(crate) fn segment_nz_nc(cur: &mut Cursor<'_>) -> bool {
    let mut count = 0;
    loop {
        if cur.peek().is_some_and(|b| is_unreserved(b) || is_sub_delims(b)) {
            cur.advance();
        } else if !pct_encoded(cur) && !cur.consume(b'@') {
            break;
        }
        count += 1;
    }
    count >= 1
}

/// Matches `path-abempty`, capturing the matched text. Always succeeds.
pub(crate) fn path_abempty<'a>(cur: &mut Cursor<'a>) -> &'a str {
    let start = cur.checkpoint();
    while cur.consume(b'/') {
        segment(cur);
    }
    cur.extract(start, cur.checkpoint())
}

/// Matches `path-absolute`, capturing the matched text.
pub(crate) fn path_absolute<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    let start = cur.checkpoint();
    if !cur.consume(b'/') {
        return None;
    }
    if segment_nz(cur) {
        path_abempty(cur);
    }
    Some(cur.extract(start, cur.checkpoint()))
}

/// Matches `path-noscheme`, capturing the matched text.
pub(crate) fn path_noscheme<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    let start = cur.checkpoint();
    if !segment_nz_nc(cur) {
        return None;
    }
    path_abempty(cur);
    Some(cur.extract(start, cur.checkpoint()))
}

/// Matches `path-rootless`, capturing the matched text.
pub(crate) fn path_rootless<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    let start = cur.checkpoint();
    if !segment_nz(cur) {
        return None;
    }
    path_abempty(cur);
    Some(cur.extract(start, cur.checkpoint()))
}

/// Matches `path-empty`: zero characters, unconditionally.
pub(crate) fn path_empty<'a>(_cur: &mut Cursor<'a>) -> &'a str {
    ""
}

/// Matches the generic `path` rule: the first variant that consumes the
/// whole remaining input wins, tried absolute / noscheme / rootless /
/// abempty in that order.
///
/// `path-empty` is folded into `path-abempty`, which also matches zero
/// characters.
pub(crate) fn path<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    let mark = cur.checkpoint();

    if let Some(span) = path_absolute(cur) {
        if !cur.has_next() {
            return Some(span);
        }
        cur.restore(mark);
    }

    if let Some(span) = path_noscheme(cur) {
        if !cur.has_next() {
            return Some(span);
        }
        cur.restore(mark);
    }

    if let Some(span) = path_rootless(cur) {
        if !cur.has_next() {
            return Some(span);
        }
        cur.restore(mark);
    }

    let span = path_abempty(cur);
    if !cur.has_next() {
        return Some(span);
    }

    cur.restore(mark);
    None
}
