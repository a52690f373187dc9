//! Path canonicalization: percent-encoding normalization and dot-segment
//! removal (RFC 3986 §5.2.4 / §6.2.2).
//!
//! Operates on already-extracted path text, independent of the grammar
//! parser. There is no error channel: every input, however malformed, yields
//! a best-effort canonical output. A `%` not followed by two hex digits is
//! treated as an ordinary character in need of escaping.

use crate::chars::{is_hex_digit, is_reserved, is_unreserved};

const SEPARATOR: char = '/';
const CURRENT_SEGMENT: &str = ".";
const PARENT_SEGMENT: &str = "..";

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Canonicalizes the percent-encoding of `path`.
///
/// Well-formed `%XX` triples are decoded when the octet is unreserved and
/// re-emitted with uppercase hex digits otherwise. Bare characters outside
/// the unreserved and reserved sets are percent-encoded.
#[must_use]
pub fn code_if_necessary(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut out = String::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() && is_hex_digit(bytes[i + 1]) && is_hex_digit(bytes[i + 2]) {
            let octet = hex_value(bytes[i + 1]) * 16 + hex_value(bytes[i + 2]);
            if is_unreserved(octet) {
                out.push(octet as char);
            } else {
                push_pct(&mut out, octet);
            }
            i += 3;
        } else {
            let byte = bytes[i];
            if is_unreserved(byte) || is_reserved(byte) {
                out.push(byte as char);
            } else {
                push_pct(&mut out, byte);
            }
            i += 1;
        }
    }

    out
}

/// Splits `path` into its hierarchical segments.
///
/// Lossless: each `/` ends the preceding segment, a leading separator yields
/// a leading empty segment, a trailing separator a trailing empty one, and
/// rejoining with `/` reproduces the input. The empty path yields a single
/// empty segment rather than zero segments.
#[must_use]
pub fn split_segments(path: &str) -> Vec<String> {
    path.split(SEPARATOR).map(str::to_string).collect()
}

/// Removes `.` and `..` segments with a stack.
///
/// `.` is dropped; `..` pops the latest segment when one exists and is
/// otherwise absorbed (`..` at the root is not an error). When a non-empty
/// input drains the stack completely, a single empty segment is kept so the
/// result still renders as a path.
#[must_use]
pub fn remove_dot_segments<S: AsRef<str>>(segments: &[S]) -> Vec<String> {
    let mut stack: Vec<String> = Vec::new();

    for segment in segments {
        match segment.as_ref() {
            CURRENT_SEGMENT => {}
            PARENT_SEGMENT => {
                stack.pop();
            }
            other => stack.push(other.to_string()),
        }
    }

    if !segments.is_empty() && stack.is_empty() {
        stack.push(String::new());
    }

    stack
}

/// Produces the canonical form of `path`.
///
/// Composition of [`code_if_necessary`], [`split_segments`], and
/// [`remove_dot_segments`], rejoined on `/`. Idempotent.
#[must_use]
pub fn normalise(path: &str) -> String {
    let coded = code_if_necessary(path);
    remove_dot_segments(&split_segments(&coded)).join("/")
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

fn push_pct(out: &mut String, byte: u8) {
    out.push('%');
    out.push(HEX_UPPER[usize::from(byte >> 4)] as char);
    out.push(HEX_UPPER[usize::from(byte & 0x0f)] as char);
}
