//! Character-class predicates from RFC 3986 §2.
//!
//! Pure functions of one byte; the backtracking productions are built on
//! top of these.

/// Returns true for ALPHA (`a`-`z` / `A`-`Z`).
#[must_use]
pub const fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Returns true for DIGIT (`0`-`9`).
#[must_use]
pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Returns true for HEXDIG, either case.
#[must_use]
pub const fn is_hex_digit(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

/// Returns true for `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`.
#[must_use]
pub const fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

/// Returns true for
/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`.
#[must_use]
pub const fn is_sub_delims(byte: u8) -> bool {
    matches!(
        byte,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// Returns true for `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`.
#[must_use]
pub const fn is_gen_delims(byte: u8) -> bool {
    matches!(byte, b':' | b'/' | b'?' | b'#' | b'[' | b']' | b'@')
}

/// Returns true for `reserved = gen-delims / sub-delims`.
#[must_use]
pub const fn is_reserved(byte: u8) -> bool {
    is_gen_delims(byte) || is_sub_delims(byte)
}
