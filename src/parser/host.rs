//! Host productions: IP literals, IPv4, IPv6, and registered names.
//!
//! ```abnf
//! host        = IP-literal / IPv4address / reg-name
//! IP-literal  = "[" ( IPv6address / IPvFuture ) "]"
//! IPvFuture   = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )
//! IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet
//! reg-name    = *( unreserved / pct-encoded / sub-delims )
//! ```
//!
//! The three host forms are tried in the order above; `reg-name` matches
//! anything, including the empty string, so `host` never fails.

use crate::chars::{is_digit, is_hex_digit, is_sub_delims, is_unreserved};
use crate::cursor::Cursor;
use crate::parser::HostKind;
use crate::parser::rules::pct_encoded;

/// Matches `host`, returning the captured text and its kind.
///
/// IP literals capture the interior of the brackets; the other forms capture
/// the whole matched text. Infallible: `reg-name` is the universal fallback.
pub(crate) fn host<'a>(cur: &mut Cursor<'a>) -> (&'a str, HostKind) {
    if let Some(inner) = ip_literal(cur) {
        return (inner, HostKind::IpLiteral);
    }

    let start = cur.checkpoint();
    if ipv4_address(cur) {
        return (cur.extract(start, cur.checkpoint()), HostKind::Ipv4);
    }

    (reg_name(cur), HostKind::RegName)
}

/// Matches `IP-literal`, capturing the text between the brackets.
pub(crate) fn ip_literal<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    let mark = cur.checkpoint();

    if !cur.consume(b'[') {
        return None;
    }

    let inner_start = cur.checkpoint();
    if !ipv6_address(cur) && !ipv_future(cur) {
        cur.restore(mark);
        return None;
    }
    let inner_end = cur.checkpoint();

    if !cur.consume(b']') {
        cur.restore(mark);
        return None;
    }

    Some(cur.extract(inner_start, inner_end))
}

/// Matches `IPvFuture`.
pub(crate) fn ipv_future(cur: &mut Cursor<'_>) -> bool {
    let mark = cur.checkpoint();

    if !cur.consume(b'v') {
        return false;
    }

    let mut hex_digits = 0;
    while cur.peek().is_some_and(is_hex_digit) {
        cur.advance();
        hex_digits += 1;
    }
    if hex_digits < 1 {
        cur.restore(mark);
        return false;
    }

    if !cur.consume(b'.') {
        cur.restore(mark);
        return false;
    }

    let mut tail = 0;
    while cur
        .peek()
        .is_some_and(|b| is_unreserved(b) || is_sub_delims(b) || b == b':')
    {
        cur.advance();
        tail += 1;
    }
    if tail < 1 {
        cur.restore(mark);
        return false;
    }

    true
}

/// The nine `IPv6address` alternatives, ordered as in the ABNF.
///
/// Keeping them as a table makes the ordering invariant auditable; the first
/// alternative to match wins.
const IPV6_ALTERNATIVES: [fn(&mut Cursor<'_>) -> bool; 9] = [
    // 6( h16 ":" ) ls32
    |cur| {
        let mark = cur.checkpoint();
        if h16_colon_exactly(cur, 6) && ls32(cur) {
            return true;
        }
        cur.restore(mark);
        false
    },
    // "::" 5( h16 ":" ) ls32
    |cur| {
        let mark = cur.checkpoint();
        if cur.consume_literal("::") && h16_colon_exactly(cur, 5) && ls32(cur) {
            return true;
        }
        cur.restore(mark);
        false
    },
    // [ h16 ] "::" 4( h16 ":" ) ls32
    |cur| {
        let mark = cur.checkpoint();
        h16(cur);
        if cur.consume_literal("::") && h16_colon_exactly(cur, 4) && ls32(cur) {
            return true;
        }
        cur.restore(mark);
        false
    },
    // [ *1( h16 ":" ) h16 ] "::" 3( h16 ":" ) ls32
    |cur| {
        let mark = cur.checkpoint();
        leading_groups(cur, 1);
        if cur.consume_literal("::") && h16_colon_exactly(cur, 3) && ls32(cur) {
            return true;
        }
        cur.restore(mark);
        false
    },
    // [ *2( h16 ":" ) h16 ] "::" 2( h16 ":" ) ls32
    |cur| {
        let mark = cur.checkpoint();
        leading_groups(cur, 2);
        if cur.consume_literal("::") && h16_colon_exactly(cur, 2) && ls32(cur) {
            return true;
        }
        cur.restore(mark);
        false
    },
    // [ *3( h16 ":" ) h16 ] "::" h16 ":" ls32
    |cur| {
        let mark = cur.checkpoint();
        leading_groups(cur, 3);
        if cur.consume_literal("::") && h16_colon(cur) && ls32(cur) {
            return true;
        }
        cur.restore(mark);
        false
    },
    // [ *4( h16 ":" ) h16 ] "::" ls32
    |cur| {
        let mark = cur.checkpoint();
        leading_groups(cur, 4);
        if cur.consume_literal("::") && ls32(cur) {
            return true;
        }
        cur.restore(mark);
        false
    },
    // [ *5( h16 ":" ) h16 ] "::" h16
    |cur| {
        let mark = cur.checkpoint();
        leading_groups(cur, 5);
        if cur.consume_literal("::") && h16(cur) {
            return true;
        }
        cur.restore(mark);
        false
    },
    // [ *6( h16 ":" ) h16 ] "::"
    |cur| {
        let mark = cur.checkpoint();
        leading_groups(cur, 6);
        if cur.consume_literal("::") {
            return true;
        }
        cur.restore(mark);
        false
    },
];

/// Matches `IPv6address` by trying the nine alternatives in order.
pub(crate) fn ipv6_address(cur: &mut Cursor<'_>) -> bool {
    for alternative in IPV6_ALTERNATIVES {
        if alternative(cur) {
            return true;
        }
    }
    false
}

/// Matches one `h16 ":"` group.
fn h16_colon(cur: &mut Cursor<'_>) -> bool {
    let mark = cur.checkpoint();
    if h16(cur) && cur.consume(b':') {
        return true;
    }
    cur.restore(mark);
    false
}

/// Matches exactly `count` repetitions of `h16 ":"`.
fn h16_colon_exactly(cur: &mut Cursor<'_>, count: usize) -> bool {
    let mark = cur.checkpoint();
    let mut matched = 0;
    while matched < count && h16_colon(cur) {
        matched += 1;
    }
    if matched < count {
        cur.restore(mark);
        return false;
    }
    true
}

/// Matches the optional `[ *max( h16 ":" ) h16 ]` prefix of a compressed
/// IPv6 address.
///
/// Greedily consumes up to `max` `h16 ":"` groups; if the mandatory trailing
/// `h16` then fails, the greedy pass may have swallowed the final group, so
/// back off to one group fewer and retry. The backoff count floors at zero
/// rather than relying on unsigned wraparound. The whole prefix is optional;
/// callers ignore the result.
fn leading_groups(cur: &mut Cursor<'_>, max: usize) -> bool {
    let mark = cur.checkpoint();

    let mut consumed = 0;
    while consumed < max && h16_colon(cur) {
        consumed += 1;
    }
    if h16(cur) {
        return true;
    }

    cur.restore(mark);
    let reduced = consumed.saturating_sub(1);
    let mut retried = 0;
    while retried < reduced && h16_colon(cur) {
        retried += 1;
    }
    if h16(cur) {
        return true;
    }

    cur.restore(mark);
    false
}

/// Matches `h16`, one to four hexadecimal digits.
pub(crate) fn h16(cur: &mut Cursor<'_>) -> bool {
    let mark = cur.checkpoint();

    let mut count = 0;
    while count < 4 && cur.peek().is_some_and(is_hex_digit) {
        cur.advance();
        count += 1;
    }
    if count < 1 {
        cur.restore(mark);
        return false;
    }

    true
}

/// Matches `ls32 = ( h16 ":" h16 ) / IPv4address`.
pub(crate) fn ls32(cur: &mut Cursor<'_>) -> bool {
    let mark = cur.checkpoint();

    if h16(cur) && cur.consume(b':') && h16(cur) {
        return true;
    }

    cur.restore(mark);
    ipv4_address(cur)
}

/// Matches `IPv4address`, four dotted `dec-octet`s.
pub(crate) fn ipv4_address(cur: &mut Cursor<'_>) -> bool {
    let mark = cur.checkpoint();

    if dec_octet(cur)
        && cur.consume(b'.')
        && dec_octet(cur)
        && cur.consume(b'.')
        && dec_octet(cur)
        && cur.consume(b'.')
        && dec_octet(cur)
    {
        return true;
    }

    cur.restore(mark);
    false
}

/// The five `dec-octet` alternatives, longest form first.
///
/// Trying the short forms first would truncate: "250" must not match as
/// "25" with a stray "0" left for the caller.
const DEC_OCTET_ALTERNATIVES: [fn(&mut Cursor<'_>) -> bool; 5] = [
    // "25" %x30-35
    |cur| {
        let mark = cur.checkpoint();
        if cur.consume_literal("25") && cur.peek().is_some_and(|b| (b'0'..=b'5').contains(&b)) {
            cur.advance();
            return true;
        }
        cur.restore(mark);
        false
    },
    // "2" %x30-34 DIGIT
    |cur| {
        let mark = cur.checkpoint();
        if cur.consume(b'2') && cur.peek().is_some_and(|b| (b'0'..=b'4').contains(&b)) {
            cur.advance();
            if cur.peek().is_some_and(is_digit) {
                cur.advance();
                return true;
            }
        }
        cur.restore(mark);
        false
    },
    // "1" 2DIGIT
    |cur| {
        let mark = cur.checkpoint();
        if cur.consume(b'1') && cur.peek().is_some_and(is_digit) {
            cur.advance();
            if cur.peek().is_some_and(is_digit) {
                cur.advance();
                return true;
            }
        }
        cur.restore(mark);
        false
    },
    // %x31-39 DIGIT
    |cur| {
        let mark = cur.checkpoint();
        if cur.peek().is_some_and(|b| (b'1'..=b'9').contains(&b)) {
            cur.advance();
            if cur.peek().is_some_and(is_digit) {
                cur.advance();
                return true;
            }
        }
        cur.restore(mark);
        false
    },
    // DIGIT
    |cur| {
        if cur.peek().is_some_and(is_digit) {
            cur.advance();
            return true;
        }
        false
    },
];

/// Matches `dec-octet`: a decimal 0-255 with no leading zeros.
pub(crate) fn dec_octet(cur: &mut Cursor<'_>) -> bool {
    for alternative in DEC_OCTET_ALTERNATIVES {
        if alternative(cur) {
            return true;
        }
    }
    false
}

/// Matches `reg-name`, capturing the matched text.
///
/// Always succeeds, possibly on zero characters; this is the universal host
/// fallback and must be tried after the IP forms.
pub(crate) fn reg_name<'a>(cur: &mut Cursor<'a>) -> &'a str {
    let start = cur.checkpoint();

    loop {
        if cur.peek().is_some_and(|b| is_unreserved(b) || is_sub_delims(b)) {
            cur.advance();
        } else if !pct_encoded(cur) {
            break;
        }
    }

    cur.extract(start, cur.checkpoint())
}
