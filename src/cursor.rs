//! Byte cursor over an in-memory URI string.
//!
//! The grammar is octet oriented: every RFC 3986 production consumes ASCII
//! bytes, so the cursor scans `u8` positions rather than `char` boundaries.
//! Backtracking is a checkpoint/restore pair over the position; no operation
//! panics, and absence of input is always a return value.

/// A saved cursor position.
///
/// Opaque to callers; obtained from [`Cursor::checkpoint`] and only
/// meaningful for the cursor that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// A scanner over an immutable input string with a mutable read position.
///
/// # Examples
///
/// ```
/// use uri_grammar::cursor::Cursor;
///
/// let mut cur = Cursor::new("ab");
/// let mark = cur.checkpoint();
/// assert_eq!(cur.advance(), Some(b'a'));
/// assert!(cur.consume(b'b'));
/// assert!(!cur.has_next());
/// cur.restore(mark);
/// assert_eq!(cur.peek(), Some(b'a'));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Saves the current read position.
    #[must_use]
    pub const fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    /// Resets the read position to a previously saved checkpoint.
    pub const fn restore(&mut self, mark: Checkpoint) {
        self.pos = mark.0;
    }

    /// Returns true if at least one byte remains.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.pos < self.input.len()
    }

    /// Returns the byte at the current position without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Returns the byte at the current position and moves past it.
    pub fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    /// Consumes the next byte if it equals `expected`.
    pub fn consume(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            return true;
        }
        false
    }

    /// Consumes every byte of `literal` in sequence.
    ///
    /// Atomic: on any mismatch the position is restored to where this call
    /// started and false is returned.
    pub fn consume_literal(&mut self, literal: &str) -> bool {
        let mark = self.checkpoint();
        for &byte in literal.as_bytes() {
            if !self.consume(byte) {
                self.restore(mark);
                return false;
            }
        }
        true
    }

    /// Returns the substring between two checkpoints of this cursor's input.
    ///
    /// An invalid range (`end <= start`, out of bounds, or a non-boundary
    /// position) yields the empty string.
    #[must_use]
    pub fn extract(&self, start: Checkpoint, end: Checkpoint) -> &'a str {
        if end.0 <= start.0 {
            return "";
        }
        self.input.get(start.0..end.0).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_advance() {
        let cur = Cursor::new("xy");
        assert_eq!(cur.peek(), Some(b'x'));
        assert_eq!(cur.peek(), Some(b'x'));
    }

    #[test]
    fn advance_walks_the_input() {
        let mut cur = Cursor::new("xy");
        assert_eq!(cur.advance(), Some(b'x'));
        assert_eq!(cur.advance(), Some(b'y'));
        assert_eq!(cur.advance(), None);
    }

    #[test]
    fn peek_at_end_returns_none() {
        let cur = Cursor::new("");
        assert!(!cur.has_next());
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn consume_matches_only_the_expected_byte() {
        let mut cur = Cursor::new("ab");
        assert!(!cur.consume(b'b'));
        assert!(cur.consume(b'a'));
        assert!(cur.consume(b'b'));
        assert!(!cur.consume(b'b'));
    }

    #[test]
    fn consume_literal_is_atomic() {
        let mut cur = Cursor::new("abcd");
        assert!(!cur.consume_literal("abd"));
        // Position untouched by the failed attempt.
        assert_eq!(cur.peek(), Some(b'a'));
        assert!(cur.consume_literal("abc"));
        assert_eq!(cur.peek(), Some(b'd'));
    }

    #[test]
    fn restore_accepts_any_earlier_checkpoint() {
        let mut cur = Cursor::new("abc");
        let start = cur.checkpoint();
        cur.advance();
        let middle = cur.checkpoint();
        cur.advance();
        cur.restore(middle);
        assert_eq!(cur.peek(), Some(b'b'));
        cur.restore(start);
        assert_eq!(cur.peek(), Some(b'a'));
    }

    #[test]
    fn extract_returns_the_span_between_checkpoints() {
        let mut cur = Cursor::new("scheme:rest");
        let start = cur.checkpoint();
        while cur.peek() != Some(b':') {
            cur.advance();
        }
        let end = cur.checkpoint();
        assert_eq!(cur.extract(start, end), "scheme");
    }

    #[test]
    fn extract_rejects_inverted_or_empty_ranges() {
        let mut cur = Cursor::new("abc");
        let start = cur.checkpoint();
        cur.advance();
        let end = cur.checkpoint();
        assert_eq!(cur.extract(end, start), "");
        assert_eq!(cur.extract(start, start), "");
    }

    #[test]
    fn extract_rejects_non_boundary_ranges() {
        // Multibyte input never matches the grammar, but extraction over an
        // arbitrary range must still not panic.
        let mut cur = Cursor::new("é");
        let start = cur.checkpoint();
        cur.advance();
        let end = cur.checkpoint();
        assert_eq!(cur.extract(start, end), "");
    }
}
