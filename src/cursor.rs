//! Character cursor for traversing SQL source text.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for diagnostics.

/// A cursor for traversing source text character by character.
///
/// The cursor maintains the current byte position in the source string and
/// provides methods for advancing, peeking ahead, and bounded backtracking
/// via snapshots. Line and column counters are 1-based and treat `\n`,
/// `\r\n`, and a lone `\r` each as exactly one line terminator.
///
/// # Example
///
/// ```
/// use osql_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("SELECT 1");
/// assert_eq!(cursor.current_char(), 'S');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'E');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor position, or `'\0'` at end of
    /// input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character at the given byte offset from the current
    /// position, or `'\0'` past the end.
    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (SQL text is almost always ASCII).
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        // A byte offset may land inside a multi-byte character; treat that
        // the same as looking past the end.
        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Peeks at the character `offset` bytes ahead.
    ///
    /// For ASCII input (the common case) byte offsets and character offsets
    /// coincide, which is all the lexer's lookahead needs.
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    /// Advances the cursor past one character, updating line/column state.
    ///
    /// A `\r\n` pair counts as a single terminator: the line counter moves
    /// on the `\n`, while the `\r` is treated as an ordinary column. A lone
    /// `\r` (not followed by `\n`) terminates a line by itself.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            match b {
                b'\n' => {
                    self.line += 1;
                    self.column = 1;
                },
                b'\r' => {
                    if self.current_byte() == Some(b'\n') {
                        self.column += 1;
                    } else {
                        self.line += 1;
                        self.column = 1;
                    }
                },
                _ => self.column += 1,
            }
            return;
        }

        // Slow path for UTF-8 multi-byte characters.
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    /// Advances the cursor by the given number of characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the byte at the cursor position when it is ASCII.
    #[inline]
    fn current_byte(&self) -> Option<u8> {
        if self.position >= self.source.len() {
            return None;
        }
        let b = self.source.as_bytes()[self.position];
        (b < 128).then_some(b)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source slice from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use osql_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("FROM t");
    /// let start = cursor.position();
    /// cursor.advance_n(4);
    /// assert_eq!(cursor.slice_from(start), "FROM");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Creates a snapshot of the current cursor state.
    ///
    /// Snapshots give literal rules their bounded backtracking: a rule
    /// attempt that fails (an unterminated string, a malformed bit-string)
    /// restores the snapshot and lets the next rule in priority order try
    /// the same position.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    position: usize,
    line: u32,
    column: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("SELECT 1");
        assert_eq!(cursor.current_char(), 'S');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.current_char(), 'a');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'c');
        cursor.advance();
        assert_eq!(cursor.current_char(), '\0');
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβ1");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        cursor.advance();
        assert_eq!(cursor.current_char(), '1');
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_peek_char() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.peek_char(0), 'a');
        assert_eq!(cursor.peek_char(1), 'b');
        assert_eq!(cursor.peek_char(2), 'c');
        assert_eq!(cursor.peek_char(3), '\0');
        assert_eq!(cursor.peek_char(100), '\0');
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new("<>");
        assert!(cursor.match_char('<'));
        assert!(!cursor.match_char('<'));
        assert!(cursor.match_char('>'));
    }

    #[test]
    fn test_line_tracking_lf() {
        let mut cursor = Cursor::new("a\nb\nc");
        assert_eq!(cursor.line(), 1);
        cursor.advance_n(2);
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
        cursor.advance_n(2);
        assert_eq!(cursor.line(), 3);
    }

    #[test]
    fn test_line_tracking_crlf() {
        let mut cursor = Cursor::new("a\r\nb");
        cursor.advance(); // 'a'
        cursor.advance(); // '\r' — not a terminator yet
        assert_eq!(cursor.line(), 1);
        cursor.advance(); // '\n'
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.current_char(), 'b');
    }

    #[test]
    fn test_line_tracking_lone_cr() {
        let mut cursor = Cursor::new("a\rb");
        cursor.advance();
        cursor.advance(); // lone '\r' terminates the line
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_lone_cr_at_end_of_input() {
        let mut cursor = Cursor::new("a\r");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 2);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new("WHERE x = 1");
        let start = cursor.position();
        cursor.advance_n(5);
        assert_eq!(cursor.slice_from(start), "WHERE");
    }

    #[test]
    fn test_snapshot_restore() {
        let mut cursor = Cursor::new("'abc\ndef");
        let snapshot = cursor.snapshot();
        cursor.advance_n(7);
        assert_eq!(cursor.line(), 2);

        cursor.restore(snapshot);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.current_char(), '\'');
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert!(cursor.is_at_end());
    }
}
