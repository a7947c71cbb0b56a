//! Numeric literal lexing.
//!
//! Four shapes: decimal integers, hexadecimal literals (`0x1F` and
//! `X'1F'`), real literals with fraction and/or exponent, and bit-string
//! literals (`B'0101'`). The scanner is greedy: a fractional or exponent
//! suffix is always folded into one real-literal token, never split.

use crate::token::{Channel, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal starting at a digit or a leading `.`.
    pub(super) fn lex_number(&mut self) -> Token<'a> {
        // Leading decimal point: `.5`, `.5e3`.
        if self.cursor.current_char() == '.' {
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
            if self.exponent_follows(0) {
                self.consume_exponent();
            }
            return self.make_token(TokenKind::RealLiteral, Channel::Default);
        }

        // `0x` prefix needs at least one hex digit; otherwise the zero is
        // an ordinary decimal literal and the `x` re-lexes as an identifier.
        if self.cursor.current_char() == '0'
            && matches!(self.cursor.peek_char(1), 'x' | 'X')
            && self.cursor.peek_char(2).is_ascii_hexdigit()
        {
            self.cursor.advance_n(2);
            while self.cursor.current_char().is_ascii_hexdigit() {
                self.cursor.advance();
            }
            return self.make_token(TokenKind::HexadecimalLiteral, Channel::Default);
        }

        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let mut real = false;

        if self.cursor.current_char() == '.' {
            if self.cursor.peek_char(1).is_ascii_digit() {
                self.cursor.advance();
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }
                real = true;
            } else if self.exponent_follows(1) {
                // `5.e3` — a dot directly followed by a valid exponent.
                self.cursor.advance();
                real = true;
            }
            // A bare trailing dot stays a separate DOT token.
        }

        if self.exponent_follows(0) {
            self.consume_exponent();
            real = true;
        }

        let kind = if real {
            TokenKind::RealLiteral
        } else {
            TokenKind::DecimalLiteral
        };
        self.make_token(kind, Channel::Default)
    }

    /// Lexes an `X'1F'` quoted hexadecimal literal.
    ///
    /// When the quoted run is empty, holds a non-hex character, or never
    /// closes, the rule fails and the `X` re-lexes as an identifier.
    pub(super) fn lex_quoted_hex(&mut self) -> Token<'a> {
        self.lex_quoted_digits(TokenKind::HexadecimalLiteral, |c| c.is_ascii_hexdigit())
    }

    /// Lexes a `B'0101'` bit-string literal, with the same fallback as
    /// [`Self::lex_quoted_hex`].
    pub(super) fn lex_bit_string(&mut self) -> Token<'a> {
        self.lex_quoted_digits(TokenKind::BitString, |c| c == '0' || c == '1')
    }

    /// Shared scanner for marker-prefixed quoted digit runs.
    fn lex_quoted_digits(&mut self, kind: TokenKind, is_digit: fn(char) -> bool) -> Token<'a> {
        let snapshot = self.cursor.snapshot();
        self.cursor.advance_n(2); // marker + opening quote

        let mut digits = 0usize;
        while is_digit(self.cursor.current_char()) {
            self.cursor.advance();
            digits += 1;
        }

        if digits > 0 && self.cursor.current_char() == '\'' {
            self.cursor.advance();
            return self.make_token(kind, Channel::Default);
        }

        self.cursor.restore(snapshot);
        self.lex_identifier()
    }

    /// Returns true when an exponent part begins `offset` characters
    /// ahead: `e`/`E`, an optional sign, and at least one digit.
    fn exponent_follows(&self, offset: usize) -> bool {
        if !matches!(self.cursor.peek_char(offset), 'e' | 'E') {
            return false;
        }
        let after = self.cursor.peek_char(offset + 1);
        if after.is_ascii_digit() {
            return true;
        }
        matches!(after, '+' | '-') && self.cursor.peek_char(offset + 2).is_ascii_digit()
    }

    /// Consumes a validated exponent part.
    fn consume_exponent(&mut self) {
        self.cursor.advance(); // e/E
        if matches!(self.cursor.current_char(), '+' | '-') {
            self.cursor.advance();
        }
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
    }
}
