//! String literal lexing.
//!
//! Single-quoted strings support two escape conventions at once: a doubled
//! quote (`''`) and a backslash that consumes whatever character follows
//! it. The same quoted-run scanner backs the quoted-identifier rules.

use crate::token::{Channel, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `'...'` string literal.
    ///
    /// An unterminated string does not match: the opening quote falls
    /// through to the [`TokenKind::SingleQuote`] punctuator and scanning
    /// resumes right after it.
    pub(super) fn lex_string(&mut self) -> Token<'a> {
        let snapshot = self.cursor.snapshot();
        if self.scan_quoted_run('\'') {
            return self.make_token(TokenKind::StringLiteral, Channel::Default);
        }
        self.cursor.restore(snapshot);
        self.cursor.advance();
        self.make_token(TokenKind::SingleQuote, Channel::Default)
    }

    /// Lexes an `N'...'` national string literal.
    ///
    /// On an unterminated quoted run the whole rule fails and the `N`
    /// re-lexes as an identifier, leaving the quote for the next attempt.
    pub(super) fn lex_national_string(&mut self) -> Token<'a> {
        let snapshot = self.cursor.snapshot();
        self.cursor.advance(); // N
        if self.scan_quoted_run('\'') {
            return self.make_token(TokenKind::NationalStringLiteral, Channel::Default);
        }
        self.cursor.restore(snapshot);
        self.lex_identifier()
    }

    /// Consumes a quoted run starting at `quote`, returning true when the
    /// closing quote was found.
    ///
    /// Inside the run a doubled quote stands for one quote character, and
    /// a backslash escapes the following character whatever it is. On
    /// failure (end of input before the close) the cursor is left wherever
    /// scanning stopped; callers restore their snapshot.
    pub(super) fn scan_quoted_run(&mut self, quote: char) -> bool {
        self.cursor.advance(); // opening quote

        loop {
            if self.cursor.is_at_end() {
                return false;
            }

            let c = self.cursor.current_char();
            if c == quote {
                if self.cursor.peek_char(1) == quote {
                    self.cursor.advance_n(2);
                    continue;
                }
                self.cursor.advance();
                return true;
            }

            if c == '\\' {
                self.cursor.advance();
                if self.cursor.is_at_end() {
                    // A trailing backslash can never be closed.
                    return false;
                }
            }
            self.cursor.advance();
        }
    }
}
