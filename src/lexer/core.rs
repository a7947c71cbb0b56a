//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the rule-dispatch loop, and
//! the single-character error fallback that makes lexing total.

use crate::cursor::Cursor;
use crate::lexer::identifier::{is_ident_continue, is_ident_start};
use crate::lexer::operator::punctuation_kind;
use crate::token::{Channel, Span, Token, TokenKind};

/// Lexer for OpenSearch SQL source text.
///
/// The lexer binds to one immutable input buffer and produces tokens
/// lazily on demand. Rules are tried in a fixed priority order at the
/// cursor position — trivia first, then literals and identifiers with
/// longest-match semantics, then single-character punctuators — and when
/// nothing matches, exactly one character is consumed as an [`Error`]
/// token so that scanning always makes forward progress.
///
/// [`Error`]: TokenKind::Error
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Starting byte offset of the current token.
    pub(super) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next grammar-significant token.
    ///
    /// Whitespace and comment tokens are skipped transparently; tokens on
    /// the [`Channel::Error`] channel are surfaced so the consumer can
    /// decide whether they are fatal. Once the input is exhausted this
    /// returns the same zero-width [`TokenKind::Eof`] token on every call.
    pub fn next_token(&mut self) -> Token<'a> {
        loop {
            let token = self.next_raw_token();
            if token.channel.is_significant() {
                return token;
            }
        }
    }

    /// Returns the next token on any channel.
    ///
    /// Every byte of input is assigned to exactly one raw token:
    /// concatenating the lexemes of all raw tokens reproduces the input
    /// byte-for-byte.
    pub fn next_raw_token(&mut self) -> Token<'a> {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return self.make_token(TokenKind::Eof, Channel::Default);
        }

        match self.cursor.current_char() {
            ' ' | '\t' | '\r' | '\n' => self.lex_whitespace(),
            '/' if self.cursor.peek_char(1) == '*' => self.lex_block_comment(),
            '#' => self.lex_line_comment(),
            '-' if self.at_line_comment_start() => self.lex_line_comment(),
            '\'' => self.lex_string(),
            '"' => self.lex_quoted_identifier(
                '"',
                TokenKind::DoubleQuoteIdentifier,
                TokenKind::DoubleQuote,
            ),
            '`' => self.lex_quoted_identifier(
                '`',
                TokenKind::BacktickIdentifier,
                TokenKind::Backtick,
            ),
            'n' | 'N' if self.cursor.peek_char(1) == '\'' => self.lex_national_string(),
            'x' | 'X' if self.cursor.peek_char(1) == '\'' => self.lex_quoted_hex(),
            'b' | 'B' if self.cursor.peek_char(1) == '\'' => self.lex_bit_string(),
            '\\' if self.cursor.peek_char(1) == 'N' => {
                self.cursor.advance_n(2);
                self.make_token(TokenKind::NullSpecLiteral, Channel::Default)
            },
            '.' if self.cursor.peek_char(1).is_ascii_digit() => self.lex_number(),
            c if c.is_ascii_digit() => self.lex_number(),
            // A lone @ is the AT punctuator; with identifier characters
            // attached it opens an identifier (longest match).
            '@' if is_ident_continue(self.cursor.peek_char(1)) => self.lex_identifier(),
            c if is_ident_start(c) => self.lex_identifier(),
            c => match punctuation_kind(c) {
                Some(kind) => {
                    self.cursor.advance();
                    self.make_token(kind, Channel::Default)
                },
                None => {
                    // Deterministic last resort: consume exactly one
                    // character so the scan always terminates.
                    self.cursor.advance();
                    self.make_token(TokenKind::Error, Channel::Error)
                },
            },
        }
    }

    /// Builds a token spanning from the current token start to the cursor.
    pub(super) fn make_token(&self, kind: TokenKind, channel: Channel) -> Token<'a> {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        Token::new(kind, channel, self.cursor.slice_from(self.token_start), span)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
