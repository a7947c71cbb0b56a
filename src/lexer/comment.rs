//! Whitespace and comment lexing.
//!
//! Trivia is not discarded: it is emitted as tokens on the hidden and
//! SQL-comment channels so an unfiltered consumer can reconstruct the
//! input exactly.

use crate::token::{Channel, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a run of whitespace as one hidden-channel token.
    pub(super) fn lex_whitespace(&mut self) -> Token<'a> {
        while matches!(self.cursor.current_char(), ' ' | '\t' | '\r' | '\n') {
            self.cursor.advance();
        }
        self.make_token(TokenKind::Space, Channel::Hidden)
    }

    /// Lexes a `/* ... */` block comment, non-nested, shortest close.
    ///
    /// An unterminated block comment matches greedily to end of input and
    /// is still accepted. Optimizer-hint comments (`/*! ... */`) are plain
    /// block comments here.
    pub(super) fn lex_block_comment(&mut self) -> Token<'a> {
        self.cursor.advance_n(2); // "/*"

        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                break;
            }
            self.cursor.advance();
        }

        self.make_token(TokenKind::BlockComment, Channel::Hidden)
    }

    /// Returns true when the cursor sits on a `--` that opens a line
    /// comment.
    ///
    /// `--` only opens a comment when followed by a space, a line break,
    /// or end of input; `--1` and `--\t` are two MINUS punctuators.
    pub(super) fn at_line_comment_start(&self) -> bool {
        if self.cursor.current_char() != '-' || self.cursor.peek_char(1) != '-' {
            return false;
        }
        if self.cursor.position() + 2 >= self.cursor.source().len() {
            return true;
        }
        matches!(self.cursor.peek_char(2), ' ' | '\r' | '\n')
    }

    /// Lexes a `--` or `#` comment up to (not including) the line break.
    ///
    /// Line comments ride their own channel so documentation tooling can
    /// surface them without wading through whitespace.
    pub(super) fn lex_line_comment(&mut self) -> Token<'a> {
        while !self.cursor.is_at_end()
            && !matches!(self.cursor.current_char(), '\r' | '\n')
        {
            self.cursor.advance();
        }
        self.make_token(TokenKind::LineComment, Channel::SqlComment)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Channel, TokenKind};
    use crate::Lexer;

    fn raw_kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        let mut kinds = Vec::new();
        loop {
            let token = lexer.next_raw_token();
            if token.is_eof() {
                return kinds;
            }
            kinds.push(token.kind);
        }
    }

    #[test]
    fn test_whitespace_run_is_one_token() {
        assert_eq!(raw_kinds("  \t\r\n  "), vec![TokenKind::Space]);
    }

    #[test]
    fn test_block_comment() {
        let mut lexer = Lexer::new("/* hi */");
        let token = lexer.next_raw_token();
        assert_eq!(token.kind, TokenKind::BlockComment);
        assert_eq!(token.channel, Channel::Hidden);
        assert_eq!(token.lexeme, "/* hi */");
    }

    #[test]
    fn test_block_comment_shortest_close() {
        assert_eq!(
            raw_kinds("/* a */ */"),
            vec![
                TokenKind::BlockComment,
                TokenKind::Space,
                TokenKind::Star,
                TokenKind::Slash,
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment_matches_to_eof() {
        let mut lexer = Lexer::new("/* never closed");
        let token = lexer.next_raw_token();
        assert_eq!(token.kind, TokenKind::BlockComment);
        assert_eq!(token.lexeme, "/* never closed");
        assert!(lexer.next_raw_token().is_eof());
    }

    #[test]
    fn test_optimizer_hint_is_plain_block_comment() {
        let mut lexer = Lexer::new("/*! STRAIGHT_JOIN */");
        assert_eq!(lexer.next_raw_token().kind, TokenKind::BlockComment);
    }

    #[test]
    fn test_hash_line_comment() {
        let mut lexer = Lexer::new("# note\n1");
        let comment = lexer.next_raw_token();
        assert_eq!(comment.kind, TokenKind::LineComment);
        assert_eq!(comment.channel, Channel::SqlComment);
        assert_eq!(comment.lexeme, "# note");
        assert_eq!(lexer.next_token().kind, TokenKind::DecimalLiteral);
    }

    #[test]
    fn test_dash_dash_comment_requires_separator() {
        let mut lexer = Lexer::new("-- note");
        assert_eq!(lexer.next_raw_token().kind, TokenKind::LineComment);

        // No separator: two MINUS tokens, then a number.
        assert_eq!(
            raw_kinds("--1"),
            vec![TokenKind::Minus, TokenKind::Minus, TokenKind::DecimalLiteral]
        );

        // A tab is not a separator either; only a space or a line break.
        assert_eq!(
            raw_kinds("--\tx"),
            vec![
                TokenKind::Minus,
                TokenKind::Minus,
                TokenKind::Space,
                TokenKind::Identifier,
            ]
        );
        assert_eq!(
            raw_kinds("--\nx"),
            vec![TokenKind::LineComment, TokenKind::Space, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_dash_dash_at_end_of_input() {
        assert_eq!(raw_kinds("--"), vec![TokenKind::LineComment]);
        assert_eq!(
            raw_kinds("--\n"),
            vec![TokenKind::LineComment, TokenKind::Space]
        );
    }

    #[test]
    fn test_line_comment_stops_before_line_break() {
        let mut lexer = Lexer::new("-- c\r\nx");
        assert_eq!(lexer.next_raw_token().lexeme, "-- c");
        assert_eq!(lexer.next_raw_token().kind, TokenKind::Space);
        assert_eq!(lexer.next_raw_token().kind, TokenKind::Identifier);
    }

    #[test]
    fn test_comments_are_skipped_by_filtered_stream() {
        let mut lexer = Lexer::new("SELECT/*c*/1 -- done");
        assert_eq!(lexer.next_token().kind, TokenKind::Select);
        assert_eq!(lexer.next_token().kind, TokenKind::DecimalLiteral);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}
