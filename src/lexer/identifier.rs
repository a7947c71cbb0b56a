//! Identifier and keyword lexing.
//!
//! Unquoted identifiers are matched longest-first and then probed against
//! the keyword table; quoted identifiers bypass the table entirely, so a
//! reserved word in quotes stays an identifier.

use crate::keyword;
use crate::token::{Channel, Token, TokenKind};
use crate::Lexer;

/// Returns true for characters that may open an unquoted identifier.
pub(super) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true for characters that may continue an unquoted identifier.
pub(super) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '@'
}

impl<'a> Lexer<'a> {
    /// Lexes an unquoted identifier or reserved word.
    ///
    /// The longest identifier-shaped run is consumed first, then the
    /// uppercased lexeme is probed against the keyword table. A hit
    /// reclassifies the token to its keyword kind; the lexeme keeps its
    /// original casing either way.
    pub(super) fn lex_identifier(&mut self) -> Token<'a> {
        self.cursor.advance();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword::lookup(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, Channel::Default)
    }

    /// Lexes a `"..."` or `` `...` `` quoted identifier.
    ///
    /// Escaping follows the string rules (doubled quote or backslash).
    /// When no closing quote is reachable the rule fails and the opening
    /// quote falls through to its punctuator kind, leaving the rest of the
    /// input to re-lex.
    pub(super) fn lex_quoted_identifier(
        &mut self,
        quote: char,
        kind: TokenKind,
        fallback: TokenKind,
    ) -> Token<'a> {
        let snapshot = self.cursor.snapshot();
        if self.scan_quoted_run(quote) {
            return self.make_token(kind, Channel::Default);
        }
        self.cursor.restore(snapshot);
        self.cursor.advance();
        self.make_token(fallback, Channel::Default)
    }
}
