//! Punctuator lexing.
//!
//! Every operator in the dialect is a single character, so this module is
//! just the character-to-kind mapping used by the dispatch loop after the
//! longer rules have had their chance.

use crate::token::TokenKind;

/// Maps a character to its punctuator kind, or `None` when the character
/// is not part of the dialect at all.
pub(crate) fn punctuation_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        '*' => TokenKind::Star,
        '/' => TokenKind::Slash,
        '%' => TokenKind::Percent,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '=' => TokenKind::Eq,
        '>' => TokenKind::Gt,
        '<' => TokenKind::Lt,
        '!' => TokenKind::Exclamation,
        '~' => TokenKind::Tilde,
        '|' => TokenKind::Pipe,
        '&' => TokenKind::Ampersand,
        '^' => TokenKind::Caret,
        '.' => TokenKind::Dot,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        '@' => TokenKind::AtSign,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        '\'' => TokenKind::SingleQuote,
        '"' => TokenKind::DoubleQuote,
        '`' => TokenKind::Backtick,
        ':' => TokenKind::Colon,
        _ => return None,
    };
    Some(kind)
}
