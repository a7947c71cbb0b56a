//! osql-lex - Lexical Analyzer for the OpenSearch SQL dialect
//!
//! This crate provides a complete lexer (tokenizer) for OpenSearch SQL. It
//! transforms query text into a stream of tokens that can be consumed by a
//! parser, an editor highlighter, or an autocomplete engine.
//!
//! # Overview
//!
//! The lexer is total: every input string, valid SQL or not, lexes to a
//! finite token stream with no panics. Characters that fit no rule become
//! single-character [`TokenKind::Error`] tokens on their own channel, and
//! whitespace and comments are emitted as tokens rather than discarded, so
//! concatenating the lexemes of the raw token stream reproduces the input
//! byte-for-byte.
//!
//! # Example Usage
//!
//! ```
//! use osql_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("SELECT name FROM accounts");
//!
//! assert_eq!(lexer.next_token().kind, TokenKind::Select);
//! assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
//! assert_eq!(lexer.next_token().kind, TokenKind::From);
//!
//! // Or iterate; the iterator stops at end of input.
//! for token in Lexer::new("a = 1") {
//!     println!("{token}");
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, kind, channel, and span definitions
//! - [`keyword`] - The reserved-word table and case-insensitive lookup
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Reserved words (305 total) covering core SQL (`SELECT`, `FROM`,
//! `WHERE`, ...), the word operators `DIV` and `MOD`, aggregate and scalar
//! functions, `INTERVAL` time units, window functions, and the OpenSearch
//! full-text extensions (`MATCH`, `MATCH_PHRASE`, `QUERY_STRING`,
//! relevance-function parameters, ...). Keyword recognition is
//! case-insensitive and the lexeme keeps the writer's casing, except for
//! the single-letter markers `D`, `T`, `TS`, and `E`, which are keywords
//! in uppercase only so that `t` in `FROM t` stays an identifier.
//!
//! ## Identifiers
//!
//! Unquoted (`host_name`, `@@version`), double-quoted (`"a col"`), and
//! backtick-quoted (`` `field.keyword` ``). Quoting bypasses the keyword
//! table.
//!
//! ## Literals
//!
//! - **String**: `'it''s'`, `N'text'`
//! - **Decimal**: `42`
//! - **Real**: `3.14`, `.5`, `1.5e-2`
//! - **Hexadecimal**: `0x1F`, `X'1F'`
//! - **Bit string**: `B'0101'`
//! - **Null marker**: `\N`
//!
//! ## Punctuators
//!
//! All single characters: `* / % + - = > < ! ~ | & ^ . ( ) [ ] , ; @ { } :`
//! plus the lone-quote fall-throughs `'`, `"`, and `` ` ``. There are no
//! multi-character operator tokens in this dialect; `<=` is two tokens.
//!
//! ## Channels
//!
//! Tokens carry a [`Channel`]: `Default` for grammar-significant tokens,
//! `Hidden` for whitespace and block comments, `SqlComment` for `--` and
//! `#` line comments, and `Error` for the single-character fallback.
//! [`Lexer::next_token`] filters to significant tokens;
//! [`Lexer::next_raw_token`] surfaces everything.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod keyword;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Channel, Span, Token, TokenKind};
