//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, rule dispatch, and error fallback
//! - `comment` - Whitespace runs, block comments, line comments
//! - `identifier` - Unquoted/quoted identifiers and keyword reclassification
//! - `number` - Decimal, hexadecimal, real, and bit-string literals
//! - `string` - String literals and the shared quoted-run scanner
//! - `operator` - Single-character punctuator classification

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
