//! Edge case tests for osql-lex

#[cfg(test)]
mod tests {
    use crate::{Channel, Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        Lexer::new(source).collect()
    }

    fn lex_raw(source: &str) -> Vec<Token<'_>> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_raw_token();
            if token.is_eof() { break; }
            tokens.push(token);
        }
        tokens
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].lexeme, "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&name);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].lexeme, name);
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("select from where");
        assert_eq!(t[0].kind, TokenKind::Select);
        assert_eq!(t[1].kind, TokenKind::From);
        assert_eq!(t[2].kind, TokenKind::Where);
    }

    #[test]
    fn test_edge_keyword_prefix_stays_identifier() {
        let t = lex_all("selection fromage whereabouts");
        assert!(t.iter().all(|t| t.kind == TokenKind::Identifier));
    }

    #[test]
    fn test_edge_hex_bounds() {
        let t = lex_all("0x0 0xFFFFFFFFFFFFFFFF");
        assert_eq!(t[0].kind, TokenKind::HexadecimalLiteral);
        assert_eq!(t[1].kind, TokenKind::HexadecimalLiteral);
        assert_eq!(t[1].lexeme, "0xFFFFFFFFFFFFFFFF");
    }

    #[test]
    fn test_edge_long_number_is_one_lexeme() {
        // The lexer never parses numeric values, so overflow cannot occur.
        let digits = "9".repeat(100);
        let t = lex_all(&digits);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::DecimalLiteral);
        assert_eq!(t[0].lexeme, digits);
    }

    #[test]
    fn test_edge_empty_string_literal() {
        let t = lex_all("''");
        assert_eq!(t[0].kind, TokenKind::StringLiteral);
        assert_eq!(t[0].lexeme, "''");
    }

    #[test]
    fn test_edge_string_of_only_doubled_quotes() {
        let t = lex_all("''''");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].lexeme, "''''");
    }

    #[test]
    fn test_edge_nested_parens() {
        let t = lex_all("((()))");
        assert_eq!(t.iter().filter(|t| t.kind == TokenKind::LParen).count(), 3);
        assert_eq!(t.iter().filter(|t| t.kind == TokenKind::RParen).count(), 3);
    }

    #[test]
    fn test_edge_case_sensitivity_of_null_marker() {
        // Only backslash + capital N is the null marker.
        let t = lex_all(r"\N");
        assert_eq!(t[0].kind, TokenKind::NullSpecLiteral);

        let t = lex_all(r"\x");
        assert_eq!(t[0].kind, TokenKind::Error);
    }

    #[test]
    fn test_edge_adjacent_punctuators() {
        let t = lex_all("<=>");
        assert_eq!(
            t.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Lt, TokenKind::Eq, TokenKind::Gt]
        );
    }

    #[test]
    fn test_edge_crlf_line_counting() {
        let mut lexer = Lexer::new("a\r\nb\rc\nd");
        assert_eq!(lexer.next_token().span.line, 1);
        assert_eq!(lexer.next_token().span.line, 2);
        assert_eq!(lexer.next_token().span.line, 3);
        assert_eq!(lexer.next_token().span.line, 4);
    }

    #[test]
    fn test_edge_non_ascii_in_string_is_fine() {
        let t = lex_all("'héllo 😀'");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::StringLiteral);
    }

    #[test]
    fn test_edge_non_ascii_outside_string_is_error() {
        let t = lex_all("é");
        assert_eq!(t[0].kind, TokenKind::Error);
        assert_eq!(t[0].channel, Channel::Error);
        assert_eq!(t[0].lexeme, "é");
    }

    #[test]
    fn test_edge_error_run_one_token_per_char() {
        let t = lex_raw("???");
        assert_eq!(t.len(), 3);
        assert!(t.iter().all(|t| t.kind == TokenKind::Error));
    }

    #[test]
    fn test_edge_quote_storm_terminates() {
        // A run of unterminated openers must still make progress.
        let t = lex_raw("'\"`");
        assert_eq!(
            t.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::SingleQuote,
                TokenKind::DoubleQuote,
                TokenKind::Backtick,
            ]
        );
    }

    #[test]
    fn test_edge_marker_without_quote_is_identifier() {
        // x/b/n only start their literal forms when a quote follows.
        let t = lex_all("x b n xray");
        assert!(t.iter().all(|t| t.kind == TokenKind::Identifier));
    }

    #[test]
    fn test_edge_dot_alone_and_dotted_name() {
        let t = lex_all("t.col");
        assert_eq!(
            t.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Identifier, TokenKind::Dot, TokenKind::Identifier]
        );
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_arbitrary_input_is_total() {
        use proptest::prelude::*;

        proptest!(|(input in ".{0,200}")| {
            let mut lexer = Lexer::new(&input);
            let mut count = 0usize;
            loop {
                let token = lexer.next_raw_token();
                if token.is_eof() { break; }
                count += 1;
                // Every raw token consumes at least one character, so the
                // count is bounded by the character count.
                prop_assert!(count <= input.chars().count());
            }
        });
    }

    #[test]
    fn test_property_raw_stream_round_trips() {
        use proptest::prelude::*;

        proptest!(|(input in ".{0,200}")| {
            let mut lexer = Lexer::new(&input);
            let mut rebuilt = String::new();
            loop {
                let token = lexer.next_raw_token();
                if token.is_eof() { break; }
                rebuilt.push_str(token.lexeme);
            }
            prop_assert_eq!(rebuilt, input);
        });
    }

    #[test]
    fn test_property_arbitrary_identifier_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
            let tokens = lex_all(&input);
            // One token: an identifier or a reserved word, never a split.
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].lexeme, input.as_str());
            prop_assert!(
                tokens[0].kind == TokenKind::Identifier || tokens[0].kind.is_keyword()
            );
        });
    }

    #[test]
    fn test_property_arbitrary_decimal_number_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,40}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::DecimalLiteral);
        });
    }

    #[test]
    fn test_property_arbitrary_string_literals() {
        use proptest::prelude::*;

        proptest!(|(input in "[^'\\\\]{0,100}")| {
            let source = format!("'{}'", input);
            let tokens = lex_all(&source);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        });
    }

    #[test]
    fn test_property_eof_is_stable() {
        use proptest::prelude::*;

        proptest!(|(input in ".{0,50}")| {
            let mut lexer = Lexer::new(&input);
            while !lexer.next_token().is_eof() {}
            for _ in 0..3 {
                let eof = lexer.next_token();
                prop_assert!(eof.is_eof());
                prop_assert_eq!(eof.lexeme, "");
                prop_assert_eq!(eof.channel, Channel::Default);
            }
        });
    }

    #[test]
    fn test_property_whitespace_never_significant() {
        use proptest::prelude::*;

        proptest!(|(spaces in 0..100usize)| {
            let whitespace = " ".repeat(spaces);
            let source = format!("{}SELECT{}", whitespace, whitespace);
            let tokens = lex_all(&source);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Select);
        });
    }
}
