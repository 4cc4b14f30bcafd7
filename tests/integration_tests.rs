//! Integration tests for the lexer.
//!
//! These tests drive the public API the way a parser would: pulling tokens
//! one at a time, pushing some back, and checking the properties every
//! token stream must have.

use lexan::{
    decode_source,
    lexer::{
        lexer::{is_space, tokenize, Lexer},
        tokens::{Token, TokenKind},
    },
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn token(kind: TokenKind, lexeme: &str, line: u32) -> Token {
    Token {
        kind,
        lexeme: lexeme.to_string(),
        line,
    }
}

#[test]
fn test_program() {
    let source = "WHILE a <> 0x16 DO\n  PRINT [b, 3.14];\n  a = a - 17x08\n".to_string();
    let tokens = tokenize(source, Some("prog.txt".to_string()));

    assert_eq!(
        tokens,
        vec![
            token(TokenKind::While, "WHILE", 1),
            token(TokenKind::Identifier, "a", 1),
            token(TokenKind::NotEqual, "<>", 1),
            token(TokenKind::Base16Number, "0x16", 1),
            token(TokenKind::Do, "DO", 1),
            token(TokenKind::Print, "PRINT", 2),
            token(TokenKind::OpenBracket, "[", 2),
            token(TokenKind::Identifier, "b", 2),
            token(TokenKind::Comma, ",", 2),
            token(TokenKind::RealNumber, "3.14", 2),
            token(TokenKind::CloseBracket, "]", 2),
            token(TokenKind::Semicolon, ";", 2),
            token(TokenKind::Identifier, "a", 3),
            token(TokenKind::Equal, "=", 3),
            token(TokenKind::Identifier, "a", 3),
            token(TokenKind::Minus, "-", 3),
            token(TokenKind::Base08Number, "17x08", 3),
            token(TokenKind::EOF, "", 4),
        ]
    );
}

#[test]
fn test_scenarios() {
    assert_eq!(
        tokenize("0x16".to_string(), None),
        vec![token(TokenKind::Base16Number, "0x16", 1), token(TokenKind::EOF, "", 1)]
    );
    assert_eq!(
        tokenize("19x08".to_string(), None),
        vec![
            token(TokenKind::Number, "19", 1),
            token(TokenKind::Identifier, "x08", 1),
            token(TokenKind::EOF, "", 1)
        ]
    );
    assert_eq!(
        tokenize("17x08".to_string(), None),
        vec![token(TokenKind::Base08Number, "17x08", 1), token(TokenKind::EOF, "", 1)]
    );
    assert_eq!(
        tokenize("3.14".to_string(), None),
        vec![token(TokenKind::RealNumber, "3.14", 1), token(TokenKind::EOF, "", 1)]
    );
    assert_eq!(
        tokenize("ABCx16Z".to_string(), None),
        vec![token(TokenKind::Identifier, "ABCx16Z", 1), token(TokenKind::EOF, "", 1)]
    );
    assert_eq!(
        tokenize("WHILE while".to_string(), None),
        vec![
            token(TokenKind::While, "WHILE", 1),
            token(TokenKind::Identifier, "while", 1),
            token(TokenKind::EOF, "", 1)
        ]
    );
}

#[test]
fn test_hex_terminator_left_for_next_call() {
    let mut lexer = Lexer::new("ABCx16 ".to_string(), None);

    assert_eq!(lexer.get_token(), token(TokenKind::Base16Number, "ABCx16", 1));
    assert_eq!(lexer.get_token(), token(TokenKind::EOF, "", 1));
}

#[test]
fn test_parser_style_lookahead() {
    let mut lexer = Lexer::new("a <= b; c".to_string(), None);

    let first = lexer.get_token();
    let second = lexer.get_token();
    lexer.unget_token(second.clone());
    lexer.unget_token(first.clone());

    let replayed: Vec<Token> = (0..5).map(|_| lexer.get_token()).collect();
    assert_eq!(
        replayed,
        vec![
            first,
            second,
            token(TokenKind::Identifier, "b", 1),
            token(TokenKind::Semicolon, ";", 1),
            token(TokenKind::Identifier, "c", 1),
        ]
    );
}

#[test]
fn test_error_tokens_do_not_stop_lexing() {
    let mut lexer = Lexer::new("1 ? 2 ! 3".to_string(), Some("bad.txt".to_string()));
    let tokens: Vec<TokenKind> = (0..6).map(|_| lexer.get_token().kind).collect();

    assert_eq!(
        tokens,
        vec![
            TokenKind::Number,
            TokenKind::Error,
            TokenKind::Number,
            TokenKind::Error,
            TokenKind::Number,
            TokenKind::EOF
        ]
    );
    assert_eq!(lexer.diagnostics().len(), 2);
}

#[test]
fn test_invalid_utf8_is_an_error_token() {
    let mut lexer = Lexer::new(decode_source(b"a \xff b\n"), Some("raw.txt".to_string()));
    let tokens: Vec<TokenKind> = (0..4).map(|_| lexer.get_token().kind).collect();

    assert_eq!(
        tokens,
        vec![
            TokenKind::Identifier,
            TokenKind::Error,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
    assert_eq!(lexer.diagnostics().len(), 1);
    assert_eq!(
        lexer.diagnostics()[0].to_string(),
        "unrecognised character: '\u{fffd}'"
    );
}

fn source_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop::sample::select(vec![
            '0', '1', '6', '7', '8', '9', 'A', 'B', 'F', 'G', 'x', 'a', 'W', '.', '<', '>', '=',
            ';', ' ', '\n', '\t',
        ]),
        0..40,
    )
    .prop_map(|chars: Vec<char>| chars.into_iter().collect::<String>())
}

proptest! {
    #[test]
    fn prop_lexemes_rebuild_source(source in source_strategy()) {
        let tokens = tokenize(source.clone(), None);
        let rebuilt: String = tokens.iter().map(|token| token.lexeme.as_str()).collect();
        let skeleton: String = source.chars().filter(|c| !is_space(*c)).collect();

        prop_assert_eq!(rebuilt, skeleton);
        prop_assert!(tokens.iter().all(|token| token.kind != TokenKind::Error));
    }

    #[test]
    fn prop_lines_follow_newlines(source in source_strategy()) {
        let tokens = tokenize(source.clone(), None);

        for pair in tokens.windows(2) {
            prop_assert!(pair[0].line <= pair[1].line);
        }

        // Each token starts on 1 + the newlines skipped before it.
        let chars: Vec<char> = source.chars().collect();
        let mut pos = 0;
        let mut line = 1;
        for token in &tokens {
            while pos < chars.len() && is_space(chars[pos]) {
                if chars[pos] == '\n' {
                    line += 1;
                }
                pos += 1;
            }

            prop_assert_eq!(token.line, line);
            pos += token.lexeme.chars().count();
        }
        prop_assert_eq!(pos, chars.len());

        let newlines = source.matches('\n').count() as u32;
        prop_assert_eq!(tokens.last().map(|token| token.line), Some(newlines + 1));
    }

    #[test]
    fn prop_unget_is_idempotent(source in source_strategy(), skip in 0usize..10) {
        let mut lexer = Lexer::new(source.clone(), None);
        for _ in 0..skip {
            lexer.get_token();
        }

        let taken = lexer.get_token();
        let line = lexer.line();
        lexer.unget_token(taken.clone());

        prop_assert_eq!(lexer.get_token(), taken);
        prop_assert_eq!(lexer.line(), line);
    }
}
