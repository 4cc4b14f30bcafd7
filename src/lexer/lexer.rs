use std::rc::Rc;

use tracing::{trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    input::InputBuffer,
    number::NumberScanner,
    tokens::{Token, TokenKind},
    word::WordScanner,
};

/// Whitespace as the C locale defines it. Note `char::is_ascii_whitespace`
/// leaves out the vertical tab.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[derive(Debug, Clone)]
pub struct Lexer {
    input: InputBuffer,
    tokens: Vec<Token>,
    line: u32,
    file: Rc<String>,
    diagnostics: Vec<Error>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("stdin"))
        };

        Lexer {
            input: InputBuffer::new(&source),
            tokens: vec![],
            line: 1,
            file: file_name,
            diagnostics: vec![],
        }
    }

    /// Returns the next token, replaying ungotten tokens first.
    ///
    /// Never fails: an unrecognised character becomes an `Error` token and
    /// the end of input becomes an `EOF` token, every time it is asked for.
    pub fn get_token(&mut self) -> Token {
        if let Some(token) = self.tokens.pop() {
            trace!(%token, "replaying token");
            return token;
        }

        self.skip_space();
        let line = self.line;

        let token = match self.input.get_char() {
            None => MK_TOKEN!(TokenKind::EOF, String::new(), line),
            Some(c) if c.is_ascii_digit() => {
                self.input.unget_char(c);
                NumberScanner::new(&mut self.input).scan(line)
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.input.unget_char(c);
                WordScanner::new(&mut self.input).scan(line)
            }
            Some('<') => match self.input.get_char() {
                Some('=') => MK_TOKEN!(TokenKind::LessEquals, String::from("<="), line),
                Some('>') => MK_TOKEN!(TokenKind::NotEqual, String::from("<>"), line),
                other => {
                    if let Some(c) = other {
                        self.input.unget_char(c);
                    }
                    MK_TOKEN!(TokenKind::Less, String::from("<"), line)
                }
            },
            Some('>') => match self.input.get_char() {
                Some('=') => MK_TOKEN!(TokenKind::GreaterEquals, String::from(">="), line),
                other => {
                    if let Some(c) = other {
                        self.input.unget_char(c);
                    }
                    MK_TOKEN!(TokenKind::Greater, String::from(">"), line)
                }
            },
            Some(c) => match TokenKind::from_symbol(c) {
                Some(kind) => MK_TOKEN!(kind, c.to_string(), line),
                None => self.unrecognised(c, line),
            },
        };

        trace!(%token, "scanned token");
        token
    }

    // Tokens must be ungotten in the reverse order they were obtained:
    //
    //    t1 = lexer.get_token();
    //    t2 = lexer.get_token();
    //    lexer.unget_token(t2);
    //    lexer.unget_token(t1);
    //
    // The order is not checked.
    pub fn unget_token(&mut self, token: Token) -> TokenKind {
        let kind = token.kind;
        self.tokens.push(token);
        kind
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Characters that were swallowed as `Error` tokens, in input order.
    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    fn skip_space(&mut self) {
        while let Some(c) = self.input.get_char() {
            if c == '\n' {
                self.line += 1;
            }

            if !is_space(c) {
                self.input.unget_char(c);
                break;
            }
        }
    }

    // The offending character is dropped, not returned to the input.
    fn unrecognised(&mut self, c: char, line: u32) -> Token {
        warn!(character = ?c, line, "unrecognised character");
        self.diagnostics.push(Error::new(
            ErrorImpl::UnrecognisedCharacter { character: c },
            Position(line, Rc::clone(&self.file)),
        ));

        MK_TOKEN!(TokenKind::Error, String::new(), line)
    }
}

/// Runs a fresh lexer to the end of `source`. The last token is always `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.get_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
