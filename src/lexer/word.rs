//! Letter-initiated runs: `BASE16NUM`, `ID` and the reserved words.
//!
//! A run of `[0-9A-F]` followed by `x16` is a hex literal only when the
//! next character is a space, a newline or the end of input. Anything else
//! is rescanned as a name from the end of the hex run.

use tracing::debug;

use crate::MK_TOKEN;

use super::{
    input::InputBuffer,
    number::is_hex_digit,
    tokens::{keyword_from_ident, Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WordState {
    Start,
    HexRun,
    /// Next character is `x`; `x16` plus a terminator makes a hex literal.
    SuffixCandidate,
    Name,
    Accept(TokenKind),
    Reject,
}

pub(crate) struct WordScanner<'a> {
    input: &'a mut InputBuffer,
    lexeme: String,
}

impl<'a> WordScanner<'a> {
    pub(crate) fn new(input: &'a mut InputBuffer) -> Self {
        WordScanner {
            input,
            lexeme: String::new(),
        }
    }

    pub(crate) fn scan(mut self, line: u32) -> Token {
        let mut state = WordState::Start;
        loop {
            state = match state {
                WordState::Accept(kind) => return MK_TOKEN!(kind, self.lexeme, line),
                WordState::Reject => return MK_TOKEN!(TokenKind::Error, String::new(), line),
                state => self.step(state),
            };
        }
    }

    fn step(&mut self, state: WordState) -> WordState {
        match state {
            WordState::Start => match self.input.peek_char() {
                Some(c) if c.is_ascii_alphabetic() => WordState::HexRun,
                _ => WordState::Reject,
            },
            WordState::HexRun => {
                self.munch(is_hex_digit);
                match self.input.peek_char() {
                    Some('x') => WordState::SuffixCandidate,
                    _ => WordState::Name,
                }
            }
            WordState::SuffixCandidate => self.suffix_candidate(),
            WordState::Name => {
                self.munch(|c| c.is_ascii_alphanumeric());
                match keyword_from_ident(&self.lexeme) {
                    Some(kind) => WordState::Accept(kind),
                    None => WordState::Accept(TokenKind::Identifier),
                }
            }
            WordState::Accept(_) | WordState::Reject => state,
        }
    }

    fn suffix_candidate(&mut self) -> WordState {
        let suffix = self.input.take(3);
        let terminator = self.input.get_char();

        if let Some(c) = terminator {
            self.input.unget_char(c);
        }

        if suffix == "x16" && matches!(terminator, None | Some(' ') | Some('\n')) {
            self.lexeme.push_str(&suffix);
            return WordState::Accept(TokenKind::Base16Number);
        }

        debug!(run = %self.lexeme, %suffix, ?terminator, "abandoning hex literal");
        self.input.unget_str(&suffix);
        WordState::Name
    }

    fn munch(&mut self, accept: impl Fn(char) -> bool) {
        while let Some(c) = self.input.get_char() {
            if !accept(c) {
                self.input.unget_char(c);
                break;
            }
            self.lexeme.push(c);
        }
    }
}
