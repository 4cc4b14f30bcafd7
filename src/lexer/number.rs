//! Digit-initiated literals.
//!
//! ```text
//! NUM       = "0" | [1-9][0-9]*
//! REALNUM   = NUM "." [0-9]+
//! BASE08NUM = [0-9]+ "x08"          (every digit <= 7)
//! BASE16NUM = [0-9A-F]+ "x16"
//! ```
//!
//! The grammars overlap, so the scanner commits to the longest reading it
//! can prove and undoes every other hypothesis through the input buffer.
//! A literal starting with `0` is exactly `"0"` plus an optional suffix;
//! it never absorbs further digits or hex letters.

use tracing::debug;

use crate::MK_TOKEN;

use super::{
    input::InputBuffer,
    tokens::{Token, TokenKind},
};

pub(crate) fn is_hex_digit(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, 'A'..='F')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberState {
    Start,
    /// Leading decimal digits of a non-zero literal.
    DigitsSeen,
    /// A hex letter followed the digits; the run is only kept with `x16`.
    HexCandidate,
    /// Integer part complete, looking for `x` or `.`.
    AwaitingSuffix,
    /// `x` consumed, two-character base code follows.
    AwaitingBaseCode,
    /// `.` consumed, at least one digit required.
    AwaitingDecimal,
    Fraction,
    Accept(TokenKind),
    Reject,
}

pub(crate) struct NumberScanner<'a> {
    input: &'a mut InputBuffer,
    lexeme: String,
}

impl<'a> NumberScanner<'a> {
    pub(crate) fn new(input: &'a mut InputBuffer) -> Self {
        NumberScanner {
            input,
            lexeme: String::new(),
        }
    }

    pub(crate) fn scan(mut self, line: u32) -> Token {
        let mut state = NumberState::Start;
        loop {
            state = match state {
                NumberState::Accept(kind) => return MK_TOKEN!(kind, self.lexeme, line),
                NumberState::Reject => return MK_TOKEN!(TokenKind::Error, String::new(), line),
                state => self.step(state),
            };
        }
    }

    fn step(&mut self, state: NumberState) -> NumberState {
        match state {
            NumberState::Start => self.start(),
            NumberState::DigitsSeen => self.digits_seen(),
            NumberState::HexCandidate => self.hex_candidate(),
            NumberState::AwaitingSuffix => self.awaiting_suffix(),
            NumberState::AwaitingBaseCode => self.awaiting_base_code(),
            NumberState::AwaitingDecimal => self.awaiting_decimal(),
            NumberState::Fraction => self.fraction(),
            NumberState::Accept(_) | NumberState::Reject => state,
        }
    }

    fn start(&mut self) -> NumberState {
        match self.input.get_char() {
            Some('0') => {
                self.lexeme.push('0');
                NumberState::AwaitingSuffix
            }
            Some(c) if c.is_ascii_digit() => {
                self.lexeme.push(c);
                NumberState::DigitsSeen
            }
            Some(c) => {
                self.input.unget_char(c);
                NumberState::Reject
            }
            None => NumberState::Reject,
        }
    }

    fn digits_seen(&mut self) -> NumberState {
        self.munch(|c| c.is_ascii_digit());

        match self.input.peek_char() {
            Some(c) if is_hex_digit(c) => NumberState::HexCandidate,
            _ => NumberState::AwaitingSuffix,
        }
    }

    fn hex_candidate(&mut self) -> NumberState {
        let mut run = String::new();
        while let Some(c) = self.input.get_char() {
            if !is_hex_digit(c) {
                self.input.unget_char(c);
                break;
            }
            run.push(c);
        }

        let suffix = self.input.take(3);
        if suffix == "x16" {
            self.lexeme.push_str(&run);
            self.lexeme.push_str(&suffix);
            return NumberState::Accept(TokenKind::Base16Number);
        }

        debug!(digits = %self.lexeme, %run, %suffix, "abandoning hex literal");
        self.input.unget_str(&suffix);
        self.input.unget_str(&run);
        NumberState::AwaitingSuffix
    }

    fn awaiting_suffix(&mut self) -> NumberState {
        match self.input.get_char() {
            Some('x') => {
                self.lexeme.push('x');
                NumberState::AwaitingBaseCode
            }
            Some('.') => {
                self.lexeme.push('.');
                NumberState::AwaitingDecimal
            }
            Some(c) => {
                self.input.unget_char(c);
                NumberState::Accept(TokenKind::Number)
            }
            None => NumberState::Accept(TokenKind::Number),
        }
    }

    fn awaiting_base_code(&mut self) -> NumberState {
        let code = self.input.take(2);

        let kind = match code.as_str() {
            "08" if self.octal_digits() => Some(TokenKind::Base08Number),
            "16" => Some(TokenKind::Base16Number),
            _ => None,
        };

        if let Some(kind) = kind {
            self.lexeme.push_str(&code);
            return NumberState::Accept(kind);
        }

        debug!(digits = %self.lexeme, %code, "abandoning base suffix");
        self.input.unget_str(&code);
        self.backtrack_last();
        NumberState::Accept(TokenKind::Number)
    }

    fn awaiting_decimal(&mut self) -> NumberState {
        match self.input.get_char() {
            Some(c) if c.is_ascii_digit() => {
                self.lexeme.push(c);
                NumberState::Fraction
            }
            other => {
                if let Some(c) = other {
                    self.input.unget_char(c);
                }
                debug!(digits = %self.lexeme, "abandoning real literal");
                self.backtrack_last();
                NumberState::Accept(TokenKind::Number)
            }
        }
    }

    fn fraction(&mut self) -> NumberState {
        self.munch(|c| c.is_ascii_digit());
        NumberState::Accept(TokenKind::RealNumber)
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

    /// Moves the tentative `x` or `.` from the lexeme back to the input.
    fn backtrack_last(&mut self) {
        if let Some(c) = self.lexeme.pop() {
            self.input.unget_char(c);
        }
    }

    /// Digits before the trailing `x` must all be octal.
    fn octal_digits(&self) -> bool {
        self.lexeme
            .chars()
            .take_while(|c| *c != 'x')
            .all(|c| matches!(c, '0'..='7'))
    }
}
