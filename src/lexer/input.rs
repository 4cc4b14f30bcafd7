//! Character input with unlimited pushback.
//!
//! Scanners test a hypothesis by pulling characters and, when the
//! hypothesis fails, hand every one of them back through `unget_char` or
//! `unget_str`. Pushed-back characters are re-delivered before anything
//! else in the source, last pushed first.

#[derive(Debug, Clone)]
pub struct InputBuffer {
    source: Vec<char>,
    pos: usize,
    pending: Vec<char>,
}

impl InputBuffer {
    pub fn new(source: &str) -> InputBuffer {
        InputBuffer {
            source: source.chars().collect(),
            pos: 0,
            pending: vec![],
        }
    }

    /// Pulls the next character, or `None` once the input is exhausted.
    pub fn get_char(&mut self) -> Option<char> {
        if let Some(c) = self.pending.pop() {
            return Some(c);
        }

        let c = self.source.get(self.pos).copied();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    pub fn unget_char(&mut self, c: char) {
        self.pending.push(c);
    }

    /// Pushes back a whole string so that it is re-pulled left to right.
    pub fn unget_str(&mut self, s: &str) {
        for c in s.chars().rev() {
            self.pending.push(c);
        }
    }

    pub fn peek_char(&mut self) -> Option<char> {
        let c = self.get_char();
        if let Some(c) = c {
            self.unget_char(c);
        }
        c
    }

    /// Pulls up to `n` characters. The result is shorter than `n` only when
    /// the input ran out, so `unget_str` on it always restores the stream.
    pub fn take(&mut self, n: usize) -> String {
        let mut taken = String::new();
        for _ in 0..n {
            match self.get_char() {
                Some(c) => taken.push(c),
                None => break,
            }
        }
        taken
    }

    pub fn end_of_input(&self) -> bool {
        self.pending.is_empty() && self.pos >= self.source.len()
    }
}
