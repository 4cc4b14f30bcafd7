use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("IF", TokenKind::If);
        map.insert("WHILE", TokenKind::While);
        map.insert("DO", TokenKind::Do);
        map.insert("THEN", TokenKind::Then);
        map.insert("PRINT", TokenKind::Print);
        map
    };
}

/// Looks up a name with exact case. `while` is not `WHILE`.
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    RESERVED_LOOKUP.get(ident).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    // Reserved
    If,
    While,
    Do,
    Then,
    Print,

    Plus,
    Minus,
    Div,
    Mult,

    Equal,
    Colon,
    Comma,
    Semicolon,

    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,

    NotEqual,     // <>
    Greater,
    Less,
    LessEquals,   // <=
    GreaterEquals, // >=

    Dot,
    Number,
    Identifier,
    Error,
    RealNumber,
    Base08Number, // 17x08
    Base16Number, // 1Fx16, ABx16
}

impl TokenKind {
    pub const ALL: [TokenKind; 30] = [
        TokenKind::EOF,
        TokenKind::If,
        TokenKind::While,
        TokenKind::Do,
        TokenKind::Then,
        TokenKind::Print,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Div,
        TokenKind::Mult,
        TokenKind::Equal,
        TokenKind::Colon,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::NotEqual,
        TokenKind::Greater,
        TokenKind::Less,
        TokenKind::LessEquals,
        TokenKind::GreaterEquals,
        TokenKind::Dot,
        TokenKind::Number,
        TokenKind::Identifier,
        TokenKind::Error,
        TokenKind::RealNumber,
        TokenKind::Base08Number,
        TokenKind::Base16Number,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "END_OF_FILE",
            TokenKind::If => "IF",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::Then => "THEN",
            TokenKind::Print => "PRINT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Div => "DIV",
            TokenKind::Mult => "MULT",
            TokenKind::Equal => "EQUAL",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::OpenBracket => "LBRAC",
            TokenKind::CloseBracket => "RBRAC",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::NotEqual => "NOTEQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::Less => "LESS",
            TokenKind::LessEquals => "LTEQ",
            TokenKind::GreaterEquals => "GTEQ",
            TokenKind::Dot => "DOT",
            TokenKind::Number => "NUM",
            TokenKind::Identifier => "ID",
            TokenKind::Error => "ERROR",
            TokenKind::RealNumber => "REALNUM",
            TokenKind::Base08Number => "BASE08NUM",
            TokenKind::Base16Number => "BASE16NUM",
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::If | TokenKind::While | TokenKind::Do | TokenKind::Then | TokenKind::Print
        )
    }

    /// Categories produced directly from a single character.
    pub fn from_symbol(c: char) -> Option<TokenKind> {
        let kind = match c {
            '.' => TokenKind::Dot,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '/' => TokenKind::Div,
            '*' => TokenKind::Mult,
            '=' => TokenKind::Equal,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            _ => return None,
        };
        Some(kind)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{} , {} , {}}}", self.lexeme, self.kind, self.line)
    }
}

/// Checks that the display names and the keyword table agree with
/// `TokenKind::ALL`.
pub fn validate_tables() -> Result<(), Error> {
    let mut seen = HashSet::new();
    for kind in TokenKind::ALL {
        let name = kind.name();
        if name.is_empty() || !seen.insert(name) {
            return Err(Error::new(
                ErrorImpl::DuplicateCategoryName {
                    name: name.to_string(),
                },
                Position::null(),
            ));
        }
    }

    for (spelling, kind) in RESERVED_LOOKUP.iter() {
        if !kind.is_keyword() || kind.name() != *spelling {
            return Err(Error::new(
                ErrorImpl::KeywordCategoryMismatch {
                    spelling: spelling.to_string(),
                    category: kind.name().to_string(),
                },
                Position::null(),
            ));
        }
    }

    for kind in TokenKind::ALL.iter().filter(|kind| kind.is_keyword()) {
        let spellings = RESERVED_LOOKUP.values().filter(|k| *k == kind).count();
        if spellings != 1 {
            return Err(Error::new(
                ErrorImpl::MissingKeywordSpelling {
                    category: kind.name().to_string(),
                },
                Position::null(),
            ));
        }
    }

    Ok(())
}
