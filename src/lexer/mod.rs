//! Lexical analysis module.
//!
//! This module turns a character stream into tokens for a parser:
//!
//! - Character input with unlimited pushback
//! - Recognition of reserved words, names and symbols
//! - Suffixed numeric literals (`17x08`, `1Fx16`, `ABx16`) resolved by backtracking
//! - Line tracking and token pushback for the parser

pub mod input;
pub mod lexer;
pub(crate) mod number;
pub mod tokens;
pub(crate) mod word;
