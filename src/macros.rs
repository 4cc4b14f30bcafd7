//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The source text the token was scanned from
/// * `$line` - The line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            line: $line,
        }
    };
}
