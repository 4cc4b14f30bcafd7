#![allow(clippy::module_inception)]

use std::{rc::Rc, sync::Once};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// A source line (1-based) and the name of the source it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

static TRACING_INIT: Once = Once::new();

/// Installs a `tracing` subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=lexan=debug` to see every abandoned literal hypothesis.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Turns raw input bytes into lexer source. Invalid UTF-8 becomes U+FFFD,
/// which the lexer reports as an `Error` token like any other stray
/// character.
pub fn decode_source(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.split('\n').nth(line as usize - 1)
}


pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: UnrecognisedCharacter (...)
        -> prog.txt:20
           |
        20 | a = b @ c;
    */

    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }

    let position = error.get_position();
    let line_text = match get_line(source, position.0) {
        Some(line_text) => line_text,
        None => {
            rendered.push_str(&format!("-> {}\n", error));
            return rendered;
        }
    };

    rendered.push_str(&format!("-> {}:{}\n", position.1, position.0));

    let line_string = position.0.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));
    rendered.push_str(&format!("{} | {}\n", line_string, line_text.trim()));

    rendered
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", render_error(error, source));
}
