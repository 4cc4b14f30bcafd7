use std::{
    env,
    fs,
    io::{self, Read},
    process,
    time::Instant,
};

use lexan::{
    decode_source, display_error,
    errors::errors::{Error, ErrorImpl},
    init_tracing,
    lexer::{
        lexer::Lexer,
        tokens::{validate_tables, TokenKind},
    },
    Position,
};
use tracing::info;

fn main() {
    init_tracing();

    if let Err(error) = validate_tables() {
        display_error(&error, "");
        process::exit(1);
    }

    let args: Vec<String> = env::args().collect();

    let (source, file_name) = match read_source(&args) {
        Ok(input) => input,
        Err(error) => {
            display_error(&error, "");
            process::exit(1);
        }
    };

    let start = Instant::now();
    let mut lexer = Lexer::new(source.clone(), Some(file_name));

    let mut count = 0;
    loop {
        let token = lexer.get_token();
        println!("{}", token);
        count += 1;

        if token.kind == TokenKind::EOF {
            break;
        }
    }

    info!(tokens = count, elapsed = ?start.elapsed(), "tokenized");

    for error in lexer.diagnostics() {
        display_error(error, &source);
    }
}

fn read_source(args: &[String]) -> Result<(String, String), Error> {
    match args {
        [_] => {
            let mut bytes = vec![];
            io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|error| input_error(error.to_string()))?;
            Ok((decode_source(&bytes), String::from("stdin")))
        }
        [_, file_path] => {
            let bytes = fs::read(file_path)
                .map_err(|error| input_error(format!("{}: {}", file_path, error)))?;
            let source = decode_source(&bytes);
            let file_name = file_path.rsplit('/').next().unwrap_or(file_path);
            Ok((source, file_name.to_string()))
        }
        _ => Err(Error::new(
            ErrorImpl::IncorrectArguments {
                received: args.len().saturating_sub(1),
            },
            Position::null(),
        )),
    }
}

fn input_error(message: String) -> Error {
    Error::new(ErrorImpl::InputError { message }, Position::null())
}
