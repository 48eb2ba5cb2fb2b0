use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use sprig::{
    display_error,
    lexer::{lexer::tokenize, tokens::dump_tokens},
    parser::parser::parse,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file>", args.first().map(String::as_str).unwrap_or("sprig"));
        return ExitCode::from(2);
    }

    let file_path: &str = &args[1];
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(err) => {
            error!(%err, path = file_path, "failed to read source file");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&file_contents) {
        Ok(tokens) => tokens,
        Err(err) => {
            display_error(&err, &file_contents, file_name);
            return ExitCode::FAILURE;
        }
    };

    info!("Tokenized in {:?}", start.elapsed());

    println!("=====================================");
    println!("{}", dump_tokens(&tokens));
    println!("=====================================");

    let parse_start = Instant::now();
    let parsed = parse(tokens);

    info!("Parsed in {:?}", parse_start.elapsed());

    for declaration in &parsed.body {
        println!("{}", declaration);
    }

    for err in &parsed.errors {
        display_error(err, &file_contents, file_name);
    }

    info!("Total time: {:?}", start.elapsed());

    if parsed.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
