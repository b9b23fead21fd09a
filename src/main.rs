use std::{env, fs::read_to_string, path::Path, process::exit, time::Instant};

use plumber::{
    ast::{names::NameCollector, printer::AstPrinter},
    eval::evaluator::Evaluator,
    lexer::lexer::tokenize,
    parser::parser::parse,
    render_error,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: plumber <expression> | plumber --file <path>";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let (source, file_name) = match args.as_slice() {
        [_, flag, path] if flag == "--file" => match read_to_string(path) {
            Ok(contents) => {
                let name = Path::new(path)
                    .file_name()
                    .map_or_else(|| path.clone(), |n| n.to_string_lossy().into_owned());
                (contents, name)
            }
            Err(e) => {
                eprintln!("Failed to read {}: {}", path, e);
                exit(66);
            }
        },
        // `--5` is a double negation, only `--file` is a flag
        [_, expression] if expression != "--file" => {
            (expression.clone(), String::from("shell"))
        }
        _ => {
            eprintln!("{}", USAGE);
            exit(64);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source, Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", render_error(&error, &source, &file_name));
            exit(65);
        }
    };

    debug!(elapsed = ?start.elapsed(), "tokenized");

    let ast = match parse(tokens) {
        Ok(ast) => ast,
        Err(error) => {
            eprint!("{}", render_error(&error, &source, &file_name));
            exit(65);
        }
    };

    debug!(elapsed = ?start.elapsed(), "parsed");

    println!("{}", AstPrinter.print(&ast));

    let names = NameCollector::collect(&ast);
    if !names.reads.is_empty() || !names.writes.is_empty() {
        info!(reads = ?names.read_names(), writes = ?names.written_names(), "bindings");
    }

    match Evaluator.evaluate(&ast) {
        Ok(value) => println!("{}", value),
        Err(error) => {
            eprint!("{}", render_error(&error, &source, &file_name));
            exit(70);
        }
    }

    debug!(elapsed = ?start.elapsed(), "done");
}
