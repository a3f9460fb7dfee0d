use std::io::{self, BufRead, Write};

use clap::Parser;
use tricalc::evaluate;

/// tricalc is a small command-line calculator with support for
/// parentheses, the constant pi, and trigonometric functions over degrees.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the
    /// interactive prompt.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        match evaluate(&expression) {
            Ok(value) => println!("Result: {value}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            },
        }

        return;
    }

    run_prompt();
}

/// Reads one expression per line from standard input until `exit` or end
/// of input. Evaluation errors are printed and never terminate the loop.
fn run_prompt() {
    println!("Welcome! To exit just type exit");

    let mut stdin = io::stdin().lock();
    let mut input = String::new();

    loop {
        print!("$ ");
        if io::stdout().flush().is_err() {
            break;
        }

        input.clear();
        match stdin.read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            },
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }

        match evaluate(line) {
            Ok(value) => println!("Result: {value}"),
            Err(e) => println!("Error: {e}"),
        }
    }
}
