//! Parse lambda calculus expressions and print their bracketed form to
//! standard output.
//!
//! Example usage:
//!
//!     cargo run -- --expression '(λx.x) t (λy.λz.z)'
//!     cargo run -- --src-filepath demos/church_numerals.lc --verbose

use clap::Parser;
use lambda_combinator_parser::end_to_end::{run_formatter, FormatterConfig};

fn main() {
    let formatter_config = FormatterConfig::parse();

    let formatter_result = run_formatter(&formatter_config);

    match formatter_result {
        Ok(formatted_output) => {
            println!("{}", formatted_output);
        }

        Err(run_error) => {
            eprintln!("{}", run_error);
            std::process::exit(1);
        }
    }
}
