//! Code to configure and run the parser and formatter on input expressions.

use std::fs;

use clap::{ArgGroup, Parser};
use thiserror::Error;

use crate::combinator_impl::lambda_ast::format_expr;
use crate::combinator_impl::lambda_grammar::{parse_complete, LambdaParseError};
use crate::source_preprocessing::{split_source_expressions, SourceExpression};

/// Config for the formatter. Instantiate via `FormatterConfig::parse()`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["src_filepath", "expression"])))]
pub struct FormatterConfig {
    /// A file holding one lambda expression per line.
    #[arg(short, long)]
    pub src_filepath: Option<String>,

    /// A single lambda expression to parse.
    #[arg(short, long)]
    pub expression: Option<String>,

    /// Print a trace line for every expression to standard error.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Errors that may be thrown when running the formatter.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Formatter configuration error: {0}")]
    ConfigError(String),

    #[error("Input file error: {0}")]
    InputFileError(#[from] std::io::Error),

    #[error("Parse error at line {line_num} ({expr_text:?}): {parse_error}")]
    ExpressionError {
        line_num: usize,
        expr_text: String,
        parse_error: LambdaParseError,
    },
}

// Parses and formats a single expression.
fn format_source_expression(
    source_expression: &SourceExpression,
    verbose: bool,
) -> Result<String, RunError> {
    if verbose {
        eprintln!(
            "Parsing line {}: {}",
            source_expression.line_num, source_expression.expr_text
        );
    }

    let expr = parse_complete(source_expression.expr_text.as_str()).map_err(|parse_error| {
        if verbose {
            eprintln!("Failed on line {}: {}", source_expression.line_num, parse_error);
        }

        RunError::ExpressionError {
            line_num: source_expression.line_num,
            expr_text: source_expression.expr_text.clone(),
            parse_error,
        }
    })?;

    return Ok(format_expr(&expr));
}

/// Parses and formats every expression in `source_str`, one output line per
/// expression. Stops at the first expression that does not parse.
pub fn format_source(source_str: &str, verbose: bool) -> Result<String, RunError> {
    let source_expressions = split_source_expressions(source_str);

    if verbose {
        eprintln!("Found {} expression(s).", source_expressions.len());
    }

    let mut out = vec![];

    for source_expression in &source_expressions {
        out.push(format_source_expression(source_expression, verbose)?);
    }

    return Ok(out.join("\n"));
}

/// Run the formatter (i.e. the source splitting, parser, and formatting)
/// given a formatter config.
pub fn run_formatter(config: &FormatterConfig) -> Result<String, RunError> {
    match (&config.src_filepath, &config.expression) {
        (Some(src_filepath), None) => {
            // Read the input file into a string.
            let source_string = fs::read_to_string(src_filepath)?;
            return format_source(source_string.as_str(), config.verbose);
        }

        (None, Some(expression)) => {
            let source_expression = SourceExpression {
                line_num: 1,
                expr_text: expression.clone(),
            };
            return format_source_expression(&source_expression, config.verbose);
        }

        _ => {
            return Err(RunError::ConfigError(String::from(
                "Exactly one of --src-filepath and --expression must be given",
            )));
        }
    }
}
