//! Lambda calculus grammar built from the combinators in `combinator_core`.
//!
//! The grammar is layered to avoid left recursion:
//!
//! ```text
//! expression  -> application
//! application -> term (WHITESPACE term)*      folded to the left
//! term        -> variable | abstraction | grouping
//! abstraction -> λ IDENT . expression
//! grouping    -> ( expression )
//! ```
//!
//! An application is never a term, so parsing an application never starts
//! by parsing another application.

use thiserror::Error;

use crate::combinator_impl::combinator_core::{
    keep_left, keep_right, lazy, literal_char, or_else, satisfy, sep_by_some, some, whitespace,
    Parser,
};
use crate::combinator_impl::lambda_ast::LExpr;

/// The symbol that introduces an abstraction.
pub const LAMBDA_SYMBOL: char = 'λ';

/// ASCII stand-in for `LAMBDA_SYMBOL`.
pub const ASCII_LAMBDA_SYMBOL: char = '\\';

/// Errors from parsing a whole input string with `parse_complete`.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum LambdaParseError {
    #[error("could not parse a lambda expression")]
    CouldNotParse,

    #[error("unexpected input after the expression: {remaining:?}")]
    UnconsumedInput { remaining: String },
}

// 'λ' is alphabetic, so it has to be excluded explicitly.
fn is_identifier_char(c: char) -> bool {
    return c.is_alphanumeric() && c != LAMBDA_SYMBOL;
}

/// A nonempty maximal run of identifier characters.
pub fn literal() -> Parser<String> {
    return some(satisfy(is_identifier_char)).map(|chars| chars.into_iter().collect());
}

/// Parses an expression that looks like `[IDENTIFIER]`.
pub fn variable() -> Parser<LExpr> {
    return literal().map(|var_name| LExpr::Variable { var_name });
}

/// Parses an expression that looks like `([EXPR])`. Whitespace just inside
/// the parentheses is allowed.
pub fn grouping() -> Parser<LExpr> {
    let open_paren = keep_left(literal_char('('), whitespace());
    let close_paren = keep_right(whitespace(), literal_char(')'));

    return keep_left(keep_right(open_paren, lazy(expression)), close_paren);
}

/// Parses an expression that looks like `λ[IDENTIFIER].[EXPR]`. The body
/// extends as far right as possible.
pub fn abstraction() -> Parser<LExpr> {
    let lambda_symbol = literal_char(LAMBDA_SYMBOL).or_else(literal_char(ASCII_LAMBDA_SYMBOL));
    let bound_var = keep_right(keep_right(lambda_symbol, whitespace()), literal());
    let dot = keep_right(whitespace(), literal_char('.'));
    let body = keep_right(whitespace(), lazy(expression));

    return keep_left(bound_var, dot)
        .and_then(body)
        .map(|(bound_var, body)| LExpr::Abstraction {
            bound_var,
            body: Box::new(body),
        });
}

/// Parses anything except a top-level application.
pub fn term() -> Parser<LExpr> {
    return or_else(or_else(variable(), abstraction()), grouping());
}

/// Parses a whitespace-separated sequence of terms and folds it into
/// left-associative applications.
pub fn application() -> Parser<LExpr> {
    let separator = some(satisfy(char::is_whitespace));
    let terms_parser = sep_by_some(term(), separator);

    return Parser::new(move |input: &str| {
        let (terms, remaining) = terms_parser.run(input)?;
        let mut terms = terms.into_iter();

        // sep_by_some only succeeds with at least one term.
        let mut out_expr = terms.next()?;

        for next_term in terms {
            out_expr = LExpr::Application {
                fn_expr: Box::new(out_expr),
                arg_expr: Box::new(next_term),
            };
        }

        return Some((out_expr, remaining));
    });
}

/// Parses a full lambda expression.
///
/// A single term is an application of one term, so `application` covers
/// bare terms as well and no separate `term` fallback is tried.
pub fn expression() -> Parser<LExpr> {
    return application();
}

/// Runs `parser` on `input`. A result with a nonempty remainder means only
/// a prefix of `input` was parsed.
///
/// Parsing recurses once per nested parenthesis or abstraction, so nesting
/// depth is bounded by the thread's stack. A few hundred levels are fine;
/// thousands can overflow it.
pub fn parse<'a, T: 'static>(parser: &Parser<T>, input: &'a str) -> Option<(T, &'a str)> {
    return parser.run(input);
}

/// Parses `input` as a single expression, allowing surrounding whitespace
/// and rejecting anything left over.
pub fn parse_complete(input: &str) -> Result<LExpr, LambdaParseError> {
    let padded_expression = keep_left(keep_right(whitespace(), expression()), whitespace());

    match parse(&padded_expression, input) {
        None => {
            return Err(LambdaParseError::CouldNotParse);
        }
        Some((expr, "")) => {
            return Ok(expr);
        }
        Some((_, remaining)) => {
            return Err(LambdaParseError::UnconsumedInput {
                remaining: String::from(remaining),
            });
        }
    }
}
