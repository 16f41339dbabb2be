//! Generic parser combinators over string slices.
//!
//! A `Parser<T>` is a pure function from the remaining input to either a
//! value plus the unconsumed rest of the input, or failure. Since every
//! parser is handed its own input slice and returns a new one, a failed
//! alternative can always be retried against the original input.

use std::cell::OnceCell;
use std::rc::Rc;

type ParseFn<T> = Rc<dyn Fn(&str) -> Option<(T, &str)>>;

/// A composable parser producing values of type `T`.
pub struct Parser<T> {
    parse_fn: ParseFn<T>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        return Parser {
            parse_fn: Rc::clone(&self.parse_fn),
        };
    }
}

impl<T: 'static> Parser<T> {
    /// Wraps a parsing function.
    pub fn new<F>(parse_fn: F) -> Self
    where
        F: Fn(&str) -> Option<(T, &str)> + 'static,
    {
        return Parser {
            parse_fn: Rc::new(parse_fn),
        };
    }

    /// Runs the parser on `input`, returning the value and the remaining input.
    pub fn run<'a>(&self, input: &'a str) -> Option<(T, &'a str)> {
        return (self.parse_fn)(input);
    }

    /// Method form of `or_else`.
    pub fn or_else(self, other: Parser<T>) -> Parser<T> {
        return or_else(self, other);
    }

    /// Method form of `map`.
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> Parser<U> {
        return map(self, f);
    }

    /// Method form of `and_then`.
    pub fn and_then<U: 'static>(self, other: Parser<U>) -> Parser<(T, U)> {
        return and_then(self, other);
    }
}

/// Consumes one character if it satisfies `predicate`.
pub fn satisfy<F>(predicate: F) -> Parser<char>
where
    F: Fn(char) -> bool + 'static,
{
    return Parser::new(move |input: &str| {
        let next_char = input.chars().next()?;

        if predicate(next_char) {
            return Some((next_char, &input[next_char.len_utf8()..]));
        }

        return None;
    });
}

/// Consumes exactly the character `expected`.
pub fn literal_char(expected: char) -> Parser<char> {
    return satisfy(move |c| c == expected);
}

/// Consumes exactly the string `expected`.
pub fn literal_string(expected: &str) -> Parser<String> {
    let expected = String::from(expected);

    return Parser::new(move |input: &str| {
        let rest = input.strip_prefix(expected.as_str())?;
        return Some((expected.clone(), rest));
    });
}

/// Applies `parser` as many times as it succeeds. Never fails.
pub fn many<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    return Parser::new(move |input: &str| {
        let mut results = Vec::new();
        let mut remaining = input;

        // A success that consumes nothing would repeat forever, so it ends
        // the loop as well.
        while let Some((item, rest)) = parser.run(remaining) {
            if rest.len() == remaining.len() {
                break;
            }

            results.push(item);
            remaining = rest;
        }

        return Some((results, remaining));
    });
}

/// Like `many`, but fails if `parser` does not succeed at least once.
pub fn some<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    let rest_parser = many(parser.clone());

    return Parser::new(move |input: &str| {
        let (first, remaining) = parser.run(input)?;
        let (mut rest, remaining) = rest_parser.run(remaining)?;

        rest.insert(0, first);
        return Some((rest, remaining));
    });
}

/// Tries `first`, falling back to `second` on the original input.
pub fn or_else<T: 'static>(first: Parser<T>, second: Parser<T>) -> Parser<T> {
    return Parser::new(move |input: &str| {
        return first.run(input).or_else(|| second.run(input));
    });
}

/// Transforms the value of a successful parse.
pub fn map<T: 'static, U: 'static, F>(parser: Parser<T>, f: F) -> Parser<U>
where
    F: Fn(T) -> U + 'static,
{
    return Parser::new(move |input: &str| {
        let (value, remaining) = parser.run(input)?;
        return Some((f(value), remaining));
    });
}

/// Runs `first` then `second` on what `first` left over.
pub fn and_then<T: 'static, U: 'static>(first: Parser<T>, second: Parser<U>) -> Parser<(T, U)> {
    return Parser::new(move |input: &str| {
        let (first_value, remaining) = first.run(input)?;
        let (second_value, remaining) = second.run(remaining)?;
        return Some(((first_value, second_value), remaining));
    });
}

/// Sequence, keeping only the value of `first`.
pub fn keep_left<T: 'static, U: 'static>(first: Parser<T>, second: Parser<U>) -> Parser<T> {
    return map(and_then(first, second), |(first_value, _)| first_value);
}

/// Sequence, keeping only the value of `second`.
pub fn keep_right<T: 'static, U: 'static>(first: Parser<T>, second: Parser<U>) -> Parser<U> {
    return map(and_then(first, second), |(_, second_value)| second_value);
}

/// One or more `parser` results separated by `separator`.
pub fn sep_by_some<T: 'static, S: 'static>(
    parser: Parser<T>,
    separator: Parser<S>,
) -> Parser<Vec<T>> {
    let rest_parser = many(keep_right(separator, parser.clone()));

    return Parser::new(move |input: &str| {
        let (first, remaining) = parser.run(input)?;
        let (mut rest, remaining) = rest_parser.run(remaining)?;

        rest.insert(0, first);
        return Some((rest, remaining));
    });
}

/// Zero or more `parser` results separated by `separator`. Never fails.
pub fn sep_by<T: 'static, S: 'static>(
    parser: Parser<T>,
    separator: Parser<S>,
) -> Parser<Vec<T>> {
    return or_else(
        sep_by_some(parser, separator),
        Parser::new(|input: &str| Some((Vec::new(), input))),
    );
}

/// An optional run of whitespace. Never fails.
pub fn whitespace() -> Parser<Vec<char>> {
    return many(satisfy(char::is_whitespace));
}

/// Defers building a parser until it first runs. Lets grammar rules refer
/// to each other recursively. The built parser is kept for later runs.
pub fn lazy<T: 'static>(build: fn() -> Parser<T>) -> Parser<T> {
    let built_parser: OnceCell<Parser<T>> = OnceCell::new();

    return Parser::new(move |input: &str| built_parser.get_or_init(build).run(input));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // Test that satisfy consumes one matching character and nothing else.
    #[test]
    fn test_satisfy() {
        let digit = satisfy(|c| c.is_ascii_digit());

        assert_eq!(digit.run("1a"), Some(('1', "a")));
        assert_eq!(digit.run("a1"), None);
        assert_eq!(digit.run(""), None);

        // Multi-byte characters are consumed whole.
        assert_eq!(literal_char('λ').run("λx"), Some(('λ', "x")));
    }

    // Test that a failed literal_string leaks no partial consumption.
    #[test]
    fn test_literal_string() {
        let keyword = literal_string("let");

        assert_eq!(keyword.run("let x"), Some((String::from("let"), " x")));
        assert_eq!(keyword.run("lex"), None);
        assert_eq!(keyword.run("le"), None);

        let either = or_else(literal_string("lex"), literal_string("le"));
        assert_eq!(either.run("lemma"), Some((String::from("le"), "mma")));
    }

    // Test many and some on empty, partial, and full matches.
    #[test]
    fn test_many_and_some() {
        let a_char = literal_char('a');

        assert_eq!(many(a_char.clone()).run("aab"), Some((vec!['a', 'a'], "b")));
        assert_eq!(many(a_char.clone()).run("b"), Some((vec![], "b")));
        assert_eq!(some(a_char.clone()).run("aab"), Some((vec!['a', 'a'], "b")));
        assert_eq!(some(a_char).run("b"), None);

        // A parser that succeeds without consuming must not loop forever.
        assert_eq!(many(whitespace()).run("x"), Some((vec![], "x")));
    }

    // Test that or_else prefers the first alternative and backtracks fully.
    #[test]
    fn test_or_else_backtracking() {
        let ab = map(and_then(literal_char('a'), literal_char('b')), |_| 1);
        let ac = map(and_then(literal_char('a'), literal_char('c')), |_| 2);
        let either = ab.clone().or_else(ac);

        assert_eq!(either.run("ac"), Some((2, "")));
        assert_eq!(either.run("ab"), Some((1, "")));
        assert_eq!(either.run("ad"), None);

        let both = or_else(ab, map(literal_char('a'), |_| 3));
        assert_eq!(both.run("ab"), Some((1, "")));
    }

    // Test sequencing helpers.
    #[test]
    fn test_sequencing() {
        let pair = literal_char('(').and_then(literal_char(')'));
        assert_eq!(pair.run("()x"), Some((('(', ')'), "x")));
        assert_eq!(pair.run("(x"), None);

        let left = keep_left(literal_char('a'), literal_char(';'));
        let right = keep_right(literal_char('a'), literal_char(';'));
        assert_eq!(left.run("a;"), Some(('a', "")));
        assert_eq!(right.run("a;"), Some((';', "")));
    }

    // Test separated lists, including a dangling separator.
    #[test]
    fn test_sep_by() {
        let items = sep_by_some(satisfy(char::is_alphabetic), literal_char(','));

        assert_eq!(items.run("a,b,c"), Some((vec!['a', 'b', 'c'], "")));
        assert_eq!(items.run("a,b,"), Some((vec!['a', 'b'], ",")));
        assert_eq!(items.run(",a"), None);

        let maybe_items = sep_by(satisfy(char::is_alphabetic), literal_char(','));
        assert_eq!(maybe_items.run(",a"), Some((vec![], ",a")));
        assert_eq!(maybe_items.run("a"), Some((vec!['a'], "")));
    }

    // Nested digits like `((1))`, defined recursively through lazy.
    fn nested_digit() -> Parser<char> {
        let grouped = keep_left(
            keep_right(literal_char('('), lazy(nested_digit)),
            literal_char(')'),
        );
        return or_else(satisfy(|c| c.is_ascii_digit()), grouped);
    }

    // Test that a recursive parser built once can be reused on new inputs.
    #[test]
    fn test_lazy_recursion() {
        let parser = nested_digit();

        assert_eq!(parser.run("((7))x"), Some(('7', "x")));
        assert_eq!(parser.run("3"), Some(('3', "")));
        assert_eq!(parser.run("((4)"), None);
        assert_eq!(parser.run("(((((9)))))"), Some(('9', "")));
    }

    // Test that whitespace always succeeds.
    #[test]
    fn test_whitespace() {
        assert_eq!(whitespace().run("  \tx"), Some((vec![' ', ' ', '\t'], "x")));
        assert_eq!(whitespace().run("x"), Some((vec![], "x")));
        assert_eq!(whitespace().run(""), Some((vec![], "")));
    }
}
