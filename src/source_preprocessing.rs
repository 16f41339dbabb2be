//! Splits a source file into the individual expressions it contains.
//!
//! A source file holds one expression per line. `//` starts a comment that
//! runs to the end of the line, and lines that are blank after comment
//! removal are skipped.

use lazy_static::lazy_static;
use regex::Regex;

/// A single expression's text and the line it came from.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SourceExpression {
    pub line_num: usize,
    pub expr_text: String,
}

lazy_static! {
    static ref comment_regex: Regex =
        Regex::new(r"//.*$").expect("Unable to compile comment regex.");
    static ref blank_line_regex: Regex =
        Regex::new(r"^\s*$").expect("Unable to compile blank line regex.");
}

// Removes a trailing `//` comment from a single line.
fn strip_comment(line: &str) -> &str {
    match comment_regex.find(line) {
        Some(match_obj) => return &line[..match_obj.start()],
        None => return line,
    };
}

/// Collects the expressions in `source_str`, numbering lines from 1.
pub fn split_source_expressions(source_str: &str) -> Vec<SourceExpression> {
    let mut out = Vec::new();

    for (line_idx, line) in source_str.lines().enumerate() {
        let expr_text = strip_comment(line);

        if blank_line_regex.is_match(expr_text) {
            continue;
        }

        out.push(SourceExpression {
            line_num: line_idx + 1,
            expr_text: String::from(expr_text.trim()),
        });
    }

    return out;
}
