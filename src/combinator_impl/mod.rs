//! Lambda calculus parser built from small, pure parser combinators, along
//! with the expression tree it produces and a formatter for that tree.

pub mod combinator_core;
pub mod lambda_ast;
pub mod lambda_grammar;
