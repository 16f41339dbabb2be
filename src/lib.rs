//! This crate contains a parser-combinator based parser for untyped lambda
//! calculus expressions, and a formatter that makes their structure visible.

pub mod combinator_impl;
pub mod end_to_end;
pub mod source_preprocessing;
