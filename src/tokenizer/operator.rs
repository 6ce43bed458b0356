use nom::bytes::complete::*;
use nom::error::{ErrorKind, ParseError};
use nom::Parser;
use nom_language::error::VerboseError;

use crate::result::{LexResult, Span};

/// Longest first, so a prefix never shadows a longer operator.
const OPERATORS: &[&str] = &[
    "**=", "//=", ">>=", "<<=", "...", //
    "->", ":=", "!=", "%=", "&=", "**", "*=", "+=", "-=", "//", "/=", "<<", "<=", "==", ">=",
    ">>", "@=", "^=", "|=", //
    "(", ")", "[", "]", "{", "}", ":", ",", ";", ".", "+", "-", "*", "/", "|", "&", "<", ">",
    "=", "%", "~", "^", "@", "!",
];

/// parse an operator or delimiter
pub fn operator(input: Span) -> LexResult<Span> {
    match OPERATORS
        .iter()
        .find(|op| input.fragment().starts_with(**op))
    {
        Some(op) => take(op.len()).parse(input),
        None => Err(nom::Err::Error(VerboseError::from_error_kind(
            input,
            ErrorKind::Tag,
        ))),
    }
}

/// Change in bracket depth caused by an operator.
pub fn depth_change(op: &str) -> isize {
    match op {
        "(" | "[" | "{" => 1,
        ")" | "]" | "}" => -1,
        _ => 0,
    }
}
