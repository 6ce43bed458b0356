use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::sequence::*;
use nom::Parser;

use crate::result::{LexResult, Span};

/// parse an identifier or keyword, letters may be any Unicode alphabetic
pub fn name(input: Span) -> LexResult<Span> {
    recognize(pair(
        satisfy(|c: char| c == '_' || c.is_alphabetic()),
        take_while(|c: char| c == '_' || c.is_alphanumeric()),
    ))
    .parse(input)
}
