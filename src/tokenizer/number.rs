use nom::branch::*;
use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::multi::*;
use nom::sequence::*;
use nom::Parser;

use crate::result::{LexResult, Span};

/// parse a numeric literal: integers in any radix, floats, exponents and
/// imaginary suffixes, with `_` digit separators
pub fn number(input: Span) -> LexResult<Span> {
    alt((radix_integer, decimal)).parse(input)
}

/// parse like `0x_ff`, `0o17`, `0b1010`
fn radix_integer(input: Span) -> LexResult<Span> {
    recognize((
        char('0'),
        one_of("xXoObB"),
        take_while1(|c: char| c.is_ascii_hexdigit() || c == '_'),
    ))
    .parse(input)
}

/// parse like `10`, `1_000.5`, `.5e-3`, `2j`
fn decimal(input: Span) -> LexResult<Span> {
    recognize((
        alt((
            recognize(pair(digits, opt(pair(char('.'), opt(digits))))),
            recognize(pair(char('.'), digits)),
        )),
        opt((one_of("eE"), opt(one_of("+-")), digits)),
        opt(one_of("jJ")),
    ))
    .parse(input)
}

fn digits(input: Span) -> LexResult<Span> {
    recognize(pair(digit1, many0(pair(char('_'), digit1)))).parse(input)
}
