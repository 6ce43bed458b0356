use nom::branch::*;
use nom::bytes::complete::*;
use nom::combinator::*;
use nom::error::{context, ErrorKind, ParseError};
use nom::Parser;
use nom_language::error::VerboseError;

use crate::result::{LexResult, Span};

/// parse a string literal with its prefix and quotes, like `rb'\d'` or a
/// triple quoted block spanning lines
///
/// Once the opening quote is seen the literal must close, otherwise the
/// result is a failure rather than a recoverable error.
pub fn string<'a>(input: Span<'a>) -> LexResult<'a, Span<'a>> {
    recognize(|input: Span<'a>| -> LexResult<'a, Span<'a>> {
        let (input, _) = take_while_m_n(0, 3, |c: char| "rRbBuUfF".contains(c)).parse(input)?;
        let (input, quote) = alt((tag("\"\"\""), tag("'''"), tag("\""), tag("'"))).parse(input)?;
        let quote: &'a str = *quote.fragment();
        cut(context("string", move |body: Span<'a>| string_body(body, quote))).parse(input)
    })
    .parse(input)
}

/// match up to and including the closing `quote`
fn string_body<'a>(input: Span<'a>, quote: &str) -> LexResult<'a, Span<'a>> {
    let text = input.fragment();
    let triple = quote.len() == 3;
    let mut chars = text.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                if let Some((_, '\r')) = chars.next() {
                    if text[i + 2..].starts_with('\n') {
                        chars.next();
                    }
                }
            }
            '\r' | '\n' if !triple => break,
            _ if text[i..].starts_with(quote) => {
                let end = i + quote.len();
                return take(text[..end].chars().count()).parse(input);
            }
            _ => {}
        }
    }
    Err(nom::Err::Error(VerboseError::from_error_kind(
        input,
        ErrorKind::Char,
    )))
}
