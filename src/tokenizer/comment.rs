use nom::branch::*;
use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::sequence::*;
use nom::Parser;

use crate::result::{LexResult, Span};

/// parse comment like `# comment`, up to but excluding the line break
pub fn comment(input: Span) -> LexResult<Span> {
    recognize(pair(char('#'), take_while(|c: char| c != '\r' && c != '\n'))).parse(input)
}

/// parse one line break, `\r\n`, `\n` or a lone `\r`
pub fn newline(input: Span) -> LexResult<Span> {
    alt((tag("\r\n"), tag("\n"), tag("\r"))).parse(input)
}

/// parse a backslash joining the line with the next one
pub fn continuation(input: Span) -> LexResult<Span> {
    recognize(pair(char('\\'), newline)).parse(input)
}

/// match blanks inside a line, including form feeds
pub fn blank0(input: Span) -> LexResult<Span> {
    take_while(|c: char| c == ' ' || c == '\t' || c == '\x0c').parse(input)
}
