//! Built-in Python tokenizer.
//!
//! Produces the same token stream as CPython's `tokenize.generate_tokens`
//! for well-formed input, except that columns are UTF-8 byte offsets.

mod comment;
mod name;
mod number;
mod operator;
mod string;

use nom::branch::*;
use nom::bytes::complete::*;
use nom::combinator::*;
use nom::Parser;

use crate::error::{TokenizeError, TokenizeErrorKind};
use crate::node::Position;
use crate::pipeline::Tokenizer;
use crate::result::{LexResult, Span};
use crate::span::{end_of, point};
use crate::token::{RawToken, TokenKind};

use self::comment::{blank0, comment, continuation, newline};
use self::name::name;
use self::number::number;
use self::operator::{depth_change, operator};
use self::string::string;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonTokenizer {
    /// Width a tab advances indentation to the next multiple of.
    pub tab_size: usize,
}

impl Default for PythonTokenizer {
    fn default() -> Self {
        Self { tab_size: 8 }
    }
}

impl PythonTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tab_size(tab_size: usize) -> Self {
        Self { tab_size }
    }
}

impl Tokenizer for PythonTokenizer {
    fn tokenize(&self, source: &str) -> Result<Vec<RawToken>, TokenizeError> {
        let tokens = Lexer::new(source, self.tab_size).run()?;
        log::debug!("tokenized {} byte(s) into {} token(s)", source.len(), tokens.len());
        Ok(tokens)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    Token(TokenKind),
    Newline,
    Continuation,
}

/// parse the next lexeme after blanks have been skipped
fn next_lexeme(input: Span) -> LexResult<(Lexeme, Span)> {
    alt((
        map(comment, |text| (Lexeme::Token(TokenKind::Comment), text)),
        map(newline, |text| (Lexeme::Newline, text)),
        map(continuation, |text| (Lexeme::Continuation, text)),
        map(string, |text| (Lexeme::Token(TokenKind::String), text)),
        map(number, |text| (Lexeme::Token(TokenKind::Number), text)),
        map(name, |text| (Lexeme::Token(TokenKind::Name), text)),
        map(operator, |text| (Lexeme::Token(TokenKind::Op), text)),
        map(take(1usize), |text| (Lexeme::Token(TokenKind::ErrorToken), text)),
    ))
    .parse(input)
}

struct Lexer<'a> {
    rest: Span<'a>,
    tab_size: usize,
    tokens: Vec<RawToken>,
    indents: Vec<usize>,
    /// Open brackets; line breaks inside them are not logical line ends.
    depth: usize,
    at_line_start: bool,
    /// The current line holds nothing but blanks and a comment.
    blank_line: bool,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str, tab_size: usize) -> Self {
        Self {
            rest: Span::new(source),
            tab_size,
            tokens: Vec::new(),
            indents: vec![0],
            depth: 0,
            at_line_start: true,
            blank_line: false,
        }
    }

    fn run(mut self) -> Result<Vec<RawToken>, TokenizeError> {
        loop {
            if self.at_line_start {
                self.at_line_start = false;
                if self.depth == 0 {
                    self.indentation()?;
                }
            }
            self.skip_blanks();
            if self.rest.fragment().is_empty() {
                break;
            }
            self.next_token()?;
        }
        self.finish()
    }

    fn skip_blanks(&mut self) -> Span<'a> {
        match blank0(self.rest) {
            Ok((rest, blanks)) => {
                self.rest = rest;
                blanks
            }
            Err(_) => self.rest,
        }
    }

    fn column_of(&self, blanks: &str) -> usize {
        blanks.chars().fold(0, |column, c| match c {
            '\t' if self.tab_size > 0 => (column / self.tab_size + 1) * self.tab_size,
            '\x0c' => 0,
            _ => column + 1,
        })
    }

    fn indentation(&mut self) -> Result<(), TokenizeError> {
        let line_start = self.rest;
        let blanks = self.skip_blanks();
        let next = self.rest.fragment();
        if next.is_empty() {
            return Ok(());
        }
        if next.starts_with(['#', '\r', '\n']) {
            self.blank_line = true;
            return Ok(());
        }

        let column = self.column_of(blanks.fragment());
        let current = self.indents.last().copied().unwrap_or(0);
        let here = point(&self.rest);
        if column > current {
            self.indents.push(column);
            self.push(TokenKind::Indent, blanks.fragment(), point(&line_start), here);
            return Ok(());
        }

        while column < self.indents.last().copied().unwrap_or(0) {
            self.indents.pop();
            self.push(TokenKind::Dedent, "", here, here);
        }
        if self.indents.last().copied().unwrap_or(0) != column {
            return Err(TokenizeError::new(
                TokenizeErrorKind::InconsistentDedent,
                here.line,
                here.column,
            ));
        }
        Ok(())
    }

    fn next_token(&mut self) -> Result<(), TokenizeError> {
        let start = point(&self.rest);
        let (rest, (lexeme, text)) = next_lexeme(self.rest).map_err(|err| {
            let kind = match err {
                nom::Err::Failure(_) => TokenizeErrorKind::UnterminatedString,
                _ => TokenizeErrorKind::Other("unexpected input".to_string()),
            };
            TokenizeError::new(kind, start.line, start.column)
        })?;
        self.rest = rest;

        let text = text.fragment();
        match lexeme {
            Lexeme::Continuation => {}
            Lexeme::Newline => {
                let kind = if self.depth > 0 || self.blank_line {
                    TokenKind::Nl
                } else {
                    TokenKind::Newline
                };
                self.push(kind, text, start, end_of(start, text));
                self.at_line_start = true;
                self.blank_line = false;
            }
            Lexeme::Token(kind) => {
                if kind == TokenKind::Op {
                    self.depth = self.depth.saturating_add_signed(depth_change(text));
                }
                self.push(kind, text, start, end_of(start, text));
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<RawToken>, TokenizeError> {
        let eof = point(&self.rest);
        if self.depth > 0 {
            return Err(TokenizeError::new(
                TokenizeErrorKind::UnexpectedEof,
                eof.line,
                eof.column,
            ));
        }

        let line = if eof.column == 0 { eof.line } else { eof.line + 1 };
        let end = Position::new(line, 0);
        let terminated = matches!(
            self.tokens.last().map(|token| token.kind),
            None | Some(TokenKind::Newline | TokenKind::Nl)
        );
        if !terminated {
            let kind = if self.blank_line {
                TokenKind::Nl
            } else {
                TokenKind::Newline
            };
            self.push(kind, "", end, end);
        }
        while self.indents.len() > 1 {
            self.indents.pop();
            self.push(TokenKind::Dedent, "", end, end);
        }
        self.push(TokenKind::EndMarker, "", end, end);
        Ok(self.tokens)
    }

    fn push(&mut self, kind: TokenKind, text: &str, start: Position, end: Position) {
        self.tokens.push(RawToken::new(kind, text, start, end));
    }
}

#[cfg(test)]
pub(crate) fn run<'a>(
    mut parser: impl Parser<Span<'a>, Output = Span<'a>>,
    input: &'a str,
) -> Option<(&'a str, &'a str)> {
    parser
        .parse(Span::new(input))
        .ok()
        .map(|(rest, text)| (*rest.fragment(), *text.fragment()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    type Tok = (TokenKind, std::string::String, (usize, usize), (usize, usize));

    fn tokenize(source: &str) -> Vec<Tok> {
        PythonTokenizer::new()
            .tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| {
                (
                    t.kind,
                    t.text,
                    (t.start.line, t.start.column),
                    (t.end.line, t.end.column),
                )
            })
            .collect()
    }

    fn tok(kind: TokenKind, text: &str, start: (usize, usize), end: (usize, usize)) -> Tok {
        (kind, text.to_string(), start, end)
    }

    #[test]
    fn test_assignment() {
        assert_eq!(
            tokenize("x = 1\n"),
            vec![
                tok(Name, "x", (1, 0), (1, 1)),
                tok(Op, "=", (1, 2), (1, 3)),
                tok(Number, "1", (1, 4), (1, 5)),
                tok(Newline, "\n", (1, 5), (1, 6)),
                tok(EndMarker, "", (2, 0), (2, 0)),
            ]
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(tokenize(""), vec![tok(EndMarker, "", (1, 0), (1, 0))]);
    }

    #[test]
    fn test_unterminated_last_line() {
        assert_eq!(
            tokenize("pass"),
            vec![
                tok(Name, "pass", (1, 0), (1, 4)),
                tok(Newline, "", (2, 0), (2, 0)),
                tok(EndMarker, "", (2, 0), (2, 0)),
            ]
        );
    }

    #[test]
    fn test_indent_and_dedent() {
        assert_eq!(
            tokenize("def f():\n  return 1\n"),
            vec![
                tok(Name, "def", (1, 0), (1, 3)),
                tok(Name, "f", (1, 4), (1, 5)),
                tok(Op, "(", (1, 5), (1, 6)),
                tok(Op, ")", (1, 6), (1, 7)),
                tok(Op, ":", (1, 7), (1, 8)),
                tok(Newline, "\n", (1, 8), (1, 9)),
                tok(Indent, "  ", (2, 0), (2, 2)),
                tok(Name, "return", (2, 2), (2, 8)),
                tok(Number, "1", (2, 9), (2, 10)),
                tok(Newline, "\n", (2, 10), (2, 11)),
                tok(Dedent, "", (3, 0), (3, 0)),
                tok(EndMarker, "", (3, 0), (3, 0)),
            ]
        );
    }

    #[test]
    fn test_dedent_inside_block() {
        let tokens = tokenize("def f():\n    if x:\n        y\n    return y\n");
        let line4: Vec<_> = tokens.iter().filter(|t| t.2 .0 == 4).collect();
        assert_eq!(line4[0], &tok(Dedent, "", (4, 4), (4, 4)));
        assert_eq!(line4[1], &tok(Name, "return", (4, 4), (4, 10)));
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(
            tokenize("x\n\n  # note\ny\n"),
            vec![
                tok(Name, "x", (1, 0), (1, 1)),
                tok(Newline, "\n", (1, 1), (1, 2)),
                tok(Nl, "\n", (2, 0), (2, 1)),
                tok(Comment, "# note", (3, 2), (3, 8)),
                tok(Nl, "\n", (3, 8), (3, 9)),
                tok(Name, "y", (4, 0), (4, 1)),
                tok(Newline, "\n", (4, 1), (4, 2)),
                tok(EndMarker, "", (5, 0), (5, 0)),
            ]
        );
    }

    #[test]
    fn test_brackets_span_lines() {
        let tokens = tokenize("f(a,\n    b)\n");
        let kinds: Vec<_> = tokens.iter().map(|t| t.0).collect();
        assert_eq!(
            kinds,
            vec![Name, Op, Name, Op, Nl, Name, Op, Newline, EndMarker]
        );
        assert_eq!(tokens[5], tok(Name, "b", (2, 4), (2, 5)));
    }

    #[test]
    fn test_backslash_continuation() {
        let tokens = tokenize("x = 1 + \\\n    2\n");
        let kinds: Vec<_> = tokens.iter().map(|t| t.0).collect();
        assert_eq!(kinds, vec![Name, Op, Number, Op, Number, Newline, EndMarker]);
        assert_eq!(tokens[4], tok(Number, "2", (2, 4), (2, 5)));
    }

    #[test]
    fn test_multiline_string() {
        let tokens = tokenize("s = '''a\nb'''\n");
        assert_eq!(tokens[2], tok(String, "'''a\nb'''", (1, 4), (2, 4)));
        assert_eq!(tokens[3], tok(Newline, "\n", (2, 4), (2, 5)));
    }

    #[test]
    fn test_multibyte_columns() {
        let tokens = tokenize("é = 'ü'; x\n");
        assert_eq!(tokens[0], tok(Name, "é", (1, 0), (1, 2)));
        assert_eq!(tokens[2], tok(String, "'ü'", (1, 5), (1, 9)));
        assert_eq!(tokens[4], tok(Name, "x", (1, 11), (1, 12)));
    }

    #[test]
    fn test_tabs() {
        let tokens = tokenize("if x:\n\ty\n        z\n");
        let kinds: Vec<_> = tokens.iter().map(|t| t.0).collect();
        assert_eq!(
            kinds,
            vec![Name, Name, Op, Newline, Indent, Name, Newline, Name, Newline, Dedent, EndMarker]
        );
    }

    #[test]
    fn test_custom_tab_size() {
        let source = "if x:\n\ty\n    z\n";
        let err = PythonTokenizer::new().tokenize(source).unwrap_err();
        assert_eq!(err.kind, TokenizeErrorKind::InconsistentDedent);

        let tokens = PythonTokenizer::with_tab_size(4).tokenize(source).unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![Name, Name, Op, Newline, Indent, Name, Newline, Name, Newline, Dedent, EndMarker]
        );
        assert_eq!(tokens[4].text, "\t");
    }

    #[test]
    fn test_form_feed_resets_indentation() {
        assert_eq!(
            tokenize("if x:\n\x0c  y\n")[4..6],
            [
                tok(Indent, "\x0c  ", (2, 0), (2, 3)),
                tok(Name, "y", (2, 3), (2, 4)),
            ]
        );

        let tokens = tokenize("if x:\n    y\n  \x0c    z\n");
        let line3: Vec<_> = tokens.iter().filter(|t| t.2 .0 == 3).collect();
        assert_eq!(line3[0], &tok(Name, "z", (3, 7), (3, 8)));
    }

    #[test]
    fn test_crlf_newlines() {
        assert_eq!(
            tokenize("x\r\n\r\ny\r\n"),
            vec![
                tok(Name, "x", (1, 0), (1, 1)),
                tok(Newline, "\r\n", (1, 1), (1, 3)),
                tok(Nl, "\r\n", (2, 0), (2, 2)),
                tok(Name, "y", (3, 0), (3, 1)),
                tok(Newline, "\r\n", (3, 1), (3, 3)),
                tok(EndMarker, "", (4, 0), (4, 0)),
            ]
        );
    }

    #[test]
    fn test_error_token() {
        let tokens = tokenize("a $ b\n");
        assert_eq!(tokens[1], tok(ErrorToken, "$", (1, 2), (1, 3)));
    }

    #[test]
    fn test_errors() {
        let tokenizer = PythonTokenizer::new();

        let err = tokenizer.tokenize("x = 'abc\n").unwrap_err();
        assert_eq!(err.kind, TokenizeErrorKind::UnterminatedString);
        assert_eq!((err.line, err.column), (1, 4));

        let err = tokenizer.tokenize("if x:\n    y\n  z\n").unwrap_err();
        assert_eq!(err.kind, TokenizeErrorKind::InconsistentDedent);
        assert_eq!((err.line, err.column), (3, 2));

        let err = tokenizer.tokenize("f(a,\n").unwrap_err();
        assert_eq!(err.kind, TokenizeErrorKind::UnexpectedEof);
    }
}
