use thiserror::Error;

use crate::node::NodeKind;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Tokenizer error: {0}")]
    Tokenize(#[from] TokenizeError),
    #[error("Invalid position {line}:{column}, lines are 1-based")]
    InvalidPosition { line: usize, column: usize },
    #[error("Line {line} is out of range, source has {lines} line(s)")]
    LineOutOfRange { line: usize, lines: usize },
    #[error("{kind} has no field named {field}")]
    UnknownField { kind: NodeKind, field: String },
    #[error("Failed to encode document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reported by a grammar parser, surfaced before any position work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}{}", location(.line, .column))]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

fn location(line: &Option<usize>, column: &Option<usize>) -> String {
    match (*line, *column) {
        (Some(line), Some(column)) => format!(" at {line}:{column}"),
        (Some(line), None) => format!(" at line {line}"),
        _ => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unindent does not match any outer indentation level")]
    InconsistentDedent,
    #[error("EOF in multi-line statement")]
    UnexpectedEof,
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {line}:{column}")]
pub struct TokenizeError {
    pub kind: TokenizeErrorKind,
    pub line: usize,
    pub column: usize,
}

impl TokenizeError {
    pub fn new(kind: TokenizeErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }
}
