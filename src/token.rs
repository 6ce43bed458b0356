//! Lexical tokens, raw and corrected.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::node::Position;
use crate::source::SourceIndex;

/// Token types, named after CPython's `token` module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Name,
    Number,
    String,
    Op,
    Comment,
    Newline,
    Nl,
    Indent,
    Dedent,
    #[serde(rename = "ENDMARKER")]
    EndMarker,
    #[serde(rename = "ERRORTOKEN")]
    ErrorToken,
    /// Source encoding, first in byte-oriented streams.
    Encoding,
    FstringStart,
    FstringMiddle,
    FstringEnd,
    TypeComment,
    SoftKeyword,
    /// Any token type this enum does not name.
    #[serde(other)]
    Other,
}

impl TokenKind {
    /// Markers emitted for the token stream's structure rather than for
    /// any source text a node could start at.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            TokenKind::Encoding | TokenKind::Indent | TokenKind::Dedent | TokenKind::EndMarker
        )
    }
}

/// A token as yielded by a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawToken {
    pub kind: TokenKind,
    pub text: String,
    pub start: Position,
    pub end: Position,
}

impl RawToken {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: Position, end: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            start,
            end,
        }
    }

    /// Positions of stream-start/end and column-zero dedent markers are
    /// degenerate and do not name a real source span.
    pub fn is_sentinel(&self) -> bool {
        self.start.line == 0 || (self.start.column == 0 && self.end.column == 0)
    }
}

/// Start and end character offsets of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

/// A token with character offsets. `span` is `None` for sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Start position as reported by the tokenizer (code-unit column).
    pub position: Position,
    pub span: Option<TextSpan>,
}

impl Token {
    /// Whether a node may bind to this token.
    pub fn is_matchable(&self) -> bool {
        self.span.is_some() && !self.kind.is_structural()
    }
}

/// Rewrites every raw token into offset form, keeping stream order.
pub fn adapt_tokens(index: &SourceIndex, raw: &[RawToken]) -> Result<Vec<Token>> {
    raw.iter().map(|token| adapt_token(index, token)).collect()
}

fn adapt_token(index: &SourceIndex, token: &RawToken) -> Result<Token> {
    // line 0 never reaches the index as a start: it is a sentinel, and an
    // end on line 0 fails there with `InvalidPosition`
    let span = if token.is_sentinel() {
        None
    } else {
        Some(TextSpan {
            start: index.offset_of(token.start)?,
            end: index.offset_of(token.end)?,
        })
    };

    Ok(Token {
        kind: token.kind,
        text: token.text.clone(),
        position: token.start,
        span,
    })
}
