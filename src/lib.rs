//! Character-offset positions for Python syntax trees.
//!
//! A grammar parser yields a tree whose nodes carry at most a start line and
//! byte column. This crate re-scans the source with a tokenizer, binds each
//! node to the token at its position and derives `start`/`end` character
//! offsets for every node, then serializes the tree as a tagged JSON
//! document.

pub mod augment;
pub mod error;
pub mod matcher;
pub mod node;
pub mod options;
pub mod pipeline;
pub mod propagate;
pub mod serialize;
pub mod source;
pub mod token;
pub mod tree;

#[cfg(feature = "tokenizer")]
pub mod result;
#[cfg(feature = "tokenizer")]
mod span;
#[cfg(feature = "tokenizer")]
pub mod tokenizer;

pub use crate::augment::{augment, Augmentation, Augmented, NodeSpan};
pub use crate::error::{Error, ParseError, Result, TokenizeError, TokenizeErrorKind};
pub use crate::node::{Node, NodeKind, Position, Primitive, Value};
pub use crate::options::Options;
pub use crate::pipeline::{GrammarParser, Pipeline, Tokenizer};
pub use crate::serialize::Document;
pub use crate::source::SourceIndex;
pub use crate::token::{RawToken, Token, TokenKind};
pub use crate::tree::NodeId;

#[cfg(feature = "tokenizer")]
pub use crate::tokenizer::PythonTokenizer;
