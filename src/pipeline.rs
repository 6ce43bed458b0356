//! Driver tying the grammar parser and tokenizer to the position stages.

use crate::augment::{augment, Augmented};
use crate::error::{ParseError, Result, TokenizeError};
use crate::node::Node;
use crate::options::Options;
use crate::token::RawToken;

/// Builds a syntax tree from source text.
pub trait GrammarParser {
    fn parse(&self, source: &str) -> Result<Node, ParseError>;
}

impl<F> GrammarParser for F
where
    F: Fn(&str) -> Result<Node, ParseError>,
{
    fn parse(&self, source: &str) -> Result<Node, ParseError> {
        self(source)
    }
}

/// Splits source text into a complete, ordered token stream.
pub trait Tokenizer {
    fn tokenize(&self, source: &str) -> Result<Vec<RawToken>, TokenizeError>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Result<Vec<RawToken>, TokenizeError>,
{
    fn tokenize(&self, source: &str) -> Result<Vec<RawToken>, TokenizeError> {
        self(source)
    }
}

pub struct Pipeline<P, T> {
    parser: P,
    tokenizer: T,
    options: Options,
}

impl<P: GrammarParser, T: Tokenizer> Pipeline<P, T> {
    pub fn new(parser: P, tokenizer: T) -> Self {
        Self {
            parser,
            tokenizer,
            options: Options::default(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parses, tokenizes and computes positions for one source text.
    ///
    /// Parser and tokenizer failures abort the run; nothing is computed
    /// past them.
    pub fn augment(&self, source: &str) -> Result<Augmented> {
        let tree = self.parser.parse(source)?;
        let tokens = self.tokenizer.tokenize(source)?;
        log::debug!("parsed a {} root, {} token(s)", tree.kind(), tokens.len());
        augment(source, tree, &tokens)
    }

    pub fn run(&self, source: &str) -> Result<serde_json::Value> {
        let augmented = self.augment(source)?;
        Ok(augmented.document(&self.options).to_value()?)
    }

    pub fn run_to_string(&self, source: &str) -> Result<String> {
        let augmented = self.augment(source)?;
        Ok(augmented.document(&self.options).to_json()?)
    }
}
