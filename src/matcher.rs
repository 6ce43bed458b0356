//! Binding position-bearing nodes to the single token they start at.

use crate::augment::NodeSpan;
use crate::node::Position;
use crate::token::Token;
use crate::tree::TreeIndex;

/// Forward-only cursor over an immutable token stream.
///
/// Tokens before the cursor are either consumed or were passed over by a
/// later consumption; neither can be matched again.
#[derive(Debug)]
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    next: usize,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, next: 0 }
    }

    /// Consumes the first remaining matchable token at exactly `position`.
    ///
    /// The scan stops at the first matchable token past `position`; a miss
    /// leaves the cursor where it was.
    pub fn take_at(&mut self, position: Position) -> Option<&'t Token> {
        for (offset, token) in self.tokens[self.next..].iter().enumerate() {
            if !token.is_matchable() {
                continue;
            }
            if token.position == position {
                self.next += offset + 1;
                return Some(token);
            }
            if token.position > position {
                break;
            }
        }
        None
    }

    /// Number of tokens not yet passed by the cursor.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.next
    }
}

/// Matches nodes to tokens in pre-order and returns one span per node id.
pub fn match_tokens(index: &TreeIndex, tokens: &[Token]) -> Vec<NodeSpan> {
    let mut spans = vec![NodeSpan::default(); index.len()];
    let mut cursor = TokenCursor::new(tokens);
    let mut positioned = 0;
    let mut matched = 0;

    for id in index.ids() {
        let node = index.node(id);
        let Some(position) = node.position() else {
            continue;
        };
        positioned += 1;

        match cursor.take_at(position) {
            Some(token) => {
                log::trace!("{} {} at {} bound to {:?}", node.kind(), id, position, token.text);
                // matchable tokens always carry a span
                if let Some(span) = token.span {
                    spans[id.index()] = NodeSpan {
                        text: Some(token.text.clone()),
                        start: Some(span.start),
                        end: Some(span.end),
                    };
                    matched += 1;
                }
            }
            None => log::trace!("{} {} at {} has no token of its own", node.kind(), id, position),
        }
    }

    log::debug!(
        "matched {matched} of {positioned} positioned nodes, {} token(s) left after the cursor",
        cursor.remaining()
    );
    spans
}
