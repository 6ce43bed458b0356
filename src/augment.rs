//! Computed positions, stored beside the received tree.

use serde::Serialize;

use crate::error::Result;
use crate::matcher::match_tokens;
use crate::node::Node;
use crate::options::Options;
use crate::propagate::propagate_ends;
use crate::serialize::Document;
use crate::source::SourceIndex;
use crate::token::{adapt_tokens, RawToken};
use crate::tree::{NodeId, TreeIndex};

/// Token literal and character offsets computed for one node.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSpan {
    /// Literal of the token the node was bound to.
    pub text: Option<String>,
    pub start: Option<usize>,
    pub end: Option<usize>,
}

/// Side table of [`NodeSpan`]s keyed by [`NodeId`].
#[derive(Debug, Clone)]
pub struct Augmentation {
    spans: Vec<NodeSpan>,
    sizes: Vec<usize>,
    source_len: usize,
}

impl Augmentation {
    /// Runs adapter, matcher and propagator over one tree and its tokens.
    pub fn compute(source: &str, tree: &Node, raw_tokens: &[RawToken]) -> Result<Self> {
        let source_index = SourceIndex::new(source);
        let tokens = adapt_tokens(&source_index, raw_tokens)?;
        log::debug!(
            "adapted {} token(s) over {} line(s)",
            tokens.len(),
            source_index.line_count()
        );

        let tree_index = TreeIndex::new(tree);
        let mut spans = match_tokens(&tree_index, &tokens);
        propagate_ends(&tree_index, &mut spans, source_index.len());

        Ok(Self {
            spans,
            sizes: tree_index.into_sizes(),
            source_len: source_index.len(),
        })
    }

    pub fn span(&self, id: NodeId) -> &NodeSpan {
        &self.spans[id.index()]
    }

    pub fn spans(&self) -> &[NodeSpan] {
        &self.spans
    }

    pub fn subtree_size(&self, id: NodeId) -> usize {
        self.sizes[id.index()]
    }

    /// Length of the source in characters.
    pub fn source_len(&self) -> usize {
        self.source_len
    }
}

/// A received tree together with its computed positions.
#[derive(Debug, Clone)]
pub struct Augmented {
    tree: Node,
    augmentation: Augmentation,
}

impl Augmented {
    pub fn new(tree: Node, augmentation: Augmentation) -> Self {
        Self { tree, augmentation }
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    pub fn augmentation(&self) -> &Augmentation {
        &self.augmentation
    }

    pub fn document<'a>(&'a self, options: &'a Options) -> Document<'a> {
        Document::new(&self.tree, &self.augmentation, options)
    }

    /// Every node with its id and computed span, in pre-order.
    pub fn walk(&self) -> impl Iterator<Item = (NodeId, &Node, &NodeSpan)> + '_ {
        let index = TreeIndex::new(&self.tree);
        index
            .ids()
            .map(move |id| (id, index.node(id), self.augmentation.span(id)))
    }

    pub fn into_tree(self) -> Node {
        self.tree
    }
}

/// Computes positions for a tree that was parsed and tokenized elsewhere.
pub fn augment(source: &str, tree: Node, raw_tokens: &[RawToken]) -> Result<Augmented> {
    let augmentation = Augmentation::compute(source, &tree, raw_tokens)?;
    Ok(Augmented::new(tree, augmentation))
}
