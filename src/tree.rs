//! Stable node identities for one walk over a received tree.

use std::fmt;

use crate::node::{Node, Value};

/// Index of a node in pre-order: fields in declared order, list elements
/// in sequence. The root is always `NodeId(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pre-order table of a tree with parent links and subtree sizes.
///
/// A node's descendants occupy the ids right after it, so reverse id order
/// visits every node after all of its descendants.
#[derive(Debug)]
pub struct TreeIndex<'a> {
    nodes: Vec<&'a Node>,
    parents: Vec<Option<NodeId>>,
    sizes: Vec<usize>,
}

impl<'a> TreeIndex<'a> {
    pub fn new(root: &'a Node) -> Self {
        let mut index = Self {
            nodes: Vec::new(),
            parents: Vec::new(),
            sizes: Vec::new(),
        };
        index.visit_node(root, None);
        index
    }

    fn visit_node(&mut self, node: &'a Node, parent: Option<NodeId>) {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.parents.push(parent);
        self.sizes.push(1);

        for (_, value) in node.fields() {
            self.visit_value(value, id);
        }

        self.sizes[id.0] = self.nodes.len() - id.0;
    }

    fn visit_value(&mut self, value: &'a Value, parent: NodeId) {
        match value {
            Value::Node(child) => self.visit_node(child, Some(parent)),
            Value::List(items) => {
                for item in items {
                    self.visit_value(item, parent);
                }
            }
            Value::Primitive(_) | Value::Absent | Value::Unrecognized(_) => {}
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &'a Node {
        self.nodes[id.0]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.0]
    }

    /// Number of nodes in the subtree rooted at `id`, itself included.
    pub fn subtree_size(&self, id: NodeId) -> usize {
        self.sizes[id.0]
    }

    /// All ids in pre-order.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + ExactSizeIterator {
        (0..self.nodes.len()).map(NodeId)
    }

    pub(crate) fn into_sizes(self) -> Vec<usize> {
        self.sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    fn name(id: &str, column: usize) -> Node {
        Node::at(NodeKind::Name, 1, column)
            .with("id", id)
            .unwrap()
            .with("ctx", Node::new(NodeKind::Load))
            .unwrap()
    }

    #[test]
    fn test_preorder_ids() {
        // (a + b)
        let binop = Node::at(NodeKind::BinOp, 1, 0)
            .with("left", name("a", 0))
            .unwrap()
            .with("op", Node::new(NodeKind::Add))
            .unwrap()
            .with("right", name("b", 4))
            .unwrap();
        let index = TreeIndex::new(&binop);

        let kinds: Vec<_> = index.ids().map(|id| index.node(id).kind()).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::BinOp,
                NodeKind::Name,
                NodeKind::Load,
                NodeKind::Add,
                NodeKind::Name,
                NodeKind::Load,
            ]
        );
        assert_eq!(index.subtree_size(NodeId::ROOT), 6);
        assert_eq!(index.subtree_size(NodeId(1)), 2);
        assert_eq!(index.subtree_size(NodeId(3)), 1);
        assert_eq!(index.parent(NodeId(4)), Some(NodeId::ROOT));
        assert_eq!(index.parent(NodeId(5)), Some(NodeId(4)));
        assert_eq!(index.parent(NodeId::ROOT), None);
    }

    #[test]
    fn test_nested_lists() {
        let global = Node::at(NodeKind::Global, 1, 0)
            .with("names", vec![Value::from("a"), Value::from("b")])
            .unwrap();
        let module = Node::new(NodeKind::Module)
            .with("body", vec![global, Node::at(NodeKind::Pass, 2, 0)])
            .unwrap()
            .with("type_ignores", Vec::<Node>::new())
            .unwrap();
        let index = TreeIndex::new(&module);
        assert_eq!(index.len(), 3);
        assert_eq!(index.node(NodeId(2)).kind(), NodeKind::Pass);
        assert_eq!(index.parent(NodeId(2)), Some(NodeId::ROOT));
    }
}
