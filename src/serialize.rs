//! Projection of an augmented tree into the tagged output document.
//!
//! Every node becomes an object: its `type` tag first, then one entry per
//! declared field in grammar order, then the computed `start`, `end` and
//! `text` when they are known. The root is wrapped as a program object
//! spanning the whole source.
//!
//! A node field literally named `type` (`ExceptHandler.type`) would collide
//! with the tag, so it is renamed to `type_` in the output.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::augment::Augmentation;
use crate::node::{Node, NodeKind, Primitive, Value};
use crate::options::Options;
use crate::tree::NodeId;

/// Emitted in place of a value the model cannot represent.
pub const UNRECOGNIZED: &str = "unrecognized";

/// Key under which the `type` tag of every object is emitted. A field of the
/// same name (`ExceptHandler.type`) is emitted as `type_` instead.
const TYPE_KEY: &str = "type";

fn field_key(field: &'static str) -> &'static str {
    if field == TYPE_KEY {
        "type_"
    } else {
        field
    }
}

/// Serializable view of a tree and its computed spans.
///
/// Field keys follow the grammar names except `type`, which is written as
/// `type_`.
pub struct Document<'a> {
    tree: &'a Node,
    augmentation: &'a Augmentation,
    options: &'a Options,
}

impl<'a> Document<'a> {
    pub fn new(tree: &'a Node, augmentation: &'a Augmentation, options: &'a Options) -> Self {
        Self {
            tree,
            augmentation,
            options,
        }
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Number of nodes reachable from `value` whose first node has id `first`.
    fn node_count(&self, value: &Value, first: usize) -> usize {
        match value {
            Value::Node(_) => self.augmentation.subtree_size(NodeId::new(first)),
            Value::List(items) => items
                .iter()
                .fold(0, |count, item| count + self.node_count(item, first + count)),
            Value::Primitive(_) | Value::Absent | Value::Unrecognized(_) => 0,
        }
    }
}

impl Serialize for Document<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let root = self.tree;
        let body = match root.kind() {
            NodeKind::Module | NodeKind::Interactive | NodeKind::Expression => root.get("body"),
            _ => None,
        };
        let Some(body) = body else {
            return NodeView {
                doc: self,
                node: root,
                id: NodeId::ROOT,
            }
            .serialize(serializer);
        };

        let mut first = NodeId::ROOT.index() + 1;
        for (name, value) in root.fields() {
            if name == "body" {
                break;
            }
            first += self.node_count(value, first);
        }

        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry(TYPE_KEY, &self.options.program_tag)?;
        map.serialize_entry("start", &0)?;
        map.serialize_entry("end", &self.augmentation.source_len())?;
        map.serialize_entry(
            "body",
            &ValueView {
                doc: self,
                value: body,
                first,
            },
        )?;
        map.end()
    }
}

struct NodeView<'d, 'a> {
    doc: &'d Document<'a>,
    node: &'a Node,
    id: NodeId,
}

impl Serialize for NodeView<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let doc = self.doc;
        let options = doc.options;
        let span = doc.augmentation.span(self.id);

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(TYPE_KEY, self.node.kind().name())?;

        let mut first = self.id.index() + 1;
        for (name, value) in self.node.fields() {
            map.serialize_entry(field_key(name), &ValueView { doc, value, first })?;
            first += doc.node_count(value, first);
        }

        if self.id == NodeId::ROOT {
            map.serialize_entry("start", &0)?;
            map.serialize_entry("end", &doc.augmentation.source_len())?;
        } else {
            if let Some(start) = span.start {
                map.serialize_entry("start", &start)?;
            }
            if let Some(end) = span.end {
                map.serialize_entry("end", &end)?;
            }
        }
        if options.token_text {
            if let Some(text) = &span.text {
                map.serialize_entry("text", text)?;
            }
        }
        if options.line_columns {
            if let Some(position) = self.node.position() {
                map.serialize_entry("line", &position.line)?;
                map.serialize_entry("column", &position.column)?;
            }
        }
        map.end()
    }
}

struct ValueView<'d, 'a> {
    doc: &'d Document<'a>,
    value: &'a Value,
    /// Id the first node inside `value` would have.
    first: usize,
}

impl Serialize for ValueView<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Node(node) => NodeView {
                doc: self.doc,
                node,
                id: NodeId::new(self.first),
            }
            .serialize(serializer),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                let mut first = self.first;
                for value in items {
                    seq.serialize_element(&ValueView {
                        doc: self.doc,
                        value,
                        first,
                    })?;
                    first += self.doc.node_count(value, first);
                }
                seq.end()
            }
            Value::Primitive(Primitive::Str(s)) => serializer.serialize_str(s),
            Value::Primitive(Primitive::Int(i)) => serializer.serialize_i64(*i),
            Value::Primitive(Primitive::Float(f)) => serializer.serialize_f64(*f),
            Value::Primitive(Primitive::Bool(b)) => serializer.serialize_bool(*b),
            Value::Absent => serializer.serialize_none(),
            Value::Unrecognized(what) => {
                log::warn!("value of kind {what:?} has no representation, emitting {UNRECOGNIZED:?}");
                serializer.serialize_str(UNRECOGNIZED)
            }
        }
    }
}
