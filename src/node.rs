//! Syntax tree received from a grammar parser.
//!
//! A [`Node`] is a [`NodeKind`] tag plus exactly one [`Value`] per declared
//! field. Nodes never carry computed offsets; those live in the
//! [`Augmentation`](crate::augment::Augmentation) side table.

mod kind;

pub use self::kind::NodeKind;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 1-based line and a column counted in UTF-8 code units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Value of one node field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Node(Box<Node>),
    List(Vec<Value>),
    Primitive(Primitive),
    /// `None` on the parser side, rendered as `null`.
    Absent,
    /// A value the grammar parser could not express in this model,
    /// e.g. a bytes or complex constant. Holds a short description.
    Unrecognized(String),
}

impl Value {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(Box::new(node))
    }
}

impl From<Option<Node>> for Value {
    fn from(node: Option<Node>) -> Self {
        node.map_or(Value::Absent, Value::from)
    }
}

impl From<Vec<Node>> for Value {
    fn from(nodes: Vec<Node>) -> Self {
        Value::List(nodes.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values)
    }
}

impl From<Primitive> for Value {
    fn from(primitive: Primitive) -> Self {
        Value::Primitive(primitive)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Primitive(Primitive::Str(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Primitive(Primitive::Str(s))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Primitive(Primitive::Int(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Primitive(Primitive::Float(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Primitive(Primitive::Bool(b))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    position: Option<Position>,
    /// One slot per `kind.fields()`, same order.
    values: Vec<Value>,
}

impl Node {
    /// Creates a node without a position; every declared field starts out absent.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            position: None,
            values: vec![Value::Absent; kind.fields().len()],
        }
    }

    /// Creates a node at `line`/`column` as reported by the grammar parser.
    pub fn at(kind: NodeKind, line: usize, column: usize) -> Self {
        let mut node = Self::new(kind);
        node.position = Some(Position::new(line, column));
        node
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }

    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<()> {
        let index = self.kind.field_index(field).ok_or_else(|| Error::UnknownField {
            kind: self.kind,
            field: field.to_string(),
        })?;
        self.values[index] = value.into();
        Ok(())
    }

    /// Builder form of [`Node::set`].
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.set(field, value)?;
        Ok(self)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.kind.field_index(field).map(|index| &self.values[index])
    }

    /// Declared fields with their values, in grammar order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        self.kind.fields().iter().copied().zip(self.values.iter())
    }
}
