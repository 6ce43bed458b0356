//! Hand-built trees matching the sources used by the integration tests.
#![allow(dead_code)]

use pyspan::{Node, NodeKind, ParseError, Value};

/// A grammar parser that always yields `tree`.
pub fn parsed(tree: Node) -> impl Fn(&str) -> Result<Node, ParseError> {
    move |_| Ok(tree.clone())
}

pub fn module(body: Vec<Node>) -> Node {
    Node::new(NodeKind::Module)
        .with("body", body)
        .and_then(|m| m.with("type_ignores", Vec::<Node>::new()))
        .unwrap()
}

pub fn name(id: &str, line: usize, column: usize, ctx: NodeKind) -> Node {
    Node::at(NodeKind::Name, line, column)
        .with("id", id)
        .and_then(|n| n.with("ctx", Node::new(ctx)))
        .unwrap()
}

pub fn constant(value: impl Into<Value>, line: usize, column: usize) -> Node {
    Node::at(NodeKind::Constant, line, column)
        .with("value", value)
        .unwrap()
}

pub fn assign(target: Node, value: Node) -> Node {
    let position = target.position().unwrap();
    Node::at(NodeKind::Assign, position.line, position.column)
        .with("targets", vec![target])
        .and_then(|a| a.with("value", value))
        .unwrap()
}

pub fn expr(value: Node) -> Node {
    let position = value.position().unwrap();
    Node::at(NodeKind::Expr, position.line, position.column)
        .with("value", value)
        .unwrap()
}

/// `x = 1\n`
pub fn assignment() -> (&'static str, Node) {
    let tree = module(vec![assign(
        name("x", 1, 0, NodeKind::Store),
        constant(1i64, 1, 4),
    )]);
    ("x = 1\n", tree)
}

/// A function whose `return` follows a dedent at the same column.
pub fn nested_function() -> (&'static str, Node) {
    let source = "def f():\n    if x:\n        y = 1\n    return y\n";
    let branch = Node::at(NodeKind::If, 2, 4)
        .with("test", name("x", 2, 7, NodeKind::Load))
        .and_then(|n| {
            n.with(
                "body",
                vec![assign(name("y", 3, 8, NodeKind::Store), constant(1i64, 3, 12))],
            )
        })
        .and_then(|n| n.with("orelse", Vec::<Node>::new()))
        .unwrap();
    let ret = Node::at(NodeKind::Return, 4, 4)
        .with("value", name("y", 4, 11, NodeKind::Load))
        .unwrap();
    let function = Node::at(NodeKind::FunctionDef, 1, 0)
        .with("name", "f")
        .and_then(|n| n.with("args", Node::new(NodeKind::arguments)))
        .and_then(|n| n.with("body", vec![branch, ret]))
        .and_then(|n| n.with("decorator_list", Vec::<Node>::new()))
        .unwrap();
    (source, module(vec![function]))
}

/// A non-ASCII string literal ahead of an identifier on the same line.
pub fn multibyte() -> (&'static str, Node) {
    let tree = module(vec![
        assign(name("s", 1, 0, NodeKind::Store), constant("é", 1, 4)),
        expr(name("x", 1, 10, NodeKind::Load)),
    ]);
    ("s = 'é'; x\n", tree)
}

/// A call spanning two lines inside brackets.
pub fn bracketed_call() -> (&'static str, Node) {
    let call = Node::at(NodeKind::Call, 1, 0)
        .with("func", name("f", 1, 0, NodeKind::Load))
        .and_then(|n| {
            n.with(
                "args",
                vec![name("a", 1, 2, NodeKind::Load), name("b", 2, 4, NodeKind::Load)],
            )
        })
        .and_then(|n| n.with("keywords", Vec::<Node>::new()))
        .unwrap();
    ("f(a,\n    b)\n", module(vec![expr(call)]))
}

/// Two statements with Windows line endings.
pub fn crlf() -> (&'static str, Node) {
    let tree = module(vec![
        assign(name("x", 1, 0, NodeKind::Store), constant(1i64, 1, 4)),
        assign(name("y", 2, 0, NodeKind::Store), constant(2i64, 2, 4)),
    ]);
    ("x = 1\r\ny = 2\r\n", tree)
}

/// A triple quoted string spanning two lines, then a statement after it.
pub fn multiline_string() -> (&'static str, Node) {
    let tree = module(vec![
        assign(name("doc", 1, 0, NodeKind::Store), constant("a\nb", 1, 6)),
        expr(name("z", 3, 0, NodeKind::Load)),
    ]);
    ("doc = \"\"\"a\nb\"\"\"\nz\n", tree)
}

/// A decorated function with annotations and a tab indented body.
pub fn decorated_function() -> (&'static str, Node) {
    let param = Node::at(NodeKind::arg, 2, 6)
        .with("arg", "a")
        .and_then(|n| n.with("annotation", name("int", 2, 9, NodeKind::Load)))
        .unwrap();
    let args = Node::new(NodeKind::arguments)
        .with("args", vec![param])
        .unwrap();
    let ret = Node::at(NodeKind::Return, 3, 1)
        .with("value", name("a", 3, 8, NodeKind::Load))
        .unwrap();
    let function = Node::at(NodeKind::FunctionDef, 2, 0)
        .with("name", "f")
        .and_then(|n| n.with("args", args))
        .and_then(|n| n.with("body", vec![ret]))
        .and_then(|n| n.with("decorator_list", vec![name("dec", 1, 1, NodeKind::Load)]))
        .and_then(|n| n.with("returns", name("T", 2, 17, NodeKind::Load)))
        .unwrap();
    ("@dec\ndef f(a: int) -> T:\n\treturn a\n", module(vec![function]))
}

/// A block indented with a form feed ahead of its blanks.
pub fn form_feed() -> (&'static str, Node) {
    let branch = Node::at(NodeKind::If, 1, 0)
        .with("test", name("x", 1, 3, NodeKind::Load))
        .and_then(|n| n.with("body", vec![expr(name("y", 2, 3, NodeKind::Load))]))
        .and_then(|n| n.with("orelse", Vec::<Node>::new()))
        .unwrap();
    ("if x:\n\x0c  y\n", module(vec![branch]))
}

pub fn all() -> Vec<(&'static str, Node)> {
    vec![
        assignment(),
        nested_function(),
        multibyte(),
        bracketed_call(),
        crlf(),
        multiline_string(),
        decorated_function(),
        form_feed(),
    ]
}
