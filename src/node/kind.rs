use std::fmt;

macro_rules! node_kinds {
    ($($kind:ident { $($field:literal),* $(,)? }),* $(,)?) => {
        /// Every node kind of the Python abstract grammar, with its declared fields.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $($kind,)*
        }

        impl NodeKind {
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$kind,)*];

            /// The tag used as `type` in the output document.
            pub fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$kind => stringify!($kind),)*
                }
            }

            /// Declared field names, in grammar order.
            pub fn fields(self) -> &'static [&'static str] {
                match self {
                    $(NodeKind::$kind => &[$($field),*],)*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($kind) => Some(NodeKind::$kind),)*
                    _ => None,
                }
            }
        }
    };
}

node_kinds! {
    // mod
    Module { "body", "type_ignores" },
    Interactive { "body" },
    Expression { "body" },
    FunctionType { "argtypes", "returns" },

    // stmt
    FunctionDef { "name", "args", "body", "decorator_list", "returns", "type_comment", "type_params" },
    AsyncFunctionDef { "name", "args", "body", "decorator_list", "returns", "type_comment", "type_params" },
    ClassDef { "name", "bases", "keywords", "body", "decorator_list", "type_params" },
    Return { "value" },
    Delete { "targets" },
    Assign { "targets", "value", "type_comment" },
    TypeAlias { "name", "type_params", "value" },
    AugAssign { "target", "op", "value" },
    AnnAssign { "target", "annotation", "value", "simple" },
    For { "target", "iter", "body", "orelse", "type_comment" },
    AsyncFor { "target", "iter", "body", "orelse", "type_comment" },
    While { "test", "body", "orelse" },
    If { "test", "body", "orelse" },
    With { "items", "body", "type_comment" },
    AsyncWith { "items", "body", "type_comment" },
    Match { "subject", "cases" },
    Raise { "exc", "cause" },
    Try { "body", "handlers", "orelse", "finalbody" },
    TryStar { "body", "handlers", "orelse", "finalbody" },
    Assert { "test", "msg" },
    Import { "names" },
    ImportFrom { "module", "names", "level" },
    Global { "names" },
    Nonlocal { "names" },
    Expr { "value" },
    Pass {},
    Break {},
    Continue {},

    // expr
    BoolOp { "op", "values" },
    NamedExpr { "target", "value" },
    BinOp { "left", "op", "right" },
    UnaryOp { "op", "operand" },
    Lambda { "args", "body" },
    IfExp { "test", "body", "orelse" },
    Dict { "keys", "values" },
    Set { "elts" },
    ListComp { "elt", "generators" },
    SetComp { "elt", "generators" },
    DictComp { "key", "value", "generators" },
    GeneratorExp { "elt", "generators" },
    Await { "value" },
    Yield { "value" },
    YieldFrom { "value" },
    Compare { "left", "ops", "comparators" },
    Call { "func", "args", "keywords" },
    FormattedValue { "value", "conversion", "format_spec" },
    JoinedStr { "values" },
    Constant { "value", "kind" },
    Attribute { "value", "attr", "ctx" },
    Subscript { "value", "slice", "ctx" },
    Starred { "value", "ctx" },
    Name { "id", "ctx" },
    List { "elts", "ctx" },
    Tuple { "elts", "ctx" },
    Slice { "lower", "upper", "step" },

    // expr_context
    Load {},
    Store {},
    Del {},

    // boolop
    And {},
    Or {},

    // operator
    Add {},
    Sub {},
    Mult {},
    MatMult {},
    Div {},
    Mod {},
    Pow {},
    LShift {},
    RShift {},
    BitOr {},
    BitXor {},
    BitAnd {},
    FloorDiv {},

    // unaryop
    Invert {},
    Not {},
    UAdd {},
    USub {},

    // cmpop
    Eq {},
    NotEq {},
    Lt {},
    LtE {},
    Gt {},
    GtE {},
    Is {},
    IsNot {},
    In {},
    NotIn {},

    comprehension { "target", "iter", "ifs", "is_async" },
    ExceptHandler { "type", "name", "body" },
    arguments { "posonlyargs", "args", "vararg", "kwonlyargs", "kw_defaults", "kwarg", "defaults" },
    arg { "arg", "annotation", "type_comment" },
    keyword { "arg", "value" },
    alias { "name", "asname" },
    withitem { "context_expr", "optional_vars" },
    match_case { "pattern", "guard", "body" },

    // pattern
    MatchValue { "value" },
    MatchSingleton { "value" },
    MatchSequence { "patterns" },
    MatchMapping { "keys", "patterns", "rest" },
    MatchClass { "cls", "patterns", "kwd_attrs", "kwd_patterns" },
    MatchStar { "name" },
    MatchAs { "pattern", "name" },
    MatchOr { "patterns" },

    TypeIgnore { "lineno", "tag" },

    // type_param
    TypeVar { "name", "bound" },
    ParamSpec { "name" },
    TypeVarTuple { "name" },
}

impl NodeKind {
    pub fn field_index(self, field: &str) -> Option<usize> {
        self.fields().iter().position(|f| *f == field)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
