//! Owned AST for Closure type annotations.
//!
//! One [`NodeKind`] variant per grammar production. Every node remembers the
//! source range it was parsed from so later passes can point diagnostics at it.

use rowan::TextRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// `string`, `MyClass`, `goog.events.Event`
    Name(String),
    /// `?T` (prefix) or `T?` (postfix)
    Nullable { expr: Box<Node>, prefix: bool },
    /// `!T` (prefix) or `T!` (postfix)
    NonNullable { expr: Box<Node>, prefix: bool },
    /// `Array.<T>`, `Object<K, V>`
    Application { base: Box<Node>, args: Vec<Node> },
    /// `A|B`, or any parenthesized type: `(A)` is a union of one.
    Union(Vec<Node>),
    Function(FunctionType),
    /// `*`
    AllLiteral,
    /// A lone `?`
    NullableLiteral,
    NullLiteral,
    UndefinedLiteral,
    VoidLiteral,
    /// `T=`, only in parameter position
    Optional(Box<Node>),
    /// `name: T`, only in function parameter lists
    Parameter { name: String, expr: Box<Node> },
    /// `...T` or a bare `...`, only in parameter position
    Rest(Option<Box<Node>>),
    /// `{key: T, other}`
    Record(Vec<RecordField>),
    /// `[A, B]`
    Tuple(Vec<Node>),
    /// `"literal"` (quotes stripped)
    StringLiteral(String),
    /// `42`
    NumericLiteral(String),
}

/// `function(this:T, new:U, A, b: B, C=, ...D): R`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionType {
    pub params: Vec<Node>,
    pub result: Option<Box<Node>>,
    pub this: Option<Box<Node>>,
    pub new: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
    pub key: String,
    pub value: Option<Node>,
    pub range: TextRange,
}

impl Node {
    pub fn new(kind: NodeKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// The identifier of a `Name` node.
    pub fn as_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_name(&self, name: &str) -> bool {
        self.as_name() == Some(name)
    }

    /// Closure grammar production name, used in diagnostics.
    pub fn production(&self) -> &'static str {
        self.kind.production()
    }
}

impl NodeKind {
    pub fn production(&self) -> &'static str {
        match self {
            NodeKind::Name(_) => "NameExpression",
            NodeKind::Nullable { .. } => "NullableType",
            NodeKind::NonNullable { .. } => "NonNullableType",
            NodeKind::Application { .. } => "TypeApplication",
            NodeKind::Union(_) => "UnionType",
            NodeKind::Function(_) => "FunctionType",
            NodeKind::AllLiteral => "AllLiteral",
            NodeKind::NullableLiteral => "NullableLiteral",
            NodeKind::NullLiteral => "NullLiteral",
            NodeKind::UndefinedLiteral => "UndefinedLiteral",
            NodeKind::VoidLiteral => "VoidLiteral",
            NodeKind::Optional(_) => "OptionalType",
            NodeKind::Parameter { .. } => "ParameterType",
            NodeKind::Rest(_) => "RestType",
            NodeKind::Record(_) => "RecordType",
            NodeKind::Tuple(_) => "ArrayType",
            NodeKind::StringLiteral(_) => "StringLiteralType",
            NodeKind::NumericLiteral(_) => "NumericLiteralType",
        }
    }
}
