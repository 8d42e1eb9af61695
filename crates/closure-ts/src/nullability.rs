//! Closure's implicit nullability.
//!
//! An unqualified type is nullable when Closure says so: every named type
//! except the value primitives, and parameterized arrays.

use closure_ts_syntax::ast::{Node, NodeKind};

/// Names that are never implicitly nullable.
pub const NON_NULLABLE_PRIMITIVES: &[&str] = &["string", "number", "boolean"];

pub fn is_nullable_by_default(node: &Node) -> bool {
    match &node.kind {
        NodeKind::Name(name) => !NON_NULLABLE_PRIMITIVES.contains(&name.as_str()),
        NodeKind::Application { base, .. } => base.is_name("Array"),
        _ => false,
    }
}
