//! TypeScript-side type tree.
//!
//! Serializes to the `{"kind": ...}` object layout used by declaration
//! emitters: `any`, `null` and `undefined` are plain names there.

use std::fmt::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Any,
    Null,
    Undefined,
    /// A named type, passed through verbatim (`string`, `ns.Foo`).
    Name(String),
    /// `T[]`
    Array(Box<Type>),
    /// Always at least two members.
    Union(Vec<Type>),
    Function(FunctionType),
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FunctionType {
    pub params: Vec<Param>,
    pub returns: Box<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl Type {
    pub fn name(name: impl Into<String>) -> Self {
        Type::Name(name.into())
    }

    pub fn array(item: Type) -> Self {
        Type::Array(Box::new(item))
    }

    /// `T | null`
    pub fn or_null(self) -> Self {
        Type::Union(vec![self, Type::Null])
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Type::Any)
    }

    pub fn printer(&self) -> TypePrinter<'_> {
        TypePrinter::new(self)
    }
}

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Type::Any => {
                map.serialize_entry("kind", "name")?;
                map.serialize_entry("name", "any")?;
            }
            Type::Null => {
                map.serialize_entry("kind", "name")?;
                map.serialize_entry("name", "null")?;
            }
            Type::Undefined => {
                map.serialize_entry("kind", "name")?;
                map.serialize_entry("name", "undefined")?;
            }
            Type::Name(name) => {
                map.serialize_entry("kind", "name")?;
                map.serialize_entry("name", name)?;
            }
            Type::Array(item) => {
                map.serialize_entry("kind", "array")?;
                map.serialize_entry("itemType", item)?;
            }
            Type::Union(members) => {
                map.serialize_entry("kind", "union")?;
                map.serialize_entry("members", members)?;
            }
            Type::Function(function) => {
                map.serialize_entry("kind", "function")?;
                map.serialize_entry("params", &function.params)?;
                map.serialize_entry("returns", &function.returns)?;
            }
        }
        map.end()
    }
}

/// Indented tree dump of a converted type.
pub struct TypePrinter<'a> {
    ty: &'a Type,
}

impl<'a> TypePrinter<'a> {
    pub fn new(ty: &'a Type) -> Self {
        Self { ty }
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        format_type(self.ty, 0, w)
    }
}

fn format_type(ty: &Type, indent: usize, w: &mut impl Write) -> std::fmt::Result {
    let prefix = "  ".repeat(indent);
    match ty {
        Type::Any => writeln!(w, "{}Any", prefix),
        Type::Null => writeln!(w, "{}Null", prefix),
        Type::Undefined => writeln!(w, "{}Undefined", prefix),
        Type::Name(name) => writeln!(w, "{}Name {}", prefix, name),
        Type::Array(item) => {
            writeln!(w, "{}Array", prefix)?;
            format_type(item, indent + 1, w)
        }
        Type::Union(members) => {
            writeln!(w, "{}Union", prefix)?;
            for member in members {
                format_type(member, indent + 1, w)?;
            }
            Ok(())
        }
        Type::Function(function) => {
            writeln!(w, "{}Function", prefix)?;
            for param in &function.params {
                writeln!(w, "{}  Param {}", prefix, param.name)?;
                format_type(&param.ty, indent + 2, w)?;
            }
            writeln!(w, "{}  Returns", prefix)?;
            format_type(&function.returns, indent + 2, w)
        }
    }
}
