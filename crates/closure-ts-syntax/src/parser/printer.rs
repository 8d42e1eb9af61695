use std::fmt::Write;

use rowan::TextRange;

use super::ast::{Node, NodeKind, RecordField};

/// Indented tree dump of a parsed annotation.
pub struct AstPrinter<'a> {
    node: &'a Node,
    spans: bool,
}

impl<'a> AstPrinter<'a> {
    pub fn new(node: &'a Node) -> Self {
        Self { node, spans: false }
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.node, 0, w)
    }

    fn format_node(&self, node: &Node, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let detail = match &node.kind {
            NodeKind::Name(name) | NodeKind::Parameter { name, .. } => name.clone(),
            NodeKind::StringLiteral(value) => format!("{:?}", value),
            NodeKind::NumericLiteral(value) => value.clone(),
            NodeKind::Nullable { prefix: false, .. }
            | NodeKind::NonNullable { prefix: false, .. } => "(postfix)".to_string(),
            _ => String::new(),
        };
        self.write_line(w, indent, label(&node.kind), node.range, &detail)?;

        match &node.kind {
            NodeKind::Nullable { expr, .. }
            | NodeKind::NonNullable { expr, .. }
            | NodeKind::Parameter { expr, .. }
            | NodeKind::Optional(expr) => self.format_node(expr, indent + 1, w),
            NodeKind::Rest(expr) => match expr {
                Some(expr) => self.format_node(expr, indent + 1, w),
                None => Ok(()),
            },
            NodeKind::Application { base, args } => {
                self.format_node(base, indent + 1, w)?;
                for arg in args {
                    self.format_node(arg, indent + 1, w)?;
                }
                Ok(())
            }
            NodeKind::Union(items) | NodeKind::Tuple(items) => {
                for item in items {
                    self.format_node(item, indent + 1, w)?;
                }
                Ok(())
            }
            NodeKind::Record(fields) => {
                for field in fields {
                    self.format_field(field, indent + 1, w)?;
                }
                Ok(())
            }
            NodeKind::Function(function) => {
                let prefix = "  ".repeat(indent + 1);
                if let Some(this) = &function.this {
                    writeln!(w, "{}This", prefix)?;
                    self.format_node(this, indent + 2, w)?;
                }
                if let Some(new) = &function.new {
                    writeln!(w, "{}New", prefix)?;
                    self.format_node(new, indent + 2, w)?;
                }
                if !function.params.is_empty() {
                    writeln!(w, "{}Params", prefix)?;
                    for param in &function.params {
                        self.format_node(param, indent + 2, w)?;
                    }
                }
                if let Some(result) = &function.result {
                    writeln!(w, "{}Result", prefix)?;
                    self.format_node(result, indent + 2, w)?;
                }
                Ok(())
            }
            NodeKind::Name(_)
            | NodeKind::AllLiteral
            | NodeKind::NullableLiteral
            | NodeKind::NullLiteral
            | NodeKind::UndefinedLiteral
            | NodeKind::VoidLiteral
            | NodeKind::StringLiteral(_)
            | NodeKind::NumericLiteral(_) => Ok(()),
        }
    }

    fn format_field(
        &self,
        field: &RecordField,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        self.write_line(w, indent, "Field", field.range, &field.key)?;
        match &field.value {
            Some(value) => self.format_node(value, indent + 1, w),
            None => Ok(()),
        }
    }

    fn write_line(
        &self,
        w: &mut impl Write,
        indent: usize,
        label: &str,
        range: TextRange,
        detail: &str,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        write!(w, "{}{}", prefix, label)?;
        if self.spans {
            write!(w, " [{}..{}]", u32::from(range.start()), u32::from(range.end()))?;
        }
        if !detail.is_empty() {
            write!(w, " {}", detail)?;
        }
        writeln!(w)
    }
}

fn label(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Name(_) => "Name",
        NodeKind::Nullable { .. } => "Nullable",
        NodeKind::NonNullable { .. } => "NonNullable",
        NodeKind::Application { .. } => "Application",
        NodeKind::Union(_) => "Union",
        NodeKind::Function(_) => "Function",
        NodeKind::AllLiteral => "AllLiteral",
        NodeKind::NullableLiteral => "NullableLiteral",
        NodeKind::NullLiteral => "NullLiteral",
        NodeKind::UndefinedLiteral => "UndefinedLiteral",
        NodeKind::VoidLiteral => "VoidLiteral",
        NodeKind::Optional(_) => "Optional",
        NodeKind::Parameter { .. } => "Parameter",
        NodeKind::Rest(_) => "Rest",
        NodeKind::Record(_) => "Record",
        NodeKind::Tuple(_) => "Tuple",
        NodeKind::StringLiteral(_) => "StringLiteral",
        NodeKind::NumericLiteral(_) => "NumericLiteral",
    }
}

impl Node {
    pub fn printer(&self) -> AstPrinter<'_> {
        AstPrinter::new(self)
    }
}
