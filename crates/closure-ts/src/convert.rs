//! Closure annotation AST to TypeScript type tree.
//!
//! Conversion is total: unparseable input becomes `any`, and grammar the
//! target has no counterpart for becomes `any` plus a warning.

use closure_ts_syntax::ast::{FunctionType as ClosureFunction, Node, NodeKind};
use closure_ts_syntax::parser::lexer::lex;
use closure_ts_syntax::{DiagnosticKind, Diagnostics, Parser};

use crate::config::Config;
use crate::nullability::is_nullable_by_default;
use crate::ts::{FunctionType, Param, Type};

/// A converted parameter annotation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ParamType {
    /// The annotation carried Closure's trailing `=` marker.
    pub optional: bool,
    #[serde(rename = "type")]
    pub ty: Type,
}

/// Conversion result together with everything that was lost on the way.
#[derive(Debug, Clone)]
pub struct Conversion<T = Type> {
    value: T,
    diagnostics: Diagnostics,
    parse_error: Option<closure_ts_syntax::Error>,
}

impl<T> Conversion<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Warnings for constructs that were approximated.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Why the annotation could not be parsed, if it could not.
    pub fn parse_error(&self) -> Option<&closure_ts_syntax::Error> {
        self.parse_error.as_ref()
    }

    /// True when the result is not a faithful translation of the input.
    pub fn is_degraded(&self) -> bool {
        self.parse_error.is_some() || self.diagnostics.has_warnings()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    fn parser<'src>(&self, source: &'src str) -> Parser<'src> {
        Parser::new(source, lex(source))
            .with_recursion_fuel(self.config.recursion_limit)
            .with_exec_fuel(self.config.exec_fuel)
    }

    pub fn convert_type(&self, annotation: &str) -> Type {
        self.convert_type_with_diagnostics(annotation).into_value()
    }

    pub fn convert_param_type(&self, annotation: &str) -> ParamType {
        self.convert_param_type_with_diagnostics(annotation)
            .into_value()
    }

    pub fn convert_type_with_diagnostics(&self, annotation: &str) -> Conversion<Type> {
        match self.parser(annotation).parse_type() {
            Ok(node) => self.convert_node(&node),
            Err(err) => Conversion {
                value: Type::Any,
                diagnostics: Diagnostics::new(),
                parse_error: Some(err),
            },
        }
    }

    pub fn convert_param_type_with_diagnostics(&self, annotation: &str) -> Conversion<ParamType> {
        let node = match self.parser(annotation).parse_param_type() {
            Ok(node) => node,
            Err(err) => {
                return Conversion {
                    value: ParamType {
                        optional: annotation.ends_with('='),
                        ty: Type::Any,
                    },
                    diagnostics: Diagnostics::new(),
                    parse_error: Some(err),
                };
            }
        };

        let (optional, inner) = match &node.kind {
            NodeKind::Optional(inner) => (true, inner.as_ref()),
            _ => (false, &node),
        };

        let mut walker = Walker::default();
        let ty = walker.convert(inner);
        Conversion {
            value: ParamType { optional, ty },
            diagnostics: walker.diagnostics,
            parse_error: None,
        }
    }

    /// Convert an already parsed annotation.
    pub fn convert_node(&self, node: &Node) -> Conversion<Type> {
        let mut walker = Walker::default();
        let value = walker.convert(node);
        Conversion {
            value,
            diagnostics: walker.diagnostics,
            parse_error: None,
        }
    }
}

#[derive(Default)]
struct Walker {
    diagnostics: Diagnostics,
}

impl Walker {
    fn convert(&mut self, node: &Node) -> Type {
        let (inner, nullable) = match &node.kind {
            NodeKind::Nullable { expr, .. } => (expr.as_ref(), true),
            NodeKind::NonNullable { expr, .. } => (expr.as_ref(), false),
            _ => (node, is_nullable_by_default(node)),
        };

        // Unsupported grammar is returned as-is, never wrapped in `| null`.
        let Some(ty) = self.convert_unqualified(inner) else {
            return Type::Any;
        };

        if nullable { ty.or_null() } else { ty }
    }

    fn convert_unqualified(&mut self, node: &Node) -> Option<Type> {
        let ty = match &node.kind {
            NodeKind::Application { base, args } if base.is_name("Array") => {
                Type::array(self.convert_array_item(node, args))
            }
            NodeKind::Union(members) => match members.as_slice() {
                [] => Type::Any,
                [member] => self.convert(member),
                _ => Type::Union(members.iter().map(|m| self.convert(m)).collect()),
            },
            NodeKind::Function(function) => Type::Function(self.convert_function(function)),
            NodeKind::Name(name) if name == "Array" => Type::array(Type::Any),
            NodeKind::AllLiteral | NodeKind::NullableLiteral => Type::Any,
            NodeKind::NullLiteral => Type::Null,
            NodeKind::UndefinedLiteral => Type::Undefined,
            NodeKind::Name(name) => Type::name(name.as_str()),
            _ => {
                self.diagnostics
                    .report(DiagnosticKind::UnsupportedSyntax, node.range)
                    .message(node.production())
                    .emit();
                return None;
            }
        };
        Some(ty)
    }

    fn convert_array_item(&mut self, node: &Node, args: &[Node]) -> Type {
        match args {
            [item] => self.convert(item),
            _ => {
                self.diagnostics
                    .report(DiagnosticKind::ArrayArity, node.range)
                    .message(args.len().to_string())
                    .emit();
                Type::Any
            }
        }
    }

    fn convert_function(&mut self, function: &ClosureFunction) -> FunctionType {
        let params = function
            .params
            .iter()
            .enumerate()
            .map(|(i, param)| Param {
                name: format!("p{}", i),
                ty: self.convert(param),
            })
            .collect();

        let returns = match &function.result {
            Some(result) => self.convert(result),
            None => Type::Any,
        };

        FunctionType {
            params,
            returns: Box::new(returns),
        }
    }
}
