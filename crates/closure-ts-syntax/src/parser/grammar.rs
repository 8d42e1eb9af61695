//! Grammar productions for Closure type annotations.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! The grammar follows the Closure Compiler type language as accepted by
//! doctrine: unions need no parentheses at the top level or inside type
//! arguments, while qualifiers bind to a single type expression.

use rowan::TextSize;

use super::ast::{FunctionType, Node, NodeKind, RecordField};
use super::core::Parser;
use super::lexer::token_text;
use super::token::SyntaxKind;
use super::token::token_sets::{
    NAME_SEGMENT, NULLABLE_LITERAL_FOLLOW, POSTFIX, RECORD_KEY, TYPE_ARGS_OPEN, TYPE_FIRST,
};
use crate::diagnostics::DiagnosticKind;

impl Parser<'_> {
    pub(super) fn parse_type_root(&mut self) -> Option<Node> {
        let node = self.parse_top()?;
        self.expect_end()?;
        Some(node)
    }

    /// Parameter position additionally allows `...T` and a trailing `T=`.
    pub(super) fn parse_param_root(&mut self) -> Option<Node> {
        let node = if self.currently_is(SyntaxKind::Ellipsis) {
            let start = self.bump().span.start();
            let expr = if self.eof() {
                None
            } else {
                Some(Box::new(self.parse_top()?))
            };
            Node::new(NodeKind::Rest(expr), self.range_from(start))
        } else {
            let inner = self.parse_top()?;
            self.parse_optional_suffix(inner)
        };
        self.expect_end()?;
        Some(node)
    }

    fn expect_end(&mut self) -> Option<()> {
        if self.eof() {
            return Some(());
        }
        if self.currently_is(SyntaxKind::Equals) {
            self.error(DiagnosticKind::OptionalOutsideParameter);
        } else {
            self.error_found(DiagnosticKind::TrailingInput);
        }
        None
    }

    fn parse_optional_suffix(&mut self, inner: Node) -> Node {
        if !self.eat(SyntaxKind::Equals) {
            return inner;
        }
        let range = self.range_from(inner.range.start());
        Node::new(NodeKind::Optional(Box::new(inner)), range)
    }

    /// `A|B|C` without parentheses. A single member is returned as-is.
    fn parse_top(&mut self) -> Option<Node> {
        let first = self.parse_type_expr()?;
        if !self.currently_is(SyntaxKind::Pipe) {
            return Some(first);
        }

        let start = first.range.start();
        let mut members = vec![first];
        while self.eat(SyntaxKind::Pipe) {
            members.push(self.parse_type_expr()?);
        }
        Some(Node::new(NodeKind::Union(members), self.range_from(start)))
    }

    /// Type expression with optional prefix or postfix qualifiers.
    fn parse_type_expr(&mut self) -> Option<Node> {
        if self.has_fatal_error() || !self.enter_recursion() {
            return None;
        }
        let node = self.parse_type_expr_inner();
        self.exit_recursion();
        node
    }

    fn parse_type_expr_inner(&mut self) -> Option<Node> {
        let start = self.current_span().start();

        match self.current() {
            SyntaxKind::Question => {
                self.bump();
                // `?` alone is the unknown type; `?T` is nullable `T`.
                if self.currently_is_one_of(NULLABLE_LITERAL_FOLLOW) {
                    return Some(Node::new(NodeKind::NullableLiteral, self.range_from(start)));
                }
                let expr = Box::new(self.parse_type_expr()?);
                Some(Node::new(
                    NodeKind::Nullable { expr, prefix: true },
                    self.range_from(start),
                ))
            }
            SyntaxKind::Bang => {
                self.bump();
                let expr = Box::new(self.parse_type_expr()?);
                Some(Node::new(
                    NodeKind::NonNullable { expr, prefix: true },
                    self.range_from(start),
                ))
            }
            _ => {
                let node = self.parse_basic()?;
                self.parse_postfix(node, start)
            }
        }
    }

    /// `T?`, `T!` and the array shorthand `T[]`, applied left to right.
    fn parse_postfix(&mut self, mut node: Node, start: TextSize) -> Option<Node> {
        // Every suffix nests one level deeper, so it spends recursion fuel.
        let depth = self.depth;
        let result = loop {
            let current = self.current();
            if !POSTFIX.contains(current) {
                break Some(node);
            }
            if !self.enter_recursion() {
                break None;
            }
            let open = self.bump().span;
            let expr = Box::new(node);
            let kind = match current {
                SyntaxKind::Question => NodeKind::Nullable {
                    expr,
                    prefix: false,
                },
                SyntaxKind::Bang => NodeKind::NonNullable {
                    expr,
                    prefix: false,
                },
                _ => {
                    let closed = self.expect_closing(
                        SyntaxKind::BracketClose,
                        DiagnosticKind::UnclosedBracket,
                        open,
                    );
                    if closed.is_none() {
                        break None;
                    }
                    let base = Node::new(
                        NodeKind::Name("Array".to_string()),
                        self.range_from(open.start()),
                    );
                    NodeKind::Application {
                        base: Box::new(base),
                        args: vec![*expr],
                    }
                }
            };
            node = Node::new(kind, self.range_from(start));
        };
        self.depth = depth;
        result
    }

    fn parse_basic(&mut self) -> Option<Node> {
        let start = self.current_span().start();

        let kind = match self.current() {
            SyntaxKind::Star => {
                self.bump();
                NodeKind::AllLiteral
            }
            SyntaxKind::KwNull => {
                self.bump();
                NodeKind::NullLiteral
            }
            SyntaxKind::KwUndefined => {
                self.bump();
                NodeKind::UndefinedLiteral
            }
            SyntaxKind::KwVoid => {
                self.bump();
                NodeKind::VoidLiteral
            }
            SyntaxKind::StringLiteral => {
                let token = self.bump();
                NodeKind::StringLiteral(unquote(token_text(self.source, &token)).to_string())
            }
            SyntaxKind::NumberLiteral => {
                let token = self.bump();
                NodeKind::NumericLiteral(token_text(self.source, &token).to_string())
            }
            SyntaxKind::ParenOpen => return self.parse_paren(),
            SyntaxKind::BracketOpen => return self.parse_tuple(),
            SyntaxKind::BraceOpen => return self.parse_record(),
            SyntaxKind::KwFunction => return self.parse_function(),
            kind if kind == SyntaxKind::Id || kind.is_contextual_keyword() => {
                return self.parse_name_or_application();
            }
            _ => {
                self.error_found(DiagnosticKind::ExpectedType);
                return None;
            }
        };

        Some(Node::new(kind, self.range_from(start)))
    }

    /// `(T)` or `(A|B)`. Always a union, even with one member.
    fn parse_paren(&mut self) -> Option<Node> {
        self.assert_current(SyntaxKind::ParenOpen);
        let open = self.bump().span;

        let mut members = vec![self.parse_type_expr()?];
        while self.eat(SyntaxKind::Pipe) {
            members.push(self.parse_type_expr()?);
        }

        self.expect_closing(SyntaxKind::ParenClose, DiagnosticKind::UnclosedParen, open)?;
        Some(Node::new(
            NodeKind::Union(members),
            self.range_from(open.start()),
        ))
    }

    /// `[A, B]`
    fn parse_tuple(&mut self) -> Option<Node> {
        self.assert_current(SyntaxKind::BracketOpen);
        let open = self.bump().span;

        let mut elements = Vec::new();
        if !self.currently_is(SyntaxKind::BracketClose) {
            loop {
                elements.push(self.parse_top()?);
                if !self.eat(SyntaxKind::Comma) {
                    break;
                }
            }
        }

        self.expect_closing(
            SyntaxKind::BracketClose,
            DiagnosticKind::UnclosedBracket,
            open,
        )?;
        Some(Node::new(
            NodeKind::Tuple(elements),
            self.range_from(open.start()),
        ))
    }

    /// `{key: T, other}`
    fn parse_record(&mut self) -> Option<Node> {
        self.assert_current(SyntaxKind::BraceOpen);
        let open = self.bump().span;

        let mut fields = Vec::new();
        if !self.currently_is(SyntaxKind::BraceClose) {
            loop {
                fields.push(self.parse_record_field()?);
                if !self.eat(SyntaxKind::Comma) {
                    break;
                }
            }
        }

        self.expect_closing(SyntaxKind::BraceClose, DiagnosticKind::UnclosedBrace, open)?;
        Some(Node::new(
            NodeKind::Record(fields),
            self.range_from(open.start()),
        ))
    }

    fn parse_record_field(&mut self) -> Option<RecordField> {
        if !self.currently_is_one_of(RECORD_KEY) {
            self.error_found(DiagnosticKind::ExpectedFieldName);
            return None;
        }

        let token = self.bump();
        let text = token_text(self.source, &token);
        let key = if token.kind == SyntaxKind::StringLiteral {
            unquote(text)
        } else {
            text
        };

        let value = if self.eat(SyntaxKind::Colon) {
            Some(self.parse_top()?)
        } else {
            None
        };

        Some(RecordField {
            key: key.to_string(),
            value,
            range: self.range_from(token.span.start()),
        })
    }

    /// `function(this:T, new:U, A, b: B, C=, ...D): R`
    fn parse_function(&mut self) -> Option<Node> {
        self.assert_current(SyntaxKind::KwFunction);
        let start = self.bump().span.start();

        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.error_found(DiagnosticKind::ExpectedParameterList);
            return None;
        }
        let open = self.bump().span;

        let mut function = FunctionType::default();
        let mut optional_seen = false;
        if !self.currently_is(SyntaxKind::ParenClose) {
            loop {
                self.parse_function_param(&mut function, &mut optional_seen)?;
                if !self.eat(SyntaxKind::Comma) {
                    break;
                }
            }
        }
        self.expect_closing(SyntaxKind::ParenClose, DiagnosticKind::UnclosedParen, open)?;

        if self.eat(SyntaxKind::Colon) {
            function.result = Some(Box::new(self.parse_type_expr()?));
        }

        Some(Node::new(NodeKind::Function(function), self.range_from(start)))
    }

    /// Parameters are single type expressions: a union needs parentheses.
    fn parse_function_param(
        &mut self,
        function: &mut FunctionType,
        optional_seen: &mut bool,
    ) -> Option<()> {
        // LL(2): `this:` and `new:` bind the receiver, not a positional param.
        let binder = self.current();
        if binder.is_contextual_keyword() && self.peek_nth(1) == SyntaxKind::Colon {
            self.bump();
            self.bump();
            let ty = Some(Box::new(self.parse_type_expr()?));
            if binder == SyntaxKind::KwThis {
                function.this = ty;
            } else {
                function.new = ty;
            }
            return Some(());
        }

        let param = if self.currently_is(SyntaxKind::Ellipsis) {
            let start = self.bump().span.start();
            let expr = if self.currently_is_one_of(TYPE_FIRST) {
                Some(Box::new(self.parse_type_expr()?))
            } else {
                None
            };
            Node::new(NodeKind::Rest(expr), self.range_from(start))
        } else {
            let ty = self.parse_named_param()?;
            if self.currently_is(SyntaxKind::Equals) {
                *optional_seen = true;
            } else if *optional_seen {
                self.diagnostics
                    .report(DiagnosticKind::RequiredAfterOptional, ty.range)
                    .emit();
                return None;
            }
            self.parse_optional_suffix(ty)
        };

        function.params.push(param);
        Some(())
    }

    /// `T`, or `name: T` when a plain name is followed by a colon.
    fn parse_named_param(&mut self) -> Option<Node> {
        let ty = self.parse_type_expr()?;
        let NodeKind::Name(name) = &ty.kind else {
            return Some(ty);
        };
        if !self.currently_is(SyntaxKind::Colon) {
            return Some(ty);
        }

        let name = name.clone();
        self.bump();
        let expr = Box::new(self.parse_type_expr()?);
        Some(Node::new(
            NodeKind::Parameter { name, expr },
            self.range_from(ty.range.start()),
        ))
    }

    /// `goog.events.Event`, optionally applied: `Array.<T>`, `Object<K, V>`.
    fn parse_name_or_application(&mut self) -> Option<Node> {
        let first = self.bump();
        let start = first.span.start();
        let mut name = token_text(self.source, &first).to_string();

        while self.eat(SyntaxKind::Dot) {
            if !self.currently_is_one_of(NAME_SEGMENT) {
                self.error_found(DiagnosticKind::ExpectedName);
                return None;
            }
            let segment = self.bump();
            name.push('.');
            name.push_str(token_text(self.source, &segment));
        }

        let base = Node::new(NodeKind::Name(name), self.range_from(start));
        if !self.currently_is_one_of(TYPE_ARGS_OPEN) {
            return Some(base);
        }

        let open = self.bump().span;
        let mut args = vec![self.parse_top()?];
        while self.eat(SyntaxKind::Comma) {
            args.push(self.parse_top()?);
        }
        self.expect_closing(SyntaxKind::Gt, DiagnosticKind::UnclosedTypeArguments, open)?;

        Some(Node::new(
            NodeKind::Application {
                base: Box::new(base),
                args,
            },
            self.range_from(start),
        ))
    }
}

/// Strip the surrounding quotes of a string literal token.
fn unquote(text: &str) -> &str {
    text.get(1..text.len().saturating_sub(1)).unwrap_or_default()
}
