//! Parser for Closure type annotations.
//!
//! # Architecture
//!
//! A logos lexer produces span-only tokens; a hand-written recursive-descent
//! parser turns them into an owned [`ast::Node`] tree.
//!
//! Unlike a resilient IDE parser, there is no recovery: the first syntax error
//! makes the whole annotation unparseable and is reported through
//! [`Error::AnnotationParseError`](crate::Error::AnnotationParseError).
//! Fuel exhaustion (exec_fuel, recursion_fuel) surfaces as its own error.

pub mod ast;
pub mod lexer;

mod core;
mod grammar;
mod invariants;
mod printer;
mod token;

#[cfg(test)]
mod printer_tests;

pub use core::Parser;
pub use printer::AstPrinter;
pub use token::{SyntaxKind, TokenSet, token_sets};

use crate::Result;
use ast::Node;
use lexer::lex;

/// Nesting depth accepted by [`parse_type`] and [`parse_param_type`].
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

fn default_parser(source: &str) -> Parser<'_> {
    Parser::new(source, lex(source)).with_recursion_fuel(Some(DEFAULT_RECURSION_LIMIT))
}

/// Parse a type annotation such as `?Array.<string>`.
pub fn parse_type(source: &str) -> Result<Node> {
    default_parser(source).parse_type()
}

/// Parse a parameter annotation, where `T=` and `...T` are also accepted.
pub fn parse_param_type(source: &str) -> Result<Node> {
    default_parser(source).parse_param_type()
}
