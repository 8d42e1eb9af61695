//! Closure Compiler type annotation syntax.
//!
//! Lexes and parses the type expressions found in Closure-style JSDoc tags
//! (`@type {?Array.<string>}`, `@param {function(number):boolean=} cb`) into
//! an owned [`ast::Node`] tree.
//!
//! # Example
//!
//! ```
//! use closure_ts_syntax::{ast::NodeKind, parse_type};
//!
//! let node = parse_type("?Array.<string>").expect("valid annotation");
//! assert!(matches!(node.kind, NodeKind::Nullable { .. }));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod parser;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use parser::{AstPrinter, Parser, ast, parse_param_type, parse_type};
pub use rowan::{TextRange, TextSize};

/// Errors that can occur while parsing an annotation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("annotation parsing failed with {} errors", .0.error_count())]
    AnnotationParseError(Diagnostics),
}

impl Error {
    /// Diagnostics explaining the failure, if the parser produced any.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Error::AnnotationParseError(diagnostics) => Some(diagnostics),
            _ => None,
        }
    }
}

/// Result type for annotation parsing.
pub type Result<T> = std::result::Result<T, Error>;
