//! Parser state machine and low-level operations.

use rowan::{TextRange, TextSize};

use super::ast::Node;
use super::lexer::{Token, token_text};
use super::token::{SyntaxKind, TokenSet};
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Recursive-descent parser over a pre-lexed token vector.
///
/// Doctrine-style semantics: the first syntax error makes the whole annotation
/// unparseable, so productions return `Option<Node>` and bail with `?`.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) last_end: TextSize,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_end: TextSize::from(0),
            exec_fuel_remaining: None,
            recursion_fuel_limit: None,
            fatal_error: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_remaining = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    /// Parse a type annotation (`@type`, `@return`, ...).
    pub fn parse_type(mut self) -> Result<Node, Error> {
        let node = self.parse_type_root();
        self.finish(node)
    }

    /// Parse a parameter annotation, which may end in the optional marker `=`
    /// or start with the rest marker `...`.
    pub fn parse_param_type(mut self) -> Result<Node, Error> {
        let node = self.parse_param_root();
        self.finish(node)
    }

    fn finish(self, node: Option<Node>) -> Result<Node, Error> {
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        match node {
            Some(node) if !self.diagnostics.has_errors() => Ok(node),
            _ => Err(Error::AnnotationParseError(self.diagnostics)),
        }
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    /// Current non-trivia token kind; `SyntaxKind::Error` at end of input.
    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia();
        self.tokens
            .get(self.pos)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    /// LL(k) lookahead past trivia.
    pub(super) fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.skip_trivia();
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia();
        match self.tokens.get(self.pos) {
            Some(token) => token_text(self.source, token),
            None => "",
        }
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&mut self) -> bool {
        self.skip_trivia();
        self.pos >= self.tokens.len()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    fn skip_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.pos += 1;
        }
    }

    fn consume_exec_fuel(&mut self) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                if self.fatal_error.is_none() {
                    self.fatal_error = Some(Error::ExecFuelExhausted);
                }
                return;
            }
            *remaining -= 1;
        }
    }

    /// Consume the current token and return it.
    pub(super) fn bump(&mut self) -> Token {
        self.skip_trivia();
        assert!(self.pos < self.tokens.len(), "bump called at EOF");
        self.consume_exec_fuel();

        let token = self.tokens[self.pos];
        self.last_end = token.span.end();
        self.pos += 1;
        token
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Range from `start` to the end of the last consumed token.
    pub(super) fn range_from(&self, start: TextSize) -> TextRange {
        TextRange::new(start, self.last_end.max(start))
    }

    /// Report at the current token. Garbage always wins over the caller's
    /// expectation: it is the real reason the parse stopped.
    fn report_here(&mut self, kind: DiagnosticKind, message: Option<String>) {
        let range = self.current_span();
        if self.currently_is(SyntaxKind::Garbage) {
            let text = self.current_text();
            self.diagnostics
                .report(DiagnosticKind::UnrecognizedCharacters, range)
                .message(format!("`{}`", text))
                .emit();
            return;
        }
        let builder = self.diagnostics.report(kind, range);
        match message {
            Some(message) => builder.message(message).emit(),
            None => builder.emit(),
        }
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        self.report_here(kind, None);
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.report_here(kind, Some(message.into()));
    }

    /// "<kind>: found Y" at the current token.
    pub(super) fn error_found(&mut self, kind: DiagnosticKind) {
        let found = self.current().describe();
        self.error_msg(kind, format!("found {}", found));
    }

    /// Expect a closing delimiter, pointing back at the opening one on failure.
    pub(super) fn expect_closing(
        &mut self,
        close: SyntaxKind,
        kind: DiagnosticKind,
        open: TextRange,
    ) -> Option<Token> {
        if self.currently_is(close) {
            return Some(self.bump());
        }
        if self.currently_is(SyntaxKind::Garbage) {
            self.error(kind);
            return None;
        }
        let current = self.current_span();
        let found = self.current().describe();
        self.diagnostics
            .report(kind, TextRange::new(open.start(), current.end()))
            .message(format!("found {}", found))
            .related_to("opened here", open)
            .emit();
        None
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
