//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

/// Renders diagnostics against the annotation they were reported for.
///
/// Without a source, each diagnostic is printed on one line with its range.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    /// Label shown in the snippet header, e.g. the file the annotation came from.
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = match (self.source, self.colored) {
            (None, _) => None,
            (Some(_), true) => Some(Renderer::styled()),
            (Some(_), false) => Some(Renderer::plain()),
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            match (self.source, &renderer) {
                (Some(source), Some(renderer)) => {
                    let report = self.report(diag, source);
                    write!(w, "{}", renderer.render(&report))?;
                }
                _ => write!(w, "{}", diag)?,
            }
        }

        Ok(())
    }

    fn report<'a>(&'a self, diag: &'a DiagnosticMessage, source: &'a str) -> Vec<Group<'a>> {
        let limit = source.len();
        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(visible_range(diag.range, limit))
                .label(&diag.message),
        );
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }
        for related in &diag.related {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(visible_range(related.range, limit))
                    .label(&related.message),
            );
        }

        let mut group = level(diag.severity())
            .primary_title(&diag.message)
            .element(snippet);
        for hint in &diag.hints {
            group = group.element(Level::HELP.message(hint));
        }
        vec![group]
    }
}

fn level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Clamp to the source and widen empty ranges so the caret is visible.
fn visible_range(range: TextRange, limit: usize) -> Range<usize> {
    let start = usize::from(range.start()).min(limit);
    let end = usize::from(range.end()).min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }
    start..end
}
