use rowan::TextRange;

use super::*;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedType, range(0, 5))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    assert!(!diagnostics.has_warnings());
    insta::assert_snapshot!(diagnostics.render_plain(), @"error at 0..5: expected a type");
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::TrailingInput, range(3, 4))
        .message("found name")
        .emit();

    insta::assert_snapshot!(
        diagnostics.render_plain(),
        @"error at 3..4: unexpected input after type: found name"
    );
}

#[test]
fn conversion_kinds_are_warnings() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnsupportedSyntax, range(0, 9))
        .message("RecordType")
        .emit();
    diagnostics
        .report(DiagnosticKind::ArrayArity, range(0, 20))
        .message("2")
        .emit();

    assert_eq!(diagnostics.warning_count(), 2);
    assert_eq!(diagnostics.error_count(), 0);
    assert!(diagnostics.has_kind(DiagnosticKind::ArrayArity));
    insta::assert_snapshot!(diagnostics.render_plain(), @r"
    warning at 0..9: unsupported syntax: `RecordType` has no equivalent
    warning at 0..20: `Array` takes exactly one type argument, found 2 (hint: e.g., `Array.<string>`)
    ");
}

#[test]
fn builder_with_related_and_hint() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(0, 7))
        .message("opened here")
        .related_to("unclosed `(`", range(0, 1))
        .hint("add `)`")
        .emit();

    insta::assert_snapshot!(
        diagnostics.render_plain(),
        @"error at 0..7: missing closing `)`; opened here (related: unclosed `(` at 0..1) (hint: add `)`)"
    );
}

#[test]
fn render_with_source_shows_snippet() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::TrailingInput, range(7, 9))
        .emit();

    let out = diagnostics.render("string >>");
    assert!(out.starts_with("error: unexpected input after type"), "{out}");
    assert!(out.contains("string >>"), "{out}");
    assert!(out.contains("^^"), "{out}");
}

#[test]
fn render_empty_range_at_end_of_source() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedType, range(6, 6))
        .emit();

    let out = diagnostics.printer("Array.").path("annotation").render();
    assert!(out.contains("annotation"), "{out}");
    assert!(out.contains("expected a type"), "{out}");
}

#[test]
fn render_with_source_includes_hints() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ArrayArity, range(0, 14))
        .message("0")
        .emit();

    let out = diagnostics.render("Array.<string>");
    assert!(out.starts_with("warning:"), "{out}");
    assert!(out.contains("e.g., `Array.<string>`"), "{out}");
}

#[test]
fn render_empty_collection_is_empty() {
    let diagnostics = Diagnostics::new();
    assert_eq!(diagnostics.render("string"), "");
    assert_eq!(diagnostics.render_plain(), "");
}

#[test]
fn extend_merges_messages() {
    let mut a = Diagnostics::new();
    a.report(DiagnosticKind::ExpectedType, range(0, 1)).emit();
    let mut b = Diagnostics::new();
    b.report(DiagnosticKind::UnsupportedSyntax, range(1, 2)).emit();

    a.extend(b);
    assert_eq!(a.len(), 2);
    assert!(a.has_errors());
    assert!(a.has_warnings());
}
