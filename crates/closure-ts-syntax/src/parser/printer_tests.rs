use super::{parse_param_type, parse_type};

#[test]
fn printer_with_spans_on_function() {
    let input = "function(string=): number";
    let node = parse_type(input).expect("valid annotation");

    let res = node.printer().with_spans(true).dump();

    insta::assert_snapshot!(res, @r"
    Function [0..25]
      Params
        Optional [9..16]
          Name [9..15] string
      Result
        Name [19..25] number
    ");
}

#[test]
fn printer_with_spans_on_record_fields() {
    let input = "{a: number, b}";
    let node = parse_type(input).expect("valid annotation");

    let res = node.printer().with_spans(true).dump();

    insta::assert_snapshot!(res, @r"
    Record [0..14]
      Field [1..10] a
        Name [4..10] number
      Field [12..13] b
    ");
}

#[test]
fn printer_with_spans_on_postfix_qualifier() {
    let node = parse_param_type("string?=").expect("valid parameter annotation");

    let res = node.printer().with_spans(true).dump();

    insta::assert_snapshot!(res, @r"
    Optional [0..8]
      Nullable [0..7] (postfix)
        Name [0..6] string
    ");
}

#[test]
fn printer_formats_into_writer() {
    let node = parse_type("Array.<*>").expect("valid annotation");
    let mut out = String::new();

    node.printer().format(&mut out).expect("String write never fails");

    assert_eq!(out, "Application\n  Name Array\n  AllLiteral\n");
}
