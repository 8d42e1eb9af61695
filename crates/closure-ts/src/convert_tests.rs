use indoc::indoc;

use closure_ts_syntax::{DiagnosticKind, Error};

use crate::{Config, Converter, Type, convert_param_type, convert_type};

fn dump(annotation: &str) -> String {
    convert_type(annotation).printer().dump()
}

#[test]
fn primitive_names_are_not_nullable() {
    insta::assert_snapshot!(dump("string"), @"Name string");
    insta::assert_snapshot!(dump("number"), @"Name number");
    insta::assert_snapshot!(dump("boolean"), @"Name boolean");
}

#[test]
fn object_names_are_nullable() {
    insta::assert_snapshot!(dump("Object"), @r"
    Union
      Name Object
      Null
    ");
    insta::assert_snapshot!(dump("goog.events.Event"), @r"
    Union
      Name goog.events.Event
      Null
    ");
}

#[test]
fn bare_array_is_nullable_array_of_any() {
    insta::assert_snapshot!(dump("Array"), @r"
    Union
      Array
        Any
      Null
    ");
}

#[test]
fn explicit_non_nullable() {
    insta::assert_snapshot!(dump("!Object"), @"Name Object");
    insta::assert_snapshot!(dump("Object!"), @"Name Object");
    insta::assert_snapshot!(dump("!Array"), @r"
    Array
      Any
    ");
}

#[test]
fn explicit_nullable() {
    insta::assert_snapshot!(dump("?number"), @r"
    Union
      Name number
      Null
    ");
    insta::assert_snapshot!(dump("number?"), @r"
    Union
      Name number
      Null
    ");
}

#[test]
fn parameterized_array() {
    insta::assert_snapshot!(dump("Array.<string>"), @r"
    Union
      Array
        Name string
      Null
    ");
    insta::assert_snapshot!(dump("!Array<!Foo>"), @r"
    Array
      Name Foo
    ");
}

#[test]
fn nested_arrays() {
    insta::assert_snapshot!(dump("!Array.<!Array.<number>>"), @r"
    Array
      Array
        Name number
    ");
}

#[test]
fn array_shorthand_is_a_nullable_array() {
    insta::assert_snapshot!(dump("string[]"), @r"
    Union
      Array
        Name string
      Null
    ");
    assert_eq!(convert_type("Array.<string>[]"), convert_type("Array.<Array.<string>>"));
}

#[test]
fn array_shorthand_follows_qualifier_rules() {
    insta::assert_snapshot!(dump("!Foo[]"), @r"
    Array
      Union
        Name Foo
        Null
    ");
    insta::assert_snapshot!(dump("!Foo![]"), @r"
    Array
      Name Foo
    ");
}

#[test]
fn unicode_names_are_nullable() {
    assert_eq!(convert_type("é"), Type::name("é").or_null());
    assert_eq!(convert_type("Foo.é"), Type::name("Foo.é").or_null());
}

#[test]
fn array_with_wrong_arity_has_any_items() {
    insta::assert_snapshot!(dump("Array.<string,number>"), @r"
    Union
      Array
        Any
      Null
    ");
}

#[test]
fn array_arity_is_reported() {
    let conversion = Converter::new().convert_type_with_diagnostics("Array.<string, number>");

    assert!(conversion.is_degraded());
    assert!(conversion.diagnostics().has_kind(DiagnosticKind::ArrayArity));
    insta::assert_snapshot!(
        conversion.diagnostics().render_plain(),
        @"warning at 0..22: `Array` takes exactly one type argument, found 2 (hint: e.g., `Array.<string>`)"
    );
}

#[test]
fn function_type() {
    insta::assert_snapshot!(dump("function(string, number): boolean"), @r"
    Function
      Param p0
        Name string
      Param p1
        Name number
      Returns
        Name boolean
    ");
}

#[test]
fn function_without_result_returns_any() {
    insta::assert_snapshot!(dump("function()"), @r"
    Function
      Returns
        Any
    ");
}

#[test]
fn function_params_follow_nullability_rules() {
    insta::assert_snapshot!(dump("function(Object, ?string): !Foo"), @r"
    Function
      Param p0
        Union
          Name Object
          Null
      Param p1
        Union
          Name string
          Null
      Returns
        Name Foo
    ");
}

#[test]
fn literals() {
    assert_eq!(convert_type("*"), Type::Any);
    assert_eq!(convert_type("?"), Type::Any);
    assert_eq!(convert_type("null"), Type::Null);
    assert_eq!(convert_type("undefined"), Type::Undefined);
}

#[test]
fn union_members_keep_their_own_nullability() {
    insta::assert_snapshot!(dump("string|Object|undefined"), @r"
    Union
      Name string
      Union
        Name Object
        Null
      Undefined
    ");
}

#[test]
fn union_members_are_not_deduplicated() {
    insta::assert_snapshot!(dump("string|string"), @r"
    Union
      Name string
      Name string
    ");
}

#[test]
fn union_of_one_flattens() {
    let elements = [
        "string",
        "Object",
        "Array",
        "Array.<number>",
        "function(string): void",
        "*",
        "?",
        "null",
        "undefined",
        "?Foo",
        "!Foo",
    ];

    for element in elements {
        let wrapped = format!("({})", element);
        assert_eq!(
            convert_type(&wrapped),
            convert_type(element),
            "`{}` should convert like `{}`",
            wrapped,
            element
        );
    }
}

#[test]
fn qualifier_on_a_union_wraps_again() {
    insta::assert_snapshot!(dump("?(string|number)"), @r"
    Union
      Union
        Name string
        Name number
      Null
    ");
}

#[test]
fn unsupported_syntax_is_any_without_null() {
    assert_eq!(convert_type("{a: number}"), Type::Any);
    assert_eq!(convert_type("?{a: number}"), Type::Any);
    assert_eq!(convert_type("void"), Type::Any);
    assert_eq!(convert_type("Object<string, number>"), Type::Any);
    assert_eq!(convert_type("?!Foo"), Type::Any);
}

#[test]
fn unsupported_syntax_is_reported() {
    let conversion = Converter::new().convert_type_with_diagnostics("Array.<{a: number}|void>");

    assert!(conversion.is_degraded());
    insta::assert_snapshot!(conversion.diagnostics().render_plain(), @r"
    warning at 7..18: unsupported syntax: `RecordType` has no equivalent
    warning at 19..23: unsupported syntax: `VoidLiteral` has no equivalent
    ");
    insta::assert_snapshot!(conversion.value().printer().dump(), @r"
    Union
      Array
        Union
          Any
          Any
      Null
    ");
}

#[test]
fn optional_marker_inside_function_params_is_unsupported() {
    insta::assert_snapshot!(dump("function(number=, ...string)"), @r"
    Function
      Param p0
        Any
      Param p1
        Any
      Returns
        Any
    ");
}

#[test]
fn named_function_params_are_unsupported() {
    let conversion = Converter::new().convert_type_with_diagnostics("function(a: number)");

    insta::assert_snapshot!(conversion.value().printer().dump(), @r"
    Function
      Param p0
        Any
      Returns
        Any
    ");
    insta::assert_snapshot!(
        conversion.diagnostics().render_plain(),
        @"warning at 9..18: unsupported syntax: `ParameterType` has no equivalent"
    );
}

#[test]
fn clean_conversion_is_not_degraded() {
    let conversion = Converter::new().convert_type_with_diagnostics("?Array.<string>");

    assert!(!conversion.is_degraded());
    assert!(conversion.diagnostics().is_empty());
    assert!(conversion.parse_error().is_none());
}

#[test]
fn parse_failure_degrades_to_any() {
    let conversion = Converter::new().convert_type_with_diagnostics("Array.<");

    assert!(conversion.is_degraded());
    assert!(conversion.value().is_any());
    assert!(conversion.diagnostics().is_empty());
    assert!(matches!(
        conversion.parse_error(),
        Some(Error::AnnotationParseError(_))
    ));
}

#[test]
fn trailing_optional_marker_is_rejected_for_types() {
    assert_eq!(convert_type("number="), Type::Any);
}

#[test]
fn total_on_malformed_input() {
    let inputs = [
        "",
        "   ",
        "}{",
        "function(:",
        "...",
        "=",
        "|",
        "?|?",
        "a.b.",
        "Array.<>",
        "'unterminated",
        "-",
        "\u{1F600}",
        "string number",
        "function(this:)",
    ];

    for input in inputs {
        let _ = convert_type(input);
        let _ = convert_param_type(input);
    }
    assert_eq!(convert_type(""), Type::Any);
    assert_eq!(convert_type("}{"), Type::Any);
}

#[test]
fn total_on_deep_nesting() {
    let qualifiers = format!("{}string", "?".repeat(1000));
    assert_eq!(convert_type(&qualifiers), Type::Any);

    let unclosed = "Array.<".repeat(500);
    assert_eq!(convert_type(&unclosed), Type::Any);

    let closed = format!("{}number{}", "!Array.<".repeat(300), ">".repeat(300));
    assert_eq!(convert_type(&closed), Type::Any);
}

#[test]
fn nesting_within_the_limit_converts() {
    let input = format!("{}number{}", "!Array.<".repeat(50), ">".repeat(50));

    let mut expected = Type::name("number");
    for _ in 0..50 {
        expected = Type::array(expected);
    }
    assert_eq!(convert_type(&input), expected);
}

#[test]
fn recursion_limit_is_configurable() {
    let input = "Array.<Array.<number>>";
    let converter = Converter::with_config(Config::new().recursion_limit(Some(2)));

    let conversion = converter.convert_type_with_diagnostics(input);

    assert!(conversion.value().is_any());
    assert!(matches!(
        conversion.parse_error(),
        Some(Error::RecursionLimitExceeded)
    ));
    assert!(!convert_type(input).is_any());
}

#[test]
fn exec_fuel_is_configurable() {
    let converter = Converter::with_config(Config::new().exec_fuel(Some(3)));

    let conversion = converter.convert_type_with_diagnostics("Array.<string>");

    assert!(conversion.value().is_any());
    assert!(matches!(
        conversion.parse_error(),
        Some(Error::ExecFuelExhausted)
    ));
    assert_eq!(converter.convert_type("string"), Type::name("string"));
}

#[test]
fn param_optional_marker() {
    let param = convert_param_type("Array=");

    assert!(param.optional);
    insta::assert_snapshot!(param.ty.printer().dump(), @r"
    Union
      Array
        Any
      Null
    ");
}

#[test]
fn param_without_marker() {
    let param = convert_param_type("?string");

    assert!(!param.optional);
    assert_eq!(param.ty, Type::name("string").or_null());
}

#[test]
fn param_optional_union() {
    let param = convert_param_type("string|number=");

    assert!(param.optional);
    assert_eq!(
        param.ty,
        Type::Union(vec![Type::name("string"), Type::name("number")])
    );
}

#[test]
fn param_rest_is_unsupported() {
    let conversion = Converter::new().convert_param_type_with_diagnostics("...number");

    assert!(!conversion.value().optional);
    assert!(conversion.value().ty.is_any());
    assert!(conversion.diagnostics().has_kind(DiagnosticKind::UnsupportedSyntax));
}

#[test]
fn param_fallback_uses_trailing_marker() {
    let inputs = ["Array.<=", "Array.<", "", "@@=", "function(=", "{a:}"];

    for input in inputs {
        let conversion = Converter::new().convert_param_type_with_diagnostics(input);
        assert!(conversion.parse_error().is_some(), "`{}` should not parse", input);
        assert!(conversion.value().ty.is_any());
        assert_eq!(conversion.value().optional, input.ends_with('='));
    }
}

#[test]
fn convert_node_borrows_a_parsed_annotation() {
    let input = indoc! {r#"
    function(
      !Array.<string>,
      ?Object
    ): undefined
    "#};
    let node = closure_ts_syntax::parse_type(input).expect("valid annotation");

    let conversion = Converter::new().convert_node(&node);

    assert!(!conversion.is_degraded());
    insta::assert_snapshot!(conversion.value().printer().dump(), @r"
    Function
      Param p0
        Array
          Name string
      Param p1
        Union
          Name Object
          Null
      Returns
        Undefined
    ");
    assert!(matches!(
        node.kind,
        closure_ts_syntax::ast::NodeKind::Function(_)
    ));
}
