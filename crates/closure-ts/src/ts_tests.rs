use serde_json::json;

use crate::{FunctionType, Param, Type, convert_param_type, convert_type};

#[test]
fn json_for_names() {
    let value = serde_json::to_value(convert_type("string")).unwrap();

    assert_eq!(value, json!({"kind": "name", "name": "string"}));
}

#[test]
fn json_for_builtin_names() {
    assert_eq!(
        serde_json::to_value(Type::Any).unwrap(),
        json!({"kind": "name", "name": "any"})
    );
    assert_eq!(
        serde_json::to_value(Type::Null).unwrap(),
        json!({"kind": "name", "name": "null"})
    );
    assert_eq!(
        serde_json::to_value(Type::Undefined).unwrap(),
        json!({"kind": "name", "name": "undefined"})
    );
}

#[test]
fn json_for_nullable_array() {
    let value = serde_json::to_value(convert_type("Array.<string>")).unwrap();

    assert_eq!(
        value,
        json!({
            "kind": "union",
            "members": [
                {"kind": "array", "itemType": {"kind": "name", "name": "string"}},
                {"kind": "name", "name": "null"},
            ],
        })
    );
}

#[test]
fn json_for_function() {
    let value = serde_json::to_value(convert_type("function(number)")).unwrap();

    assert_eq!(
        value,
        json!({
            "kind": "function",
            "params": [{"name": "p0", "type": {"kind": "name", "name": "number"}}],
            "returns": {"kind": "name", "name": "any"},
        })
    );
}

#[test]
fn json_for_param() {
    let value = serde_json::to_value(convert_param_type("boolean=")).unwrap();

    assert_eq!(
        value,
        json!({"optional": true, "type": {"kind": "name", "name": "boolean"}})
    );
}

#[test]
fn json_field_order() {
    let json = serde_json::to_string(&Type::array(Type::name("Foo"))).unwrap();

    insta::assert_snapshot!(json, @r#"{"kind":"array","itemType":{"kind":"name","name":"Foo"}}"#);
}

#[test]
fn printer_nested_function() {
    let ty = Type::Function(FunctionType {
        params: vec![Param {
            name: "p0".to_string(),
            ty: Type::Function(FunctionType {
                params: vec![],
                returns: Box::new(Type::Undefined),
            }),
        }],
        returns: Box::new(Type::array(Type::Any).or_null()),
    });

    insta::assert_snapshot!(ty.printer().dump(), @r"
    Function
      Param p0
        Function
          Returns
            Undefined
      Returns
        Union
          Array
            Any
          Null
    ");
}

#[test]
fn or_null_builds_two_member_union() {
    assert_eq!(
        Type::name("Foo").or_null(),
        Type::Union(vec![Type::name("Foo"), Type::Null])
    );
}
