use super::*;
use serde_json::json;

#[test]
fn unquoted_keys() {
    let res = repair("{a: 1, b: 2}");
    assert!(res.success);
    assert_eq!(res.data.unwrap(), json!({"a": 1, "b": 2}));
    assert_eq!(res.fixes, vec![result::FIX_UNQUOTED_KEYS.to_string()]);
}

#[test]
fn unquoted_key_and_value() {
    let res = repair("{a: b}");
    assert!(res.success);
    assert_eq!(res.data.unwrap(), json!({"a": "b"}));
    assert_eq!(
        res.fixes,
        vec![
            result::FIX_UNQUOTED_KEYS.to_string(),
            result::FIX_BARE_VALUES.to_string()
        ]
    );
}

#[test]
fn dollar_and_underscore_keys() {
    assert_repair_eq("{$ref: 1, _private: 2}", r#"{"$ref": 1, "_private": 2}"#);
}

#[test]
fn trailing_comma_object() {
    let res = repair(r#"{"a":1,}"#);
    assert!(res.success);
    assert_eq!(res.data.unwrap(), json!({"a": 1}));
    assert_eq!(res.fixes, vec![result::FIX_TRAILING_COMMAS.to_string()]);
}

#[test]
fn trailing_comma_array() {
    assert_repair_eq("[1, 2, 3,]", "[1, 2, 3]");
}

#[test]
fn trailing_comma_before_whitespace() {
    assert_repair_eq("{\"a\": 1 ,\n}", r#"{"a": 1}"#);
}

#[test]
fn comma_inside_string_untouched() {
    assert_repair_eq(r#"{'a': '1,}'}"#, r#"{"a": "1,}"}"#);
}

#[test]
fn bare_value_quoted() {
    assert_repair_eq("{status: pending}", r#"{"status": "pending"}"#);
}

#[test]
fn json_literals_not_quoted() {
    let res = repair("{a: true, b: false, c: null}");
    assert!(res.success);
    assert_eq!(res.data.unwrap(), json!({"a": true, "b": false, "c": null}));
    assert_eq!(res.fixes, vec![result::FIX_UNQUOTED_KEYS.to_string()]);
}

#[test]
fn missing_comma_between_strings() {
    let res = repair("[\"a\"\n\"b\"\n\"c\"]");
    assert!(res.success);
    assert_eq!(res.data.unwrap(), json!(["a", "b", "c"]));
    assert_eq!(res.fixes, vec![result::FIX_MISSING_COMMAS.to_string()]);
}

#[test]
fn missing_comma_between_objects() {
    assert_repair_eq(
        "[{\"a\": 1}\n{\"b\": 2}]",
        r#"[{"a": 1}, {"b": 2}]"#,
    );
}

#[test]
fn missing_comma_between_arrays() {
    assert_repair_eq("[[1]\n[2]]", "[[1], [2]]");
}

#[test]
fn missing_comma_object_then_key() {
    assert_repair_eq(
        "{\"a\": {}\n\"b\": 1}",
        r#"{"a": {}, "b": 1}"#,
    );
}

#[test]
fn missing_comma_string_then_object() {
    assert_repair_eq(
        "[\"x\"\n{\"y\": 2}]",
        r#"["x", {"y": 2}]"#,
    );
}

#[test]
fn same_line_adjacency_is_not_repaired() {
    // The missing-comma heuristic is newline-delimited only.
    let res = repair(r#"["a" "b"]"#);
    assert!(!res.success);
}

#[test]
fn combined_repairs_in_order() {
    let input = "// config\n{\n  name: 'Jane',\n  active: True,\n  'nums': [1, 2, 3,],\n}";
    let res = repair(input);
    assert!(res.success, "errors: {:?}", res.errors);
    assert_eq!(
        res.data.unwrap(),
        json!({"name": "Jane", "active": true, "nums": [1, 2, 3]})
    );
    assert_eq!(
        res.fixes,
        vec![
            result::FIX_COMMENTS.to_string(),
            result::FIX_PYTHON_LITERALS.to_string(),
            result::FIX_SINGLE_QUOTES.to_string(),
            result::FIX_UNQUOTED_KEYS.to_string(),
            result::FIX_TRAILING_COMMAS.to_string(),
        ]
    );
}
