use super::*;
use serde_json::Value;

const MESSY_INPUTS: &[&str] = &[
    "{'a': 1, b: 'x',}",
    "// note\n{active: True, 'tags': ['x'\n'y']}",
    r#"{"extractor_request": "{'key': 'value'}"}"#,
    "{a: b}",
    "[1, 2, 3,]",
];

const VALID_INPUTS: &[&str] = &[
    r#"{"a": [1, 2.5, true, null], "b": {"c": "text"}}"#,
    r#"[{"x": "y"}, [], {}, "z"]"#,
    "42",
    r#""just a string""#,
    "null",
];

#[test]
fn repairing_formatted_output_is_a_no_op() {
    for input in MESSY_INPUTS {
        let first = repair(input);
        assert!(first.success, "input: {input}");
        let second = repair(&first.formatted);
        assert!(second.success, "formatted: {}", first.formatted);
        assert!(second.fixes.is_empty(), "formatted: {}", first.formatted);
        assert_eq!(second.formatted, first.formatted);
        assert_eq!(second.data, first.data);
    }
}

#[test]
fn valid_json_round_trips_without_fixes() {
    for input in VALID_INPUTS {
        let res = repair(input);
        assert!(res.success, "input: {input}");
        assert!(res.fixes.is_empty(), "input: {input}");
        let expected: Value = serde_json::from_str(input).unwrap();
        assert_eq!(res.data.unwrap(), expected, "input: {input}");
    }
}

#[test]
fn errors_nonempty_iff_failure() {
    let corpus = [
        "{'a': 1}",
        "{broken",
        "",
        "[1, 2,]",
        "{not json at all",
        "// just a comment",
    ];
    for input in corpus {
        let res = repair(input);
        assert_eq!(
            res.success,
            res.errors.is_empty(),
            "input: {input}, errors: {:?}",
            res.errors
        );
        if res.success {
            let reparsed: Value = serde_json::from_str(&res.formatted).unwrap();
            assert_eq!(&reparsed, res.data.as_ref().unwrap());
        } else {
            assert!(res.data.is_none());
            assert!(res.formatted.is_empty());
        }
    }
}

#[test]
fn fixes_follow_pipeline_order() {
    let res = repair("// c\n{'a': True, b: [1,\n]}");
    assert!(res.success);
    let order = [
        result::FIX_COMMENTS,
        result::FIX_PYTHON_LITERALS,
        result::FIX_SINGLE_QUOTES,
        result::FIX_UNQUOTED_KEYS,
        result::FIX_TRAILING_COMMAS,
        result::FIX_BARE_VALUES,
        result::FIX_MISSING_COMMAS,
        result::FIX_EMBEDDED_STRINGS,
    ];
    let positions: Vec<usize> = res
        .fixes
        .iter()
        .map(|f| order.iter().position(|o| o == f).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}
