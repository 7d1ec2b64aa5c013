use super::*;
use serde_json::Value;

// Shared test helpers
fn assert_repair_eq(input: &str, expected: &str) {
    let res = repair(input);
    assert!(
        res.success,
        "\nInput: {}\nErrors: {:?}",
        input, res.errors
    );
    let expected_val: Value = serde_json::from_str(expected).unwrap();
    assert_eq!(
        res.data.unwrap(),
        expected_val,
        "\nInput: {}\nFormatted: {}",
        input,
        res.formatted
    );
}

fn assert_unrepairable(input: &str) {
    let res = repair(input);
    assert!(!res.success, "\nInput unexpectedly repaired: {}", input);
    assert!(!res.errors.is_empty());
    assert!(res.data.is_none());
    assert!(res.formatted.is_empty());
}

mod properties;
mod structure;
