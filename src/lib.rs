pub mod cli;
pub mod error;
mod fmt;
mod normalize;
pub mod options;
mod quotes;
mod repair;
pub mod result;
mod revive;
mod scan;
mod structure;

pub use error::RepairError;
pub use options::{Options, PrefixPolicy};
pub use repair::{repair, repair_with_options};
pub use result::RepairResult;

use serde_json::Value;

/// Repair and parse into a `serde_json::Value`, for callers that prefer
/// `?`-style propagation over inspecting a [`RepairResult`].
pub fn repair_to_value(input: &str, opts: &Options) -> Result<Value, RepairError> {
    let res = repair_with_options(input, opts);
    match res.data {
        Some(v) if res.success => Ok(v),
        _ => Err(RepairError::Parse(res.errors.join("; "))),
    }
}

/// Parse (tolerantly) and re-serialize with no whitespace. Returns the input
/// unchanged if it cannot be repaired.
pub fn minify(input: &str) -> String {
    let res = repair(input);
    match res.data {
        Some(v) if res.success => serde_json::to_string(&v).unwrap_or_else(|_| input.to_string()),
        _ => input.to_string(),
    }
}

/// Parse (tolerantly) and re-serialize with the given indentation. Returns
/// the input unchanged if it cannot be repaired.
pub fn format(input: &str, indent_width: usize) -> String {
    let opts = Options {
        indent_width,
        ..Options::default()
    };
    let res = repair_with_options(input, &opts);
    if res.success {
        res.formatted
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests;
