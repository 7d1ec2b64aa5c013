use crate::options::Options;
use crate::result::{
    FIX_BARE_VALUES, FIX_COMMENTS, FIX_EMBEDDED_STRINGS, FIX_MISSING_COMMAS, FIX_PYTHON_LITERALS,
    FIX_SINGLE_QUOTES, FIX_TRAILING_COMMAS, FIX_UNQUOTED_KEYS, RepairResult,
};
use crate::{fmt, normalize, quotes, revive, structure};
use serde_json::Value;

/// Repair `input` with default options.
///
/// The input is first tried as-is; only when strict parsing fails does the
/// repair pipeline run: strip comments, rewrite Python literals, unify
/// quotes, repair structure, parse, then revive embedded strings. One repair
/// pass only; if the final parse still fails the result reports failure.
pub fn repair(input: &str) -> RepairResult {
    repair_with_options(input, &Options::default())
}

/// Repair `input` with explicit [`Options`].
pub fn repair_with_options(input: &str, opts: &Options) -> RepairResult {
    let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    let mut fixes = Vec::new();
    let value = match serde_json::from_str::<Value>(input) {
        Ok(v) => v,
        Err(_) => match pipeline_parse(input, opts, &mut fixes) {
            Ok(v) => v,
            Err(message) => return RepairResult::failed(message, fixes),
        },
    };
    let value = if opts.revive_embedded {
        let mut revived = false;
        let v = revive::revive(value, opts, 0, &mut revived);
        if revived {
            fixes.push(FIX_EMBEDDED_STRINGS.to_string());
        }
        v
    } else {
        value
    };
    match fmt::to_pretty(&value, opts.indent_width) {
        Ok(formatted) => RepairResult {
            success: true,
            data: Some(value),
            formatted,
            errors: Vec::new(),
            fixes,
        },
        Err(e) => RepairResult::failed(e.to_string(), fixes),
    }
}

type Stage = fn(&str) -> (String, bool);

/// Run the text stages in their fixed order, recording a fix label for each
/// stage that changed the text, then attempt the final parse.
pub(crate) fn pipeline_parse(
    input: &str,
    opts: &Options,
    fixes: &mut Vec<String>,
) -> Result<Value, String> {
    let stages: [(bool, &str, Stage); 7] = [
        (opts.strip_comments, FIX_COMMENTS, normalize::strip_comments),
        (
            opts.python_literals,
            FIX_PYTHON_LITERALS,
            normalize::replace_python_literals,
        ),
        (opts.unify_quotes, FIX_SINGLE_QUOTES, quotes::unify_quotes),
        (
            opts.quote_unquoted_keys,
            FIX_UNQUOTED_KEYS,
            structure::quote_unquoted_keys,
        ),
        (
            opts.remove_trailing_commas,
            FIX_TRAILING_COMMAS,
            structure::remove_trailing_commas,
        ),
        (
            opts.quote_bare_values,
            FIX_BARE_VALUES,
            structure::quote_bare_values,
        ),
        (
            opts.insert_missing_commas,
            FIX_MISSING_COMMAS,
            structure::insert_missing_commas,
        ),
    ];

    let mut text = input.to_string();
    for (enabled, label, stage) in stages {
        if !enabled {
            continue;
        }
        let (next, stage_changed) = stage(&text);
        if stage_changed {
            text = next;
            fixes.push(label.to_string());
        }
    }
    serde_json::from_str(&text).map_err(|e| e.to_string())
}
