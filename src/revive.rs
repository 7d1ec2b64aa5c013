use crate::options::{Options, PrefixPolicy};
use crate::repair::pipeline_parse;
use serde_json::{Map, Value};

// Recursive string reviver. After a successful parse, string leaves that
// themselves encode a JSON/Python structure (logged request bodies, values
// stringified one level too many) are re-parsed in place. The walk preserves
// structure and order; only pipeline recursion through an embedded string
// counts against the depth cap.

pub(crate) fn revive(value: Value, opts: &Options, depth: usize, changed: &mut bool) -> Value {
    match value {
        Value::Object(map) => {
            let mut rebuilt = Map::with_capacity(map.len());
            for (k, v) in map {
                rebuilt.insert(k, revive(v, opts, depth, changed));
            }
            Value::Object(rebuilt)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|v| revive(v, opts, depth, changed))
                .collect(),
        ),
        Value::String(s) => revive_string(s, opts, depth, changed),
        other => other,
    }
}

fn revive_string(s: String, opts: &Options, depth: usize, changed: &mut bool) -> Value {
    if depth >= opts.max_revive_depth {
        return Value::String(s);
    }
    let trimmed = s.trim();
    if looks_structural(trimmed) {
        if let Some(v) = parse_embedded(trimmed, opts) {
            *changed = true;
            return revive(v, opts, depth + 1, changed);
        }
        return Value::String(s);
    }
    if let Some((label, span)) = split_labeled(trimmed)
        && let Some(v) = parse_embedded(span, opts)
    {
        *changed = true;
        let v = revive(v, opts, depth + 1, changed);
        return match opts.prefix_policy {
            PrefixPolicy::Discard => v,
            PrefixPolicy::Wrap => {
                let mut wrapper = Map::with_capacity(2);
                wrapper.insert("_prefix".to_string(), Value::String(label.to_string()));
                wrapper.insert("_data".to_string(), v);
                Value::Object(wrapper)
            }
        };
    }
    Value::String(s)
}

fn looks_structural(s: &str) -> bool {
    (s.starts_with('{') && s.ends_with('}')) || (s.starts_with('[') && s.ends_with(']'))
}

/// Strict JSON first, then the full repair pipeline.
fn parse_embedded(text: &str, opts: &Options) -> Option<Value> {
    if let Ok(v) = serde_json::from_str::<Value>(text) {
        return Some(v);
    }
    let mut fixes = Vec::new();
    pipeline_parse(text, opts, &mut fixes).ok()
}

/// Match "non-brace prefix, then `:`, then a brace/bracket span ending the
/// string" and return (label, span). The label is the prefix without its
/// trailing colon, trimmed.
fn split_labeled(s: &str) -> Option<(&str, &str)> {
    let open = s.find(['{', '['])?;
    if open == 0 {
        return None;
    }
    let prefix = &s[..open];
    if prefix.contains('}') || prefix.contains(']') {
        return None;
    }
    let label = prefix.trim_end().strip_suffix(':')?;
    let span = &s[open..];
    let close = if s.as_bytes()[open] == b'{' { '}' } else { ']' };
    if !span.ends_with(close) {
        return None;
    }
    Some((label.trim(), span))
}
