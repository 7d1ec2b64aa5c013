use crate::scan::{decode_single_quoted, skip_double_quoted};
use memchr::memchr2;

/// Rewrite every single-quoted string as a JSON double-quoted literal.
/// Double-quoted strings pass through verbatim (escape pairs consumed
/// atomically); single-quoted strings are decoded per source rules and
/// re-escaped for JSON.
pub(crate) fn unify_quotes(s: &str) -> (String, bool) {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut changed = false;
    let mut i = 0;
    while i < bytes.len() {
        let at = match memchr2(b'"', b'\'', &bytes[i..]) {
            Some(rel) => i + rel,
            None => {
                out.push_str(&s[i..]);
                break;
            }
        };
        out.push_str(&s[i..at]);
        if bytes[at] == b'"' {
            let end = skip_double_quoted(s, at);
            out.push_str(&s[at..end]);
            i = end;
        } else {
            let (content, end) = decode_single_quoted(s, at);
            out.push('"');
            escape_json_into(&mut out, &content);
            out.push('"');
            i = end;
            changed = true;
        }
    }
    (out, changed)
}

/// Append `s` to `out` escaped for a JSON string literal: backslash, double
/// quote, and the named controls by name, other control characters below
/// 0x20 as `\u00XX`, everything else verbatim. Safe runs are flushed as
/// whole slices.
pub(crate) fn escape_json_into(out: &mut String, s: &str) {
    let mut start = 0usize;
    for (i, ch) in s.char_indices() {
        let named: Option<&str> = match ch {
            '"' => Some("\\\""),
            '\\' => Some("\\\\"),
            '\u{08}' => Some("\\b"),
            '\u{0C}' => Some("\\f"),
            '\n' => Some("\\n"),
            '\r' => Some("\\r"),
            '\t' => Some("\\t"),
            _ => None,
        };
        if named.is_none() && ch >= '\u{20}' {
            continue;
        }
        if i > start {
            out.push_str(&s[start..i]);
        }
        match named {
            Some(esc) => out.push_str(esc),
            None => out.push_str(&format!("\\u{:04X}", ch as u32)),
        }
        start = i + ch.len_utf8();
    }
    if start < s.len() {
        out.push_str(&s[start..]);
    }
}
