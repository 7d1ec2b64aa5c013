use crate::scan::{ident_end, is_ident_start, next_significant, skip_double_quoted};

// Structural repairs. Four order-sensitive passes, each a single
// string-aware left-to-right scan (no backtracking). By the time these run
// every string is double-quoted, so only `"` regions need skipping.

/// Wrap a bare identifier in key position with double quotes: the previous
/// significant character outside strings is `{` or `,` and the identifier is
/// followed (modulo whitespace) by `:`.
pub(crate) fn quote_unquoted_keys(s: &str) -> (String, bool) {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len() + 8);
    let mut changed = false;
    let mut prev_sig: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'"' {
            let end = skip_double_quoted(s, i);
            out.push_str(&s[i..end]);
            prev_sig = Some(b'"');
            i = end;
        } else if is_ident_start(b) {
            let end = ident_end(bytes, i);
            let key_position = matches!(prev_sig, Some(b'{') | Some(b','))
                && matches!(next_significant(bytes, end), Some((_, b':')));
            if key_position {
                out.push('"');
                out.push_str(&s[i..end]);
                out.push('"');
                changed = true;
            } else {
                out.push_str(&s[i..end]);
            }
            prev_sig = Some(bytes[end - 1]);
            i = end;
        } else {
            let ch = s[i..].chars().next().unwrap();
            out.push(ch);
            if !ch.is_whitespace() {
                prev_sig = Some(b);
            }
            i += ch.len_utf8();
        }
    }
    (out, changed)
}

/// Delete a comma that is followed (modulo whitespace) by `}` or `]`.
pub(crate) fn remove_trailing_commas(s: &str) -> (String, bool) {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut changed = false;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let end = skip_double_quoted(s, i);
                out.push_str(&s[i..end]);
                i = end;
            }
            b',' if matches!(next_significant(bytes, i + 1), Some((_, b'}')) | Some((_, b']'))) => {
                changed = true;
                i += 1;
            }
            _ => {
                let ch = s[i..].chars().next().unwrap();
                out.push(ch);
                i += ch.len_utf8();
            }
        }
    }
    (out, changed)
}

/// Wrap a bare identifier in value position with double quotes: the previous
/// significant character is `:` and the identifier is followed (modulo
/// whitespace) by `,`, `}`, or `]`. The JSON literals `true`/`false`/`null`
/// are left alone.
pub(crate) fn quote_bare_values(s: &str) -> (String, bool) {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len() + 8);
    let mut changed = false;
    let mut prev_sig: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'"' {
            let end = skip_double_quoted(s, i);
            out.push_str(&s[i..end]);
            prev_sig = Some(b'"');
            i = end;
        } else if is_ident_start(b) {
            let end = ident_end(bytes, i);
            let word = &s[i..end];
            let value_position = prev_sig == Some(b':')
                && matches!(
                    next_significant(bytes, end),
                    Some((_, b',')) | Some((_, b'}')) | Some((_, b']'))
                );
            if value_position && !matches!(word, "true" | "false" | "null") {
                out.push('"');
                out.push_str(word);
                out.push('"');
                changed = true;
            } else {
                out.push_str(word);
            }
            prev_sig = Some(bytes[end - 1]);
            i = end;
        } else {
            let ch = s[i..].chars().next().unwrap();
            out.push(ch);
            if !ch.is_whitespace() {
                prev_sig = Some(b);
            }
            i += ch.len_utf8();
        }
    }
    (out, changed)
}

/// Insert a comma between newline-separated adjacent tokens. Limited to the
/// pairs `" "`, `} {`, `] [`, `} "`, `" {`; whitespace without a newline is
/// never treated as adjacency.
pub(crate) fn insert_missing_commas(s: &str) -> (String, bool) {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len() + 8);
    let mut changed = false;
    let mut prev_end: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_whitespace() {
            let ws_start = i;
            let mut saw_newline = false;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                saw_newline |= bytes[i] == b'\n' || bytes[i] == b'\r';
                i += 1;
            }
            if saw_newline
                && let (Some(prev), Some(&next)) = (prev_end, bytes.get(i))
                && needs_comma(prev, next)
            {
                out.push(',');
                changed = true;
            }
            out.push_str(&s[ws_start..i]);
        } else if b == b'"' {
            let end = skip_double_quoted(s, i);
            out.push_str(&s[i..end]);
            prev_end = Some(b'"');
            i = end;
        } else {
            let ch = s[i..].chars().next().unwrap();
            out.push(ch);
            prev_end = Some(b);
            i += ch.len_utf8();
        }
    }
    (out, changed)
}

fn needs_comma(prev: u8, next: u8) -> bool {
    matches!(
        (prev, next),
        (b'"', b'"') | (b'}', b'{') | (b']', b'[') | (b'}', b'"') | (b'"', b'{')
    )
}
