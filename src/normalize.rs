use crate::scan::{ident_end, is_ident_byte, skip_double_quoted, skip_single_quoted};
use memchr::{memchr, memchr3};

// Comment stripping and Python-literal rewriting. Both passes run before
// quote unification, so they must skip single- as well as double-quoted
// regions.

/// Remove `//` line comments and `/* */` block comments found outside
/// strings. The newline ending a line comment is kept; an unterminated block
/// comment consumes to end-of-input.
pub(crate) fn strip_comments(s: &str) -> (String, bool) {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut changed = false;
    let mut i = 0;
    while i < bytes.len() {
        let at = match memchr3(b'/', b'"', b'\'', &bytes[i..]) {
            Some(rel) => i + rel,
            None => {
                out.push_str(&s[i..]);
                break;
            }
        };
        out.push_str(&s[i..at]);
        match bytes[at] {
            b'"' => {
                let end = skip_double_quoted(s, at);
                out.push_str(&s[at..end]);
                i = end;
            }
            b'\'' => {
                let end = skip_single_quoted(s, at);
                out.push_str(&s[at..end]);
                i = end;
            }
            _ => match bytes.get(at + 1) {
                Some(b'/') => {
                    i = memchr(b'\n', &bytes[at..]).map_or(s.len(), |rel| at + rel);
                    changed = true;
                }
                Some(b'*') => {
                    i = s[at + 2..]
                        .find("*/")
                        .map_or(s.len(), |rel| at + 2 + rel + 2);
                    changed = true;
                }
                _ => {
                    out.push('/');
                    i = at + 1;
                }
            },
        }
    }
    (out, changed)
}

/// Replace the standalone Python literals `None`/`True`/`False` with their
/// JSON spellings. Word-boundary matched on the identifier class, so
/// `NoneType` or `$True` stay untouched. Never fires inside a string body.
pub(crate) fn replace_python_literals(s: &str) -> (String, bool) {
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
            b'\'' => {
                let end = skip_single_quoted(s, i);
                out.push_str(&s[i..end]);
                i = end;
            }
            b'N' | b'T' | b'F' => {
                let bounded = i == 0 || !is_ident_byte(bytes[i - 1]);
                let end = ident_end(bytes, i);
                let word = &s[i..end];
                match word {
                    "None" if bounded => {
                        out.push_str("null");
                        changed = true;
                    }
                    "True" if bounded => {
                        out.push_str("true");
                        changed = true;
                    }
                    "False" if bounded => {
                        out.push_str("false");
                        changed = true;
                    }
                    _ => out.push_str(word),
                }
                i = end;
            }
            _ => {
                let start = i;
                while i < bytes.len()
                    && !matches!(bytes[i], b'"' | b'\'' | b'N' | b'T' | b'F')
                {
                    i += 1;
                }
                out.push_str(&s[start..i]);
            }
        }
    }
    (out, changed)
}
