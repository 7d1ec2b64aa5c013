use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Pretty-print `value` with `indent_width` spaces per level.
pub(crate) fn to_pretty(value: &Value, indent_width: usize) -> Result<String, serde_json::Error> {
    let indent = vec![b' '; indent_width];
    let mut buf = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| {
        serde_json::Error::io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
