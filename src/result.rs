use serde::Serialize;
use serde_json::Value;

// Fixed labels recorded in `RepairResult::fixes`, in pipeline order.
pub const FIX_COMMENTS: &str = "Removed comments";
pub const FIX_PYTHON_LITERALS: &str = "Converted Python literals to JSON";
pub const FIX_SINGLE_QUOTES: &str = "Converted single quotes to double quotes";
pub const FIX_UNQUOTED_KEYS: &str = "Quoted unquoted keys";
pub const FIX_TRAILING_COMMAS: &str = "Removed trailing commas";
pub const FIX_BARE_VALUES: &str = "Quoted bare-word values";
pub const FIX_MISSING_COMMAS: &str = "Inserted missing commas";
pub const FIX_EMBEDDED_STRINGS: &str = "Parsed embedded JSON strings";

/// Outcome of one repair call.
///
/// `success` is true iff `data` holds the parsed value and `formatted` its
/// pretty-printed serialization. `errors` is non-empty iff the call failed.
/// `fixes` lists, in application order, the label of every stage that
/// actually changed something; a no-op stage contributes nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepairResult {
    pub success: bool,
    pub data: Option<Value>,
    pub formatted: String,
    pub errors: Vec<String>,
    pub fixes: Vec<String>,
}

impl RepairResult {
    pub(crate) fn failed(error: String, fixes: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            formatted: String::new(),
            errors: vec![error],
            fixes,
        }
    }
}
