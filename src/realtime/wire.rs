use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub(crate) struct TwseEnvelope {
    #[serde(default)]
    pub(crate) stat: Option<String>,
    #[serde(default)]
    pub(crate) fields: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) data: Option<Vec<Vec<Value>>>,
}

/// Renders a cell verbatim: strings without quotes, everything else as JSON text.
pub(crate) fn cell_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
