use std::collections::HashMap;

use serde_json::{Map, Value};

use super::ApplicationSubmission;

/// Parse a submission body based on the Content-Type header. JSON is the
/// default; urlencoded bodies are also accepted.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<ApplicationSubmission, String> {
    let ct = content_type.unwrap_or("application/json");

    let value = if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)?
    } else {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))?
    };

    serde_json::from_value(value).map_err(|e| format!("Invalid submission: {e}"))
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;
    let pairs: HashMap<String, String> = form_urlencoded::parse(body_str.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut map = Map::new();
    for (k, v) in pairs {
        map.insert(k, Value::String(v));
    }
    Ok(Value::Object(map))
}
