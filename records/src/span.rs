//! Normalization of the `span_attributes` record field.

#[cfg(test)]
#[path = "span_test.rs"]
mod span_test;

use serde_json::Value;

/// Name/type pair extracted from a record's span attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpanInfo {
    pub name: Option<String>,
    pub kind: Option<String>,
}

/// Extract `name`/`type` from a raw `span_attributes` value.
///
/// The upstream emits this field either as a structured object or as a
/// JSON-encoded string. Parse failures and any other shape (number, array,
/// null) degrade to the empty result.
#[must_use]
pub fn parse_span_attributes(raw: Option<&Value>) -> SpanInfo {
    match raw {
        Some(Value::String(text)) => serde_json::from_str::<Value>(text)
            .map(|parsed| object_info(&parsed))
            .unwrap_or_default(),
        Some(value) => object_info(value),
        None => SpanInfo::default(),
    }
}

fn object_info(value: &Value) -> SpanInfo {
    let Value::Object(map) = value else {
        return SpanInfo::default();
    };
    SpanInfo {
        name: map.get("name").and_then(Value::as_str).map(str::to_owned),
        kind: map.get("type").and_then(Value::as_str).map(str::to_owned),
    }
}
