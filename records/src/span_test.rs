use super::*;

#[test]
fn absent_value_yields_empty_info() {
    assert_eq!(parse_span_attributes(None), SpanInfo::default());
}

#[test]
fn structured_object_extracts_name_and_type() {
    let value = serde_json::json!({"name": "chat", "type": "llm"});
    let info = parse_span_attributes(Some(&value));
    assert_eq!(info.name.as_deref(), Some("chat"));
    assert_eq!(info.kind.as_deref(), Some("llm"));
}

#[test]
fn encoded_string_is_parsed() {
    let value = serde_json::json!(r#"{"name":"chat","type":"llm"}"#);
    let info = parse_span_attributes(Some(&value));
    assert_eq!(info.name.as_deref(), Some("chat"));
    assert_eq!(info.kind.as_deref(), Some("llm"));
}

#[test]
fn malformed_string_yields_empty_info() {
    let value = serde_json::json!("{not json");
    assert_eq!(parse_span_attributes(Some(&value)), SpanInfo::default());
}

#[test]
fn non_object_shapes_yield_empty_info() {
    for value in [serde_json::json!(42), serde_json::json!(["a"]), serde_json::json!(null)] {
        assert_eq!(parse_span_attributes(Some(&value)), SpanInfo::default());
    }
}

#[test]
fn partial_object_keeps_known_fields() {
    let value = serde_json::json!({"name": "step"});
    let info = parse_span_attributes(Some(&value));
    assert_eq!(info.name.as_deref(), Some("step"));
    assert!(info.kind.is_none());
}

#[test]
fn non_string_name_is_ignored() {
    let value = serde_json::json!({"name": 7, "type": "llm"});
    let info = parse_span_attributes(Some(&value));
    assert!(info.name.is_none());
    assert_eq!(info.kind.as_deref(), Some("llm"));
}
