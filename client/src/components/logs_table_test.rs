use super::*;

fn record(json: serde_json::Value) -> LogRecord {
    serde_json::from_value(json).expect("record decodes")
}

#[test]
fn display_name_prefers_span_attributes() {
    let named = record(serde_json::json!({
        "id": "abcdef1234567890",
        "created": 0,
        "span_attributes": {"name": "chat-completion"},
    }));
    assert_eq!(display_name(&named), "chat-completion");
}

#[test]
fn display_name_falls_back_to_an_id_prefix() {
    let anonymous = record(serde_json::json!({"id": "abcdef1234567890", "created": 0}));
    assert_eq!(display_name(&anonymous), "abcdef12");
}

#[test]
fn display_kind_defaults_to_trace() {
    let plain = record(serde_json::json!({"id": "a1", "created": 0}));
    assert_eq!(display_kind(&plain), "trace");

    let typed = record(serde_json::json!({
        "id": "a1",
        "created": 0,
        "span_attributes": r#"{"type":"llm"}"#,
    }));
    assert_eq!(display_kind(&typed), "llm");
}

#[test]
fn selection_matches_id_or_root_span() {
    let rec = record(serde_json::json!({"id": "a1", "root_span_id": "r1", "created": 0}));
    assert!(is_selected(&rec, Some("a1")));
    assert!(is_selected(&rec, Some("r1")));
    assert!(!is_selected(&rec, Some("other")));
    assert!(!is_selected(&rec, None));
}

#[test]
fn tags_collapse_into_an_overflow_count() {
    let rec = record(serde_json::json!({
        "id": "a1",
        "created": 0,
        "tags": ["prod", "batch", "retry", "slow"],
    }));
    let (shown, overflow) = visible_tags(&rec);
    assert_eq!(shown, vec!["prod".to_owned(), "batch".to_owned()]);
    assert_eq!(overflow, 2);

    let bare = record(serde_json::json!({"id": "a1", "created": 0}));
    let (shown, overflow) = visible_tags(&bare);
    assert!(shown.is_empty());
    assert_eq!(overflow, 0);
}
