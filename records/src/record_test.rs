use super::*;

fn decode_record(json: &str) -> LogRecord {
    serde_json::from_str(json).expect("record decodes")
}

#[test]
fn decodes_minimal_record() {
    let record = decode_record(r#"{"id":"a1","created":"2024-01-01T00:00:00Z","root_span_id":"a1"}"#);
    assert_eq!(record.id, "a1");
    assert_eq!(record.root_span_id.as_deref(), Some("a1"));
    assert!(record.tags.is_none());
    assert!(record.metrics.is_none());
}

#[test]
fn decodes_query_response_envelope() {
    let response: QueryResponse = serde_json::from_str(
        r#"{"data":[{"id":"a1","created":"2024-01-01T00:00:00Z","root_span_id":"a1"}]}"#,
    )
    .expect("response decodes");
    assert_eq!(response.data.len(), 1);
    assert!(response.cursor.is_none());
}

#[test]
fn empty_query_response_yields_no_records() {
    let response: QueryResponse = serde_json::from_str("{}").expect("response decodes");
    assert!(response.data.is_empty());
}

#[test]
fn embed_root_span_id_prefers_root_span() {
    let record = decode_record(r#"{"id":"a1","root_span_id":"r9","created":"2024-01-01T00:00:00Z"}"#);
    assert_eq!(record.embed_root_span_id(), "r9");
}

#[test]
fn embed_root_span_id_falls_back_to_id() {
    let record = decode_record(r#"{"id":"a1","created":"2024-01-01T00:00:00Z"}"#);
    assert_eq!(record.embed_root_span_id(), "a1");
}

#[test]
fn has_error_ignores_null() {
    let with_null = decode_record(r#"{"id":"a1","created":0,"error":null}"#);
    assert!(!with_null.has_error());

    let with_error = decode_record(r#"{"id":"a1","created":0,"error":"boom"}"#);
    assert!(with_error.has_error());
}

#[test]
fn created_accepts_text_and_millis() {
    let text = decode_record(r#"{"id":"a1","created":"2024-01-01T00:00:00Z"}"#);
    assert_eq!(text.created, Timestamp::Text("2024-01-01T00:00:00Z".to_owned()));

    let millis = decode_record(r#"{"id":"a1","created":1704067200000}"#);
    assert_eq!(millis.created, Timestamp::Millis(1_704_067_200_000.0));
}

#[test]
fn timestamp_display_trims_iso_text() {
    let stamp = Timestamp::Text("2024-01-01T12:30:45.123Z".to_owned());
    assert_eq!(stamp.display(), "2024-01-01 12:30:45");
}

#[test]
fn timestamp_display_formats_epoch_millis() {
    let stamp = Timestamp::Millis(1_704_067_200_000.0);
    assert_eq!(stamp.display(), "2024-01-01 00:00:00");
}

#[test]
fn format_duration_handles_absent_metrics() {
    assert_eq!(format_duration(None), "-");
    assert_eq!(format_duration(Some(&LogMetrics::default())), "-");
}

#[test]
fn format_duration_renders_millis_and_seconds() {
    let short = LogMetrics { duration: Some(123.4), ..LogMetrics::default() };
    assert_eq!(format_duration(Some(&short)), "123ms");

    let long = LogMetrics { duration: Some(1500.0), ..LogMetrics::default() };
    assert_eq!(format_duration(Some(&long)), "1.50s");
}

#[test]
fn metrics_keep_unknown_fields() {
    let record = decode_record(
        r#"{"id":"a1","created":0,"metrics":{"duration":10.0,"tokens":42}}"#,
    );
    let metrics = record.metrics.expect("metrics decode");
    assert_eq!(metrics.extra.get("tokens"), Some(&serde_json::json!(42)));
}
