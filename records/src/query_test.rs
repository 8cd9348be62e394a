use super::*;

#[test]
fn render_contains_project_days_and_limit() {
    let query = LogsQuery::new("proj_123", 50, 7).render();
    assert!(query.contains("project_logs('proj_123')"), "query: {query}");
    assert!(query.contains("INTERVAL 7 DAY"), "query: {query}");
    assert!(query.contains("LIMIT 50"), "query: {query}");
}

#[test]
fn render_always_filters_to_root_entries() {
    let query = LogsQuery::new("p", 20, 30).render();
    assert!(query.contains("AND is_root"), "query: {query}");
    assert!(query.contains("ORDER BY _pagination_key DESC"), "query: {query}");
}

#[test]
fn quote_literal_doubles_embedded_quotes() {
    assert_eq!(quote_literal("proj_123"), "'proj_123'");
    assert_eq!(quote_literal("o'brien"), "'o''brien'");
    assert_eq!(quote_literal(""), "''");
}

#[test]
fn hostile_identifier_cannot_break_out_of_the_literal() {
    let query = LogsQuery::new("x') OR ('1'='1", 10, 7).render();
    assert!(query.contains("project_logs('x'') OR (''1''=''1')"), "query: {query}");
}

#[test]
fn zero_inputs_are_clamped_to_one() {
    let query = LogsQuery::new("p", 0, 0).render();
    assert!(query.contains("INTERVAL 1 DAY"), "query: {query}");
    assert!(query.contains("LIMIT 1"), "query: {query}");
}

#[test]
fn days_back_is_capped_at_one_year() {
    let query = LogsQuery::new("p", 10, 9999).render();
    assert!(query.contains("INTERVAL 365 DAY"), "query: {query}");
}
