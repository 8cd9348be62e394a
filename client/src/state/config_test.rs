use super::*;

use crate::config::DefaultConfig;

fn populated() -> ConfigState {
    let mut state = ConfigState::from_defaults(&DefaultConfig {
        instance_url: "https://www.example.dev".to_owned(),
        org_name: "acme".to_owned(),
        project_name: "Demo".to_owned(),
        api_key: "sk_test".to_owned(),
        days_back: 30,
    });
    state.project_id = "proj_123".to_owned();
    state.last_resolved_name = "Demo".to_owned();
    state
}

#[test]
fn renaming_the_project_invalidates_resolution() {
    let mut state = populated();
    state.set_field(ConfigField::ProjectName, "Other".to_owned());

    assert_eq!(state.project_name, "Other");
    assert!(state.project_id.is_empty());
    assert!(state.last_resolved_name.is_empty());
    assert!(state.has_attempted_fetch);
}

#[test]
fn setting_the_same_project_name_keeps_resolution() {
    let mut state = populated();
    state.set_field(ConfigField::ProjectName, "Demo".to_owned());
    assert_eq!(state.project_id, "proj_123");
}

#[test]
fn editing_other_fields_keeps_resolution() {
    let mut state = populated();
    state.set_field(ConfigField::ApiKey, "sk_other".to_owned());
    assert_eq!(state.project_id, "proj_123");
}

#[test]
fn days_back_clamps_to_supported_range() {
    let mut state = populated();
    state.set_days_back(0);
    assert_eq!(state.days_back, 1);
    state.set_days_back(1000);
    assert_eq!(state.days_back, 365);
    state.set_days_back(7);
    assert_eq!(state.days_back, 7);
}

#[test]
fn wants_resolution_requires_complete_fields_and_an_unseen_name() {
    let mut state = populated();
    assert!(!state.wants_resolution());

    state.set_field(ConfigField::ProjectName, "Other".to_owned());
    assert!(state.wants_resolution());

    state.resolving = true;
    assert!(!state.wants_resolution());

    state.resolving = false;
    state.set_field(ConfigField::ApiKey, String::new());
    assert!(!state.wants_resolution());
}

#[test]
fn validation_reports_missing_fields_first() {
    let mut state = populated();
    state.set_field(ConfigField::OrgName, String::new());
    let message = state.validation_message().expect("blocked");
    assert!(message.contains("base configuration"));
}

#[test]
fn validation_reports_unresolved_project_with_decoded_org() {
    let mut state = populated();
    state.org_name = "acme%20labs".to_owned();
    state.project_id.clear();
    let message = state.validation_message().expect("blocked");
    assert!(message.contains("\"Demo\""), "message: {message}");
    assert!(message.contains("\"acme labs\""), "message: {message}");
}

#[test]
fn validation_passes_when_resolved() {
    assert!(populated().validation_message().is_none());
}

#[test]
fn fetch_params_require_a_resolved_project() {
    let mut state = populated();
    let params = state.fetch_params().expect("params");
    assert_eq!(params.project_id, "proj_123");
    assert_eq!(params.limit, FETCH_LIMIT);
    assert_eq!(params.days_back, 30);

    state.project_id.clear();
    assert!(state.fetch_params().is_none());
}

#[test]
fn project_slug_derives_from_the_name() {
    let mut state = populated();
    state.set_field(ConfigField::ProjectName, "My Project".to_owned());
    assert_eq!(state.project_slug(), "my-project");
}
