use super::*;

fn state(upstream: &str) -> AppState {
    AppState::new(reqwest::Client::new(), upstream.to_owned(), None)
}

#[test]
fn upstream_endpoint_joins_paths() {
    let state = state("https://api.example.dev");
    assert_eq!(state.upstream_endpoint("/btql"), "https://api.example.dev/btql");
    assert_eq!(state.upstream_endpoint("v1/project"), "https://api.example.dev/v1/project");
}

#[test]
fn upstream_endpoint_normalizes_trailing_slashes() {
    let state = state("https://api.example.dev/");
    assert_eq!(state.upstream_endpoint("/btql"), "https://api.example.dev/btql");
}
