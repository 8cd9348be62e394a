//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the shared upstream HTTP client and the relay configuration; the
//! handlers themselves are stateless.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Default upstream observability API.
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.braintrust.dev";

/// Shared handler state. Clone is required by Axum; all inner fields are
/// cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    upstream_url: String,
    /// Server-side credential used when the caller sends none.
    pub relay_api_key: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(http: reqwest::Client, upstream_url: String, relay_api_key: Option<String>) -> Self {
        Self {
            http,
            upstream_url: upstream_url.trim_end_matches('/').to_owned(),
            relay_api_key,
        }
    }

    /// Join an upstream path onto the configured base URL.
    #[must_use]
    pub fn upstream_endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.upstream_url, path.trim_start_matches('/'))
    }
}
