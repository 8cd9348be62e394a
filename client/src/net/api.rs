//! Relay API calls: project lookup and query execution.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning transport errors since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success relay statuses become `ApiError::RequestFailed` carrying the
//! status and body text; a missing project is `Ok(None)`, not an error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{ApiError, LogRecord, Project};

use crate::state::config::FetchParams;

/// Relay path executing queries against the upstream API.
pub const QUERY_ENDPOINT: &str = "/api/query";

/// Relay path for project lookup.
pub const PROJECT_ENDPOINT: &str = "/api/v1/project";

#[cfg(any(test, feature = "hydrate"))]
fn project_lookup_url(project_name: &str, org_name: &str) -> String {
    format!(
        "{PROJECT_ENDPOINT}?project_name={}&org_name={}",
        embed::percent_encode(project_name),
        embed::percent_encode(org_name)
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn query_body(params: &FetchParams) -> serde_json::Value {
    let query = records::LogsQuery::new(params.project_id.clone(), params.limit, params.days_back);
    serde_json::json!({ "query": query.render(), "fmt": "json" })
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(api_key: &str) -> String {
    format!("Bearer {api_key}")
}

/// Look up a project by name within an organization.
///
/// Returns `Ok(None)` when the lookup succeeds but matches nothing.
///
/// # Errors
///
/// Returns `ApiError` for transport, non-success status, or decode failure.
pub async fn resolve_project(
    api_key: &str,
    org_name: &str,
    project_name: &str,
) -> Result<Option<Project>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use records::ProjectListResponse;

        let url = project_lookup_url(project_name, org_name);
        let response = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer_header(api_key))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::RequestFailed { status, body });
        }

        let decoded: ProjectListResponse =
            response.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(decoded.objects.into_iter().next())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_key, org_name, project_name);
        Err(ApiError::Transport("relay calls require a browser context".to_owned()))
    }
}

/// Fetch the most recent root-level log records for a project.
///
/// # Errors
///
/// Returns `ApiError` for transport, non-success status, or decode failure.
pub async fn fetch_logs(api_key: &str, params: &FetchParams) -> Result<Vec<LogRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use records::QueryResponse;

        let request = gloo_net::http::Request::post(QUERY_ENDPOINT)
            .header("Authorization", &bearer_header(api_key))
            .json(&query_body(params))
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::RequestFailed { status, body });
        }

        let decoded: QueryResponse =
            response.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(decoded.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_key, params);
        Err(ApiError::Transport("relay calls require a browser context".to_owned()))
    }
}
