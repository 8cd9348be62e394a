//! Pass-through relay handlers for the upstream observability API.
//!
//! DESIGN
//! ======
//! The browser cannot call the upstream API directly (CORS), so these
//! handlers forward authenticated requests and mirror the upstream status
//! and body back verbatim. Credentials come from the caller's
//! Authorization header, falling back to the server-configured key. No
//! retries; every failure is terminal for that attempt.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::state::AppState;

/// Upstream path executing queries.
pub const UPSTREAM_QUERY_PATH: &str = "/btql";

/// Upstream path for project lookup.
pub const UPSTREAM_PROJECT_PATH: &str = "/v1/project";

/// Relay failure modes that do not come from the upstream response.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// No usable bearer credential on the request or in the environment.
    #[error("missing or invalid authorization header")]
    MissingCredentials,

    /// The upstream call never completed.
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingCredentials => StatusCode::UNAUTHORIZED,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, error_body(&self.to_string())).into_response()
    }
}

fn error_body(message: &str) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "error": message }))
}

/// Extract the bearer token from the Authorization header, if well-formed.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token.to_owned()) }
}

/// Credential for an upstream call: caller header first, then the
/// server-side key.
fn resolve_credential(headers: &HeaderMap, state: &AppState) -> Result<String, RelayError> {
    bearer_token(headers)
        .or_else(|| state.relay_api_key.clone())
        .ok_or(RelayError::MissingCredentials)
}

/// Query parameters forwarded to the upstream project lookup.
#[derive(Debug, Deserialize)]
pub struct ProjectLookupParams {
    pub project_name: Option<String>,
    pub org_name: Option<String>,
}

/// `POST /api/query` — forward a query body to the upstream query endpoint.
pub async fn execute_query(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, RelayError> {
    let api_key = resolve_credential(&headers, &state)?;

    let response = state
        .http
        .post(state.upstream_endpoint(UPSTREAM_QUERY_PATH))
        .bearer_auth(&api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| upstream_error("query", &e))?;

    passthrough(response).await
}

/// `GET /api/v1/project` — forward a project lookup to the upstream.
pub async fn lookup_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ProjectLookupParams>,
) -> Result<Response, RelayError> {
    let api_key = resolve_credential(&headers, &state)?;

    let mut request = state
        .http
        .get(state.upstream_endpoint(UPSTREAM_PROJECT_PATH))
        .bearer_auth(&api_key);
    if let Some(project_name) = &params.project_name {
        request = request.query(&[("project_name", project_name)]);
    }
    if let Some(org_name) = &params.org_name {
        request = request.query(&[("org_name", org_name)]);
    }

    let response = request.send().await.map_err(|e| upstream_error("project", &e))?;

    passthrough(response).await
}

/// Non-matching methods on relay routes get a JSON 405 body.
pub async fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, error_body("method not allowed")).into_response()
}

fn upstream_error(endpoint: &str, err: &reqwest::Error) -> RelayError {
    tracing::error!(endpoint, error = %err, "relay upstream call failed");
    RelayError::Upstream(err.to_string())
}

/// Mirror the upstream status and body back to the caller.
async fn passthrough(response: reqwest::Response) -> Result<Response, RelayError> {
    let status = StatusCode::from_u16(response.status().as_u16())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response
        .text()
        .await
        .map_err(|e| RelayError::Upstream(e.to_string()))?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}
