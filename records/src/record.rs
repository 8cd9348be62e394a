//! Wire types for the observability API's log-record surface.
//!
//! DESIGN
//! ======
//! These types mirror the upstream query/project payloads so serde decoding
//! stays lossless for the fields the UI renders. Everything the viewer does
//! not interpret is kept as raw `serde_json::Value`.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const CREATED_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Creation timestamp as emitted by the upstream: ISO-8601 text or epoch
/// milliseconds depending on which storage tier answered the query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Text(String),
    Millis(f64),
}

impl Timestamp {
    /// Human-readable form for table rows: `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(raw) => {
                let trimmed = raw.trim_end_matches('Z');
                let no_fraction = trimmed.split('.').next().unwrap_or(trimmed);
                no_fraction.replace('T', " ")
            }
            Self::Millis(ms) => {
                let nanos = i128::from(ms.round() as i64) * 1_000_000;
                OffsetDateTime::from_unix_timestamp_nanos(nanos)
                    .ok()
                    .and_then(|dt| dt.format(CREATED_FORMAT).ok())
                    .unwrap_or_else(|| format!("{ms}"))
            }
        }
    }
}

/// Numeric measurements attached to a record. Only `duration` is rendered;
/// the rest rides along untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogMetrics {
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One recorded execution trace summary as returned by the logs query.
///
/// Identity is `id`; `root_span_id`, when present, names the trace's root
/// entry and is preferred for embed targeting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: String,
    #[serde(default)]
    pub root_span_id: Option<String>,
    #[serde(default)]
    pub span_id: Option<String>,
    pub created: Timestamp,
    #[serde(default)]
    pub span_attributes: Option<serde_json::Value>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub metrics: Option<LogMetrics>,
    #[serde(default)]
    pub input: Option<serde_json::Value>,
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl LogRecord {
    /// Span id used for embed targeting: the root span when the record
    /// carries one, the record id otherwise.
    #[must_use]
    pub fn embed_root_span_id(&self) -> &str {
        self.root_span_id.as_deref().unwrap_or(&self.id)
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.as_ref().is_some_and(|value| !value.is_null())
    }
}

/// A project object from the upstream lookup endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub org_id: Option<String>,
    #[serde(default)]
    pub created: Option<Timestamp>,
}

/// Envelope of the upstream project lookup.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProjectListResponse {
    #[serde(default)]
    pub objects: Vec<Project>,
}

/// Envelope of a query execution response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub data: Vec<LogRecord>,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Render a duration metric for table rows: `-` when absent, whole
/// milliseconds below one second, seconds with two decimals above.
#[must_use]
pub fn format_duration(metrics: Option<&LogMetrics>) -> String {
    let Some(duration) = metrics.and_then(|m| m.duration) else {
        return "-".to_owned();
    };
    if duration < 1000.0 {
        format!("{}ms", duration.round())
    } else {
        format!("{:.2}s", duration / 1000.0)
    }
}
