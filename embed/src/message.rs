//! The postMessage payload understood by the embedded viewer.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::{Deserialize, Serialize};

/// Payload posted to the embedded viewer to move it to another trace
/// without reloading: `{"r": root_span_id}` with an optional `"s"` for the
/// span to select inside the trace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetargetMessage {
    pub r: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<String>,
}
