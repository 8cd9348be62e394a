//! Error taxonomy for relay-backed API calls.

/// Failure modes for calls made through the same-origin relay.
///
/// "Project not found" is deliberately not represented here: lookups return
/// `Ok(None)` so callers decide whether absence is an error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The relay answered with a non-success HTTP status.
    #[error("request failed: status {status} {body}")]
    RequestFailed { status: u16, body: String },

    /// The request never completed (network failure, relay unreachable).
    #[error("request transport failed: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),
}
