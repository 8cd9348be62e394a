//! Wire models and query construction for the hosted observability API.
//!
//! This crate is UI-framework agnostic so both the relay server and the
//! client can consume it directly for decoding, display, and query text.

pub mod error;
pub mod query;
pub mod record;
pub mod span;

pub use error::ApiError;
pub use query::{LogsQuery, quote_literal};
pub use record::{
    LogMetrics, LogRecord, Project, ProjectListResponse, QueryResponse, Timestamp, format_duration,
};
pub use span::{SpanInfo, parse_span_attributes};
