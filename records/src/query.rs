//! Query construction for the recent-root-logs fetch.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Hard ceiling on the lookback window, matching the configuration surface.
pub const MAX_DAYS_BACK: u32 = 365;

/// Builder for the query selecting a project's most recent root-level log
/// records inside a trailing day window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogsQuery {
    project_id: String,
    limit: u32,
    days_back: u32,
}

impl LogsQuery {
    /// Build a query. `limit` and `days_back` are clamped to at least 1;
    /// `days_back` is additionally capped at [`MAX_DAYS_BACK`].
    #[must_use]
    pub fn new(project_id: impl Into<String>, limit: u32, days_back: u32) -> Self {
        Self {
            project_id: project_id.into(),
            limit: limit.max(1),
            days_back: days_back.clamp(1, MAX_DAYS_BACK),
        }
    }

    /// Render the query text. The project identifier goes through literal
    /// quoting rather than raw interpolation.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "SELECT *\n\
             FROM project_logs({project})\n\
             WHERE created >= NOW() - INTERVAL {days} DAY\n\
             \x20 AND is_root\n\
             ORDER BY _pagination_key DESC\n\
             LIMIT {limit}",
            project = quote_literal(&self.project_id),
            days = self.days_back,
            limit = self.limit,
        )
    }
}

/// Quote a string literal for embedding in query text: wrap in single
/// quotes, doubling any embedded quote.
#[must_use]
pub fn quote_literal(raw: &str) -> String {
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('\'');
    for ch in raw.chars() {
        if ch == '\'' {
            quoted.push('\'');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}
