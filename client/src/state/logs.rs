//! Fetched log-record collection with last-write-wins completion.
//!
//! DESIGN
//! ======
//! Nothing stops two fetches from being in flight when parameters change
//! quickly, so every fetch carries a ticket from a monotonically increasing
//! sequence and only the newest ticket's completion mutates state.

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

use records::{ApiError, LogRecord};

use crate::state::config::FetchParams;

/// Collection state for the fetched log list.
#[derive(Clone, Debug, Default)]
pub struct LogsState {
    pub records: Vec<LogRecord>,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
    last_params: Option<FetchParams>,
}

impl LogsState {
    /// Absent parameters: drop everything without touching the network.
    pub fn clear(&mut self) {
        self.records.clear();
        self.error = None;
        self.loading = false;
        self.last_params = None;
    }

    /// Begin a fetch, returning the ticket its completion must present.
    pub fn start(&mut self, params: FetchParams) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.last_params = Some(params);
        self.seq
    }

    /// Complete the fetch carrying `ticket`. Stale tickets are discarded
    /// and leave the state untouched.
    pub fn finish(&mut self, ticket: u64, result: Result<Vec<LogRecord>, ApiError>) -> bool {
        if ticket != self.seq {
            return false;
        }
        match result {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(err) => {
                self.records.clear();
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
        true
    }

    /// Parameters of the most recent fetch, for refetch.
    #[must_use]
    pub fn last_params(&self) -> Option<&FetchParams> {
        self.last_params.as_ref()
    }
}
