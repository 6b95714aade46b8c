use std::sync::{Arc, Mutex};

use crate::models::candidate::{Candidate, CandidateStatus};
use crate::services::debounce::DebouncedQuery;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CandidateStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: CandidateStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => f.write_str(status.as_str()),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Stable filter: keeps input order, never re-sorts. The query matches
/// case-insensitively against the name only; no trimming is applied here.
pub fn filter_candidates(
    candidates: &[Candidate],
    query: &str,
    status: StatusFilter,
) -> Vec<Candidate> {
    let needle = query.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| {
            status.matches(candidate.status) && candidate.name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Filter controls for the candidate list: a debounced search query plus a
/// status predicate that takes effect immediately.
#[derive(Clone, Default)]
pub struct Filters {
    query: DebouncedQuery,
    status: Arc<Mutex<StatusFilter>>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.query.set(query);
    }

    pub fn raw_query(&self) -> String {
        self.query.raw()
    }

    pub fn effective_query(&self) -> String {
        self.query.effective()
    }

    pub fn subscribe_query(&self) -> watch::Receiver<String> {
        self.query.subscribe()
    }

    pub fn set_status(&self, status: StatusFilter) {
        *self.status.lock().expect("status filter lock poisoned") = status;
    }

    pub fn status(&self) -> StatusFilter {
        *self.status.lock().expect("status filter lock poisoned")
    }
}
