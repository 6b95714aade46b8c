use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::api::candidate_api::CandidateApi;
use crate::dto::candidate_dto::CreateCandidatePayload;
use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, CandidateDetail, CandidateStatus};
use crate::utils::time;

pub const FETCH_PAGE: u32 = 1;
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// A pending, not-yet-confirmed mutation. Folded over the authoritative
/// collection in entry order on every read; never applied in place.
#[derive(Debug, Clone)]
enum OptimisticAction {
    UpdateStatus {
        id: i64,
        status: CandidateStatus,
        updated_at: DateTime<Utc>,
    },
    Add {
        candidate: Candidate,
    },
}

#[derive(Debug, Clone)]
struct PendingAction {
    ticket: u64,
    action: OptimisticAction,
}

#[derive(Debug)]
struct StoreState {
    authoritative: Vec<Candidate>,
    overlays: Vec<PendingAction>,
    phase: FetchPhase,
    error: Option<String>,
    next_ticket: u64,
    next_temp_id: i64,
}

impl StoreState {
    fn push_overlay(&mut self, action: OptimisticAction) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.overlays.push(PendingAction { ticket, action });
        ticket
    }

    fn remove_overlay(&mut self, ticket: u64) {
        self.overlays.retain(|pending| pending.ticket != ticket);
    }

    // Temp ids count down from -1 so they can never collide with
    // server-assigned ids.
    fn alloc_temp_id(&mut self) -> i64 {
        let id = self.next_temp_id;
        self.next_temp_id -= 1;
        id
    }

    fn derived(&self) -> Vec<Candidate> {
        let mut view = self.authoritative.clone();
        for pending in &self.overlays {
            match &pending.action {
                OptimisticAction::UpdateStatus {
                    id,
                    status,
                    updated_at,
                } => {
                    if let Some(candidate) = view.iter_mut().find(|c| c.id == *id) {
                        candidate.status = *status;
                        candidate.updated_at = *updated_at;
                    }
                }
                OptimisticAction::Add { candidate } => {
                    view.insert(0, candidate.clone());
                }
            }
        }
        view
    }
}

/// Read view of the store: authoritative collection with every pending
/// overlay applied, plus the fetch lifecycle state.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub candidates: Vec<Candidate>,
    pub phase: FetchPhase,
    pub error: Option<String>,
}

impl Snapshot {
    pub fn loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }
}

#[derive(Clone)]
pub struct CandidateStore {
    api: Arc<dyn CandidateApi>,
    state: Arc<Mutex<StoreState>>,
    page_limit: u32,
}

impl CandidateStore {
    pub fn new(api: Arc<dyn CandidateApi>) -> Self {
        Self::with_page_limit(api, DEFAULT_PAGE_LIMIT)
    }

    pub fn with_page_limit(api: Arc<dyn CandidateApi>, page_limit: u32) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(StoreState {
                authoritative: Vec::new(),
                overlays: Vec::new(),
                phase: FetchPhase::Idle,
                error: None,
                next_ticket: 0,
                next_temp_id: -1,
            })),
            page_limit,
        }
    }

    // The guard is never held across an await point.
    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().expect("candidate store state lock poisoned")
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = self.state();
        Snapshot {
            candidates: state.derived(),
            phase: state.phase,
            error: state.error.clone(),
        }
    }

    pub fn candidates(&self) -> Vec<Candidate> {
        self.state().derived()
    }

    /// Replaces the authoritative collection with the first page of results.
    /// Overlapping calls are not deduplicated; the last response to arrive
    /// wins regardless of issue order.
    pub async fn fetch_all(&self) {
        {
            let mut state = self.state();
            state.phase = FetchPhase::Loading;
            state.error = None;
        }

        match self.api.list(FETCH_PAGE, self.page_limit).await {
            Ok(page) => {
                let mut state = self.state();
                state.authoritative = page.data;
                state.phase = FetchPhase::Loaded;
                info!(count = state.authoritative.len(), "candidate list refreshed");
            }
            Err(err) => {
                let message = err.user_message();
                error!(error = %err, "failed to fetch candidates");
                let mut state = self.state();
                state.error = Some(message);
                state.phase = FetchPhase::Failed;
            }
        }
    }

    /// Optimistically flips the status, then reconciles with the server
    /// response: the returned record supersedes the optimistic guess, and a
    /// failure rolls the overlay back and hands the error to the caller.
    pub async fn update_status(
        &self,
        id: i64,
        status: CandidateStatus,
    ) -> Result<CandidateDetail> {
        let ticket = {
            let mut state = self.state();
            if !state.authoritative.iter().any(|c| c.id == id) {
                return Err(Error::NotFound(format!("Candidate {} not found", id)));
            }
            state.push_overlay(OptimisticAction::UpdateStatus {
                id,
                status,
                updated_at: time::now(),
            })
        };

        match self.api.update_status(id, status).await {
            Ok(detail) => {
                let confirmed = Candidate::from(detail.clone());
                let mut state = self.state();
                state.remove_overlay(ticket);
                if let Some(slot) = state.authoritative.iter_mut().find(|c| c.id == id) {
                    *slot = confirmed;
                }
                info!(candidate_id = id, status = %status, "candidate status confirmed");
                Ok(detail)
            }
            Err(err) => {
                self.state().remove_overlay(ticket);
                error!(candidate_id = id, error = %err, "status update failed, rolled back");
                Err(err)
            }
        }
    }

    /// Prepends a synthetic record under a temporary id, then swaps it for
    /// the server-returned record on success or drops it on failure.
    pub async fn create_candidate(
        &self,
        payload: &CreateCandidatePayload,
    ) -> Result<CandidateDetail> {
        let ticket = {
            let mut state = self.state();
            let now = time::now();
            let candidate = Candidate {
                id: state.alloc_temp_id(),
                name: payload.name.clone(),
                position: payload.position.clone(),
                status: payload.status.unwrap_or(CandidateStatus::Active),
                skills: Vec::new(),
                created_at: now,
                updated_at: now,
            };
            state.push_overlay(OptimisticAction::Add { candidate })
        };

        match self.api.create(payload).await {
            Ok(detail) => {
                let confirmed = Candidate::from(detail.clone());
                let mut state = self.state();
                state.remove_overlay(ticket);
                state.authoritative.insert(0, confirmed);
                info!(candidate_id = detail.id, "candidate created");
                Ok(detail)
            }
            Err(err) => {
                self.state().remove_overlay(ticket);
                error!(error = %err, "candidate creation failed, rolled back");
                Err(err)
            }
        }
    }

    pub async fn fetch_detail(&self, id: i64) -> Result<CandidateDetail> {
        self.api.get_by_id(id).await
    }
}
