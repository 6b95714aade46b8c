use async_trait::async_trait;

use crate::api::http::ApiClient;
use crate::dto::candidate_dto::{CreateCandidatePayload, Paginated, UpdateStatusRequest};
use crate::error::Result;
use crate::models::candidate::{Candidate, CandidateDetail, CandidateStatus};

/// Remote candidate operations consumed by the sync layer. Implementations
/// must fail with classifiable errors (`Error::Api`) for transport problems.
#[async_trait]
pub trait CandidateApi: Send + Sync {
    async fn list(&self, page: u32, limit: u32) -> Result<Paginated<Candidate>>;

    async fn get_by_id(&self, id: i64) -> Result<CandidateDetail>;

    async fn create(&self, payload: &CreateCandidatePayload) -> Result<CandidateDetail>;

    async fn update_status(&self, id: i64, status: CandidateStatus) -> Result<CandidateDetail>;
}

#[derive(Clone)]
pub struct HttpCandidateApi {
    api: ApiClient,
}

impl HttpCandidateApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CandidateApi for HttpCandidateApi {
    async fn list(&self, page: u32, limit: u32) -> Result<Paginated<Candidate>> {
        self.api
            .get(
                "/candidates",
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await
    }

    async fn get_by_id(&self, id: i64) -> Result<CandidateDetail> {
        self.api.get(&format!("/candidates/{}", id), &[]).await
    }

    async fn create(&self, payload: &CreateCandidatePayload) -> Result<CandidateDetail> {
        self.api.post("/candidates", payload).await
    }

    async fn update_status(&self, id: i64, status: CandidateStatus) -> Result<CandidateDetail> {
        self.api
            .patch(
                &format!("/candidates/{}/status", id),
                &UpdateStatusRequest { status },
            )
            .await
    }
}
