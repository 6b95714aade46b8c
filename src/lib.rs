pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use reqwest::Client;

use crate::api::candidate_api::HttpCandidateApi;
use crate::api::http::ApiClient;
use crate::api::skill_api::HttpSkillApi;
use crate::models::candidate::Candidate;
use crate::services::candidate_store::CandidateStore;
use crate::services::filter::{filter_candidates, Filters};
use crate::services::skill_service::SkillService;
use crate::services::view::{resolve_view, ViewState};

#[derive(Clone)]
pub struct AppState {
    pub candidates: CandidateStore,
    pub filters: Filters,
    pub skills: SkillService,
}

impl AppState {
    pub fn new() -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap();

        let api = ApiClient::new(http_client, config.api_url.clone(), config.api_key.clone());
        let candidate_api = Arc::new(HttpCandidateApi::new(api.clone()));
        let skill_api = Arc::new(HttpSkillApi::new(api));

        Self {
            candidates: CandidateStore::with_page_limit(candidate_api, config.page_limit),
            filters: Filters::new(),
            skills: SkillService::new(skill_api),
        }
    }

    /// Store snapshot with the current filters applied, in store order.
    pub fn visible_candidates(&self) -> Vec<Candidate> {
        let snapshot = self.candidates.snapshot();
        filter_candidates(
            &snapshot.candidates,
            &self.filters.effective_query(),
            self.filters.status(),
        )
    }

    /// Resolves which of the four render states the page is in.
    pub fn view(&self) -> ViewState {
        let snapshot = self.candidates.snapshot();
        let visible = filter_candidates(
            &snapshot.candidates,
            &self.filters.effective_query(),
            self.filters.status(),
        );
        resolve_view(snapshot.loading(), snapshot.error.as_deref(), visible.len())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
