pub mod candidate_api;
pub mod http;
pub mod skill_api;
pub mod types;
