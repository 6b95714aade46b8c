pub mod candidate_store;
pub mod debounce;
pub mod filter;
pub mod skill_service;
pub mod view;
