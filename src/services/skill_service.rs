use std::sync::Arc;

use tracing::warn;

use crate::api::skill_api::SkillApi;
use crate::models::skill::Skill;

#[derive(Clone)]
pub struct SkillService {
    api: Arc<dyn SkillApi>,
}

impl SkillService {
    pub fn new(api: Arc<dyn SkillApi>) -> Self {
        Self { api }
    }

    /// A failed skills fetch degrades to an empty list; it must never block
    /// the candidate mutation flows that consume it.
    pub async fn fetch_skills(&self) -> Vec<Skill> {
        match self.api.list_skills().await {
            Ok(skills) => skills,
            Err(err) => {
                warn!(error = %err, "failed to fetch skills, continuing with empty list");
                Vec::new()
            }
        }
    }
}
