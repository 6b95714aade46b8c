use async_trait::async_trait;

use crate::api::http::ApiClient;
use crate::error::Result;
use crate::models::skill::Skill;

#[async_trait]
pub trait SkillApi: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>>;
}

#[derive(Clone)]
pub struct HttpSkillApi {
    api: ApiClient,
}

impl HttpSkillApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SkillApi for HttpSkillApi {
    async fn list_skills(&self) -> Result<Vec<Skill>> {
        self.api.get("/skills", &[]).await
    }
}
