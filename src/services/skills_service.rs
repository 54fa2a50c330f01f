use crate::error::{Error, Result};
use crate::fallback::{Api, UpdateMethod};
use crate::models::SkillCategory;

pub const FALLBACK_KEY: &str = "skillCategories";

#[derive(Clone)]
pub struct SkillsService {
    api: Api,
}

impl SkillsService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn get_all(&self) -> Result<Vec<SkillCategory>> {
        self.api.get_list("/skills", FALLBACK_KEY).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<SkillCategory> {
        let categories = self.get_all().await?;
        categories
            .into_iter()
            .find(|cat| cat.id.as_deref() == Some(id))
            .ok_or_else(|| Error::NotFound(format!("skill category '{}' not found", id)))
    }

    pub async fn create(&self, data: SkillCategory) -> Result<SkillCategory> {
        self.api.create("/skills", FALLBACK_KEY, data).await
    }

    pub async fn update(&self, id: &str, data: SkillCategory) -> Result<SkillCategory> {
        self.api
            .update(
                UpdateMethod::Put,
                &format!("/skills/{}", id),
                FALLBACK_KEY,
                id,
                data,
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api
            .delete::<SkillCategory>(&format!("/skills/{}", id), FALLBACK_KEY, id)
            .await
    }
}
