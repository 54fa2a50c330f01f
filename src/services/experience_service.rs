use crate::error::{Error, Result};
use crate::fallback::{Api, UpdateMethod};
use crate::models::Experience;
use tracing::instrument;

pub const FALLBACK_KEY: &str = "experiences";

#[derive(Clone)]
pub struct ExperienceService {
    api: Api,
}

impl ExperienceService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn get_all(&self) -> Result<Vec<Experience>> {
        self.api.get_list("/experiences", FALLBACK_KEY).await
    }

    /// Client-side filter over the full collection. Works identically online
    /// and offline.
    pub async fn get_by_id(&self, id: &str) -> Result<Experience> {
        let experiences = self.get_all().await?;
        experiences
            .into_iter()
            .find(|exp| exp.id.as_deref() == Some(id))
            .ok_or_else(|| Error::NotFound(format!("experience '{}' not found", id)))
    }

    #[instrument(skip(self, data), fields(company = %data.company))]
    pub async fn create(&self, data: Experience) -> Result<Experience> {
        self.api.create("/experiences", FALLBACK_KEY, data).await
    }

    #[instrument(skip(self, data))]
    pub async fn update(&self, id: &str, data: Experience) -> Result<Experience> {
        self.api
            .update(
                UpdateMethod::Put,
                &format!("/experiences/{}", id),
                FALLBACK_KEY,
                id,
                data,
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api
            .delete::<Experience>(&format!("/experiences/{}", id), FALLBACK_KEY, id)
            .await
    }
}
