use crate::error::{Error, Result};
use crate::fallback::{Api, UpdateMethod};
use crate::models::Achievement;
use crate::services::file_service::{self, MultiUploadResponse, UploadResponse};
use std::path::{Path, PathBuf};

pub const FALLBACK_KEY: &str = "achievements";

#[derive(Clone)]
pub struct AchievementsService {
    api: Api,
}

impl AchievementsService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn get_all(&self) -> Result<Vec<Achievement>> {
        self.api.get_list("/achievements", FALLBACK_KEY).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Achievement> {
        let achievements = self.get_all().await?;
        achievements
            .into_iter()
            .find(|ach| ach.id.as_deref() == Some(id))
            .ok_or_else(|| Error::NotFound(format!("achievement '{}' not found", id)))
    }

    pub async fn create(&self, data: Achievement) -> Result<Achievement> {
        self.api.create("/achievements", FALLBACK_KEY, data).await
    }

    pub async fn update(&self, id: &str, data: Achievement) -> Result<Achievement> {
        self.api
            .update(
                UpdateMethod::Put,
                &format!("/achievements/{}", id),
                FALLBACK_KEY,
                id,
                data,
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api
            .delete::<Achievement>(&format!("/achievements/{}", id), FALLBACK_KEY, id)
            .await
    }

    pub async fn upload_certificate(&self, id: &str, file: &Path) -> Result<UploadResponse> {
        file_service::upload_or_placeholder(
            self.api.client(),
            &format!("/achievements/{}/certificate", id),
            "certificate",
            file,
        )
        .await
    }

    pub async fn upload_photos(&self, id: &str, files: &[PathBuf]) -> Result<MultiUploadResponse> {
        file_service::upload_many_or_placeholder(
            self.api.client(),
            &format!("/achievements/{}/photos", id),
            "photos",
            files,
        )
        .await
    }
}
