use crate::error::{Error, Result};
use crate::fallback::{Api, UpdateMethod};
use crate::models::Education;
use crate::services::file_service::{self, UploadResponse};
use std::path::Path;

pub const FALLBACK_KEY: &str = "educations";

#[derive(Clone)]
pub struct EducationService {
    api: Api,
}

impl EducationService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn get_all(&self) -> Result<Vec<Education>> {
        self.api.get_list("/educations", FALLBACK_KEY).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Education> {
        let educations = self.get_all().await?;
        educations
            .into_iter()
            .find(|edu| edu.id.as_deref() == Some(id))
            .ok_or_else(|| Error::NotFound(format!("education '{}' not found", id)))
    }

    pub async fn create(&self, data: Education) -> Result<Education> {
        self.api.create("/educations", FALLBACK_KEY, data).await
    }

    pub async fn update(&self, id: &str, data: Education) -> Result<Education> {
        self.api
            .update(
                UpdateMethod::Put,
                &format!("/educations/{}", id),
                FALLBACK_KEY,
                id,
                data,
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api
            .delete::<Education>(&format!("/educations/{}", id), FALLBACK_KEY, id)
            .await
    }

    /// The returned URL may be a placeholder if the backend was unreachable.
    pub async fn upload_diploma(&self, id: &str, file: &Path) -> Result<UploadResponse> {
        file_service::upload_or_placeholder(
            self.api.client(),
            &format!("/educations/{}/diploma", id),
            "diploma",
            file,
        )
        .await
    }
}
