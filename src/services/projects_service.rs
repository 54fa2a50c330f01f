use crate::error::{Error, Result};
use crate::fallback::{Api, UpdateMethod};
use crate::models::Project;
use crate::services::file_service::{self, MultiUploadResponse, UploadResponse};
use std::path::{Path, PathBuf};
use tracing::instrument;

pub const FALLBACK_KEY: &str = "projects";

#[derive(Clone)]
pub struct ProjectsService {
    api: Api,
}

impl ProjectsService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn get_all(&self) -> Result<Vec<Project>> {
        self.api.get_list("/projects", FALLBACK_KEY).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Project> {
        let projects = self.get_all().await?;
        projects
            .into_iter()
            .find(|proj| proj.id.as_deref() == Some(id))
            .ok_or_else(|| Error::NotFound(format!("project '{}' not found", id)))
    }

    #[instrument(skip(self, data), fields(title = %data.title))]
    pub async fn create(&self, data: Project) -> Result<Project> {
        self.api.create("/projects", FALLBACK_KEY, data).await
    }

    pub async fn update(&self, id: &str, data: Project) -> Result<Project> {
        self.api
            .update(
                UpdateMethod::Put,
                &format!("/projects/{}", id),
                FALLBACK_KEY,
                id,
                data,
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api
            .delete::<Project>(&format!("/projects/{}", id), FALLBACK_KEY, id)
            .await
    }

    pub async fn upload_image(&self, id: &str, file: &Path) -> Result<UploadResponse> {
        file_service::upload_or_placeholder(
            self.api.client(),
            &format!("/projects/{}/image", id),
            "image",
            file,
        )
        .await
    }

    pub async fn upload_screenshots(
        &self,
        id: &str,
        files: &[PathBuf],
    ) -> Result<MultiUploadResponse> {
        file_service::upload_many_or_placeholder(
            self.api.client(),
            &format!("/projects/{}/screenshots", id),
            "screenshots",
            files,
        )
        .await
    }
}
