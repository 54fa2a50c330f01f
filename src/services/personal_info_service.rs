use crate::error::{Error, Result};
use crate::fallback::Api;
use crate::models::PersonalInfo;
use crate::services::file_service::{self, UploadResponse};
use std::path::Path;
use tracing::warn;

pub const FALLBACK_KEY: &str = "personalInfo";

#[derive(Clone)]
pub struct PersonalInfoService {
    api: Api,
}

impl PersonalInfoService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Falls back to an empty default when neither the backend nor the local
    /// store has a value, so a fresh deployment still renders.
    pub async fn get(&self) -> Result<PersonalInfo> {
        match self.api.get_singleton("/personal-info", FALLBACK_KEY).await {
            Ok(info) => Ok(info),
            Err(Error::NotFound(_)) => {
                warn!("no personal info stored anywhere, returning defaults");
                Ok(PersonalInfo::default())
            }
            Err(e) => Err(e),
        }
    }

    pub async fn update(&self, data: PersonalInfo) -> Result<PersonalInfo> {
        self.api
            .put_singleton("/personal-info", FALLBACK_KEY, data)
            .await
    }

    pub async fn update_profile_image(&self, file: &Path) -> Result<UploadResponse> {
        file_service::upload_or_placeholder(
            self.api.client(),
            "/personal-info/profile-image",
            "image",
            file,
        )
        .await
    }
}
