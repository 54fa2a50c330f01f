pub mod api;
pub mod config;
pub mod error;
pub mod fallback;
pub mod models;
pub mod seed;
pub mod services;
pub mod storage;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::fallback::Api;
use crate::services::{
    achievements_service::AchievementsService, auth_service::AuthService,
    education_service::EducationService, experience_service::ExperienceService,
    file_service::FileUploadService, messages_service::MessagesService,
    personal_info_service::PersonalInfoService, projects_service::ProjectsService,
    skills_service::SkillsService,
};
use crate::storage::{JsonFileStore, LocalStore, MemoryStore};
use std::sync::Arc;

/// One handle per process: a shared HTTP client and local store wired into
/// every entity service.
#[derive(Clone)]
pub struct PortfolioClient {
    pub auth: AuthService,
    pub files: FileUploadService,
    pub experiences: ExperienceService,
    pub skills: SkillsService,
    pub educations: EducationService,
    pub projects: ProjectsService,
    pub achievements: AchievementsService,
    pub messages: MessagesService,
    pub personal_info: PersonalInfoService,
    api: Api,
}

impl PortfolioClient {
    /// Store selection follows the config: a JSON-file store under the data
    /// directory when one is set, otherwise an in-memory store.
    pub fn new(config: Config) -> Result<Self> {
        let store: Arc<dyn LocalStore> = match &config.data_dir {
            Some(dir) => Arc::new(JsonFileStore::new(dir.clone())?),
            None => Arc::new(MemoryStore::new()),
        };
        Self::with_store(config, store)
    }

    pub fn with_store(config: Config, store: Arc<dyn LocalStore>) -> Result<Self> {
        let client = ApiClient::new(&config, store)?;
        let api = Api::new(client.clone());

        Ok(Self {
            auth: AuthService::new(client.clone()),
            files: FileUploadService::new(client),
            experiences: ExperienceService::new(api.clone()),
            skills: SkillsService::new(api.clone()),
            educations: EducationService::new(api.clone()),
            projects: ProjectsService::new(api.clone()),
            achievements: AchievementsService::new(api.clone()),
            messages: MessagesService::new(api.clone()),
            personal_info: PersonalInfoService::new(api.clone()),
            api,
        })
    }

    pub fn store(&self) -> &Arc<dyn LocalStore> {
        self.api.client().store()
    }

    /// Write default collections into the local store for any key that is
    /// still empty.
    pub fn seed_defaults(&self) {
        seed::ensure_seeded(self.store().as_ref());
    }
}
