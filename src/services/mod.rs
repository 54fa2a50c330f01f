pub mod achievements_service;
pub mod auth_service;
pub mod education_service;
pub mod experience_service;
pub mod file_service;
pub mod messages_service;
pub mod personal_info_service;
pub mod projects_service;
pub mod skills_service;
