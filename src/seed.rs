//! Default content for a fresh offline deployment, written only for keys the
//! store does not already hold.

use crate::models::{Education, EducationStatus, Experience, SkillCategory};
use crate::services::{education_service, experience_service, skills_service};
use crate::storage::{set_typed, LocalStore};
use tracing::info;

pub fn ensure_seeded(store: &dyn LocalStore) {
    if store.get(experience_service::FALLBACK_KEY).is_none() {
        info!("seeding default experiences");
        set_typed(store, experience_service::FALLBACK_KEY, &default_experiences());
    }
    if store.get(skills_service::FALLBACK_KEY).is_none() {
        info!("seeding default skill categories");
        set_typed(store, skills_service::FALLBACK_KEY, &default_skill_categories());
    }
    if store.get(education_service::FALLBACK_KEY).is_none() {
        info!("seeding default educations");
        set_typed(store, education_service::FALLBACK_KEY, &default_educations());
    }
}

fn default_experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: Some("1".to_string()),
            period: "2023 - 2024".to_string(),
            company: "Example Corp".to_string(),
            position: "Backend Developer".to_string(),
            responsibilities: vec![
                "Built REST APIs for internal tooling".to_string(),
                "Containerized deployment pipelines".to_string(),
            ],
            technologies: Some(vec![
                "Rust".to_string(),
                "PostgreSQL".to_string(),
                "Docker".to_string(),
            ]),
            description: None,
        },
        Experience {
            id: Some("2".to_string()),
            period: "2025".to_string(),
            company: "Example Corp".to_string(),
            position: "Backend Developer".to_string(),
            responsibilities: vec![],
            technologies: None,
            description: Some("Planned internship".to_string()),
        },
    ]
}

fn default_skill_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            id: Some("1".to_string()),
            title: "Languages".to_string(),
            icon: "Code".to_string(),
            skills: vec!["Rust".to_string(), "Python".to_string(), "SQL".to_string()],
        },
        SkillCategory {
            id: Some("2".to_string()),
            title: "Databases".to_string(),
            icon: "Database".to_string(),
            skills: vec!["PostgreSQL".to_string(), "Redis".to_string()],
        },
        SkillCategory {
            id: Some("3".to_string()),
            title: "Tooling".to_string(),
            icon: "Terminal".to_string(),
            skills: vec![
                "Docker".to_string(),
                "Git".to_string(),
                "CI/CD".to_string(),
            ],
        },
    ]
}

fn default_educations() -> Vec<Education> {
    vec![Education {
        id: Some("1".to_string()),
        institution: "State Technical University".to_string(),
        degree: "BSc".to_string(),
        field: "Computer Science".to_string(),
        period: "2022 - 2026".to_string(),
        gpa: Some("4.5".to_string()),
        description: None,
        achievements: Some(vec!["Conference talks".to_string()]),
        diploma: None,
        status: EducationStatus::InProgress,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    #[test]
    fn seeds_only_missing_keys() {
        let store = MemoryStore::new();
        store.set(experience_service::FALLBACK_KEY, &json!([{"marker": true}]));

        ensure_seeded(&store);

        // Pre-existing data is left alone.
        let untouched = store.get(experience_service::FALLBACK_KEY).unwrap();
        assert_eq!(untouched[0]["marker"], true);

        // Missing collections get defaults.
        assert!(store.get(skills_service::FALLBACK_KEY).is_some());
        assert!(store.get(education_service::FALLBACK_KEY).is_some());
    }
}
