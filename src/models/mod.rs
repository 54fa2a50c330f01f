pub mod achievement;
pub mod education;
pub mod experience;
pub mod message;
pub mod personal_info;
pub mod project;
pub mod skill;

pub use achievement::Achievement;
pub use education::{Education, EducationStatus};
pub use experience::Experience;
pub use message::{CreateMessage, Message};
pub use personal_info::PersonalInfo;
pub use project::Project;
pub use skill::SkillCategory;
