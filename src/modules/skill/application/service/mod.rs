mod list_proficiency_levels_service;
mod skill_labeler;

pub use list_proficiency_levels_service::ListProficiencyLevelsService;
pub use skill_labeler::SkillLabeler;
