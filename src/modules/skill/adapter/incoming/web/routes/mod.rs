mod list_proficiency_levels;

pub use list_proficiency_levels::*;
