pub mod proficiency_labels;

pub use proficiency_labels::ProficiencyLabels;
