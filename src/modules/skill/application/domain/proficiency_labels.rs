use std::collections::HashMap;

use serde_json::Value;

use crate::modules::record::application::domain::record::{text_of, Record};

/// Lookup table holding the display text of each proficiency level.
pub const PROFICIENCY_LEVELS_TABLE: &str = "proficiency_levels";

/// Derived attribute attached to skills at read time.
pub const PROFICIENCY_LABEL_FIELD: &str = "proficiency_label";

const KEY_ATTRIBUTES: [&str; 2] = ["id", "code"];
const LABEL_ATTRIBUTES: [&str; 4] = ["level", "label", "name", "level_name"];

/// Level key → display label. Join is display-only: unknown codes are not errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProficiencyLabels {
    labels: HashMap<String, String>,
}

impl ProficiencyLabels {
    pub fn from_levels(levels: &[Record]) -> Self {
        let labels = levels
            .iter()
            .filter_map(|level| {
                let key = first_text(level, &KEY_ATTRIBUTES)?;
                let label = first_text(level, &LABEL_ATTRIBUTES).unwrap_or_else(|| key.clone());
                Some((key, label))
            })
            .collect();

        Self { labels }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label_for(&self, code: &str) -> Option<&str> {
        self.labels.get(code.trim()).map(String::as_str)
    }

    pub fn apply(&self, skills: Vec<Record>) -> Vec<Record> {
        skills
            .into_iter()
            .map(|mut skill| {
                self.apply_one(&mut skill);
                skill
            })
            .collect()
    }

    pub fn apply_one(&self, skill: &mut Record) {
        let Some(code) = text_of(skill, "proficiency") else {
            return;
        };
        if let Some(label) = self.label_for(&code) {
            skill.insert(
                PROFICIENCY_LABEL_FIELD.to_string(),
                Value::String(label.to_string()),
            );
        }
    }
}

fn first_text(record: &Record, attributes: &[&str]) -> Option<String> {
    attributes
        .iter()
        .filter_map(|attr| text_of(record, attr))
        .find(|text| !text.is_empty())
}
