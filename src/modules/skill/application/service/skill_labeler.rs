use tracing::warn;

use crate::modules::record::application::domain::Record;
use crate::modules::record::application::ports::outgoing::{
    RecordStore, RecordStoreError, SelectQuery,
};
use crate::modules::skill::application::domain::proficiency_labels::{
    ProficiencyLabels, PROFICIENCY_LEVELS_TABLE,
};

/// Attaches proficiency labels to skill rows.
#[derive(Clone)]
pub struct SkillLabeler<S>
where
    S: RecordStore,
{
    store: S,
}

impl<S> SkillLabeler<S>
where
    S: RecordStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn load_labels(&self) -> Result<ProficiencyLabels, RecordStoreError> {
        let levels = self
            .store
            .select(PROFICIENCY_LEVELS_TABLE, &SelectQuery::all())
            .await?;
        Ok(ProficiencyLabels::from_levels(&levels))
    }

    /// Labels the given skills. A failed lookup returns them unlabelled.
    pub async fn label(&self, skills: Vec<Record>) -> Vec<Record> {
        match self.load_labels().await {
            Ok(labels) => labels.apply(skills),
            Err(e) => {
                warn!(error = %e, "Proficiency levels unavailable, returning unlabelled skills");
                skills
            }
        }
    }

    pub async fn label_one(&self, skill: Record) -> Record {
        match self.load_labels().await {
            Ok(labels) => {
                let mut skill = skill;
                labels.apply_one(&mut skill);
                skill
            }
            Err(e) => {
                warn!(error = %e, "Proficiency levels unavailable, returning unlabelled skill");
                skill
            }
        }
    }
}
