use async_trait::async_trait;

use crate::modules::record::application::domain::Record;
use crate::modules::record::application::ports::outgoing::{RecordStore, SelectQuery};
use crate::modules::skill::application::domain::proficiency_labels::PROFICIENCY_LEVELS_TABLE;
use crate::modules::skill::application::ports::incoming::use_cases::{
    ListProficiencyLevelsError, ListProficiencyLevelsUseCase,
};

pub struct ListProficiencyLevelsService<S>
where
    S: RecordStore,
{
    store: S,
}

impl<S> ListProficiencyLevelsService<S>
where
    S: RecordStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ListProficiencyLevelsUseCase for ListProficiencyLevelsService<S>
where
    S: RecordStore,
{
    async fn execute(&self) -> Result<Vec<Record>, ListProficiencyLevelsError> {
        self.store
            .select(PROFICIENCY_LEVELS_TABLE, &SelectQuery::all())
            .await
            .map_err(|e| ListProficiencyLevelsError::RepositoryError(e.to_string()))
    }
}
