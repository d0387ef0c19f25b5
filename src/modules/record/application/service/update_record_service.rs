use async_trait::async_trait;

use crate::modules::record::application::domain::{Record, RecordId, ResourceKind};
use crate::modules::record::application::ports::incoming::use_cases::{
    UpdateRecordError, UpdateRecordUseCase,
};
use crate::modules::record::application::ports::outgoing::RecordStore;

pub struct UpdateRecordService<S>
where
    S: RecordStore,
{
    store: S,
}

impl<S> UpdateRecordService<S>
where
    S: RecordStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> UpdateRecordUseCase for UpdateRecordService<S>
where
    S: RecordStore,
{
    async fn execute(
        &self,
        kind: ResourceKind,
        id: RecordId,
        payload: Record,
    ) -> Result<Vec<Record>, UpdateRecordError> {
        let changes = kind.fields().project_update(&payload);
        if changes.is_empty() {
            return Err(UpdateRecordError::NoFieldsToUpdate);
        }

        let updated = self
            .store
            .update(kind.table(), &id, changes)
            .await
            .map_err(|e| UpdateRecordError::RepositoryError(e.to_string()))?;

        if updated.is_empty() {
            return Err(UpdateRecordError::NotFound(kind.not_found_message()));
        }
        Ok(updated)
    }
}
