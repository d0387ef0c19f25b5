use async_trait::async_trait;
use tracing::info;

use crate::modules::record::application::domain::{RecordId, ResourceKind};
use crate::modules::record::application::ports::incoming::use_cases::{
    DeleteRecordError, DeleteRecordUseCase,
};
use crate::modules::record::application::ports::outgoing::RecordStore;

pub struct DeleteRecordService<S>
where
    S: RecordStore,
{
    store: S,
}

impl<S> DeleteRecordService<S>
where
    S: RecordStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> DeleteRecordUseCase for DeleteRecordService<S>
where
    S: RecordStore,
{
    async fn execute(&self, kind: ResourceKind, id: RecordId) -> Result<(), DeleteRecordError> {
        let removed = self
            .store
            .delete(kind.table(), &id)
            .await
            .map_err(|e| DeleteRecordError::RepositoryError(e.to_string()))?;

        if removed.is_empty() {
            return Err(DeleteRecordError::NotFound(kind.not_found_message()));
        }

        info!(resource = %kind, id = %id, "Record deleted");
        Ok(())
    }
}
