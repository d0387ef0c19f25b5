use async_trait::async_trait;
use tracing::debug;

use crate::modules::record::application::domain::{ProjectionError, Record, ResourceKind};
use crate::modules::record::application::ports::incoming::use_cases::{
    CreateRecordError, CreateRecordUseCase,
};
use crate::modules::record::application::ports::outgoing::RecordStore;

pub struct CreateRecordService<S>
where
    S: RecordStore,
{
    store: S,
}

impl<S> CreateRecordService<S>
where
    S: RecordStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> CreateRecordUseCase for CreateRecordService<S>
where
    S: RecordStore,
{
    async fn execute(
        &self,
        kind: ResourceKind,
        payload: Record,
    ) -> Result<Vec<Record>, CreateRecordError> {
        let record = kind
            .fields()
            .project_insert(&payload)
            .map_err(|ProjectionError::MissingFields(fields)| {
                CreateRecordError::MissingFields(fields)
            })?;

        debug!(resource = %kind, fields = record.len(), "Inserting record");

        self.store
            .insert(kind.table(), record)
            .await
            .map_err(|e| CreateRecordError::RepositoryError(e.to_string()))
    }
}
