use async_trait::async_trait;

use crate::modules::record::application::domain::{Record, RecordId, ResourceKind};
use crate::modules::record::application::ports::incoming::use_cases::{
    GetRecordError, GetRecordUseCase,
};
use crate::modules::record::application::ports::outgoing::{RecordStore, SelectQuery};
use crate::modules::skill::application::service::SkillLabeler;

pub struct GetRecordService<S>
where
    S: RecordStore + Clone,
{
    store: S,
    labeler: SkillLabeler<S>,
}

impl<S> GetRecordService<S>
where
    S: RecordStore + Clone,
{
    pub fn new(store: S) -> Self {
        Self {
            labeler: SkillLabeler::new(store.clone()),
            store,
        }
    }
}

#[async_trait]
impl<S> GetRecordUseCase for GetRecordService<S>
where
    S: RecordStore + Clone,
{
    async fn execute(&self, kind: ResourceKind, id: RecordId) -> Result<Record, GetRecordError> {
        let rows = self
            .store
            .select(kind.table(), &SelectQuery::by_id(id))
            .await
            .map_err(|e| GetRecordError::RepositoryError(e.to_string()))?;

        let mut record = rows
            .into_iter()
            .next()
            .ok_or_else(|| GetRecordError::NotFound(kind.not_found_message()))?;

        if kind == ResourceKind::Skills {
            record = self.labeler.label_one(record).await;
        }
        Ok(record)
    }
}
