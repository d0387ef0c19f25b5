use async_trait::async_trait;

use crate::modules::record::application::domain::{Record, ResourceKind};
use crate::modules::record::application::ports::incoming::use_cases::{
    ListRecordsError, ListRecordsUseCase,
};
use crate::modules::record::application::ports::outgoing::{RecordStore, SelectQuery};
use crate::modules::skill::application::service::SkillLabeler;

pub struct ListRecordsService<S>
where
    S: RecordStore + Clone,
{
    store: S,
    labeler: SkillLabeler<S>,
}

impl<S> ListRecordsService<S>
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
impl<S> ListRecordsUseCase for ListRecordsService<S>
where
    S: RecordStore + Clone,
{
    async fn execute(&self, kind: ResourceKind) -> Result<Vec<Record>, ListRecordsError> {
        let order = kind.default_order();
        let mut rows = self
            .store
            .select(kind.table(), &SelectQuery::ordered(order))
            .await
            .map_err(|e| ListRecordsError::RepositoryError(e.to_string()))?;

        // the store's ordering is text based; timelines need date order
        if let Some(order) = order {
            order.sort(&mut rows);
        }

        if kind == ResourceKind::Skills {
            rows = self.labeler.label(rows).await;
        }
        Ok(rows)
    }
}
