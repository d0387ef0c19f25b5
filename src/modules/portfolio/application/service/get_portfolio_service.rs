use async_trait::async_trait;
use tracing::{debug, error};

use crate::modules::portfolio::application::domain::PortfolioSnapshot;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::modules::record::application::domain::{Record, ResourceKind};
use crate::modules::record::application::ports::outgoing::{RecordStore, SelectQuery};
use crate::modules::skill::application::service::SkillLabeler;

pub struct GetPortfolioService<S>
where
    S: RecordStore + Clone,
{
    store: S,
    labeler: SkillLabeler<S>,
}

impl<S> GetPortfolioService<S>
where
    S: RecordStore + Clone,
{
    pub fn new(store: S) -> Self {
        Self {
            labeler: SkillLabeler::new(store.clone()),
            store,
        }
    }

    async fn section(&self, kind: ResourceKind) -> Result<Vec<Record>, GetPortfolioError> {
        let order = kind.default_order();
        let mut rows = self
            .store
            .select(kind.table(), &SelectQuery::ordered(order))
            .await
            .map_err(|e| {
                error!(resource = %kind, error = %e, "Portfolio section failed");
                GetPortfolioError::RepositoryError(e.to_string())
            })?;

        if let Some(order) = order {
            order.sort(&mut rows);
        }
        Ok(rows)
    }
}

#[async_trait]
impl<S> GetPortfolioUseCase for GetPortfolioService<S>
where
    S: RecordStore + Clone,
{
    /// Reads run one after another; the first failure fails the snapshot.
    async fn execute(&self) -> Result<PortfolioSnapshot, GetPortfolioError> {
        let skills = self.section(ResourceKind::Skills).await?;
        let skills = self.labeler.label(skills).await;

        let snapshot = PortfolioSnapshot {
            skills,
            education: self.section(ResourceKind::Education).await?,
            work: self.section(ResourceKind::Work).await?,
            community: self.section(ResourceKind::Community).await?,
            projects: self.section(ResourceKind::Projects).await?,
        };

        debug!(
            skills = snapshot.skills.len(),
            education = snapshot.education.len(),
            work = snapshot.work.len(),
            "Portfolio assembled"
        );
        Ok(snapshot)
    }
}
