// src/modules/record/application/ports/outgoing/record_store.rs

use async_trait::async_trait;

use crate::modules::record::application::domain::{OrderBy, Record, RecordId};

/// Read shape for `select`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectQuery {
    /// `id = <id>` filter.
    pub id: Option<RecordId>,
    pub order: Option<OrderBy>,
    pub limit: Option<usize>,
}

impl SelectQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: RecordId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn ordered(order: Option<OrderBy>) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordStoreError {
    /// The store does not know a column we tried to write.
    #[error("Schema cache error: {0}")]
    SchemaCache(String),

    /// A value could not be converted to its column type.
    #[error("Invalid input for the record store: {0}")]
    InvalidInput(String),

    #[error("Record store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Record store unreachable: {0}")]
    Transport(String),

    #[error("Unexpected record store response: {0}")]
    Decode(String),
}

/// Remote table store. Every call is one round trip; nothing is cached or retried.
///
/// Mutations return the affected rows; an empty vector means no row matched.
/// An id the store cannot read as its key type matches no row.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn select(&self, table: &str, query: &SelectQuery)
        -> Result<Vec<Record>, RecordStoreError>;

    async fn insert(&self, table: &str, record: Record) -> Result<Vec<Record>, RecordStoreError>;

    async fn update(
        &self,
        table: &str,
        id: &RecordId,
        changes: Record,
    ) -> Result<Vec<Record>, RecordStoreError>;

    async fn delete(&self, table: &str, id: &RecordId) -> Result<Vec<Record>, RecordStoreError>;

    /// Cheap reachability probe for readiness checks.
    async fn ping(&self) -> Result<(), RecordStoreError>;
}
