use std::sync::Arc;

use crate::modules::record::application::ports::incoming::use_cases::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordUseCase, ListRecordsUseCase,
    UpdateRecordUseCase,
};

#[derive(Clone)]
pub struct RecordUseCases {
    pub list: Arc<dyn ListRecordsUseCase + Send + Sync>,
    pub get: Arc<dyn GetRecordUseCase + Send + Sync>,
    pub create: Arc<dyn CreateRecordUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateRecordUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteRecordUseCase + Send + Sync>,
}
