use std::sync::Arc;

use crate::auth::application::ports::outgoing::IdentityProvider;
use crate::auth::application::use_cases::{
    login_user::LoginUserUseCase, logout_user::LogoutUseCase, refresh_token::RefreshTokenUseCase,
};
use crate::modules::attachment::application::attachment_use_cases::AttachmentUseCases;
use crate::modules::attachment::application::domain::UploadPolicy;
use crate::modules::attachment::application::service::{
    FetchAttachmentService, UploadAttachmentService,
};
use crate::modules::portfolio::application::service::GetPortfolioService;
use crate::modules::record::application::record_use_cases::RecordUseCases;
use crate::modules::record::application::service::{
    CreateRecordService, DeleteRecordService, GetRecordService, ListRecordsService,
    UpdateRecordService,
};
use crate::modules::skill::application::service::ListProficiencyLevelsService;
use crate::tests::support::auth_helper::identity_provider;
use crate::tests::support::in_memory_bucket::InMemoryBucket;
use crate::tests::support::in_memory_store::InMemoryRecordStore;
use crate::AppState;

/// Real services over in-memory adapters.
pub struct TestAppStateBuilder {
    store: InMemoryRecordStore,
    bucket: InMemoryBucket,
    identity: Arc<dyn IdentityProvider + Send + Sync>,
    policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: InMemoryRecordStore::new(),
            bucket: InMemoryBucket::new(),
            identity: identity_provider(),
            policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_store(mut self, store: InMemoryRecordStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_bucket(mut self, bucket: InMemoryBucket) -> Self {
        self.bucket = bucket;
        self
    }

    pub fn with_identity(mut self, identity: Arc<dyn IdentityProvider + Send + Sync>) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_policy(mut self, policy: UploadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> AppState {
        let store = self.store;
        let bucket = self.bucket;

        AppState {
            record: RecordUseCases {
                list: Arc::new(ListRecordsService::new(store.clone())),
                get: Arc::new(GetRecordService::new(store.clone())),
                create: Arc::new(CreateRecordService::new(store.clone())),
                update: Arc::new(UpdateRecordService::new(store.clone())),
                delete: Arc::new(DeleteRecordService::new(store.clone())),
            },
            attachment: AttachmentUseCases {
                upload: Arc::new(UploadAttachmentService::new(
                    store.clone(),
                    bucket.clone(),
                    self.policy,
                )),
                fetch: Arc::new(FetchAttachmentService::new(store.clone(), bucket)),
                policy: self.policy,
            },
            portfolio: Arc::new(GetPortfolioService::new(store.clone())),
            list_proficiency_levels: Arc::new(ListProficiencyLevelsService::new(store)),
            login_user_use_case: Arc::new(LoginUserUseCase::new(Arc::clone(&self.identity))),
            logout_user_use_case: Arc::new(LogoutUseCase::new(Arc::clone(&self.identity))),
            refresh_token_use_case: Arc::new(RefreshTokenUseCase::new(self.identity)),
        }
    }
}
