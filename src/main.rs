pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::SupabaseIdentityProvider;
use crate::auth::application::ports::outgoing::IdentityProvider;
use crate::auth::application::use_cases::{
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
};
use crate::modules::attachment::adapter::incoming::web::routes::configure_attachment_routes;
use crate::modules::attachment::adapter::outgoing::SupabaseStorageBucket;
use crate::modules::attachment::application::attachment_use_cases::AttachmentUseCases;
use crate::modules::attachment::application::domain::UploadPolicy;
use crate::modules::attachment::application::service::{
    FetchAttachmentService, UploadAttachmentService,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioUseCase;
use crate::modules::portfolio::application::service::GetPortfolioService;
use crate::modules::record::adapter::incoming::web::routes::resource_scope;
use crate::modules::record::adapter::outgoing::PostgrestRecordStore;
use crate::modules::record::application::domain::ResourceKind;
use crate::modules::record::application::ports::outgoing::RecordStore;
use crate::modules::record::application::record_use_cases::RecordUseCases;
use crate::modules::record::application::service::{
    CreateRecordService, DeleteRecordService, GetRecordService, ListRecordsService,
    UpdateRecordService,
};
use crate::modules::skill::application::ports::incoming::use_cases::ListProficiencyLevelsUseCase;
use crate::modules::skill::application::service::ListProficiencyLevelsService;
use crate::shared::api::custom_json_config;
use crate::shared::SupabaseConfig;

use actix_web::{web, App, HttpServer};
use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub record: RecordUseCases,
    pub attachment: AttachmentUseCases,
    pub portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub list_proficiency_levels: Arc<dyn ListProficiencyLevelsUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let supabase = SupabaseConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let upload_policy = UploadPolicy::from_env();

    let client = reqwest::Client::builder()
        .build()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    // Outgoing adapters
    let store = PostgrestRecordStore::new(client.clone(), &supabase);
    let bucket = SupabaseStorageBucket::new(client.clone(), &supabase);
    let identity: Arc<dyn IdentityProvider + Send + Sync> =
        Arc::new(SupabaseIdentityProvider::new(client, &supabase));
    let store_for_probe: Arc<dyn RecordStore + Send + Sync> = Arc::new(store.clone());

    // Use cases
    let state = AppState {
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
                upload_policy,
            )),
            fetch: Arc::new(FetchAttachmentService::new(store.clone(), bucket)),
            policy: upload_policy,
        },
        portfolio: Arc::new(GetPortfolioService::new(store.clone())),
        list_proficiency_levels: Arc::new(ListProficiencyLevelsService::new(store)),
        login_user_use_case: Arc::new(LoginUserUseCase::new(Arc::clone(&identity))),
        logout_user_use_case: Arc::new(LogoutUseCase::new(Arc::clone(&identity))),
        refresh_token_use_case: Arc::new(RefreshTokenUseCase::new(Arc::clone(&identity))),
    };

    let server_url = format!("{host}:{port}");
    info!(address = %server_url, schema = %supabase.schema, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&identity)))
            .app_data(web::Data::new(Arc::clone(&store_for_probe)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::validate_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_user_handler);
    // Read models
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(
        crate::modules::skill::adapter::incoming::web::routes::list_proficiency_levels_handler,
    );
    // Resources, with their file slots
    for kind in ResourceKind::ALL {
        cfg.service(resource_scope(kind).configure(|c| configure_attachment_routes(c, kind)));
    }
    // API docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
