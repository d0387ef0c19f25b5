use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    CurrentUserResponse, LoginRequestDto, LoginResponse, RefreshTokenRequestDto,
    RefreshTokenResponse, ValidateTokenResponse,
};
use crate::auth::application::domain::entities::IdentityUser;
use crate::health::{HealthResponse, ReadinessResponse};
use crate::modules::attachment::adapter::incoming::web::routes::UploadResponse;
use crate::modules::portfolio::application::domain::PortfolioSnapshot;
use crate::shared::api::{ApiError, ApiMessage};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Gateway API",
        version = "1.0.0",
        description = "CRUD, file and session endpoints of the personal portfolio"
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::validate_token_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::fetch_user_handler,

        // Record endpoints, one set per resource
        crate::modules::record::adapter::incoming::web::routes::list_records_handler,
        crate::modules::record::adapter::incoming::web::routes::get_record_handler,
        crate::modules::record::adapter::incoming::web::routes::create_record_handler,
        crate::modules::record::adapter::incoming::web::routes::update_record_handler,
        crate::modules::record::adapter::incoming::web::routes::delete_record_handler,

        // Attachment endpoints
        crate::modules::attachment::adapter::incoming::web::routes::upload_attachment_handler,
        crate::modules::attachment::adapter::incoming::web::routes::get_logo_handler,
        crate::modules::attachment::adapter::incoming::web::routes::download_attachment_handler,
        crate::modules::attachment::adapter::incoming::web::routes::preview_attachment_handler,

        // Read models
        crate::modules::skill::adapter::incoming::web::routes::list_proficiency_levels_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
    ),
    components(
        schemas(
            ApiError,
            ApiMessage,
            HealthResponse,
            ReadinessResponse,
            IdentityUser,
            LoginRequestDto,
            LoginResponse,
            RefreshTokenRequestDto,
            RefreshTokenResponse,
            ValidateTokenResponse,
            CurrentUserResponse,
            UploadResponse,
            PortfolioSnapshot
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "auth", description = "Session endpoints backed by the identity provider"),
        (name = "records", description = "CRUD over skills, education, work, community, projects and e-portfolio"),
        (name = "attachments", description = "Logo and evidence files"),
        (name = "skills", description = "Skill reference data"),
        (name = "portfolio", description = "Aggregated portfolio"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token returned by /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route_family() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/auth/login",
            "/api/{resource}",
            "/api/{resource}/{id}",
            "/api/{resource}/{id}/upload",
            "/api/{resource}/{id}/download/{index}",
            "/api/portfolio",
            "/ready",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "{expected} missing from {paths:?}"
            );
        }
    }

    #[test]
    fn test_bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();

        assert!(components.security_schemes.contains_key("BearerAuth"));
    }
}
