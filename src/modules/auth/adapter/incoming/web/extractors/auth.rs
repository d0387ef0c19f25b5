use std::sync::Arc;

use actix_web::{
    dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse,
};
use futures::future::LocalBoxFuture;
use tracing::{error, warn};

use crate::auth::application::domain::entities::IdentityUser;
use crate::auth::application::ports::outgoing::{IdentityError, IdentityProvider};
use crate::shared::api::ApiResponse;

pub const MISSING_AUTH_HEADER: &str = "Missing or invalid authorization header";
pub const INVALID_TOKEN: &str = "Invalid or expired token";

/// Caller whose bearer token the identity provider accepted.
///
/// Taking this as a handler argument is what makes a route require a login.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: IdentityUser,
    pub access_token: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = req
            .app_data::<web::Data<Arc<dyn IdentityProvider + Send + Sync>>>()
            .map(|data| Arc::clone(data.get_ref()));
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let Some(identity) = identity else {
                error!("Identity provider is not registered");
                return Err(create_api_error(ApiResponse::upstream_error(
                    "Authentication is unavailable",
                )));
            };

            let Some(token) = token else {
                return Err(create_api_error(ApiResponse::unauthorized(
                    MISSING_AUTH_HEADER,
                )));
            };

            match identity.get_user(&token).await {
                Ok(user) => Ok(AuthenticatedUser {
                    user,
                    access_token: token,
                }),
                Err(IdentityError::Rejected(reason)) => {
                    warn!(reason = %reason, "Bearer token rejected");
                    Err(create_api_error(ApiResponse::unauthorized(INVALID_TOKEN)))
                }
                Err(IdentityError::Upstream(msg)) => {
                    error!(error = %msg, "Identity provider unavailable");
                    Err(create_api_error(ApiResponse::upstream_error(&msg)))
                }
            }
        })
    }
}

pub fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}
