use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::auth::application::domain::entities::{IdentityUser, Session};
use crate::auth::application::ports::outgoing::{IdentityError, IdentityProvider};
use crate::shared::SupabaseConfig;

/// GoTrue-compatible identity provider, called with the anonymous key.
#[derive(Clone)]
pub struct SupabaseIdentityProvider {
    client: Client,
    auth_url: String,
    anon_key: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: Option<i64>,
    user: Option<UserResponse>,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    email: Option<String>,
}

impl From<UserResponse> for IdentityUser {
    fn from(user: UserResponse) -> Self {
        IdentityUser {
            id: user.id,
            email: user.email,
        }
    }
}

impl From<TokenResponse> for Session {
    fn from(token: TokenResponse) -> Self {
        Session {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_in: token.expires_in,
            user: token.user.map(IdentityUser::from),
        }
    }
}

/// The provider has used several error shapes over time.
#[derive(Debug, Default, Deserialize)]
struct ProviderErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl SupabaseIdentityProvider {
    pub fn new(client: Client, config: &SupabaseConfig) -> Self {
        Self {
            client,
            auth_url: config.auth_url(),
            anon_key: config.anon_key.clone(),
        }
    }

    fn url(&self, path: &str) -> Result<Url, IdentityError> {
        Url::parse(&format!("{}/{}", self.auth_url, path))
            .map_err(|e| IdentityError::Upstream(format!("invalid auth url: {e}")))
    }

    fn token_url(&self, grant_type: &str) -> Result<Url, IdentityError> {
        let mut url = self.url("token")?;
        url.query_pairs_mut().append_pair("grant_type", grant_type);
        Ok(url)
    }

    /// `bearer` is the user's access token where the endpoint acts on a session.
    fn with_keys(&self, builder: RequestBuilder, bearer: Option<&str>) -> RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .header(
                "Authorization",
                format!("Bearer {}", bearer.unwrap_or(&self.anon_key)),
            )
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, IdentityError> {
        let response = builder
            .send()
            .await
            .map_err(|e| IdentityError::Upstream(e.to_string()))?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = classify_error(status, &body);
        if let IdentityError::Upstream(msg) = &err {
            error!(status = status.as_u16(), error = %msg, "Identity provider failed");
        }
        Err(err)
    }

    async fn session(&self, builder: RequestBuilder) -> Result<Session, IdentityError> {
        let response = self.send(builder).await?;
        response
            .json::<TokenResponse>()
            .await
            .map(Session::from)
            .map_err(|e| IdentityError::Upstream(format!("unexpected token response: {e}")))
    }
}

fn classify_error(status: StatusCode, body: &str) -> IdentityError {
    let parsed: ProviderErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = [
        parsed.error_description,
        parsed.msg,
        parsed.message,
        parsed.error,
    ]
    .into_iter()
    .flatten()
    .find(|m| !m.trim().is_empty())
    .unwrap_or_else(|| status.to_string());

    match status {
        StatusCode::BAD_REQUEST
        | StatusCode::UNAUTHORIZED
        | StatusCode::FORBIDDEN
        | StatusCode::UNPROCESSABLE_ENTITY => IdentityError::Rejected(message),
        _ => IdentityError::Upstream(message),
    }
}

#[async_trait]
impl IdentityProvider for SupabaseIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let url = self.token_url("password")?;
        let builder = self
            .client
            .post(url)
            .json(&json!({ "email": email, "password": password }));
        self.session(self.with_keys(builder, None)).await
    }

    async fn get_user(&self, access_token: &str) -> Result<IdentityUser, IdentityError> {
        let url = self.url("user")?;
        let builder = self.with_keys(self.client.get(url), Some(access_token));
        self.send(builder)
            .await?
            .json::<UserResponse>()
            .await
            .map(IdentityUser::from)
            .map_err(|e| IdentityError::Upstream(format!("unexpected user response: {e}")))
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, IdentityError> {
        let url = self.token_url("refresh_token")?;
        let builder = self
            .client
            .post(url)
            .json(&json!({ "refresh_token": refresh_token }));
        self.session(self.with_keys(builder, None)).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        let url = self.url("logout")?;
        let builder = self.with_keys(self.client.post(url), Some(access_token));
        self.send(builder).await.map(|_| ())
    }
}
