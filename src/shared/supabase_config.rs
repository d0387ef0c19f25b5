use std::env;

use anyhow::{anyhow, Result};

/// Connection settings for the hosted backend (tables, storage and auth).
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, without trailing slash.
    pub url: String,
    /// Service-role key: table and storage access.
    pub service_key: String,
    /// Anonymous key: identity provider calls.
    pub anon_key: String,
    pub schema: String,
    pub storage_bucket: String,
}

impl SupabaseConfig {
    pub const DEFAULT_SCHEMA: &'static str = "public";
    pub const DEFAULT_STORAGE_BUCKET: &'static str = "portfolio-files";

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, with an injectable variable source (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow!("{} is not set in .env file", key))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            url: required("SUPABASE_URL")?.trim_end_matches('/').to_string(),
            service_key: required("SUPABASE_SERVICE_KEY")?,
            anon_key: required("SUPABASE_ANON_KEY")?,
            schema: optional("SUPABASE_SCHEMA", Self::DEFAULT_SCHEMA),
            storage_bucket: optional("SUPABASE_STORAGE_BUCKET", Self::DEFAULT_STORAGE_BUCKET),
        })
    }

    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url)
    }

    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.url)
    }

    pub fn storage_url(&self) -> String {
        format!("{}/storage/v1", self.url)
    }
}
