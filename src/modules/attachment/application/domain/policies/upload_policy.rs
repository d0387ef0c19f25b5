use std::env;

use crate::modules::attachment::application::domain::slot::SizeClass;

/// Per-file upload caps, by size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub logo_max_bytes: usize,
    pub evidence_max_bytes: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            logo_max_bytes: Self::DEFAULT_LOGO_MAX_BYTES,
            evidence_max_bytes: Self::DEFAULT_EVIDENCE_MAX_BYTES,
        }
    }
}

impl UploadPolicy {
    pub const DEFAULT_LOGO_MAX_BYTES: usize = 2 * 1024 * 1024; // 2MB
    pub const DEFAULT_EVIDENCE_MAX_BYTES: usize = 10 * 1024 * 1024; // 10MB

    /// Caps from `LOGO_MAX_BYTES` / `EVIDENCE_MAX_BYTES`; unset or unparsable values use the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(default)
        };

        Self {
            logo_max_bytes: read("LOGO_MAX_BYTES", Self::DEFAULT_LOGO_MAX_BYTES),
            evidence_max_bytes: read("EVIDENCE_MAX_BYTES", Self::DEFAULT_EVIDENCE_MAX_BYTES),
        }
    }

    pub fn limit_for(&self, class: SizeClass) -> usize {
        match class {
            SizeClass::Logo => self.logo_max_bytes,
            SizeClass::Evidence => self.evidence_max_bytes,
        }
    }
}
