//! Backend base-URL configuration parsed from the environment.

/// Environment variable naming the backend base URL.
pub const BASE_URL_VAR: &str = "AUTHKIT_BASE_URL";

/// Location of the external auth backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl BackendConfig {
    /// Build a config from an explicit base URL, trimming any trailing slash.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Load from `AUTHKIT_BASE_URL`.
    /// Returns `None` if unset or empty (callers decide how to surface that).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var(BASE_URL_VAR).ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        Some(Self::new(base_url))
    }

    /// The backend base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an absolute path (e.g. `/api/login`) onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
