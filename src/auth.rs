//! Auth backend client — register, login, logout, session queries.
//!
//! ERROR HANDLING
//! ==============
//! Remote failures surface to the caller as [`AuthError`] carrying the
//! backend's own message where one exists (`message` on register, `detail`
//! on login) and a fixed fallback otherwise. Nothing is retried.

use serde_json::Value;

use crate::config::BackendConfig;
use crate::session::{Session, SessionError};

const REGISTER_FALLBACK: &str = "registration failed";
const LOGIN_FALLBACK: &str = "login failed";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("registration failed: {0}")]
    Registration(String),
    #[error("login failed: {0}")]
    Login(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AuthError {
    /// The human-readable message derived from the backend response.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Registration(msg) | Self::Login(msg) => msg.clone(),
            Self::Http(e) => e.to_string(),
            Self::Session(e) => e.to_string(),
        }
    }
}

/// Minimal user identity returned by auth operations.
///
/// The backend has no user-detail endpoint, so `id` is empty and `email`
/// echoes the submitted credentials.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// Outcome of a successful login (or register, which chains into login).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSuccess {
    pub user: User,
    pub token: String,
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Typed client for the remote auth endpoints.
///
/// Owns the [`Session`], so every token write or erase flows through one
/// place. The session slot is the only mutable state.
pub struct AuthClient {
    client: reqwest::Client,
    base_url: String,
    session: Session,
}

impl AuthClient {
    #[must_use]
    pub fn new(config: &BackendConfig, session: Session) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url().to_owned(),
            session,
        }
    }

    /// Create a new account, then log in with the same credentials.
    ///
    /// Registration is an explicit two-step protocol: the backend never
    /// returns a session token from `/api/register`, so the only success
    /// path is the follow-up login.
    ///
    /// # Errors
    ///
    /// [`AuthError::Registration`] with the backend's `message` (or a generic
    /// fallback) on a non-success status, plus any error `login` can return.
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthSuccess, AuthError> {
        let resp = self
            .client
            .post(format!("{}/api/register", self.base_url))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = resp.status();
        tracing::debug!(status = %status, "register endpoint responded");
        if !status.is_success() {
            let message = error_field(resp, "message", REGISTER_FALLBACK).await;
            return Err(AuthError::Registration(message));
        }

        self.login(email, password).await
    }

    /// Exchange credentials for a bearer token and persist it.
    ///
    /// On a non-success status the session is left untouched.
    ///
    /// # Errors
    ///
    /// [`AuthError::Login`] with the backend's `detail` (or a generic
    /// fallback) on a non-success status; [`AuthError::Http`] on transport or
    /// body-decode failures; [`AuthError::Session`] if persisting the token
    /// fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSuccess, AuthError> {
        let resp = self
            .client
            .post(format!("{}/api/login", self.base_url))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(status = %status, "login rejected");
            let detail = error_field(resp, "detail", LOGIN_FALLBACK).await;
            return Err(AuthError::Login(detail));
        }

        let body: TokenResponse = resp.json().await?;
        self.session.store_token(&body.access_token)?;
        tracing::info!(%email, "login succeeded");

        Ok(AuthSuccess {
            user: User {
                id: String::new(),
                email: email.to_owned(),
            },
            token: body.access_token,
        })
    }

    /// Drop the stored token. Never calls the backend; always succeeds short
    /// of a storage failure.
    ///
    /// # Errors
    ///
    /// [`AuthError::Session`] on a storage delete failure.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.session.clear()?;
        tracing::info!("session cleared");
        Ok(())
    }

    /// True iff a non-empty token is stored. Purely local.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// The raw stored token, or `None` when logged out.
    ///
    /// # Errors
    ///
    /// [`AuthError::Session`] on a storage read failure.
    pub fn token(&self) -> Result<Option<String>, AuthError> {
        Ok(self.session.token()?)
    }

    /// The current user, when resolvable.
    ///
    /// Always `None` today: the token is opaque and no user-info endpoint
    /// exists, so even a stored token resolves to no user.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        if !self.session.is_authenticated() {
            return None;
        }
        // Opaque token, no lookup endpoint: nothing to resolve.
        None
    }

    /// The session owning this client's token slot.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Pull a named string field out of an error body, tolerating non-JSON
/// responses.
async fn error_field(resp: reqwest::Response, field: &str, fallback: &str) -> String {
    resp.json::<Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get(field)
                .and_then(Value::as_str)
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| fallback.to_owned())
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
