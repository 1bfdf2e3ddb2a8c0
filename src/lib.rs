//! Typed client for an external auth backend, plus a diagnostics probe runner.
//!
//! This crate is purely a client: the backend (`/health`, `/api/register`,
//! `/api/login`) is owned elsewhere. The client holds a single bearer token in
//! a session store and treats its presence as the sole authenticated signal —
//! no expiry handling, no client-side token validation.
//!
//! ARCHITECTURE
//! ============
//! `auth` owns the remote operations and writes the token through `session`,
//! the single owner of the token slot. `diag` is an independent best-effort
//! probe runner sharing no state with `auth`.

pub mod auth;
pub mod config;
pub mod diag;
pub mod session;

pub use auth::{AuthClient, AuthError, AuthSuccess, User};
pub use config::BackendConfig;
pub use diag::{DiagnosticsReport, ProbeResult};
pub use session::{FileStore, MemoryStore, Session, SessionError, TokenStore};
