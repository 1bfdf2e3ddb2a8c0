//! Diagnostics probe runner.
//!
//! One best-effort pass over three backend endpoints, each probe wrapped so a
//! network failure becomes an `{error, ok: false}` record instead of
//! propagating. The runner itself is infallible: missing configuration
//! renders an error report rather than a crash. No retries, no timeout, no
//! shared state with the auth client.

use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::config::{BASE_URL_VAR, BackendConfig};

/// Placeholder credentials for the register/login probes. The login password
/// is deliberately wrong: the probe checks reachability, not credentials.
const PROBE_EMAIL: &str = "test@example.com";
const PROBE_REGISTER_PASSWORD: &str = "TestPass123!";
const PROBE_LOGIN_PASSWORD: &str = "wrongpassword";

/// Outcome of a single probe.
///
/// Success carries the HTTP status; the health probe also carries the parsed
/// response body, while the register/login probes record only `responseOk` so
/// credentials and account details never reach rendered diagnostics.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_ok: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeResult {
    fn failure(error: String) -> Self {
        Self {
            status: None,
            ok: false,
            response: None,
            response_ok: None,
            error: Some(error),
        }
    }
}

/// The three fixed probes, in execution order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeSet {
    pub health_check: ProbeResult,
    pub register_endpoint: ProbeResult,
    pub login_endpoint: ProbeResult,
}

/// Aggregated diagnostics for one run. Ephemeral — built fresh per
/// invocation, never persisted.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<ProbeSet>,
}

/// Run the probe sequence against `config`, or render a configuration-error
/// report (with zero network activity) when none is available.
///
/// The probes run sequentially, so total latency is additive; a failure in
/// one leaves the others unaffected.
pub async fn run(config: Option<&BackendConfig>) -> DiagnosticsReport {
    let Some(config) = config else {
        return DiagnosticsReport {
            error: Some(format!("{BASE_URL_VAR} environment variable is not set")),
            api_base_url: None,
            timestamp: None,
            tests: None,
        };
    };

    let client = reqwest::Client::new();
    let tests = ProbeSet {
        health_check: probe_health(&client, config).await,
        register_endpoint: probe_post(
            &client,
            config.url("/api/register"),
            PROBE_REGISTER_PASSWORD,
        )
        .await,
        login_endpoint: probe_post(&client, config.url("/api/login"), PROBE_LOGIN_PASSWORD).await,
    };

    DiagnosticsReport {
        error: None,
        api_base_url: Some(config.base_url().to_owned()),
        timestamp: Some(now_rfc3339()),
        tests: Some(tests),
    }
}

/// `GET /health` — body rendered as JSON when possible, else a marker string.
async fn probe_health(client: &reqwest::Client, config: &BackendConfig) -> ProbeResult {
    match client.get(config.url("/health")).send().await {
        Ok(resp) => {
            let status = resp.status();
            let body = resp
                .json::<Value>()
                .await
                .unwrap_or_else(|_| Value::String("non-JSON response".to_owned()));
            ProbeResult {
                status: Some(status.as_u16()),
                ok: status.is_success(),
                response: Some(body),
                response_ok: None,
                error: None,
            }
        }
        Err(e) => ProbeResult::failure(e.to_string()),
    }
}

/// `POST` a credentials body; judge the probe by status code only.
async fn probe_post(client: &reqwest::Client, url: String, password: &str) -> ProbeResult {
    let body = serde_json::json!({ "email": PROBE_EMAIL, "password": password });
    match client.post(url).json(&body).send().await {
        Ok(resp) => {
            let status = resp.status();
            ProbeResult {
                status: Some(status.as_u16()),
                ok: status.is_success(),
                response: None,
                response_ok: Some(status.is_success()),
                error: None,
            }
        }
        Err(e) => ProbeResult::failure(e.to_string()),
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "diag_test.rs"]
mod tests;
