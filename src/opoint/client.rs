use std::env;

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::Value;
use tracing::{debug, warn};

use super::types::{ErrorBody, SearchRequest};

pub const TOKEN_ENV: &str = "OPOINT_API_TOKEN";
pub const BASE_URL_ENV: &str = "OPOINT_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://api.opoint.com";
const SEARCH_PATH: &str = "/search/";

#[derive(Debug, thiserror::Error)]
pub enum OpointError {
    #[error("Please add a valid API token before sending. Set OPOINT_API_TOKEN or pass --token.")]
    MissingCredential,

    #[error("{message}")]
    Request { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Issues one search against the provider and hands back the untouched JSON body.
/// Implemented by `OpointClient` for production; mock implementations used in tests.
pub trait SearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<Value, OpointError>;
}

#[derive(Clone)]
struct ApiToken(String);

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[derive(Clone, Debug)]
pub struct OpointClient {
    http: Client,
    token: ApiToken,
    endpoint: String,
}

impl OpointClient {
    /// Explicit settings win; otherwise `OPOINT_API_TOKEN` and `OPOINT_BASE_URL` are read.
    pub fn from_env(
        http: Client,
        token: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, OpointError> {
        let token = token.or_else(|| env::var(TOKEN_ENV).ok());
        let base_url = base_url.or_else(|| env::var(BASE_URL_ENV).ok());
        Self::new(http, token.as_deref(), base_url.as_deref())
    }

    pub fn new(
        http: Client,
        token: Option<&str>,
        base_url: Option<&str>,
    ) -> Result<Self, OpointError> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(OpointError::MissingCredential)?;
        let base_url = base_url
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        let endpoint = search_endpoint(base_url)?;
        debug!(%endpoint, "opoint client configured");
        Ok(Self {
            http,
            token: ApiToken(token.to_string()),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchClient for OpointClient {
    async fn search(&self, request: &SearchRequest) -> Result<Value, OpointError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Token {}", self.token.0))
            .header(ACCEPT, "application/json")
            .header("User-Agent", crate::USER_AGENT)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = error_message(status.as_u16(), &text);
            warn!(status = %status, "Opoint API error");
            return Err(OpointError::Request {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await?;
        debug!(searchterm = %request.search_term, "opoint search complete");
        Ok(body)
    }
}

fn search_endpoint(base_url: &str) -> Result<String, OpointError> {
    let parsed = url::Url::parse(base_url)
        .map_err(|e| OpointError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(OpointError::InvalidBaseUrl(format!(
                "{base_url}: unsupported scheme {other}"
            )));
        }
    }
    Ok(format!("{}{SEARCH_PATH}", base_url.trim_end_matches('/')))
}

/// Non-empty `detail` from a JSON error body, else the raw body, else a generic status line.
fn error_message(status: u16, text: &str) -> String {
    if let Some(detail) = serde_json::from_str::<ErrorBody>(text)
        .ok()
        .and_then(|body| body.detail_text())
    {
        return detail;
    }
    if !text.is_empty() {
        return text.to_string();
    }
    format!("Request failed with status {status}")
}
