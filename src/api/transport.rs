//! Transport layer: one authenticated GET in, one JSON body out.
//!
//! The façade never talks to the network directly. It hands an
//! [`ApiRequest`] to a [`Transport`], which reports rejected credentials
//! separately from every other failure.

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::ApiConfig;
use crate::error::{Result, SpotifyError};

/// A request as built by the façade.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,

    /// Absolute path, e.g. `/v1/albums/4aawyAB9vmqN3uQ7FjRGTy`.
    pub path: String,

    /// Query parameters in the order they were added.
    pub query: Vec<(String, String)>,

    /// Bearer token snapshot taken when the request was built.
    pub access_token: String,
}

impl ApiRequest {
    /// Build a GET request without query parameters.
    pub fn get(path: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            access_token: access_token.into(),
        }
    }

    /// Value of a query parameter, if set.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Failures a transport can report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    /// The remote rejected the bearer token (HTTP 401).
    #[error("Unauthorized")]
    Unauthorized,

    /// Network failure, non-2xx status, or a body that is not JSON.
    #[error("Transport failure: {message}")]
    Failed {
        status: Option<u16>,
        message: String,
    },
}

impl TransportError {
    pub fn failed<S: Into<String>>(status: Option<u16>, message: S) -> Self {
        TransportError::Failed {
            status,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.status() == Some(StatusCode::UNAUTHORIZED) {
            return TransportError::Unauthorized;
        }
        TransportError::failed(err.status().map(|s| s.as_u16()), err.to_string())
    }
}

/// Sends requests to the catalog API.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> std::result::Result<Value, TransportError>;
}

/// [`Transport`] over HTTPS using reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            SpotifyError::InvalidConfig(format!("base URL {:?}: {}", config.base_url, e))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(SpotifyError::InvalidConfig(
                "base URL must start with http:// or https://".into(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SpotifyError::InvalidConfig(format!("HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Pull `error.message` out of an API error body.
fn api_error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    json.get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(|s| s.to_string())
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> std::result::Result<Value, TransportError> {
        let url = self
            .base_url
            .join(&request.path)
            .map_err(|e| TransportError::failed(None, format!("bad path {}: {}", request.path, e)))?;
        debug!("{} {} with params: {:?}", request.method, url, request.query);

        let response = self
            .client
            .request(request.method, url)
            .bearer_auth(&request.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&request.query)
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", request.path, e);
                TransportError::from(e)
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!("Access token rejected for {}", request.path);
            return Err(TransportError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = api_error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            error!("Spotify API error ({}): {}", status.as_u16(), message);
            return Err(TransportError::failed(Some(status.as_u16()), message));
        }

        response.json::<Value>().await.map_err(|e| {
            error!("Malformed response body for {}: {}", request.path, e);
            TransportError::failed(Some(status.as_u16()), format!("malformed response: {}", e))
        })
    }
}
