//! HTTP client for a running logbook server.
//!
//! Used by `logbook status`; the base URL defaults to the configured bind
//! address and can be overridden with `LOGBOOK_URL`.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::PhaseSummary;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error ({status}): {body}")]
    Server { status: StatusCode, body: String },
}

#[derive(Debug, Clone)]
pub struct LogbookClient {
    base_url: String,
    client: Client,
}

impl LogbookClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:8501`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}/api/v1{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(body)),
                _ => Err(ClientError::Server { status, body }),
            }
        }
    }

    /// Returns the `status` field of the health endpoint.
    pub async fn health(&self) -> Result<String, ClientError> {
        let body: serde_json::Value = self.get("/health").await?;
        Ok(body["status"].as_str().unwrap_or("unknown").to_string())
    }

    pub async fn selection(&self) -> Result<PhaseSummary, ClientError> {
        self.get("/selection").await
    }
}
