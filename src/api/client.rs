//! Review API client.

use crate::config::{ApiConfig, build_http_client};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::debug;

/// Source of homework status responses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetch statuses changed since `from_date` (epoch seconds).
    ///
    /// Returns the decoded, not yet validated, JSON body.
    async fn fetch(&self, from_date: i64) -> Result<Value>;
}

/// Builder for creating a review API client.
pub struct PracticumClientBuilder {
    config: ApiConfig,
    token: Option<String>,
}

impl PracticumClientBuilder {
    /// Create a new builder with default config.
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
            token: None,
        }
    }

    /// Set the API configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the OAuth token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build the API client.
    pub fn build(self) -> Result<PracticumClient> {
        let token = self
            .token
            .ok_or(Error::CredentialMissing(crate::config::PRACTICUM_TOKEN))?;
        PracticumClient::new(self.config, token)
    }
}

impl Default for PracticumClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the homework statuses endpoint.
pub struct PracticumClient {
    config: ApiConfig,
    token: String,
    http: reqwest::Client,
}

impl PracticumClient {
    /// Create a new API client.
    pub fn new(config: ApiConfig, token: String) -> Result<Self> {
        let http = build_http_client(reqwest::Client::builder().timeout(config.timeout()))?;

        Ok(Self {
            config,
            token,
            http,
        })
    }

    /// Get a builder.
    pub fn builder() -> PracticumClientBuilder {
        PracticumClientBuilder::new()
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        let response = self
            .http
            .get(&self.config.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        debug!(%status, from_date, "Review API request completed");

        if status != StatusCode::OK {
            return Err(Error::Http {
                status: status.as_u16(),
                endpoint: self.config.endpoint.clone(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
