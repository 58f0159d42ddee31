use anyhow::Result;
use reqwest::{header::ACCEPT, Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::Config;
use crate::constants::GEO_JSON;
use crate::diagnostics::DiagnosticLog;

/// Outcome of an upstream call. Every failure collapses into `Unavailable`.
#[derive(Debug)]
pub enum Fetch<T> {
    Success(T),
    Unavailable,
}

impl<T> Fetch<T> {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Fetch::Unavailable)
    }
}

#[derive(Debug, Error)]
enum UpstreamError {
    #[error("HTTP error! status: {0}")]
    Status(StatusCode),
    #[error("failed to parse response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            UpstreamError::Decode(e)
        } else {
            UpstreamError::Transport(e)
        }
    }
}

/// HTTP client for the National Weather Service API
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Client,
    base_url: String,
    log: DiagnosticLog,
}

impl NwsClient {
    pub fn new(config: &Config, log: DiagnosticLog) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.api_base().to_string(),
            log,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Fetch<T> {
        self.log.record(format!("Making request to {}", url));

        match self.make_request(url).await {
            Ok(data) => {
                self.log.record("Request successful");
                Fetch::Success(data)
            }
            Err(e) => {
                if let UpstreamError::Status(status) = &e {
                    self.log.record(format!("HTTP error! status: {}", status.as_u16()));
                }
                self.log.record(format!("Error making NWS request: {}", e));
                tracing::warn!("Error making NWS request to {}: {}", url, e);
                Fetch::Unavailable
            }
        }
    }

    async fn make_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        let response = self.client.get(url).header(ACCEPT, GEO_JSON).send().await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }
}
