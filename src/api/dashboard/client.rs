use reqwest::{Client as HttpClient, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use super::models::{DailyData, FetchError, MoodData, TimeData};
use crate::config::AppConfig;
use crate::diagnostics::{default_reporter, ErrorReporter};

/// Client for the dashboard backend's JSON endpoints
///
/// Fetch failures never reach the caller: they are written to the reporter
/// and the fetch yields `None`.
#[derive(Clone)]
pub struct DataClient {
    http_client: HttpClient,
    base_url: Option<Url>,
    reporter: Arc<dyn ErrorReporter>,
}

impl DataClient {
    /// Create a client that resolves relative endpoints against `base_url`
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self {
            http_client: HttpClient::new(),
            base_url: Some(base_url),
            reporter: default_reporter(),
        })
    }

    /// Create a client that only accepts absolute URLs
    pub fn without_base_url() -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: None,
            reporter: default_reporter(),
        }
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let base_url = parse_base_url(&config.api_url)?;

        let mut builder = HttpClient::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| FetchError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: Some(base_url),
            reporter: default_reporter(),
        })
    }

    /// Replace where failures are reported
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Turn an endpoint into the URL to request
    pub fn resolve(&self, endpoint: &str) -> Result<Url, FetchError> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(FetchError::InvalidEndpoint("endpoint is empty".to_string()));
        }

        if let Ok(url) = Url::parse(endpoint) {
            return Ok(url);
        }

        match &self.base_url {
            Some(base) => base
                .join(endpoint)
                .map_err(|e| FetchError::InvalidEndpoint(format!("{}: {}", endpoint, e))),
            None => Err(FetchError::InvalidEndpoint(format!(
                "{}: relative endpoint and no base URL configured",
                endpoint
            ))),
        }
    }

    /// GET `endpoint` and decode the body, keeping the failure kind
    pub async fn try_fetch_as<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FetchError> {
        let url = self.resolve(endpoint)?;
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Request(format!("Failed to read body: {}", e)))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    pub async fn try_fetch_json(&self, endpoint: &str) -> Result<Value, FetchError> {
        self.try_fetch_as(endpoint).await
    }

    /// GET `endpoint` and decode the body as `T`, or report and yield `None`
    pub async fn fetch_as<T: DeserializeOwned>(&self, endpoint: &str) -> Option<T> {
        match self.try_fetch_as(endpoint).await {
            Ok(data) => Some(data),
            Err(e) => {
                self.reporter.report(&e);
                None
            }
        }
    }

    /// GET `endpoint` as arbitrary JSON, or report and yield `None`
    pub async fn fetch_json(&self, endpoint: &str) -> Option<Value> {
        self.fetch_as(endpoint).await
    }

    /// GET /api/mood
    pub async fn mood(&self) -> Option<MoodData> {
        self.fetch_as("/api/mood").await
    }

    /// GET /api/time
    pub async fn time(&self) -> Option<TimeData> {
        self.fetch_as("/api/time").await
    }

    /// GET /api/daily
    pub async fn daily(&self) -> Option<DailyData> {
        self.fetch_as("/api/daily").await
    }
}

fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    Url::parse(raw.trim())
        .map_err(|e| FetchError::InvalidEndpoint(format!("base URL '{}': {}", raw, e)))
}
