//! InfluxDB 1.x HTTP client
//!
//! Talks to the `/query` and `/ping` endpoints of the InfluxDB HTTP API.
//! One client is created at startup and reused for the whole run.

use super::models::{PointSet, QueryResponse};
use super::store::TimeSeriesStore;
use crate::config::{InfluxDbConfig, SecretString};
use crate::domain::ids::SeriesName;
use crate::domain::{BackupError, Result, StoreError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Discovery statement listing every measurement
pub const SHOW_MEASUREMENTS: &str = "SHOW MEASUREMENTS";

/// InfluxDB HTTP API client
pub struct InfluxDbClient {
    base_url: String,
    query_url: Url,
    ping_url: Url,
    database: String,
    username: Option<String>,
    password: Option<SecretString>,
    client: Client,
}

impl InfluxDbClient {
    /// Create a new client from configuration
    ///
    /// No request is made; use [`ping`](Self::ping) to check connectivity.
    ///
    /// # Errors
    ///
    /// Returns an error if the host does not form a valid URL or the HTTP
    /// client cannot be built.
    pub fn new(config: &InfluxDbConfig) -> Result<Self> {
        let base_url = config.base_url();
        let base = Url::parse(&base_url).map_err(|e| {
            BackupError::Configuration(format!("Invalid InfluxDB URL '{base_url}': {e}"))
        })?;
        let endpoint = |path: &str| {
            base.join(path).map_err(|e| {
                BackupError::Configuration(format!("Invalid InfluxDB URL '{base_url}': {e}"))
            })
        };
        let query_url = endpoint("query")?;
        let ping_url = endpoint("ping")?;

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                BackupError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url,
            query_url,
            ping_url,
            database: config.database.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            client,
        })
    }

    /// Base URL of the InfluxDB server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Database queries run against
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Check that the server is reachable
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConnectionFailed`] if the server cannot be reached
    /// or does not answer the ping.
    pub async fn ping(&self) -> Result<()> {
        let response = self
            .with_auth(self.client.get(self.ping_url.clone()))
            .send()
            .await
            .map_err(map_transport_error)?;

        if response.status().is_success() {
            tracing::debug!(base_url = %self.base_url, "InfluxDB ping succeeded");
            Ok(())
        } else {
            Err(StoreError::ConnectionFailed(format!(
                "Ping to {} returned status {}",
                self.base_url,
                response.status()
            ))
            .into())
        }
    }

    /// Execute one InfluxQL statement and return the raw response
    async fn query(&self, query: &str) -> Result<QueryResponse> {
        tracing::debug!(query = %query, database = %self.database, "Executing InfluxQL query");

        let request = self
            .client
            .get(self.query_url.clone())
            .query(&[("db", self.database.as_str()), ("q", query)]);

        let response = self
            .with_auth(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            StoreError::InvalidResponse(format!("Failed to read response body: {e}"))
        })?;

        if !status.is_success() {
            return Err(map_status_error(status, &body).into());
        }

        let mut parsed: QueryResponse = serde_json::from_str(&body).map_err(|e| {
            StoreError::InvalidResponse(format!("Failed to parse query response: {e}"))
        })?;

        if let Some(error) = parsed.error.take() {
            return Err(StoreError::QueryFailed(error).into());
        }

        Ok(parsed)
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.username {
            Some(username) => request.basic_auth(
                username,
                self.password
                    .as_ref()
                    .map(|p| p.expose_secret().as_ref().to_string()),
            ),
            None => request,
        }
    }
}

#[async_trait]
impl TimeSeriesStore for InfluxDbClient {
    async fn list_series(&self) -> Result<Vec<SeriesName>> {
        let points = self.query_points(SHOW_MEASUREMENTS).await?;

        let Some(names) = points.column("name") else {
            return Ok(Vec::new());
        };

        names
            .into_iter()
            .map(|value| match value {
                Value::String(name) => SeriesName::new(name.clone()).map_err(|e| {
                    BackupError::from(StoreError::InvalidResponse(format!(
                        "Invalid measurement name: {e}"
                    )))
                }),
                other => Err(BackupError::from(StoreError::InvalidResponse(format!(
                    "Expected measurement name to be a string, got {other}"
                )))),
            })
            .collect()
    }

    async fn query_points(&self, query: &str) -> Result<PointSet> {
        let response = self.query(query).await?;

        let Some(statement) = response.results.into_iter().next() else {
            return Ok(PointSet::default());
        };

        if let Some(error) = statement.error {
            return Err(StoreError::QueryFailed(error).into());
        }

        Ok(PointSet::from_series(statement.series))
    }
}

fn map_transport_error(err: reqwest::Error) -> BackupError {
    if err.is_timeout() {
        StoreError::Timeout(err.to_string()).into()
    } else {
        StoreError::ConnectionFailed(err.to_string()).into()
    }
}

fn map_status_error(status: StatusCode, body: &str) -> StoreError {
    let message = serde_json::from_str::<QueryResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .unwrap_or_else(|| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            StoreError::AuthenticationFailed(message)
        }
        s if s.is_server_error() => StoreError::ServerError {
            status: s.as_u16(),
            message,
        },
        s => StoreError::ClientError {
            status: s.as_u16(),
            message,
        },
    }
}
