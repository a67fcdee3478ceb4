//! Pingdom REST API client.
//!
//! Talks to the Pingdom 2.1 API with basic auth (account email + password)
//! plus the `App-Key` header. Three endpoints are used:
//!
//! - `GET /checks?include_tags=true` — the monitored check list
//! - `GET /summary.outage/{id}?from=&to=` — outage history for one check
//! - `GET /results/{id}?from=&to=` — raw probe results for one check
//!
//! ## Example
//!
//! ```rust,no_run
//! use pingwatch_provider::pingdom::PingdomClient;
//! use pingwatch_provider::CheckProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PingdomClient::builder()
//!         .credentials("ops@example.com", "hunter2")
//!         .api_key("app-key")
//!         .build();
//!
//!     for check in client.list_checks(true).await? {
//!         println!("{} ({})", check.name, check.hostname);
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use pingwatch_types::{Check, CheckId, CheckResult, OutageState, OutageStatus, OutageSummary, QueryWindow};

use crate::{CheckProvider, ProviderError};

const DEFAULT_BASE_URL: &str = "https://api.pingdom.com/api/2.1";

/// Pingdom API client.
#[derive(Debug, Clone)]
pub struct PingdomClient {
    client: Client,
    base_url: String,
    email: String,
    password: String,
    api_key: String,
}

impl PingdomClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> PingdomClientBuilder {
        PingdomClientBuilder::default()
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .basic_auth(&self.email, Some(&self.password))
            .header("App-Key", &self.api_key)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProviderError::Auth("Invalid credentials".to_string()));
        }

        if !response.status().is_success() {
            return Err(ProviderError::Http(format!(
                "API returned status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CheckProvider for PingdomClient {
    async fn list_checks(&self, include_tags: bool) -> Result<Vec<Check>, ProviderError> {
        let mut query = Vec::new();
        if include_tags {
            query.push(("include_tags", "true".to_string()));
        }

        let body: ChecksResponse = self.get_json("checks", &query).await?;
        Ok(body.checks.into_iter().map(Check::from).collect())
    }

    async fn outage_summary(
        &self,
        id: CheckId,
        window: QueryWindow,
    ) -> Result<OutageSummary, ProviderError> {
        let query = [
            ("from", window.from.to_string()),
            ("to", window.to.to_string()),
        ];

        let body: OutageResponse = self
            .get_json(&format!("summary.outage/{}", id), &query)
            .await?;
        Ok(body.summary.into())
    }

    async fn results(
        &self,
        id: CheckId,
        window: QueryWindow,
    ) -> Result<Vec<CheckResult>, ProviderError> {
        let query = [
            ("from", window.from.to_string()),
            ("to", window.to.to_string()),
        ];

        let body: ResultsResponse = self.get_json(&format!("results/{}", id), &query).await?;
        Ok(body.results.into_iter().map(CheckResult::from).collect())
    }
}

/// Builder for PingdomClient.
#[derive(Debug, Default)]
pub struct PingdomClientBuilder {
    base_url: Option<String>,
    email: Option<String>,
    password: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl PingdomClientBuilder {
    /// Set the API base URL (default: the public Pingdom 2.1 endpoint).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the account email and password for basic auth.
    pub fn credentials(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self.password = Some(password.into());
        self
    }

    /// Set the application key sent in the `App-Key` header.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> PingdomClient {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(10));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        PingdomClient {
            client,
            base_url: self
                .base_url
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            api_key: self.api_key.unwrap_or_default(),
        }
    }
}

/// Check list from the Pingdom API.
#[derive(Debug, Deserialize)]
struct ChecksResponse {
    checks: Vec<CheckEntry>,
}

#[derive(Debug, Deserialize)]
struct CheckEntry {
    id: u64,
    name: String,
    hostname: String,
    #[serde(default)]
    tags: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
}

impl From<CheckEntry> for Check {
    fn from(entry: CheckEntry) -> Self {
        Check {
            id: CheckId(entry.id),
            name: entry.name,
            hostname: entry.hostname,
            tags: entry.tags.into_iter().map(|t| t.name).collect(),
        }
    }
}

/// Outage summary from the Pingdom API.
#[derive(Debug, Deserialize)]
struct OutageResponse {
    summary: SummaryEntry,
}

#[derive(Debug, Deserialize)]
struct SummaryEntry {
    #[serde(default)]
    states: Vec<StateEntry>,
}

#[derive(Debug, Deserialize)]
struct StateEntry {
    status: OutageStatus,
    timefrom: i64,
    timeto: i64,
}

impl From<SummaryEntry> for OutageSummary {
    fn from(entry: SummaryEntry) -> Self {
        OutageSummary::new(
            entry
                .states
                .into_iter()
                .map(|s| OutageState {
                    status: s.status,
                    from: s.timefrom,
                    to: s.timeto,
                })
                .collect(),
        )
    }
}

/// Raw results from the Pingdom API.
#[derive(Debug, Deserialize)]
struct ResultsResponse {
    #[serde(default)]
    results: Vec<ResultEntry>,
}

#[derive(Debug, Deserialize)]
struct ResultEntry {
    time: i64,
    status: OutageStatus,
    #[serde(default)]
    responsetime: Option<u64>,
}

impl From<ResultEntry> for CheckResult {
    fn from(entry: ResultEntry) -> Self {
        CheckResult {
            time: entry.time,
            status: entry.status,
            response_time_ms: entry.responsetime,
        }
    }
}
