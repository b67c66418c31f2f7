//! reqwest-backed implementation of [`RegistryApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http::{execute_request, parse_json};
use crate::query::VehicleQuery;
use crate::traits::RegistryApi;
use crate::types::{HighlightCounts, HighlightsEnvelope, VehicleListEnvelope, VehiclePage};

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const LIST_PATH: &str = "/vehicle/get_all_vehicles";
const HIGHLIGHTS_PATH: &str = "/vehicle/get_highlights";

/// HTTP client for a vehicle-registry deployment.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: Client,
    base_url: String,
}

impl RegistryClient {
    /// Create a client for the registry served under `base_url`
    /// (e.g. `"https://fleet.example.com/api/v1"`). A trailing slash is
    /// stripped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        let request = self.client.post(url).json(body);
        let body = execute_request(request, path).await?;
        parse_json(&body, path)
    }
}

#[async_trait]
impl RegistryApi for RegistryClient {
    async fn list_vehicles(&self, query: &VehicleQuery) -> Result<VehiclePage> {
        let envelope: VehicleListEnvelope = self.post(LIST_PATH, query).await?;
        Ok(envelope.into())
    }

    async fn fetch_highlights(&self) -> Result<HighlightCounts> {
        let envelope: HighlightsEnvelope =
            self.post(HIGHLIGHTS_PATH, &serde_json::json!({})).await?;
        Ok(envelope.into())
    }
}
