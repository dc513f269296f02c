//! Client binding for the trash detection API
//!
//! Two read-only operations against a configured base URL:
//! `GET /status` and `GET /trash-count`. Each returns the single field
//! the dashboard displays. Failures are logged here and handed back to
//! the caller unchanged; there is no retry.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::{DashboardError, FailureCause};
use crate::io::{HttpClient, ReqwestHttpClient};

pub const STATUS_PATH: &str = "/status";
pub const TRASH_COUNT_PATH: &str = "/trash-count";

/// Body of `GET /status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Body of `GET /trash-count`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashCountResponse {
    pub count: u64,
}

/// Detection API client shared by the dashboard views
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Arc<dyn HttpClient>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_http(config, Arc::new(ReqwestHttpClient::default()))
    }

    pub fn with_http(config: ApiConfig, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created ApiClient for {:?}", config.base_url);
        Self { config, http }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Current system status string
    pub async fn fetch_status(&self) -> crate::Result<String> {
        let body: StatusResponse = self.get_json(STATUS_PATH).await.inspect_err(|e| {
            tracing::error!("Error fetching status: {}", e);
        })?;
        Ok(body.status)
    }

    /// Total number of trash detections
    pub async fn fetch_trash_count(&self) -> crate::Result<u64> {
        let body: TrashCountResponse =
            self.get_json(TRASH_COUNT_PATH).await.inspect_err(|e| {
                tracing::error!("Error fetching trash count: {}", e);
            })?;
        Ok(body.count)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> crate::Result<T> {
        let url = self.config.endpoint(path)?;
        let response = self.http.get(&url).await?;

        if !response.is_success() {
            return Err(DashboardError::request_failed(
                url,
                FailureCause::Status(response.status),
            ));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| DashboardError::request_failed(url, FailureCause::Body(e.to_string())))
    }
}
