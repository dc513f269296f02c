//! Shared state behind the mock endpoints

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::config::{Config, FaultConfig};

/// Values served by the mock, plus request bookkeeping
#[derive(Debug)]
pub struct ApiState {
    pub status: String,
    pub count: u64,
    pub faults: FaultConfig,
    pub response_delay: Duration,
    hits: HashMap<String, u64>,
}

impl ApiState {
    pub fn new(config: &Config) -> Self {
        Self {
            status: config.status.clone(),
            count: config.count,
            faults: config.faults.clone(),
            response_delay: Duration::from_millis(config.response_delay_ms),
            hits: HashMap::new(),
        }
    }

    /// Count one request against `path`
    pub fn record_hit(&mut self, path: &str) {
        *self.hits.entry(path.to_string()).or_insert(0) += 1;
    }

    /// Number of requests seen for `path` since startup
    pub fn hits(&self, path: &str) -> u64 {
        self.hits.get(path).copied().unwrap_or(0)
    }
}

/// Thread-safe shared state handle
pub type StateHandle = Arc<RwLock<ApiState>>;

pub fn new_state_handle(config: &Config) -> StateHandle {
    Arc::new(RwLock::new(ApiState::new(config)))
}
