//! Configuration for the detection API binding

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, FailureCause};

/// Build-time environment variable holding the detection API base URL
pub const BASE_URL_ENV: &str = "TRASH_API_URL";

/// Where the detection API lives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Configuration baked in at compile time from `TRASH_API_URL`.
    ///
    /// Only the binary entry point should call this; everything else takes
    /// an injected `ApiConfig`.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("TRASH_API_URL").unwrap_or_default())
    }

    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    /// Absolute URL for a fixed API path such as `/status`
    pub fn endpoint(&self, path: &str) -> crate::Result<String> {
        if !self.is_configured() {
            return Err(DashboardError::request_failed(
                path,
                FailureCause::NotConfigured,
            ));
        }
        let base = self.base_url.trim().trim_end_matches('/');
        Ok(format!("{}/{}", base, path.trim_start_matches('/')))
    }
}
