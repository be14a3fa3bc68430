use url::Url;

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug, Default)]
pub struct LabelScanConfig {
    pub backend: BackendConfig,
}

#[derive(Clone, Debug)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl BackendConfig {
    /// Validates the base URL and returns it without a trailing slash, ready
    /// to have endpoint paths appended.
    pub fn normalized_base_url(&self) -> Result<String, CoreError> {
        let parsed = Url::parse(self.base_url.trim()).map_err(|e| {
            CoreError::InvalidConfig(format!("invalid API base URL '{}': {}", self.base_url, e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CoreError::InvalidConfig(format!(
                "unsupported URL scheme '{}'",
                parsed.scheme()
            )));
        }

        Ok(parsed.as_str().trim_end_matches('/').to_string())
    }
}
