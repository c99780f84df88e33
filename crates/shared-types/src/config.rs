use serde::{Deserialize, Serialize};

/// Backend used when no configuration overrides it.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Where the dashboards fetch their data from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Build a config from a base URL. Trailing slashes are dropped so
    /// endpoint paths can be appended directly; a blank URL falls back to
    /// the default.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self {
                base_url: trimmed.to_string(),
            }
        }
    }

    pub fn normalized(self) -> Self {
        Self::new(self.base_url)
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}
