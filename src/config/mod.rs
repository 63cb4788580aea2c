use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Production endpoint of the remote commerce API.
pub const DEFAULT_BASE_URL: &str = "https://www.clicktodrink.es/api/v1";

/// The sample value shipped in configuration templates. Deployers must
/// replace it with their actual establishment id; validation rejects it.
const PLACEHOLDER_ESTABLISHMENT_ID: &str = "xxxx";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub establishment_id: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, establishment_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            establishment_id: establishment_id.into(),
        }
    }

    /// Loads and validates a TOML configuration file:
    ///
    /// ```toml
    /// base_url = "https://www.clicktodrink.es/api/v1"
    /// establishment_id = "your-establishment-id"
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ApiConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `CLICKTODRINK_ESTABLISHMENT_ID` (required) and
    /// `CLICKTODRINK_BASE_URL` (defaults to the production endpoint).
    pub fn from_env() -> Result<Self> {
        let establishment_id = std::env::var("CLICKTODRINK_ESTABLISHMENT_ID").map_err(|_| {
            ApiError::InvalidConfigValue {
                field: "establishment_id".to_string(),
                value: String::new(),
                reason: "CLICKTODRINK_ESTABLISHMENT_ID is not set".to_string(),
            }
        })?;
        let base_url =
            std::env::var("CLICKTODRINK_BASE_URL").unwrap_or_else(|_| default_base_url());

        let config = Self::new(base_url, establishment_id);
        config.validate()?;
        Ok(config)
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("establishment_id", &self.establishment_id)?;

        if self.establishment_id == PLACEHOLDER_ESTABLISHMENT_ID {
            return Err(ApiError::InvalidConfigValue {
                field: "establishment_id".to_string(),
                value: self.establishment_id.clone(),
                reason: "Placeholder establishment id must be replaced with a real one"
                    .to_string(),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for ApiConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn establishment_id(&self) -> &str {
        &self.establishment_id
    }
}
