//! Catalog configuration.
//!
//! Values have working defaults; the UI overrides them from build-time
//! environment variables.

use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1/";
pub const DEFAULT_PAGE_SIZE: usize = 9;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub api_base_url: String,
    pub page_size: usize,
    pub search_debounce_ms: u64,
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Apply optional overrides (as read from the environment) on top of the
    /// defaults, then validate.
    pub fn with_overrides(
        api_base_url: Option<&str>,
        page_size: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = api_base_url.filter(|s| !s.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(raw) = page_size.filter(|s| !s.trim().is_empty()) {
            config.page_size = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "page_size",
                value: raw.to_string(),
            })?;
        }
        if let Some(level) = log_level.filter(|s| !s.trim().is_empty()) {
            config.log_level = level.trim().to_lowercase();
        }

        config.validate()?;
        Ok(config)
    }

    /// Check invariants and normalize the base URL to end with `/` so
    /// endpoint paths join under it.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }

        let url = Url::parse(&self.api_base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.api_base_url.clone(),
            reason: e.to_string(),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.api_base_url.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        if !self.api_base_url.ends_with('/') {
            self.api_base_url.push('/');
        }
        Ok(())
    }

    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.api_base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.api_base_url.clone(),
            reason: e.to_string(),
        })
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
