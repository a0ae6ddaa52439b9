//! Error types shared across the core layers.
//!
//! None of these are fatal to the application: the gateway converts
//! `ApiError` into empty results, the favorites store treats unreadable
//! storage as empty.

use thiserror::Error;

/// Failures talking to the external recipe API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub(crate) fn transport(url: &str, err: &reqwest::Error) -> Self {
        ApiError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn decode(url: &str, err: &serde_json::Error) -> Self {
        ApiError::Decode {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

/// Failures of the client-side key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read key '{key}': {message}")]
    Read { key: String, message: String },

    #[error("failed to write key '{key}': {message}")]
    Write { key: String, message: String },

    #[error("failed to encode value for '{key}': {message}")]
    Encode { key: String, message: String },
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("page size must be at least 1")]
    InvalidPageSize,

    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}
