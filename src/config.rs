// src/config.rs
use std::path::PathBuf;

use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/chat";
pub const DEFAULT_TITLE: &str = "💧 Water & Sanitation Awareness Bot";
pub const DEFAULT_LOG_FILE: &str = "waterwise-chat.log";

pub const TITLE_VAR: &str = "WATERWISE_TITLE";
pub const LOG_FILE_VAR: &str = "WATERWISE_LOG_FILE";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: Url,
    pub title: String,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid url"),
            title: DEFAULT_TITLE.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Defaults, overridden by a `.env` file and then by the process environment.
    /// The endpoint is not read from the environment; only `with_endpoint` changes it.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(title) = get(TITLE_VAR) {
            config.title = title;
        }
        if let Some(log_file) = get(LOG_FILE_VAR) {
            config.log_file = PathBuf::from(log_file);
        }
        config
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        self.endpoint = parse_endpoint(endpoint)?;
        Ok(self)
    }
}

pub fn parse_endpoint(value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        value: value.to_string(),
        reason,
    };
    let url = Url::parse(value.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme `{other}`"))),
    }
}
