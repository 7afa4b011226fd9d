// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Text shown for every failed exchange, whatever went wrong.
pub const CONNECTION_ERROR_TEXT: &str = "⚠️ Connection error. Please try again.";

/// Why an exchange with the chat service failed.
///
/// The variants only exist for logging; the user always sees
/// [`CONNECTION_ERROR_TEXT`].
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("server returned {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unusable response body: {0}")]
    MalformedBody(String),
}

impl ExchangeError {
    pub fn user_message(&self) -> &'static str {
        CONNECTION_ERROR_TEXT
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid endpoint {value:?}: {reason}")]
    InvalidEndpoint { value: String, reason: String },
}
