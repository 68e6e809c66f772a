//! Postman REST API access
//!
//! [`Transport`] performs authenticated GETs; [`PostmanClient`] layers the
//! per-endpoint decoding and failure policies on top of it.

use serde_json::Value;
use thiserror::Error;

pub mod client;
#[cfg(test)]
pub mod fake;
pub mod http;

pub use client::{CollectionFetch, PostmanClient};
pub use http::HttpTransport;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("POSTMAN_API_KEY is not set. Please set it in a .env file, the config file or the environment.")]
    MissingApiKey,

    #[error("POSTMAN_API_KEY contains characters that cannot be sent in a header")]
    InvalidApiKey,

    #[error("request timeout")]
    Timeout,

    #[error("status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Configuration problems stop the run; everything else only skips a unit of work.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ApiError::MissingApiKey | ApiError::InvalidApiKey)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(err)
        }
    }
}

pub trait Transport {
    /// Authenticated GET of `path`, relative to the API base URL.
    ///
    /// Returns the parsed body of a 200 response.
    fn get(&self, path: &str) -> Result<Value, ApiError>;
}
