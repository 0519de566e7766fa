pub mod api;
pub mod client;
pub mod config;
pub mod query;

use serde::Deserialize;
use std::fmt::Display;
use thiserror::Error;

pub use api::{RowSource, Rows};
pub use client::{connect, Client};
pub use config::StoreConfig;
pub use query::{Count, Filter, Order, Select};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Query on '{table}' failed with status {status}: {body}")]
    Api {
        table: String,
        status: reqwest::StatusCode,
        body: ApiError,
    },
    #[error("Invalid store url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Configuration error: '{0}'")]
    Config(String),
}

/// Error payload returned by the REST endpoint on a failed request
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: String,
    pub code: Option<String>,
    pub details: Option<String>,
    pub hint: Option<String>,
}

impl ApiError {
    /// Used when the error body is not the usual json payload, e.g. a proxy error page
    pub fn from_message(message: String) -> Self {
        Self {
            message,
            ..Default::default()
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(code) = &self.code {
            write!(f, " (code: {})", code)?;
        }
        if let Some(details) = &self.details {
            write!(f, ", details: {}", details)?;
        }
        if let Some(hint) = &self.hint {
            write!(f, ", hint: {}", hint)?;
        }
        Ok(())
    }
}
