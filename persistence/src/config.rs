use crate::{Error, Result};
use std::time::Duration;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const API_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const TIMEOUT_VAR: &str = "SUPABASE_TIMEOUT_SECS";

/// Connection settings for the hosted data store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Project url, e.g. `https://xyzcompany.supabase.co`
    pub url: String,
    /// Sent both as `apikey` and as bearer token
    pub api_key: String,
    pub timeout: Option<Duration>,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reads the config from the process environment.
    /// Call `dotenv::dotenv()` beforehand if a `.env` file should be honoured
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(URL_VAR).ok_or_else(|| Error::Config(format!("{} not set", URL_VAR)))?;
        let api_key =
            lookup(API_KEY_VAR).ok_or_else(|| Error::Config(format!("{} not set", API_KEY_VAR)))?;
        let mut config = Self::new(url, api_key);
        if let Some(secs) = lookup(TIMEOUT_VAR) {
            let secs = secs.trim().parse::<u64>().map_err(|e| {
                Error::Config(format!("{} must be a number of seconds: {}", TIMEOUT_VAR, e))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
