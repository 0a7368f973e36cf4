use anyhow::{Context, Result};
use std::time::Duration;

pub const BASE_URL_VAR: &str = "APPER_BASE_URL";
pub const PROJECT_ID_VAR: &str = "APPER_PROJECT_ID";
pub const PUBLIC_KEY_VAR: &str = "APPER_PUBLIC_KEY";
pub const TIMEOUT_VAR: &str = "APPER_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "https://api.apper.io/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the record store
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Root URL of the store API, without a trailing slash
    pub base_url: String,
    pub project_id: String,
    pub public_key: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl StoreConfig {
    pub fn new(project_id: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            project_id: project_id.into(),
            public_key: public_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through `lookup`, which returns the value of a variable if set
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let project_id = read(PROJECT_ID_VAR)
            .with_context(|| format!("{PROJECT_ID_VAR} is not set"))?;
        let public_key = read(PUBLIC_KEY_VAR)
            .with_context(|| format!("{PUBLIC_KEY_VAR} is not set"))?;

        let mut config = Self::new(project_id, public_key);

        if let Some(base_url) = read(BASE_URL_VAR) {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Some(timeout) = read(TIMEOUT_VAR) {
            let secs: u64 = timeout
                .trim()
                .parse()
                .with_context(|| format!("{TIMEOUT_VAR} must be a whole number of seconds"))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
