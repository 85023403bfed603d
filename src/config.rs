//! Client configuration and environment overrides.

use crate::{Error, ErrorContext, Result};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";
pub const BASE_URL_ENV: &str = "ELEVENLABS_BASE_URL";
pub const TIMEOUT_ENV: &str = "ELEVENLABS_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    /// Applied to both connecting and the whole request.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `ELEVENLABS_*` variables. Unparsable values are ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(key) = env::var(API_KEY_ENV).ok().filter(|k| !k.trim().is_empty()) {
            cfg.api_key = Some(key);
        }
        if let Ok(url) = env::var(BASE_URL_ENV) {
            cfg.base_url = url;
        }
        if let Some(secs) = env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|s| *s > 0)
        {
            cfg.timeout = Duration::from_secs(secs);
        }
        cfg
    }

    /// Parse the base URL, making sure it ends with `/` so endpoint joins keep its path.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let raw = if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        };
        let url = Url::parse(&raw).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(self.base_url.clone()),
            )
        })?;
        if url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                "base URL cannot be used as a base",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(self.base_url.clone()),
            ));
        }
        Ok(url)
    }
}
