use crate::client::core::ElevenLabsClient;
use crate::config::ClientConfig;
use crate::transport::HttpTransport;
use crate::Result;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Environment variables are only consulted through [`ElevenLabsClientBuilder::from_env`].
#[derive(Debug, Clone, Default)]
pub struct ElevenLabsClientBuilder {
    config: ClientConfig,
}

impl ElevenLabsClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `ELEVENLABS_API_KEY`, `ELEVENLABS_BASE_URL` and `ELEVENLABS_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self {
            config: ClientConfig::from_env(),
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Override the API host. Mostly useful for proxies and mock servers.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the client. A missing API key is allowed; calls fail until one is set.
    pub fn build(self) -> Result<ElevenLabsClient> {
        let transport = HttpTransport::new(&self.config)?;
        let api_key = self.config.api_key.filter(|k| !k.trim().is_empty());
        Ok(ElevenLabsClient::from_parts(transport, api_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let builder = ElevenLabsClientBuilder::new()
            .api_key("k")
            .base_url("http://localhost:1")
            .timeout(Duration::from_secs(5));
        assert_eq!(builder.config().api_key.as_deref(), Some("k"));
        assert_eq!(builder.config().timeout, Duration::from_secs(5));
        let client = builder.build().unwrap();
        assert!(client.is_initialized());
    }

    #[test]
    fn blank_key_leaves_client_uninitialized() {
        let client = ElevenLabsClientBuilder::new().api_key("   ").build().unwrap();
        assert!(!client.is_initialized());
    }

    #[test]
    fn bad_base_url_fails_build() {
        let err = ElevenLabsClientBuilder::new().base_url("::").build().unwrap_err();
        assert!(matches!(err, crate::Error::Configuration { .. }));
    }
}
