use crate::client::builder::ElevenLabsClientBuilder;
use crate::request::ApiRequest;
use crate::response;
use crate::transport::HttpTransport;
use crate::{Error, Result};
use tracing::debug;

/// Entry point for every API operation.
///
/// Cloning is cheap and clones share the underlying HTTP client. The API key is
/// per clone: `set_api_key` only affects the instance it is called on.
#[derive(Debug, Clone)]
pub struct ElevenLabsClient {
    transport: HttpTransport,
    api_key: Option<String>,
}

impl ElevenLabsClient {
    pub fn builder() -> ElevenLabsClientBuilder {
        ElevenLabsClientBuilder::new()
    }

    /// Client for the public API host with the given key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ElevenLabsClientBuilder::new().api_key(api_key).build()
    }

    pub(crate) fn from_parts(transport: HttpTransport, api_key: Option<String>) -> Self {
        Self { transport, api_key }
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        let key = api_key.into();
        self.api_key = (!key.trim().is_empty()).then_some(key);
    }

    pub fn is_initialized(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Dispatch `request` and resolve it into its typed result.
    ///
    /// Fails with [`Error::NotInitialized`] before any network activity when no
    /// API key is configured.
    pub fn execute<R: ApiRequest + ?Sized>(&self, request: &R) -> Result<R::Output> {
        let api_key = self.api_key.as_deref().ok_or(Error::NotInitialized)?;
        let response = self.transport.send(request, api_key)?;
        let result = response::resolve(request, Some(response));
        if let Err(ref e) = result {
            debug!(
                method = request.method().as_str(),
                endpoint = request.endpoint().unwrap_or_default().as_str(),
                error = %e,
                "elevenlabs call failed"
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::GetUserRequest;

    #[test]
    fn uninitialized_client_fails_before_dispatch() {
        // Port 9 is never contacted: the key check comes first.
        let client = ElevenLabsClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        let err = client.execute(&GetUserRequest).unwrap_err();
        assert!(err.is_not_initialized());
    }

    #[test]
    fn set_api_key_initializes() {
        let mut client = ElevenLabsClient::builder().build().unwrap();
        assert!(!client.is_initialized());
        client.set_api_key("abc");
        assert!(client.is_initialized());
        client.set_api_key("");
        assert!(!client.is_initialized());
    }
}
