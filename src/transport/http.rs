use super::multipart::content_type_header;
use super::TransportError;
use crate::config::ClientConfig;
use crate::request::{ApiRequest, RequestBody};
use crate::response::Response;
use crate::Result;
use reqwest::header::CONTENT_TYPE;
use std::time::Instant;
use tracing::debug;
use url::Url;

/// Header carrying the account's API key.
pub const API_KEY_HEADER: &str = "xi-api-key";

/// Blocking dispatcher: one request in, one [`Response`] out.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.parsed_base_url()?;
        // No idle connections are kept, every call opens its own.
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(TransportError::Http)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send `request` and capture status plus body.
    ///
    /// Non-2xx statuses are not errors here; the returned [`Response`] carries the
    /// error body. Connection and read failures surface as [`TransportError`].
    pub fn send<R: ApiRequest + ?Sized>(&self, request: &R, api_key: &str) -> Result<Response> {
        let endpoint = request.endpoint()?;
        let url = self
            .base_url
            .join(&endpoint)
            .map_err(TransportError::InvalidUrl)?;
        let method = request.method();

        let mut builder = self
            .client
            .request(method.into(), url)
            .header(API_KEY_HEADER, api_key);

        let query = request.query();
        if !query.is_empty() {
            builder = builder.query(&query);
        }

        let content_type = match request.body()? {
            RequestBody::Empty => request.content_type().mime().to_string(),
            RequestBody::Json(value) => {
                builder = builder.body(serde_json::to_vec(&value)?);
                request.content_type().mime().to_string()
            }
            RequestBody::Multipart(form) => {
                let (boundary, body) = form.encode()?;
                builder = builder.body(body);
                content_type_header(&boundary)
            }
        };
        builder = builder.header(CONTENT_TYPE, content_type.as_str());

        debug!(
            method = method.as_str(),
            endpoint = endpoint.as_str(),
            content_type = content_type.as_str(),
            "elevenlabs request"
        );
        let start = Instant::now();

        let resp = builder.send().map_err(TransportError::Http)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(TransportError::Http)?;

        let response = Response::new(status, body, endpoint);
        debug!(
            http_status = status,
            success = response.is_success(),
            endpoint = response.endpoint(),
            duration_ms = start.elapsed().as_millis() as u64,
            "elevenlabs response"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        let transport = HttpTransport::new(&ClientConfig::default()).unwrap();
        assert_eq!(transport.base_url().as_str(), "https://api.elevenlabs.io/");
    }

    #[test]
    fn endpoint_joins_under_base_path() {
        let cfg = ClientConfig {
            base_url: "http://localhost:9999/api".into(),
            ..ClientConfig::default()
        };
        let transport = HttpTransport::new(&cfg).unwrap();
        assert_eq!(
            transport.base_url().join("v1/voices").unwrap().as_str(),
            "http://localhost:9999/api/v1/voices"
        );
    }
}
