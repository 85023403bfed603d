//! Request model: one value object per remote operation.
//!
//! A request only describes the call (method, endpoint, payload). Nothing touches
//! the network or the filesystem until the client dispatches it, with the exception
//! of sample files which are read while the multipart body is encoded.

pub mod history;
pub mod samples;
pub mod tts;
pub mod user;
pub mod voices;

use crate::response::SuccessResponse;
use crate::transport::MultipartForm;
use crate::{Error, ErrorContext, Result};

pub use history::{
    DeleteHistoryItemRequest, DownloadHistoryRequest, GetHistoryItemAudioRequest,
    GetHistoryRequest,
};
pub use samples::{DeleteSampleRequest, GetSampleAudioRequest};
pub use tts::TextToSpeechRequest;
pub use user::{GetSubscriptionRequest, GetUserRequest};
pub use voices::{
    CreateVoiceRequest, DeleteVoiceRequest, EditVoiceRequest, EditVoiceSettingsRequest,
    GetDefaultVoiceSettingsRequest, GetVoiceRequest, GetVoiceSettingsRequest, GetVoicesRequest,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Multipart,
}

impl ContentType {
    pub fn mime(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Multipart => "multipart/form-data",
        }
    }
}

/// Payload carried by a request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

/// A single remote operation and the type it resolves to.
pub trait ApiRequest {
    type Output;

    fn method(&self) -> Method;

    /// Endpoint path relative to the base URL, path parameters already substituted.
    ///
    /// Fails when an id cannot stand as a single path segment.
    fn endpoint(&self) -> Result<String>;

    fn content_type(&self) -> ContentType {
        ContentType::Json
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Empty)
    }

    /// Map a successful response into the typed result.
    fn transform(&self, response: SuccessResponse) -> Result<Self::Output>;
}

/// Percent-encode a caller-supplied id so it stays one path segment.
///
/// Empty ids and `.`/`..` are rejected: URL resolution would drop or collapse them
/// and the call would reach a different endpoint.
pub(crate) fn path_segment(id: &str) -> Result<String> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(Error::configuration_with_context(
            format!("'{}' is not a valid resource id", id),
            ErrorContext::new().with_details("ids must be non-empty and not a dot segment"),
        ));
    }
    Ok(url::form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20"))
}
