//! Raw responses and their resolution into typed results or errors.

use crate::error::FALLBACK_MESSAGE;
use crate::request::ApiRequest;
use crate::{Error, Result};
use bytes::Bytes;
use tracing::debug;

/// Status and body of a dispatched request.
///
/// The body is the success body for 2xx statuses and the error body otherwise.
/// It can only be reached through [`Response::into_success`], which enforces the
/// success check.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    reason: Option<String>,
    body: Bytes,
    endpoint: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>, endpoint: impl Into<String>) -> Self {
        let reason = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .map(String::from);
        Self {
            status,
            reason,
            body: body.into(),
            endpoint: endpoint.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Consume the response, returning the success view or the validation error
    /// built from the error body.
    pub fn into_success(self) -> Result<SuccessResponse> {
        if self.is_success() {
            Ok(SuccessResponse {
                status: self.status,
                reason: self.reason,
                body: self.body,
                endpoint: self.endpoint,
            })
        } else {
            Err(self.into_error())
        }
    }

    fn into_error(self) -> Error {
        let message = error_message(&self.body).unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        debug!(
            status = self.status,
            endpoint = self.endpoint.as_str(),
            "elevenlabs request rejected"
        );
        Error::validation(Some(self.status), message)
    }
}

/// A response that passed the success check.
#[derive(Debug, Clone)]
pub struct SuccessResponse {
    status: u16,
    reason: Option<String>,
    body: Bytes,
    endpoint: String,
}

impl SuccessResponse {
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Canonical reason phrase of the status line (e.g. "OK").
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Resolve a response for `request`.
///
/// `None` stands for a dispatch that produced no response at all.
pub fn resolve<R: ApiRequest + ?Sized>(request: &R, response: Option<Response>) -> Result<R::Output> {
    let response = response.ok_or_else(|| Error::validation(None, FALLBACK_MESSAGE))?;
    let success = response.into_success()?;
    request.transform(success)
}

/// Pull the server's explanation out of an error body.
///
/// Known shapes: `{"detail": {"message": ..}}`, `{"detail": ".."}`,
/// `{"detail": [{"msg": ..}, ..]}` and `{"message": ..}`.
pub fn error_message(body: &[u8]) -> Option<String> {
    let json: serde_json::Value = serde_json::from_slice(body).ok()?;
    let detail = json.get("detail");
    let message = match detail {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(serde_json::Value::Object(obj)) => obj
            .get("message")
            .and_then(|v| v.as_str())
            .map(String::from),
        Some(serde_json::Value::Array(items)) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|i| i.get("msg").and_then(|m| m.as_str()))
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        _ => None,
    };
    message
        .or_else(|| {
            json.get("message")
                .and_then(|v| v.as_str())
                .map(String::from)
        })
        .filter(|m| !m.trim().is_empty())
}
