//! Result transformers: map a successful response into a typed value.
//!
//! Requests pick one of these in their `transform` so the result type of each
//! operation is fixed at compile time.

use crate::response::SuccessResponse;
use crate::{Error, ErrorContext, Result};
use serde::de::DeserializeOwned;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parse the whole body as `T`.
pub fn json<T: DeserializeOwned>(response: &SuccessResponse) -> Result<T> {
    serde_json::from_slice(response.body()).map_err(|e| malformed(response, None, &e))
}

/// Parse the array stored under `key` of a JSON object body.
pub fn json_list<T: DeserializeOwned>(response: &SuccessResponse, key: &str) -> Result<Vec<T>> {
    let mut value: serde_json::Value =
        serde_json::from_slice(response.body()).map_err(|e| malformed(response, None, &e))?;
    let list = value
        .get_mut(key)
        .map(serde_json::Value::take)
        .ok_or_else(|| {
            Error::malformed_with_context(
                format!("response has no '{}' field", key),
                ErrorContext::new()
                    .with_field_path(key)
                    .with_source(response.endpoint()),
            )
        })?;
    serde_json::from_value(list).map_err(|e| malformed(response, Some(key), &e))
}

/// Extract a single string field of a JSON object body.
pub fn json_field(response: &SuccessResponse, field: &str) -> Result<String> {
    let value: serde_json::Value =
        serde_json::from_slice(response.body()).map_err(|e| malformed(response, None, &e))?;
    value
        .get(field)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .ok_or_else(|| {
            Error::malformed_with_context(
                format!("response has no string '{}' field", field),
                ErrorContext::new()
                    .with_field_path(field)
                    .with_source(response.endpoint()),
            )
        })
}

/// Acknowledgement text of a response.
///
/// Uses the `status` field of a JSON body (`{"status":"ok"}`) and falls back to the
/// reason phrase of the status line.
pub fn status(response: &SuccessResponse) -> String {
    serde_json::from_slice::<serde_json::Value>(response.body())
        .ok()
        .and_then(|v| v.get("status").and_then(|s| s.as_str()).map(String::from))
        .or_else(|| response.reason().map(String::from))
        .unwrap_or_else(|| response.status().to_string())
}

/// Write the body to `path` and hand the path back.
///
/// The bytes go to a temporary file next to `path` which is renamed into place once
/// complete, so `path` either holds the whole body or is left untouched.
pub fn file(response: SuccessResponse, path: &Path) -> Result<PathBuf> {
    let body = response.into_body();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut out = tempfile::NamedTempFile::new_in(dir)?;
    out.write_all(&body)?;
    out.flush()?;
    out.persist(path).map_err(|e| Error::Io(e.error))?;
    debug!(path = %path.display(), bytes = body.len(), "response written to file");
    Ok(path.to_path_buf())
}

fn malformed(response: &SuccessResponse, field: Option<&str>, e: &serde_json::Error) -> Error {
    let mut ctx = ErrorContext::new()
        .with_source(response.endpoint())
        .with_details(format!("line {}, column {}", e.line(), e.column()));
    if let Some(f) = field {
        ctx = ctx.with_field_path(f);
    }
    Error::malformed_with_context(format!("failed to parse response: {}", e), ctx)
}
