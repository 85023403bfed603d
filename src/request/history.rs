//! History requests.

use super::{path_segment, ApiRequest, Method, RequestBody};
use crate::response::SuccessResponse;
use crate::transformers;
use crate::types::History;
use crate::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct GetHistoryRequest;

impl ApiRequest for GetHistoryRequest {
    type Output = History;

    fn method(&self) -> Method {
        Method::Get
    }

    fn endpoint(&self) -> Result<String> {
        Ok("v1/history".to_string())
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        transformers::json(&response)
    }
}

/// Download several history items. The server answers with a zip archive
/// for more than one id and plain audio for a single id.
#[derive(Debug, Clone)]
pub struct DownloadHistoryRequest {
    pub history_item_ids: Vec<String>,
    pub output: PathBuf,
}

impl DownloadHistoryRequest {
    pub fn new(history_item_ids: Vec<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            history_item_ids,
            output: output.into(),
        }
    }
}

impl ApiRequest for DownloadHistoryRequest {
    type Output = PathBuf;

    fn method(&self) -> Method {
        Method::Post
    }

    fn endpoint(&self) -> Result<String> {
        Ok("v1/history/download".to_string())
    }

    fn body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(serde_json::json!({
            "history_item_ids": self.history_item_ids,
        })))
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        transformers::file(response, &self.output)
    }
}

#[derive(Debug, Clone)]
pub struct GetHistoryItemAudioRequest {
    pub history_item_id: String,
    pub output: PathBuf,
}

impl GetHistoryItemAudioRequest {
    pub fn new(history_item_id: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            history_item_id: history_item_id.into(),
            output: output.into(),
        }
    }
}

impl ApiRequest for GetHistoryItemAudioRequest {
    type Output = PathBuf;

    fn method(&self) -> Method {
        Method::Get
    }

    fn endpoint(&self) -> Result<String> {
        Ok(format!("v1/history/{}/audio", path_segment(&self.history_item_id)?))
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        transformers::file(response, &self.output)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteHistoryItemRequest {
    pub history_item_id: String,
}

impl DeleteHistoryItemRequest {
    pub fn new(history_item_id: impl Into<String>) -> Self {
        Self {
            history_item_id: history_item_id.into(),
        }
    }
}

impl ApiRequest for DeleteHistoryItemRequest {
    type Output = String;

    fn method(&self) -> Method {
        Method::Delete
    }

    fn endpoint(&self) -> Result<String> {
        Ok(format!("v1/history/{}", path_segment(&self.history_item_id)?))
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        Ok(transformers::status(&response))
    }
}
