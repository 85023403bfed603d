//! Voice sample requests.

use super::{path_segment, ApiRequest, Method};
use crate::response::SuccessResponse;
use crate::transformers;
use crate::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DeleteSampleRequest {
    pub voice_id: String,
    pub sample_id: String,
}

impl DeleteSampleRequest {
    pub fn new(voice_id: impl Into<String>, sample_id: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
            sample_id: sample_id.into(),
        }
    }
}

impl ApiRequest for DeleteSampleRequest {
    type Output = String;

    fn method(&self) -> Method {
        Method::Delete
    }

    fn endpoint(&self) -> Result<String> {
        Ok(format!(
            "v1/voices/{}/samples/{}",
            path_segment(&self.voice_id)?,
            path_segment(&self.sample_id)?
        ))
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        Ok(transformers::status(&response))
    }
}

/// Download a sample's audio into `output`.
#[derive(Debug, Clone)]
pub struct GetSampleAudioRequest {
    pub voice_id: String,
    pub sample_id: String,
    pub output: PathBuf,
}

impl GetSampleAudioRequest {
    pub fn new(
        voice_id: impl Into<String>,
        sample_id: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            voice_id: voice_id.into(),
            sample_id: sample_id.into(),
            output: output.into(),
        }
    }
}

impl ApiRequest for GetSampleAudioRequest {
    type Output = PathBuf;

    fn method(&self) -> Method {
        Method::Get
    }

    fn endpoint(&self) -> Result<String> {
        Ok(format!(
            "v1/voices/{}/samples/{}/audio",
            path_segment(&self.voice_id)?,
            path_segment(&self.sample_id)?
        ))
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        transformers::file(response, &self.output)
    }
}
