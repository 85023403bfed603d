//! Text-to-speech synthesis request.

use super::{path_segment, ApiRequest, Method, RequestBody};
use crate::response::SuccessResponse;
use crate::transformers;
use crate::types::VoiceSettings;
use crate::Result;
use std::path::PathBuf;

/// Synthesize `text` with a voice; the audio is written to `output`.
#[derive(Debug, Clone)]
pub struct TextToSpeechRequest {
    pub voice_id: String,
    pub text: String,
    pub settings: Option<VoiceSettings>,
    pub model_id: Option<String>,
    pub output: PathBuf,
}

impl TextToSpeechRequest {
    pub fn new(
        voice_id: impl Into<String>,
        text: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            voice_id: voice_id.into(),
            text: text.into(),
            settings: None,
            model_id: None,
            output: output.into(),
        }
    }

    pub fn with_settings(mut self, settings: VoiceSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }
}

impl ApiRequest for TextToSpeechRequest {
    type Output = PathBuf;

    fn method(&self) -> Method {
        Method::Post
    }

    fn endpoint(&self) -> Result<String> {
        Ok(format!("v1/text-to-speech/{}", path_segment(&self.voice_id)?))
    }

    fn body(&self) -> Result<RequestBody> {
        let mut body = serde_json::json!({ "text": self.text });
        if let Some(settings) = &self.settings {
            body["voice_settings"] = serde_json::to_value(settings)?;
        }
        if let Some(model) = &self.model_id {
            body["model_id"] = serde_json::Value::String(model.clone());
        }
        Ok(RequestBody::Json(body))
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        transformers::file(response, &self.output)
    }
}
