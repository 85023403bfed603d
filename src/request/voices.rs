//! Voice management requests.

use super::{path_segment, ApiRequest, ContentType, Method, RequestBody};
use crate::response::SuccessResponse;
use crate::transformers;
use crate::transport::multipart::guess_mime_type;
use crate::transport::MultipartForm;
use crate::types::{Voice, VoiceSettings};
use crate::Result;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// An audio sample to upload when creating or editing a voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleFile {
    Path(PathBuf),
    Bytes { file_name: String, data: Vec<u8> },
}

/// Fields of a voice creation or edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceForm {
    pub name: String,
    pub description: Option<String>,
    pub labels: BTreeMap<String, String>,
    pub files: Vec<SampleFile>,
}

impl VoiceForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn labels<I, K, V>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels
            .extend(labels.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(SampleFile::Path(path.into()));
        self
    }

    pub fn file_bytes(mut self, file_name: impl Into<String>, data: Vec<u8>) -> Self {
        self.files.push(SampleFile::Bytes {
            file_name: file_name.into(),
            data,
        });
        self
    }

    /// Layout: `name`, optional `description`, `labels` as a JSON object string,
    /// then one `files` part per sample.
    pub fn to_multipart(&self) -> Result<MultipartForm> {
        let mut form = MultipartForm::new().text("name", self.name.clone());
        if let Some(description) = &self.description {
            form = form.text("description", description.clone());
        }
        if !self.labels.is_empty() {
            form = form.text("labels", serde_json::to_string(&self.labels)?);
        }
        for file in &self.files {
            form = match file {
                SampleFile::Path(path) => form.file_path("files", path.clone()),
                SampleFile::Bytes { file_name, data } => {
                    let mime = guess_mime_type(std::path::Path::new(file_name));
                    form.file_bytes("files", file_name.clone(), mime, data.clone())
                }
            };
        }
        Ok(form)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetVoicesRequest;

impl ApiRequest for GetVoicesRequest {
    type Output = Vec<Voice>;

    fn method(&self) -> Method {
        Method::Get
    }

    fn endpoint(&self) -> Result<String> {
        Ok("v1/voices".to_string())
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        transformers::json_list(&response, "voices")
    }
}

#[derive(Debug, Clone)]
pub struct GetVoiceRequest {
    pub voice_id: String,
    pub with_settings: bool,
}

impl GetVoiceRequest {
    pub fn new(voice_id: impl Into<String>, with_settings: bool) -> Self {
        Self {
            voice_id: voice_id.into(),
            with_settings,
        }
    }
}

impl ApiRequest for GetVoiceRequest {
    type Output = Voice;

    fn method(&self) -> Method {
        Method::Get
    }

    fn endpoint(&self) -> Result<String> {
        Ok(format!("v1/voices/{}", path_segment(&self.voice_id)?))
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("with_settings", self.with_settings.to_string())]
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        transformers::json(&response)
    }
}

#[derive(Debug, Clone)]
pub struct GetVoiceSettingsRequest {
    pub voice_id: String,
}

impl GetVoiceSettingsRequest {
    pub fn new(voice_id: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
        }
    }
}

impl ApiRequest for GetVoiceSettingsRequest {
    type Output = VoiceSettings;

    fn method(&self) -> Method {
        Method::Get
    }

    fn endpoint(&self) -> Result<String> {
        Ok(format!("v1/voices/{}/settings", path_segment(&self.voice_id)?))
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        transformers::json(&response)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetDefaultVoiceSettingsRequest;

impl ApiRequest for GetDefaultVoiceSettingsRequest {
    type Output = VoiceSettings;

    fn method(&self) -> Method {
        Method::Get
    }

    fn endpoint(&self) -> Result<String> {
        Ok("v1/voices/settings/default".to_string())
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        transformers::json(&response)
    }
}

#[derive(Debug, Clone)]
pub struct EditVoiceSettingsRequest {
    pub voice_id: String,
    pub settings: VoiceSettings,
}

impl EditVoiceSettingsRequest {
    pub fn new(voice_id: impl Into<String>, settings: VoiceSettings) -> Self {
        Self {
            voice_id: voice_id.into(),
            settings,
        }
    }
}

impl ApiRequest for EditVoiceSettingsRequest {
    type Output = String;

    fn method(&self) -> Method {
        Method::Post
    }

    fn endpoint(&self) -> Result<String> {
        Ok(format!("v1/voices/{}/settings/edit", path_segment(&self.voice_id)?))
    }

    fn body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(serde_json::to_value(self.settings)?))
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        Ok(transformers::status(&response))
    }
}

#[derive(Debug, Clone)]
pub struct DeleteVoiceRequest {
    pub voice_id: String,
}

impl DeleteVoiceRequest {
    pub fn new(voice_id: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
        }
    }
}

impl ApiRequest for DeleteVoiceRequest {
    type Output = String;

    fn method(&self) -> Method {
        Method::Delete
    }

    fn endpoint(&self) -> Result<String> {
        Ok(format!("v1/voices/{}", path_segment(&self.voice_id)?))
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        Ok(transformers::status(&response))
    }
}

/// Instant voice cloning. Resolves to the new voice id.
#[derive(Debug, Clone)]
pub struct CreateVoiceRequest {
    pub form: VoiceForm,
}

impl CreateVoiceRequest {
    pub fn new(form: VoiceForm) -> Self {
        Self { form }
    }
}

impl ApiRequest for CreateVoiceRequest {
    type Output = String;

    fn method(&self) -> Method {
        Method::Post
    }

    fn endpoint(&self) -> Result<String> {
        Ok("v1/voices/add".to_string())
    }

    fn content_type(&self) -> ContentType {
        ContentType::Multipart
    }

    fn body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Multipart(self.form.to_multipart()?))
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        transformers::json_field(&response, "voice_id")
    }
}

#[derive(Debug, Clone)]
pub struct EditVoiceRequest {
    pub voice_id: String,
    pub form: VoiceForm,
}

impl EditVoiceRequest {
    pub fn new(voice_id: impl Into<String>, form: VoiceForm) -> Self {
        Self {
            voice_id: voice_id.into(),
            form,
        }
    }
}

impl ApiRequest for EditVoiceRequest {
    type Output = String;

    fn method(&self) -> Method {
        Method::Post
    }

    fn endpoint(&self) -> Result<String> {
        Ok(format!("v1/voices/{}/edit", path_segment(&self.voice_id)?))
    }

    fn content_type(&self) -> ContentType {
        ContentType::Multipart
    }

    fn body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Multipart(self.form.to_multipart()?))
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        Ok(transformers::status(&response))
    }
}
