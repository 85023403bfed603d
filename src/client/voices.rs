//! Voice, sample and synthesis operations.

use super::core::ElevenLabsClient;
use crate::request::voices::VoiceForm;
use crate::request::{
    CreateVoiceRequest, DeleteSampleRequest, DeleteVoiceRequest, EditVoiceRequest,
    EditVoiceSettingsRequest, GetDefaultVoiceSettingsRequest, GetSampleAudioRequest,
    GetVoiceRequest, GetVoiceSettingsRequest, GetVoicesRequest, TextToSpeechRequest,
};
use crate::types::{Voice, VoiceSettings};
use crate::Result;
use std::path::{Path, PathBuf};

impl ElevenLabsClient {
    pub fn get_voices(&self) -> Result<Vec<Voice>> {
        self.execute(&GetVoicesRequest)
    }

    /// Fetch a voice including its settings.
    pub fn get_voice(&self, voice_id: impl AsRef<str>) -> Result<Voice> {
        self.get_voice_with_settings(voice_id, true)
    }

    pub fn get_voice_with_settings(
        &self,
        voice_id: impl AsRef<str>,
        with_settings: bool,
    ) -> Result<Voice> {
        self.execute(&GetVoiceRequest::new(voice_id.as_ref(), with_settings))
    }

    pub fn get_voice_settings(&self, voice_id: impl AsRef<str>) -> Result<VoiceSettings> {
        self.execute(&GetVoiceSettingsRequest::new(voice_id.as_ref()))
    }

    pub fn get_default_voice_settings(&self) -> Result<VoiceSettings> {
        self.execute(&GetDefaultVoiceSettingsRequest)
    }

    pub fn edit_voice_settings(
        &self,
        voice_id: impl AsRef<str>,
        settings: &VoiceSettings,
    ) -> Result<String> {
        self.execute(&EditVoiceSettingsRequest::new(voice_id.as_ref(), *settings))
    }

    pub fn delete_voice(&self, voice_id: impl AsRef<str>) -> Result<String> {
        self.execute(&DeleteVoiceRequest::new(voice_id.as_ref()))
    }

    /// Clone a voice from samples. Returns the id of the new voice.
    pub fn create_voice(&self, form: &VoiceForm) -> Result<String> {
        self.execute(&CreateVoiceRequest::new(form.clone()))
    }

    pub fn edit_voice(&self, voice_id: impl AsRef<str>, form: &VoiceForm) -> Result<String> {
        self.execute(&EditVoiceRequest::new(voice_id.as_ref(), form.clone()))
    }

    pub fn delete_sample(
        &self,
        voice_id: impl AsRef<str>,
        sample_id: impl AsRef<str>,
    ) -> Result<String> {
        self.execute(&DeleteSampleRequest::new(
            voice_id.as_ref(),
            sample_id.as_ref(),
        ))
    }

    pub fn get_sample_audio(
        &self,
        voice_id: impl AsRef<str>,
        sample_id: impl AsRef<str>,
        output: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        self.execute(&GetSampleAudioRequest::new(
            voice_id.as_ref(),
            sample_id.as_ref(),
            output.as_ref(),
        ))
    }

    /// Synthesize `text` and write the audio to `output`.
    ///
    /// Without `settings` the server applies the voice's stored settings.
    pub fn text_to_speech(
        &self,
        voice_id: impl AsRef<str>,
        text: &str,
        settings: Option<&VoiceSettings>,
        output: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let mut request = TextToSpeechRequest::new(voice_id.as_ref(), text, output.as_ref());
        if let Some(settings) = settings {
            request = request.with_settings(*settings);
        }
        self.execute(&request)
    }
}
