//! Voice, voice settings and voice samples.

use crate::client::ElevenLabsClient;
use crate::request::voices::VoiceForm;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Synthesis parameters of a voice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Voice stability (0.0 to 1.0)
    pub stability: f64,
    /// Similarity boost (0.0 to 1.0)
    pub similarity_boost: f64,
    /// Style exaggeration (0.0 to 1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
}

impl VoiceSettings {
    pub fn new(stability: f64, similarity_boost: f64) -> Self {
        Self {
            stability,
            similarity_boost,
            style: None,
            use_speaker_boost: None,
        }
    }

    pub fn with_style(mut self, style: f64) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_speaker_boost(mut self, enabled: bool) -> Self {
        self.use_speaker_boost = Some(enabled);
        self
    }
}

/// An audio sample attached to a cloned voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub sample_id: String,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    #[serde(default)]
    pub hash: Option<String>,
}

impl Sample {
    pub fn sample_id(&self) -> &str {
        &self.sample_id
    }

    /// Download this sample's audio to `path`.
    pub fn download_audio(
        &self,
        client: &ElevenLabsClient,
        voice_id: impl AsRef<str>,
        path: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        client.get_sample_audio(voice_id, self, path)
    }
}

impl AsRef<str> for Sample {
    fn as_ref(&self) -> &str {
        &self.sample_id
    }
}

/// Fine-tuning state of a voice.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FineTuning {
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub is_allowed_to_fine_tune: bool,
    #[serde(default)]
    pub fine_tuning_requested: bool,
    #[serde(default)]
    pub finetuning_state: Option<String>,
    #[serde(default)]
    pub verification_attempts_count: u32,
}

/// A voice available to the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub voice_id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub samples: Vec<Sample>,
    #[serde(default)]
    pub settings: Option<VoiceSettings>,
    #[serde(default)]
    pub fine_tuning: Option<FineTuning>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_for_tiers: Vec<String>,
}

impl Voice {
    pub fn voice_id(&self) -> &str {
        &self.voice_id
    }

    pub fn sample(&self, sample_id: &str) -> Option<&Sample> {
        self.samples.iter().find(|s| s.sample_id == sample_id)
    }

    /// Fetch the current settings of this voice from the server.
    pub fn fetch_settings(&self, client: &ElevenLabsClient) -> Result<VoiceSettings> {
        client.get_voice_settings(self)
    }

    pub fn update_settings(
        &self,
        client: &ElevenLabsClient,
        settings: &VoiceSettings,
    ) -> Result<String> {
        client.edit_voice_settings(self, settings)
    }

    pub fn edit(&self, client: &ElevenLabsClient, form: &VoiceForm) -> Result<String> {
        client.edit_voice(self, form)
    }

    pub fn delete(&self, client: &ElevenLabsClient) -> Result<String> {
        client.delete_voice(self)
    }

    pub fn delete_sample(&self, client: &ElevenLabsClient, sample: impl AsRef<str>) -> Result<String> {
        client.delete_sample(self, sample)
    }

    pub fn download_sample(
        &self,
        client: &ElevenLabsClient,
        sample: impl AsRef<str>,
        path: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        client.get_sample_audio(self, sample, path)
    }

    /// Synthesize `text` with this voice into `path`.
    ///
    /// Uses the voice's own settings when it was fetched with them, server defaults otherwise.
    pub fn generate(
        &self,
        client: &ElevenLabsClient,
        text: &str,
        path: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        client.text_to_speech(self, text, self.settings.as_ref(), path)
    }
}

impl AsRef<str> for Voice {
    fn as_ref(&self) -> &str {
        &self.voice_id
    }
}

/// The API sends `null` for empty collections on some voices.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
