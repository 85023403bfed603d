//! Account and subscription information.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SupportedLanguage {
    pub iso_code: String,
    pub display_name: String,
}

/// A synthesis model the subscription grants access to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvailableModel {
    pub model_id: String,
    pub display_name: String,
    #[serde(default)]
    pub supported_languages: Vec<SupportedLanguage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub tier: String,
    pub character_count: u64,
    pub character_limit: u64,
    #[serde(default)]
    pub can_extend_character_limit: bool,
    #[serde(default)]
    pub allowed_to_extend_character_limit: bool,
    #[serde(default)]
    pub next_character_count_reset_unix: Option<u64>,
    #[serde(default)]
    pub voice_limit: u32,
    #[serde(default)]
    pub can_extend_voice_limit: bool,
    #[serde(default)]
    pub can_use_instant_voice_cloning: bool,
    #[serde(default)]
    pub available_models: Vec<AvailableModel>,
    pub status: String,
}

impl Subscription {
    /// Characters left before the limit is hit.
    pub fn remaining_characters(&self) -> u64 {
        self.character_limit.saturating_sub(self.character_count)
    }

    /// When the character counter resets, if the server reported it.
    pub fn next_reset(&self) -> Option<SystemTime> {
        self.next_character_count_reset_unix
            .map(|secs| UNIX_EPOCH + Duration::from_secs(secs))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub subscription: Subscription,
    #[serde(default)]
    pub is_new_user: bool,
    #[serde(default)]
    pub xi_api_key: Option<String>,
}
