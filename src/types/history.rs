//! Generation history.

use super::voice::Voice;
use crate::client::ElevenLabsClient;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Processing state of a history item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HistoryState {
    Created,
    Deleted,
    Processing,
    Other(String),
}

impl From<String> for HistoryState {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "created" => HistoryState::Created,
            "deleted" => HistoryState::Deleted,
            "processing" => HistoryState::Processing,
            _ => HistoryState::Other(s),
        }
    }
}

impl From<HistoryState> for String {
    fn from(state: HistoryState) -> Self {
        match state {
            HistoryState::Created => "created".to_string(),
            HistoryState::Deleted => "deleted".to_string(),
            HistoryState::Processing => "processing".to_string(),
            HistoryState::Other(s) => s,
        }
    }
}

/// One past synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub history_item_id: String,
    pub voice_id: String,
    pub voice_name: String,
    pub text: String,
    pub date_unix: i64,
    pub character_count_change_from: i64,
    pub character_count_change_to: i64,
    pub content_type: String,
    pub state: HistoryState,
}

impl HistoryItem {
    pub fn history_item_id(&self) -> &str {
        &self.history_item_id
    }

    /// Creation time. `date_unix` is in seconds.
    pub fn date(&self) -> SystemTime {
        if self.date_unix >= 0 {
            UNIX_EPOCH + Duration::from_secs(self.date_unix as u64)
        } else {
            UNIX_EPOCH - Duration::from_secs(self.date_unix.unsigned_abs())
        }
    }

    /// Characters this generation consumed from the quota.
    pub fn character_count(&self) -> i64 {
        self.character_count_change_to - self.character_count_change_from
    }

    /// Fetch the voice used for this item. Issues a request on every call.
    pub fn fetch_voice(&self, client: &ElevenLabsClient) -> Result<Voice> {
        client.get_voice(&self.voice_id)
    }

    pub fn download_audio(&self, client: &ElevenLabsClient, path: impl AsRef<Path>) -> Result<PathBuf> {
        client.get_history_item_audio(self, path)
    }
}

impl AsRef<str> for HistoryItem {
    fn as_ref(&self) -> &str {
        &self.history_item_id
    }
}

/// The account's generation history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct History {
    pub history: Vec<HistoryItem>,
    #[serde(default)]
    pub last_history_item_id: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

impl History {
    pub fn items(&self) -> &[HistoryItem] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn get_item(&self, id: &str) -> Option<&HistoryItem> {
        self.history.iter().find(|i| i.history_item_id == id)
    }

    /// Delete an item on the server and, once that succeeds, drop it from this list.
    pub fn delete_item(&mut self, client: &ElevenLabsClient, id: &str) -> Result<String> {
        let status = client.delete_history_item(id)?;
        self.history.retain(|i| i.history_item_id != id);
        Ok(status)
    }

    /// Download several items as one file (a zip for more than one item).
    pub fn download<I, S>(client: &ElevenLabsClient, ids: I, path: impl AsRef<Path>) -> Result<PathBuf>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        client.download_history(ids, path)
    }

    pub fn download_items(
        &self,
        client: &ElevenLabsClient,
        items: &[&HistoryItem],
        path: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        client.download_history(items.iter().map(|i| i.history_item_id()), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HISTORY: &str = r#"{
        "history": [
            {
                "history_item_id": "h1",
                "voice_id": "v1",
                "voice_name": "Rachel",
                "text": "hello",
                "date_unix": 1680000000,
                "character_count_change_from": 100,
                "character_count_change_to": 105,
                "content_type": "audio/mpeg",
                "state": "created"
            },
            {
                "history_item_id": "h2",
                "voice_id": "v2",
                "voice_name": "Adam",
                "text": "world",
                "date_unix": 1680000100,
                "character_count_change_from": 105,
                "character_count_change_to": 110,
                "content_type": "audio/mpeg",
                "state": "queued"
            }
        ],
        "last_history_item_id": "h2",
        "has_more": false
    }"#;

    #[test]
    fn history_parses_items_in_order() {
        let history: History = serde_json::from_str(HISTORY).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.items()[0].history_item_id(), "h1");
        assert_eq!(history.items()[0].state, HistoryState::Created);
        assert_eq!(history.items()[1].state, HistoryState::Other("queued".into()));
        assert_eq!(history.items()[0].character_count(), 5);
        assert_eq!(history.last_history_item_id.as_deref(), Some("h2"));
    }

    #[test]
    fn lookup_by_id() {
        let history: History = serde_json::from_str(HISTORY).unwrap();
        assert_eq!(history.get_item("h2").map(|i| i.voice_name.as_str()), Some("Adam"));
        assert!(history.get_item("nope").is_none());
    }

    #[test]
    fn date_is_seconds_since_epoch() {
        let history: History = serde_json::from_str(HISTORY).unwrap();
        let secs = history.items()[0]
            .date()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        assert_eq!(secs, 1_680_000_000);
    }

    #[test]
    fn state_round_trips_through_strings() {
        assert_eq!(HistoryState::from("PROCESSING".to_string()), HistoryState::Processing);
        assert_eq!(String::from(HistoryState::Deleted), "deleted");
    }
}
