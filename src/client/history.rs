use super::core::ElevenLabsClient;
use crate::request::{
    DeleteHistoryItemRequest, DownloadHistoryRequest, GetHistoryItemAudioRequest,
    GetHistoryRequest,
};
use crate::types::History;
use crate::Result;
use std::path::{Path, PathBuf};

impl ElevenLabsClient {
    pub fn get_history(&self) -> Result<History> {
        self.execute(&GetHistoryRequest)
    }

    /// Download the audio of several items into one file.
    pub fn download_history<I, S>(&self, history_item_ids: I, output: impl AsRef<Path>) -> Result<PathBuf>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = history_item_ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();
        self.execute(&DownloadHistoryRequest::new(ids, output.as_ref()))
    }

    pub fn get_history_item_audio(
        &self,
        history_item_id: impl AsRef<str>,
        output: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        self.execute(&GetHistoryItemAudioRequest::new(
            history_item_id.as_ref(),
            output.as_ref(),
        ))
    }

    /// Delete an item on the server. Use [`History::delete_item`] to keep a fetched
    /// history in sync.
    pub fn delete_history_item(&self, history_item_id: impl AsRef<str>) -> Result<String> {
        self.execute(&DeleteHistoryItemRequest::new(history_item_id.as_ref()))
    }
}
