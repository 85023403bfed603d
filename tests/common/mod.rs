//! Shared mock server setup for integration tests.
#![allow(dead_code)]

use elevenlabs_rs::{ElevenLabsClient, ElevenLabsClientBuilder};
use mockito::{Mock, Server, ServerGuard};
use std::time::Duration;

pub const API_KEY: &str = "test-key";

pub const VOICE_TEST: &str = r#"{
    "voice_id": "new-voice",
    "name": "Test",
    "samples": [
        {"sample_id": "s1", "file_name": "clip.mp3", "mime_type": "audio/mpeg", "size_bytes": 4, "hash": "h"}
    ],
    "category": "cloned",
    "fine_tuning": null,
    "labels": {"accent": "british", "age": "young"},
    "preview_url": null,
    "available_for_tiers": [],
    "settings": {"stability": 0.5, "similarity_boost": 0.75}
}"#;

pub const HISTORY: &str = r#"{
    "history": [
        {"history_item_id": "h1", "voice_id": "new-voice", "voice_name": "Test", "text": "hello",
         "date_unix": 1680000000, "character_count_change_from": 0, "character_count_change_to": 5,
         "content_type": "audio/mpeg", "state": "created"},
        {"history_item_id": "h2", "voice_id": "new-voice", "voice_name": "Test", "text": "again",
         "date_unix": 1680000050, "character_count_change_from": 5, "character_count_change_to": 10,
         "content_type": "audio/mpeg", "state": "created"}
    ],
    "last_history_item_id": "h2",
    "has_more": false
}"#;

/// Test fixture owning a mock server and a client pointed at it.
pub struct MockApi {
    pub server: ServerGuard,
    pub client: ElevenLabsClient,
}

impl MockApi {
    pub fn new() -> Self {
        init_tracing();
        let server = Server::new();
        let client = builder_for(&server).api_key(API_KEY).build().expect("client");
        Self { server, client }
    }

    /// Client with no API key configured.
    pub fn uninitialized(&self) -> ElevenLabsClient {
        builder_for(&self.server).build().expect("client")
    }

    /// Mock a JSON response, requiring the API key header.
    pub fn json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .match_header("xi-api-key", API_KEY)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    /// Mock a binary (audio) response.
    pub fn audio(&mut self, method: &str, path: &str, bytes: &[u8]) -> Mock {
        self.server
            .mock(method, path)
            .match_header("xi-api-key", API_KEY)
            .with_status(200)
            .with_header("content-type", "audio/mpeg")
            .with_body(bytes)
            .create()
    }
}

fn builder_for(server: &ServerGuard) -> ElevenLabsClientBuilder {
    ElevenLabsClientBuilder::new()
        .base_url(server.url())
        .timeout(Duration::from_secs(10))
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
