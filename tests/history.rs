//! History operations against a mock server.

mod common;

use common::{MockApi, HISTORY, VOICE_TEST};
use mockito::Matcher;

#[test]
fn delete_item_removes_it_locally() {
    let mut api = MockApi::new();
    let list = api.json("GET", "/v1/history", 200, HISTORY);
    let delete = api.json("DELETE", "/v1/history/h1", 200, r#"{"status":"ok"}"#);

    let mut history = api.client.get_history().unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.get_item("h1").is_some());

    let status = history.delete_item(&api.client, "h1").unwrap();
    assert_eq!(status, "ok");
    assert!(history.get_item("h1").is_none());
    assert_eq!(history.len(), 1);
    assert_eq!(history.items()[0].history_item_id(), "h2");

    list.assert();
    delete.assert();
}

#[test]
fn failed_delete_keeps_item() {
    let mut api = MockApi::new();
    let _list = api.json("GET", "/v1/history", 200, HISTORY);
    let _delete = api.json(
        "DELETE",
        "/v1/history/h1",
        404,
        r#"{"detail":{"status":"not_found","message":"History item not found"}}"#,
    );

    let mut history = api.client.get_history().unwrap();
    let err = history.delete_item(&api.client, "h1").unwrap_err();
    assert_eq!(err.message(), Some("History item not found"));
    assert!(history.get_item("h1").is_some());
}

#[test]
fn download_items_and_single_audio() {
    let mut api = MockApi::new();
    let _list = api.json("GET", "/v1/history", 200, HISTORY);
    let zip = api
        .server
        .mock("POST", "/v1/history/download")
        .match_body(Matcher::Json(
            serde_json::json!({"history_item_ids": ["h1", "h2"]}),
        ))
        .with_status(200)
        .with_header("content-type", "application/zip")
        .with_body(b"PK\x03\x04zipdata")
        .create();
    let audio = api.audio("GET", "/v1/history/h2/audio", b"\xFF\xFBmp3");

    let history = api.client.get_history().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let zip_path = dir.path().join("history.zip");
    let items: Vec<_> = history.items().iter().collect();
    let written = history.download_items(&api.client, &items, &zip_path).unwrap();
    assert_eq!(written, zip_path);
    assert!(std::fs::read(&zip_path).unwrap().starts_with(b"PK"));

    let mp3 = dir.path().join("h2.mp3");
    history.items()[1].download_audio(&api.client, &mp3).unwrap();
    assert_eq!(std::fs::read(&mp3).unwrap(), b"\xFF\xFBmp3");

    zip.assert();
    audio.assert();
}

#[test]
fn fetch_voice_hits_server_each_time() {
    let mut api = MockApi::new();
    let _list = api.json("GET", "/v1/history", 200, HISTORY);
    let voice = api
        .server
        .mock("GET", "/v1/voices/new-voice")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(VOICE_TEST)
        .expect(2)
        .create();

    let history = api.client.get_history().unwrap();
    let item = &history.items()[0];
    assert_eq!(item.fetch_voice(&api.client).unwrap().name, "Test");
    assert_eq!(item.fetch_voice(&api.client).unwrap().name, "Test");
    voice.assert();
}
