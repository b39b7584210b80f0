//! Tests for the filesystem session store.

use postcraft_error::{PostcraftErrorKind, StorageErrorKind};
use postcraft_interface::SessionStore;
use postcraft_storage::FileSystemSessionStore;
use serde_json::json;
use tempfile::TempDir;
use uuid::Uuid;

#[tokio::test]
async fn test_set_and_get() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemSessionStore::new(temp_dir.path()).unwrap();
    let token = Uuid::new_v4().to_string();

    let topic = json!({
        "category": "Networking",
        "title": "VPN Explained Simply",
        "keywords": ["vpn", "privacy"]
    });
    store.set(&token, "current_topic", topic.clone()).await.unwrap();

    assert_eq!(
        store.get(&token, "current_topic").await.unwrap(),
        Some(topic)
    );
    assert_eq!(store.get(&token, "generated_ideas").await.unwrap(), None);
}

#[tokio::test]
async fn test_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let token = Uuid::new_v4().to_string();

    {
        let store = FileSystemSessionStore::new(temp_dir.path()).unwrap();
        store
            .set(&token, "generated_ideas", json!([{"title": "A"}]))
            .await
            .unwrap();
    }

    let reopened = FileSystemSessionStore::new(temp_dir.path()).unwrap();
    let ideas = reopened.get(&token, "generated_ideas").await.unwrap().unwrap();
    assert_eq!(ideas[0]["title"], "A");
}

#[tokio::test]
async fn test_tokens_do_not_share_values() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemSessionStore::new(temp_dir.path()).unwrap();

    store.set("first", "current_topic", json!("one")).await.unwrap();
    store.set("second", "current_topic", json!("two")).await.unwrap();

    assert_eq!(
        store.get("first", "current_topic").await.unwrap(),
        Some(json!("one"))
    );
    assert_ne!(store.record_path("first"), store.record_path("second"));
}

#[tokio::test]
async fn test_delete_last_key_removes_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemSessionStore::new(temp_dir.path()).unwrap();
    let token = Uuid::new_v4().to_string();

    store.set(&token, "a", json!(1)).await.unwrap();
    store.set(&token, "b", json!(2)).await.unwrap();
    let path = store.record_path(&token);
    assert!(path.exists());

    store.delete(&token, "a").await.unwrap();
    assert!(path.exists());
    assert_eq!(store.get(&token, "b").await.unwrap(), Some(json!(2)));

    store.delete(&token, "b").await.unwrap();
    assert!(!path.exists());

    // Absent keys and sessions are not errors
    store.delete(&token, "b").await.unwrap();
}

#[tokio::test]
async fn test_corrupt_record_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemSessionStore::new(temp_dir.path()).unwrap();
    let token = Uuid::new_v4().to_string();

    tokio::fs::write(store.record_path(&token), b"{not json")
        .await
        .unwrap();

    let err = store.get(&token, "current_topic").await.unwrap_err();
    assert!(matches!(
        err.kind(),
        PostcraftErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::Corrupt(_))
    ));
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemSessionStore::new(temp_dir.path()).unwrap();

    let err = store.set("", "k", json!(1)).await.unwrap_err();
    assert!(matches!(
        err.kind(),
        PostcraftErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::InvalidToken(_))
    ));
}

#[tokio::test]
async fn test_creates_nested_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("postcraft").join("sessions");
    let store = FileSystemSessionStore::new(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(store.base_path(), nested.as_path());
}
