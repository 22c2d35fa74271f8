use securepad_core::document::{DocumentPatch, DocumentStore, SetOptions, Timestamp};
use securepad_core::space::SpaceKey;
use securepad_infrastructure::FileDocumentStore;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_reopened_store_reads_previous_content() {
    let temp_dir = TempDir::new().unwrap();
    let key = SpaceKey::derive("secret1");

    {
        let store = FileDocumentStore::new(temp_dir.path());
        let patch = DocumentPatch::new()
            .with_content("<b>Hello</b>")
            .with_updated_at(Timestamp::now());
        store
            .set("pads", key.as_str(), &patch, SetOptions::merge())
            .await
            .unwrap();
    }

    let reopened = FileDocumentStore::new(temp_dir.path());
    let document = reopened
        .get("pads", key.as_str())
        .await
        .unwrap()
        .expect("document should exist");
    assert_eq!(document.content, "<b>Hello</b>");
    assert!(document.updated_at.is_some());
}

#[tokio::test]
async fn test_clear_then_edit_keeps_password_hash() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileDocumentStore::new(temp_dir.path());
    let key = SpaceKey::derive("abcdef");

    let clear = DocumentPatch::new()
        .with_content("")
        .with_updated_at(Timestamp::Server)
        .with_password_hash(key.as_str());
    store
        .set("pads", key.as_str(), &clear, SetOptions::merge())
        .await
        .unwrap();

    let edit = DocumentPatch::new().with_content("after clear");
    store
        .set("pads", key.as_str(), &edit, SetOptions::merge())
        .await
        .unwrap();

    let document = store.get("pads", key.as_str()).await.unwrap().unwrap();
    assert_eq!(document.content, "after clear");
    assert_eq!(document.password_hash.as_deref(), Some(key.as_str()));
    assert!(document.updated_at.unwrap().ends_with('Z'));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writes_leave_a_readable_document() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(FileDocumentStore::new(temp_dir.path()));

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let patch = DocumentPatch::new().with_content(format!("writer {i}"));
            store
                .set("pads", "pad_7", &patch, SetOptions::merge())
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let document = store.get("pads", "pad_7").await.unwrap().unwrap();
    assert!(document.content.starts_with("writer "));
}

#[tokio::test]
async fn test_merge_write_keeps_unknown_keys() {
    let temp_dir = TempDir::new().unwrap();
    let pads_dir = temp_dir.path().join("pads");
    std::fs::create_dir_all(&pads_dir).unwrap();
    std::fs::write(
        pads_dir.join("pad_1.toml"),
        "content = \"old\"\nowner = \"alice\"\n",
    )
    .unwrap();
    let store = FileDocumentStore::new(temp_dir.path());

    store
        .set(
            "pads",
            "pad_1",
            &DocumentPatch::new().with_content("new"),
            SetOptions::merge(),
        )
        .await
        .unwrap();

    let raw = std::fs::read_to_string(pads_dir.join("pad_1.toml")).unwrap();
    assert!(raw.contains("owner = \"alice\""));
    let document = store.get("pads", "pad_1").await.unwrap().unwrap();
    assert_eq!(document.content, "new");
    assert_eq!(document.extra["owner"].as_str(), Some("alice"));
}

#[tokio::test]
async fn test_replace_write_drops_unknown_keys() {
    let temp_dir = TempDir::new().unwrap();
    let pads_dir = temp_dir.path().join("pads");
    std::fs::create_dir_all(&pads_dir).unwrap();
    std::fs::write(
        pads_dir.join("pad_2.toml"),
        "content = \"old\"\nowner = \"alice\"\n",
    )
    .unwrap();
    let store = FileDocumentStore::new(temp_dir.path());

    store
        .set(
            "pads",
            "pad_2",
            &DocumentPatch::new().with_content("new"),
            SetOptions::replace(),
        )
        .await
        .unwrap();

    let document = store.get("pads", "pad_2").await.unwrap().unwrap();
    assert_eq!(document.content, "new");
    assert!(document.extra.is_empty());
}
