use async_trait::async_trait;
use securepad_application::{AutoSaveController, AutoSaveSettings, LoadOutcome};
use securepad_core::document::{DocumentPatch, DocumentStore, PadDocument, SetOptions, Timestamp};
use securepad_core::editor::SaveStatus;
use securepad_core::error::Result;
use securepad_core::space::SpaceKey;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// Store that records every write it receives.
#[derive(Default)]
struct RecordingStore {
    stored: Mutex<Option<PadDocument>>,
    writes: Mutex<Vec<(String, DocumentPatch, SetOptions)>>,
}

impl RecordingStore {
    fn holding(content: &str) -> Self {
        let store = Self::default();
        *store.stored.lock().unwrap() = Some(PadDocument {
            content: content.to_string(),
            ..PadDocument::default()
        });
        store
    }

    fn writes(&self) -> Vec<(String, DocumentPatch, SetOptions)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn get(&self, _collection: &str, _id: &str) -> Result<Option<PadDocument>> {
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn set(
        &self,
        _collection: &str,
        id: &str,
        patch: &DocumentPatch,
        options: SetOptions,
    ) -> Result<()> {
        self.writes
            .lock()
            .unwrap()
            .push((id.to_string(), patch.clone(), options));
        Ok(())
    }
}

/// Store whose writes block until the test releases them.
#[derive(Default)]
struct GatedStore {
    entered: Notify,
    release: Notify,
    contents: Mutex<Vec<String>>,
}

impl GatedStore {
    fn contents(&self) -> Vec<String> {
        self.contents.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for GatedStore {
    async fn get(&self, _collection: &str, _id: &str) -> Result<Option<PadDocument>> {
        Ok(None)
    }

    async fn set(
        &self,
        _collection: &str,
        _id: &str,
        patch: &DocumentPatch,
        _options: SetOptions,
    ) -> Result<()> {
        self.entered.notify_one();
        self.release.notified().await;
        self.contents
            .lock()
            .unwrap()
            .push(patch.content.clone().unwrap_or_default());
        Ok(())
    }
}

fn controller(store: &Arc<RecordingStore>) -> AutoSaveController {
    AutoSaveController::new(
        Arc::clone(store) as Arc<dyn DocumentStore>,
        SpaceKey::derive("secret1"),
        AutoSaveSettings::default(),
    )
}

#[tokio::test(start_paused = true)]
async fn test_burst_of_changes_yields_one_write() {
    let store = Arc::new(RecordingStore::default());
    let autosave = controller(&store);
    autosave.load().await;

    for text in ["H", "He", "Hel", "Hell", "Hello"] {
        autosave.on_content_changed(text).await;
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    // 1.5 s after the last change: still waiting.
    tokio::time::sleep(Duration::from_millis(1400)).await;
    assert!(store.writes().is_empty());

    tokio::time::sleep(Duration::from_millis(600)).await;
    let writes = store.writes();
    assert_eq!(writes.len(), 1);

    let (id, patch, options) = &writes[0];
    assert_eq!(id, "pad_1970177921");
    assert_eq!(patch.content.as_deref(), Some("Hello"));
    assert!(matches!(patch.updated_at, Some(Timestamp::Iso8601(_))));
    assert!(patch.password_hash.is_none());
    assert!(options.merge);
    assert_eq!(autosave.status(), SaveStatus::Saved);
}

#[tokio::test(start_paused = true)]
async fn test_load_then_idle_never_writes() {
    let store = Arc::new(RecordingStore::holding("X"));
    let autosave = controller(&store);

    assert_eq!(autosave.load().await, LoadOutcome::Loaded("X".to_string()));

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(store.writes().is_empty());
    assert_eq!(autosave.status(), SaveStatus::Saved);
}

#[tokio::test(start_paused = true)]
async fn test_clear_is_immediate_and_cancels_pending_write() {
    let store = Arc::new(RecordingStore::holding("old"));
    let autosave = controller(&store);
    autosave.load().await;

    autosave.on_content_changed("typed").await;
    autosave.clear().await.unwrap();

    let writes = store.writes();
    assert_eq!(writes.len(), 1);
    let (id, patch, _) = &writes[0];
    assert_eq!(patch.content.as_deref(), Some(""));
    assert_eq!(patch.updated_at, Some(Timestamp::Server));
    assert_eq!(patch.password_hash.as_deref(), Some(id.as_str()));

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(store.writes().len(), 1);
    assert_eq!(autosave.content().await, "");
}

#[tokio::test(start_paused = true)]
async fn test_status_subscription_sees_save_cycle() {
    let store = Arc::new(RecordingStore::default());
    let autosave = controller(&store);
    autosave.load().await;
    let mut status = autosave.subscribe_status();

    autosave.on_content_changed("a").await;
    status.changed().await.unwrap();
    assert_eq!(*status.borrow_and_update(), SaveStatus::Unsaved);

    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert_eq!(*status.borrow_and_update(), SaveStatus::Saved);
}

#[tokio::test(start_paused = true)]
async fn test_change_during_write_keeps_pad_unsaved_until_next_write() {
    let store = Arc::new(GatedStore::default());
    let autosave = AutoSaveController::new(
        Arc::clone(&store) as Arc<dyn DocumentStore>,
        SpaceKey::derive("secret1"),
        AutoSaveSettings::default(),
    );
    autosave.load().await;

    autosave.on_content_changed("first").await;
    tokio::time::sleep(Duration::from_millis(2100)).await;
    store.entered.notified().await;
    assert_eq!(autosave.status(), SaveStatus::Saving);

    // Edit lands while "first" is still being written.
    autosave.on_content_changed("second").await;
    store.release.notify_one();
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert_eq!(store.contents(), vec!["first".to_string()]);
    assert_eq!(autosave.status(), SaveStatus::Unsaved);
    assert!(autosave.has_pending_save().await);

    store.release.notify_one();
    tokio::time::sleep(Duration::from_millis(2100)).await;

    assert_eq!(
        store.contents(),
        vec!["first".to_string(), "second".to_string()]
    );
    assert_eq!(autosave.status(), SaveStatus::Saved);
}
