//! Debounced document persistence.
//!
//! `AutoSaveController` owns the document of one space: it loads it once,
//! writes changed content after a quiet period, and clears it on request.

use securepad_core::config::PadConfig;
use securepad_core::document::{DocumentPatch, DocumentStore, SetOptions, Timestamp};
use securepad_core::editor::SaveStatus;
use securepad_core::error::Result;
use securepad_core::space::SpaceKey;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, watch};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Timing and location settings for [`AutoSaveController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoSaveSettings {
    pub collection: String,
    pub quiet_period: Duration,
    /// How long `recently_saved` stays true after a write
    pub saved_display: Duration,
}

impl Default for AutoSaveSettings {
    fn default() -> Self {
        Self::from(&PadConfig::default())
    }
}

impl From<&PadConfig> for AutoSaveSettings {
    fn from(config: &PadConfig) -> Self {
        Self {
            collection: config.collection.clone(),
            quiet_period: config.quiet_period(),
            saved_display: config.saved_display(),
        }
    }
}

/// Result of the initial load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A stored document was found
    Loaded(String),
    /// Nothing stored under this key yet
    Empty,
    /// The store failed; the editor starts empty
    Failed,
}

impl LoadOutcome {
    /// Content to seed the editor with.
    pub fn content(&self) -> &str {
        match self {
            Self::Loaded(content) => content,
            Self::Empty | Self::Failed => "",
        }
    }
}

struct SaveState {
    content: String,
    /// Set once the initial load finished (successfully or not)
    ready: bool,
    /// Bumped by every accepted change and by clear
    generation: u64,
    pending: Option<CancellationToken>,
    last_saved_at: Option<Instant>,
}

struct Inner {
    store: Arc<dyn DocumentStore>,
    key: SpaceKey,
    settings: AutoSaveSettings,
    state: Mutex<SaveState>,
    /// Serializes store writes so they land in the order they were issued
    writes: Mutex<()>,
    status: watch::Sender<SaveStatus>,
    shutdown: CancellationToken,
}

/// Loads, debounces and persists the content of one space.
///
/// At most one debounced write is scheduled at a time: every change cancels
/// the previous timer and starts a new one. Changes reported before
/// [`AutoSaveController::load`] completes are ignored.
///
/// Dropping the controller cancels the pending write.
pub struct AutoSaveController {
    inner: Arc<Inner>,
}

impl AutoSaveController {
    pub fn new(store: Arc<dyn DocumentStore>, key: SpaceKey, settings: AutoSaveSettings) -> Self {
        let (status, _) = watch::channel(SaveStatus::Saved);
        Self {
            inner: Arc::new(Inner {
                store,
                key,
                settings,
                state: Mutex::new(SaveState {
                    content: String::new(),
                    ready: false,
                    generation: 0,
                    pending: None,
                    last_saved_at: None,
                }),
                writes: Mutex::new(()),
                status,
                shutdown: CancellationToken::new(),
            }),
        }
    }

    pub fn space_key(&self) -> &SpaceKey {
        &self.inner.key
    }

    /// Fetches the stored document and marks the controller ready.
    ///
    /// A store failure is logged and treated as an empty document.
    pub async fn load(&self) -> LoadOutcome {
        let inner = &self.inner;
        let result = inner
            .store
            .get(&inner.settings.collection, inner.key.as_str())
            .await;

        let outcome = match result {
            Ok(Some(document)) => {
                tracing::debug!(
                    "[AutoSave] Loaded {} ({} bytes)",
                    inner.key,
                    document.content.len()
                );
                LoadOutcome::Loaded(document.content)
            }
            Ok(None) => {
                tracing::debug!("[AutoSave] No document for {} yet", inner.key);
                LoadOutcome::Empty
            }
            Err(e) => {
                tracing::error!("[AutoSave] Failed to load {}: {}", inner.key, e);
                LoadOutcome::Failed
            }
        };

        let mut state = inner.state.lock().await;
        state.content = outcome.content().to_string();
        state.ready = true;
        inner.status.send_replace(SaveStatus::Saved);
        outcome
    }

    /// Reports the editor's current content.
    ///
    /// Schedules a write after the quiet period, replacing any pending one.
    /// Ignored before load completes, after unmount, and when the content
    /// did not actually change.
    pub async fn on_content_changed(&self, content: impl Into<String>) {
        let content = content.into();
        let inner = &self.inner;
        let mut state = inner.state.lock().await;

        if !state.ready {
            tracing::debug!("[AutoSave] Ignoring change before load completed");
            return;
        }
        if inner.shutdown.is_cancelled() || state.content == content {
            return;
        }

        state.content = content;
        state.generation += 1;
        let generation = state.generation;

        if let Some(previous) = state.pending.take() {
            previous.cancel();
        }
        let token = inner.shutdown.child_token();
        state.pending = Some(token.clone());
        inner.status.send_replace(SaveStatus::Unsaved);
        drop(state);

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(inner.settings.quiet_period) => {
                    if let Err(e) = inner.persist_pending(generation).await {
                        tracing::warn!("[AutoSave] Debounced save failed: {}", e);
                    }
                }
            }
        });
    }

    /// Empties the document right away.
    ///
    /// Cancels any pending write and stores
    /// `{content: "", updatedAt: <server time>, passwordHash: <space key>}`.
    pub async fn clear(&self) -> Result<()> {
        let inner = &self.inner;
        let generation = {
            let mut state = inner.state.lock().await;
            if let Some(pending) = state.pending.take() {
                pending.cancel();
            }
            state.content.clear();
            state.generation += 1;
            state.generation
        };

        let patch = DocumentPatch::new()
            .with_content("")
            .with_updated_at(Timestamp::Server)
            .with_password_hash(inner.key.as_str());
        tracing::info!("[AutoSave] Clearing {}", inner.key);
        inner.write(generation, patch).await
    }

    /// Writes pending content now instead of waiting for the quiet period.
    ///
    /// Returns whether anything was written.
    pub async fn flush(&self) -> Result<bool> {
        let generation = {
            let mut state = self.inner.state.lock().await;
            match state.pending.take() {
                Some(pending) => {
                    pending.cancel();
                    state.generation
                }
                None => return Ok(false),
            }
        };
        self.inner.persist(generation).await?;
        Ok(true)
    }

    /// Stops all scheduling; the pending write (if any) is dropped.
    pub async fn unmount(&self) {
        self.inner.shutdown.cancel();
        let mut state = self.inner.state.lock().await;
        state.pending = None;
        tracing::debug!("[AutoSave] Unmounted {}", self.inner.key);
    }

    pub fn status(&self) -> SaveStatus {
        *self.inner.status.borrow()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<SaveStatus> {
        self.inner.status.subscribe()
    }

    /// Last content reported (or loaded).
    pub async fn content(&self) -> String {
        self.inner.state.lock().await.content.clone()
    }

    pub async fn is_ready(&self) -> bool {
        self.inner.state.lock().await.ready
    }

    pub async fn has_pending_save(&self) -> bool {
        self.inner.state.lock().await.pending.is_some()
    }

    /// True within the display window after a successful write.
    pub async fn recently_saved(&self) -> bool {
        let state = self.inner.state.lock().await;
        state
            .last_saved_at
            .is_some_and(|at| at.elapsed() < self.inner.settings.saved_display)
    }
}

impl Drop for AutoSaveController {
    fn drop(&mut self) {
        self.inner.shutdown.cancel();
    }
}

impl Inner {
    /// Timer callback: writes the content of `generation` unless a newer
    /// change superseded it or flush, clear or unmount already took the
    /// pending write.
    async fn persist_pending(&self, generation: u64) -> Result<()> {
        {
            let mut state = self.state.lock().await;
            if state.generation != generation || state.pending.is_none() {
                return Ok(());
            }
            state.pending = None;
        }
        self.persist(generation).await
    }

    async fn persist(&self, generation: u64) -> Result<()> {
        let content = self.state.lock().await.content.clone();
        let patch = DocumentPatch::new()
            .with_content(content)
            .with_updated_at(Timestamp::now());
        self.write(generation, patch).await
    }

    async fn write(&self, generation: u64, patch: DocumentPatch) -> Result<()> {
        let _ordered = self.writes.lock().await;
        self.status.send_replace(SaveStatus::Saving);

        let result = self
            .store
            .set(
                &self.settings.collection,
                self.key.as_str(),
                &patch,
                SetOptions::merge(),
            )
            .await;

        let mut state = self.state.lock().await;
        let current = state.generation == generation;
        match &result {
            Ok(()) => {
                tracing::debug!("[AutoSave] Saved {}", self.key);
                if current {
                    state.last_saved_at = Some(Instant::now());
                    self.status.send_replace(SaveStatus::Saved);
                } else {
                    // A newer change is waiting for its own write.
                    self.status.send_replace(SaveStatus::Unsaved);
                }
            }
            Err(e) => {
                tracing::error!("[AutoSave] Failed to save {}: {}", self.key, e);
                self.status.send_replace(SaveStatus::Unsaved);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use securepad_core::document::PadDocument;
    use securepad_core::error::PadError;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct MockDocumentStore {
        document: StdMutex<Option<PadDocument>>,
        writes: StdMutex<Vec<DocumentPatch>>,
        fail_reads: bool,
        fail_writes: StdMutex<bool>,
    }

    impl MockDocumentStore {
        fn with_content(content: &str) -> Self {
            Self {
                document: StdMutex::new(Some(PadDocument {
                    content: content.to_string(),
                    ..PadDocument::default()
                })),
                ..Self::default()
            }
        }

        fn writes(&self) -> Vec<DocumentPatch> {
            self.writes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DocumentStore for MockDocumentStore {
        async fn get(&self, _collection: &str, id: &str) -> Result<Option<PadDocument>> {
            if self.fail_reads {
                return Err(PadError::store_read(id, "unreachable"));
            }
            Ok(self.document.lock().unwrap().clone())
        }

        async fn set(
            &self,
            _collection: &str,
            id: &str,
            patch: &DocumentPatch,
            _options: SetOptions,
        ) -> Result<()> {
            if *self.fail_writes.lock().unwrap() {
                return Err(PadError::store_write(id, "permission denied"));
            }
            self.writes.lock().unwrap().push(patch.clone());
            Ok(())
        }
    }

    fn controller(store: Arc<MockDocumentStore>) -> AutoSaveController {
        AutoSaveController::new(
            store,
            SpaceKey::derive("secret1"),
            AutoSaveSettings::default(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_changes_before_load_are_ignored() {
        let store = Arc::new(MockDocumentStore::default());
        let autosave = controller(store.clone());

        autosave.on_content_changed("early").await;
        assert!(!autosave.has_pending_save().await);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(store.writes().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_transitions() {
        let store = Arc::new(MockDocumentStore::default());
        let autosave = controller(store.clone());
        autosave.load().await;
        assert_eq!(autosave.status(), SaveStatus::Saved);

        autosave.on_content_changed("a").await;
        assert_eq!(autosave.status(), SaveStatus::Unsaved);

        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert_eq!(autosave.status(), SaveStatus::Saved);
        assert!(autosave.recently_saved().await);

        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert_eq!(autosave.status(), SaveStatus::Saved);
        assert!(!autosave.recently_saved().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_write_reverts_to_unsaved() {
        let store = Arc::new(MockDocumentStore::default());
        *store.fail_writes.lock().unwrap() = true;
        let autosave = controller(store.clone());
        autosave.load().await;

        autosave.on_content_changed("lost?").await;
        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert_eq!(autosave.status(), SaveStatus::Unsaved);

        // Next edit recovers once the store is back.
        *store.fail_writes.lock().unwrap() = false;
        autosave.on_content_changed("recovered").await;
        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert_eq!(autosave.status(), SaveStatus::Saved);
        assert_eq!(store.writes()[0].content.as_deref(), Some("recovered"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_failure_is_fail_open() {
        let store = Arc::new(MockDocumentStore {
            fail_reads: true,
            ..MockDocumentStore::default()
        });
        let autosave = controller(store.clone());

        assert_eq!(autosave.load().await, LoadOutcome::Failed);
        assert!(autosave.is_ready().await);

        autosave.on_content_changed("still editable").await;
        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert_eq!(store.writes().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unchanged_content_schedules_nothing() {
        let store = Arc::new(MockDocumentStore::with_content("X"));
        let autosave = controller(store.clone());
        assert_eq!(autosave.load().await, LoadOutcome::Loaded("X".to_string()));

        autosave.on_content_changed("X").await;
        assert!(!autosave.has_pending_save().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_writes_immediately() {
        let store = Arc::new(MockDocumentStore::default());
        let autosave = controller(store.clone());
        autosave.load().await;

        autosave.on_content_changed("now").await;
        assert!(autosave.flush().await.unwrap());
        assert_eq!(store.writes().len(), 1);
        assert!(!autosave.flush().await.unwrap());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(store.writes().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_firing_after_flush_does_not_write_again() {
        let store = Arc::new(MockDocumentStore::default());
        let autosave = controller(store.clone());
        autosave.load().await;

        autosave.on_content_changed("once").await;
        let generation = autosave.inner.state.lock().await.generation;
        assert!(autosave.flush().await.unwrap());

        // The timer task already left its select when flush cancelled it.
        autosave.inner.persist_pending(generation).await.unwrap();

        assert_eq!(store.writes().len(), 1);
        assert_eq!(autosave.status(), SaveStatus::Saved);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_cancels_pending_write() {
        let store = Arc::new(MockDocumentStore::default());
        let autosave = controller(store.clone());
        autosave.load().await;

        autosave.on_content_changed("draft").await;
        autosave.unmount().await;
        autosave.on_content_changed("after").await;

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(store.writes().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_write() {
        let store = Arc::new(MockDocumentStore::default());
        {
            let autosave = controller(store.clone());
            autosave.load().await;
            autosave.on_content_changed("draft").await;
        }
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(store.writes().is_empty());
    }
}
