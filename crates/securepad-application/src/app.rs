//! Top-level pad lifecycle: password form, editor mount, sign-out.

use crate::autosave::{AutoSaveController, AutoSaveSettings};
use crate::editing::EditingSession;
use crate::session::SessionController;
use securepad_core::config::PadConfig;
use securepad_core::document::DocumentStore;
use securepad_core::editor::{RichTextMutator, RichTextSurface, ShortcodeDetector};
use securepad_core::emoji::EmojiCatalog;
use securepad_core::error::{PadError, Result};
use securepad_core::identity::{IdentityProvider, SessionToken};
use securepad_core::space::SpaceKey;
use securepad_infrastructure::{FileDocumentStore, LocalIdentityProvider};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;

/// Wires the session controller to an editor per signed-in space.
///
/// The editor exists only while the session has both a provider token and a
/// password; a provider-side sign-out observed through [`PadApp::sync_auth`]
/// unmounts it as well.
pub struct PadApp<S: RichTextSurface + Default> {
    config: PadConfig,
    store: Arc<dyn DocumentStore>,
    catalog: Arc<EmojiCatalog>,
    session: SessionController,
    auth_state: watch::Receiver<Option<SessionToken>>,
    editor: Option<EditingSession<S>>,
}

impl<S: RichTextSurface + Default> PadApp<S> {
    pub fn new(
        config: PadConfig,
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let session = SessionController::from_config(identity, &config);
        let auth_state = session.watch_auth();
        Self {
            config,
            store,
            catalog: EmojiCatalog::builtin(),
            session,
            auth_state,
            editor: None,
        }
    }

    /// Pad backed by TOML files under `root_dir` with in-process identity.
    pub fn local(config: PadConfig, root_dir: impl Into<PathBuf>) -> Self {
        Self::new(
            config,
            Arc::new(FileDocumentStore::new(root_dir)),
            Arc::new(LocalIdentityProvider::new()),
        )
    }

    pub fn with_catalog(mut self, catalog: Arc<EmojiCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn editor(&self) -> Option<&EditingSession<S>> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut EditingSession<S>> {
        self.editor.as_mut()
    }

    /// Submits the password form and mounts the editor on success.
    pub async fn sign_in(&mut self, password: &str) -> Result<SpaceKey> {
        let session = self.session.submit(password).await?;
        let key = session.space_key();
        self.mount(key.clone()).await;
        Ok(key)
    }

    /// Saves pending edits, ends the provider session and unmounts.
    ///
    /// If the provider refuses, the editor stays mounted and the error is
    /// returned.
    pub async fn sign_out(&mut self) -> Result<()> {
        if let Some(editor) = &self.editor {
            if let Err(e) = editor.flush().await {
                tracing::warn!("[PadApp] Final save before sign-out failed: {}", e);
            }
        }
        self.session.sign_out().await?;
        self.unmount().await;
        Ok(())
    }

    /// Applies the latest provider auth state.
    pub async fn sync_auth(&mut self) {
        let token = self.auth_state.borrow_and_update().clone();
        self.session.sync_auth_state(token);
        if !self.session.is_editor_visible() && self.editor.is_some() {
            tracing::info!("[PadApp] Session ended by provider; closing editor");
            self.unmount().await;
        }
    }

    /// Waits for the next auth-state change and applies it.
    pub async fn next_auth_change(&mut self) -> Result<()> {
        self.auth_state
            .changed()
            .await
            .map_err(|_| PadError::auth("identity provider stopped publishing auth state"))?;
        self.sync_auth().await;
        Ok(())
    }

    async fn mount(&mut self, key: SpaceKey) {
        // Re-submitting the form replaces the current editor.
        self.unmount().await;

        tracing::info!("[PadApp] Opening {}", key);
        let autosave = AutoSaveController::new(
            Arc::clone(&self.store),
            key,
            AutoSaveSettings::from(&self.config),
        );
        let editor = EditingSession::mount(
            S::default(),
            autosave,
            RichTextMutator::new(self.config.image_emoji_height_px),
            ShortcodeDetector::new(Arc::clone(&self.catalog), self.config.max_suggestions),
        )
        .await;
        self.editor = Some(editor);
    }

    async fn unmount(&mut self) {
        if let Some(mut editor) = self.editor.take() {
            editor.unmount().await;
        }
    }
}
