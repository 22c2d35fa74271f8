//! TOML-file document store.

use crate::paths::PadPaths;
use crate::storage::AtomicTomlFile;
use async_trait::async_trait;
use chrono::Utc;
use securepad_core::document::{DocumentPatch, DocumentStore, PadDocument, SetOptions};
use securepad_core::error::{PadError, Result};
use std::path::{Path, PathBuf};
use tokio::task;

/// File-backed [`DocumentStore`].
///
/// Stores each document in `<root>/<collection>/<id>.toml`.
///
/// # Features
///
/// - **Atomic writes**: tmp file + fsync + rename through [`AtomicTomlFile`]
/// - **Merge under lock**: read-modify-write holds an exclusive file lock
/// - **Async-safe**: All file I/O runs in `tokio::task::spawn_blocking`
pub struct FileDocumentStore {
    root_dir: PathBuf,
}

impl FileDocumentStore {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Creates a store under the platform data directory.
    pub fn default_location() -> Result<Self> {
        let root_dir = PadPaths::documents_dir().map_err(|e| PadError::config(e.to_string()))?;
        Ok(Self::new(root_dir))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Resolves the file for a document, rejecting names that would escape
    /// the store root.
    fn document_path(&self, collection: &str, id: &str) -> std::result::Result<PathBuf, String> {
        for (kind, name) in [("collection", collection), ("document id", id)] {
            if name.is_empty()
                || name == "."
                || name == ".."
                || name.contains(['/', '\\'])
            {
                return Err(format!("invalid {kind} '{name}'"));
            }
        }
        Ok(self
            .root_dir
            .join(collection)
            .join(format!("{}.toml", id)))
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<PadDocument>> {
        let path = self
            .document_path(collection, id)
            .map_err(|e| PadError::store_read(id, e))?;

        let file = AtomicTomlFile::<PadDocument>::new(path);
        task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| PadError::internal(format!("Failed to join blocking task: {}", e)))?
            .map_err(|e| PadError::store_read(id, e))
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        patch: &DocumentPatch,
        options: SetOptions,
    ) -> Result<()> {
        let path = self
            .document_path(collection, id)
            .map_err(|e| PadError::store_write(id, e))?;
        let patch = patch.clone();

        tracing::debug!("[FileDocumentStore] Writing {}", path.display());
        let file = AtomicTomlFile::<PadDocument>::new(path);
        task::spawn_blocking(move || {
            file.update(PadDocument::default(), |document| {
                *document = patch.apply(Some(document.clone()), options, Utc::now());
                Ok(())
            })
        })
        .await
        .map_err(|e| PadError::internal(format!("Failed to join blocking task: {}", e)))?
        .map_err(|e| PadError::store_write(id, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_document_layout_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileDocumentStore::new(temp_dir.path());

        store
            .set(
                "pads",
                "pad_99162322",
                &DocumentPatch::new().with_content("hello"),
                SetOptions::merge(),
            )
            .await
            .unwrap();

        let path = temp_dir.path().join("pads").join("pad_99162322.toml");
        let raw = std::fs::read_to_string(path).unwrap();
        assert!(raw.contains("content = \"hello\""));
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileDocumentStore::new(temp_dir.path());

        let err = store.get("pads", "../escape").await.unwrap_err();
        assert!(err.is_store());

        let err = store
            .set("..", "pad_1", &DocumentPatch::new(), SetOptions::merge())
            .await
            .unwrap_err();
        assert!(matches!(err, PadError::StoreWrite { .. }));
    }
}
