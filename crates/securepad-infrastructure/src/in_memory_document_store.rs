//! Process-local document store.

use async_trait::async_trait;
use chrono::Utc;
use securepad_core::document::{DocumentPatch, DocumentStore, PadDocument, SetOptions};
use securepad_core::error::Result;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory [`DocumentStore`].
///
/// Keeps documents for the lifetime of the process with the same
/// merge/upsert semantics as a remote store. Useful for demos and tests.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<(String, String), PadDocument>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents across all collections.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<PadDocument>> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(&(collection.to_string(), id.to_string()))
            .cloned())
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        patch: &DocumentPatch,
        options: SetOptions,
    ) -> Result<()> {
        let key = (collection.to_string(), id.to_string());
        let mut documents = self.documents.write().await;
        let existing = documents.remove(&key);
        let document = patch.apply(existing, options, Utc::now());
        tracing::debug!(
            "[InMemoryDocumentStore] Stored {}/{} ({} bytes)",
            collection,
            id,
            document.content.len()
        );
        documents.insert(key, document);
        Ok(())
    }
}
