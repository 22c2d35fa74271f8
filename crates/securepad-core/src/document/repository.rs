//! Document store trait.
//!
//! Defines the interface of the external document database the pad writes to.

use super::model::{DocumentPatch, PadDocument, SetOptions};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract key-value document service.
///
/// Documents are addressed by `(collection, id)`. The pad only ever reads a
/// whole document and writes full-content patches; it never deletes.
///
/// # Implementation Notes
///
/// - A missing document is `Ok(None)`, never an error.
/// - With `SetOptions { merge: true }` the write is an upsert that leaves
///   fields absent from the patch untouched.
/// - `Timestamp::Server` must be resolved by the store at write time.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches a document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(PadDocument))`: Document found
    /// - `Ok(None)`: No document stored under this id yet
    /// - `Err(_)`: The store could not be reached or the data is unreadable
    async fn get(&self, collection: &str, id: &str) -> Result<Option<PadDocument>>;

    /// Writes a document.
    ///
    /// # Arguments
    ///
    /// * `collection` - Collection name (`"pads"` for the editor)
    /// * `id` - Document id (the derived space key)
    /// * `patch` - Fields to write
    /// * `options` - Merge or replace semantics
    async fn set(
        &self,
        collection: &str,
        id: &str,
        patch: &DocumentPatch,
        options: SetOptions,
    ) -> Result<()>;
}
