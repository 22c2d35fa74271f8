//! Pad document model.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A stored pad, one per space key.
///
/// Field names follow the persisted layout (`content`, `updatedAt`,
/// `passwordHash`). Any other stored keys are carried in `extra` so merge
/// writes leave them in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PadDocument {
    /// Serialized rich-text markup
    #[serde(default)]
    pub content: String,
    /// ISO-8601 timestamp of the last write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Mirror of the document id, written by "clear"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// Stored keys this model does not know about
    #[serde(flatten)]
    pub extra: toml::Table,
}

/// Timestamp value carried by a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    /// Client-side ISO-8601 string
    Iso8601(String),
    /// Placeholder the store replaces with its own clock
    Server,
}

impl Timestamp {
    /// Client-side "now" in the `2024-01-01T00:00:00.000Z` shape.
    pub fn now() -> Self {
        Self::Iso8601(format_timestamp(Utc::now()))
    }

    /// Resolves the value, using `server_now` for [`Timestamp::Server`].
    pub fn resolve(&self, server_now: DateTime<Utc>) -> String {
        match self {
            Self::Iso8601(value) => value.clone(),
            Self::Server => format_timestamp(server_now),
        }
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Write options understood by [`super::DocumentStore::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetOptions {
    pub merge: bool,
}

impl SetOptions {
    pub fn merge() -> Self {
        Self { merge: true }
    }

    pub fn replace() -> Self {
        Self { merge: false }
    }
}

/// Partial document written to the store. `None` fields are not touched by a
/// merge write.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentPatch {
    pub content: Option<String>,
    pub updated_at: Option<Timestamp>,
    pub password_hash: Option<String>,
}

impl DocumentPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_updated_at(mut self, updated_at: Timestamp) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    pub fn with_password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = Some(password_hash.into());
        self
    }

    /// Merges the patch into an existing document.
    pub fn merge_into(&self, document: &mut PadDocument, server_now: DateTime<Utc>) {
        if let Some(content) = &self.content {
            document.content = content.clone();
        }
        if let Some(updated_at) = &self.updated_at {
            document.updated_at = Some(updated_at.resolve(server_now));
        }
        if let Some(password_hash) = &self.password_hash {
            document.password_hash = Some(password_hash.clone());
        }
    }

    /// Builds a fresh document from the patch alone (replace semantics).
    pub fn to_document(&self, server_now: DateTime<Utc>) -> PadDocument {
        let mut document = PadDocument::default();
        self.merge_into(&mut document, server_now);
        document
    }

    /// Applies the patch to `existing` according to `options`.
    pub fn apply(
        &self,
        existing: Option<PadDocument>,
        options: SetOptions,
        server_now: DateTime<Utc>,
    ) -> PadDocument {
        match existing {
            Some(mut document) if options.merge => {
                self.merge_into(&mut document, server_now);
                document
            }
            _ => self.to_document(server_now),
        }
    }
}
