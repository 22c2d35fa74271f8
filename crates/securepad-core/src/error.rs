//! Error types for SecurePad.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole pad.
///
/// Variants follow the pad's failure taxonomy: validation and auth errors are
/// shown inline to the user, store errors are logged and the editor keeps
/// working. Nothing here is meant to be fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PadError {
    /// Password rejected before any identity call was made.
    #[error("{0}")]
    Validation(String),

    /// Identity provider call failed (sign-in or sign-out)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Loading a document from the store failed
    #[error("Failed to load document '{id}': {message}")]
    StoreRead { id: String, message: String },

    /// Writing a document to the store failed
    #[error("Failed to save document '{id}': {message}")]
    StoreWrite { id: String, message: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PadError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an Auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Wraps any error raised while reading `id` from the document store.
    pub fn store_read(id: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::StoreRead {
            id: id.into(),
            message: source.to_string(),
        }
    }

    /// Wraps any error raised while writing `id` to the document store.
    pub fn store_write(id: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::StoreWrite {
            id: id.into(),
            message: source.to_string(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an Auth error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Check if this error came from the document store (read or write).
    pub fn is_store(&self) -> bool {
        matches!(self, Self::StoreRead { .. } | Self::StoreWrite { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Errors the user should see next to the password field.
    pub fn is_user_facing(&self) -> bool {
        self.is_validation() || self.is_auth()
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for PadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for PadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for PadError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for PadError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error, used by adapters that wrap foreign SDKs.
impl From<anyhow::Error> for PadError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, PadError>`.
pub type Result<T> = std::result::Result<T, PadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = PadError::validation("Please enter a password");
        assert_eq!(err.to_string(), "Please enter a password");
        assert!(err.is_user_facing());
    }

    #[test]
    fn test_store_errors_are_not_user_facing() {
        let err = PadError::store_write("pad_1", "quota exceeded");
        assert!(err.is_store());
        assert!(!err.is_user_facing());
        assert_eq!(
            err.to_string(),
            "Failed to save document 'pad_1': quota exceeded"
        );
    }

    #[test]
    fn test_io_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: PadError = io.into();
        match err {
            PadError::Io { message } => assert!(message.contains("PermissionDenied")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
