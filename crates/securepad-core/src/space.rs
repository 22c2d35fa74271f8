//! Password to space-key derivation.
//!
//! The key is a 32-bit polynomial rolling hash of the password, so two
//! different passwords can land on the same pad. This is a known weakness of
//! the scheme; the key is only a lookup handle and never a credential.

use serde::{Deserialize, Serialize};
use std::fmt;

const KEY_PREFIX: &str = "pad_";

/// Identifier of the remote document a password maps to (`pad_<n>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceKey(String);

impl SpaceKey {
    /// Derives the space key for `password`.
    ///
    /// Hashes UTF-16 code units so keys match the ones already stored by
    /// earlier clients of the same collection.
    pub fn derive(password: &str) -> Self {
        let hash = password
            .encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));

        // unsigned_abs keeps i32::MIN representable (2147483648)
        Self(format!("{KEY_PREFIX}{}", hash.unsigned_abs()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SpaceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Free-function form of [`SpaceKey::derive`].
pub fn derive_key(password: &str) -> SpaceKey {
    SpaceKey::derive(password)
}
