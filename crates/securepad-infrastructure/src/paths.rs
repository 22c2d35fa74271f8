//! Path management for SecurePad files.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// No platform config/data directory could be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Platform paths for the pad.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/securepad/         # Config directory
/// └── config.toml              # Pad configuration
///
/// ~/.local/share/securepad/    # Data directory
/// └── documents/               # FileDocumentStore root
///     └── pads/
///         └── pad_99162322.toml
/// ```
pub struct PadPaths;

impl PadPaths {
    const APP_DIR: &'static str = "securepad";

    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Root directory of the file-backed document store.
    pub fn documents_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("documents"))
    }
}
