//! Configuration service implementation.
//!
//! Loads [`PadConfig`] from `config.toml` in the platform config directory
//! (`~/.config/securepad/config.toml` on Linux).

use crate::paths::PadPaths;
use crate::storage::AtomicTomlFile;
use securepad_core::config::PadConfig;
use securepad_core::error::{PadError, Result};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Loads and caches the pad configuration.
///
/// A missing file yields the defaults. An unreadable file is logged and also
/// yields the defaults, so a broken config never keeps the pad from starting.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit file location; `None` resolves the platform path on load.
    path: Option<PathBuf>,
    /// Cached configuration, filled on first access.
    config: Arc<RwLock<Option<PadConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the platform config file lazily.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading `path` instead of the platform location.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading it from file if not cached.
    pub fn get_config(&self) -> PadConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(cached) = read_lock.as_ref() {
                return cached.clone();
            }
        }

        let loaded = match self.load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("[ConfigService] Falling back to default config: {}", e);
                PadConfig::default()
            }
        };

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.clone());

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    fn load_config(&self) -> Result<PadConfig> {
        let path = self.config_path()?;
        tracing::debug!("[ConfigService] Loading config from {}", path.display());
        Ok(AtomicTomlFile::<PadConfig>::new(path)
            .load()?
            .unwrap_or_default())
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => PadPaths::config_file().map_err(|e| PadError::config(e.to_string())),
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
