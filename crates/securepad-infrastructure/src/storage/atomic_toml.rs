//! Atomic TOML file operations.
//!
//! Every write goes to a sibling temp file that is fsynced and renamed over
//! the target, so readers see either the old or the new document.

use securepad_core::error::{PadError, Result};
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A handle to a TOML file with atomic replace semantics.
///
/// Provides:
/// - **Atomicity**: Updates are all-or-nothing via tmp file + atomic rename
/// - **Isolation**: `update` holds an exclusive lock for read-modify-write
/// - **Durability**: Explicit fsync before rename
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = toml::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves data atomically (temp file + fsync + rename).
    pub fn save(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;

        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Read-modify-write under an exclusive lock.
    ///
    /// `f` receives the stored value, or `default_value` when the file does
    /// not exist yet. The result is written back atomically when `f`
    /// succeeds.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<()>
    where
        F: FnOnce(&mut T) -> Result<()>,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);

        f(&mut data)?;

        self.save(&data)?;

        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| PadError::io(format!("{} has no parent directory", self.path.display())))?;

        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| PadError::io(format!("{} has no file name", self.path.display())))?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}

/// Exclusive lock guard, released when the handle closes.
///
/// The `.lock` file is left in place: unlinking it while another writer
/// waits on it would let a third writer lock a fresh inode concurrently.
struct FileLock {
    _file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        use fs2::FileExt;

        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()
            .map_err(|e| PadError::io(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { _file: file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use securepad_core::document::PadDocument;
    use tempfile::TempDir;

    fn document(content: &str) -> PadDocument {
        PadDocument {
            content: content.to_string(),
            ..PadDocument::default()
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<PadDocument>::new(temp_dir.path().join("pad_1.toml"));

        file.save(&document("<b>hi</b>")).unwrap();

        let loaded = file.load().unwrap().unwrap();
        assert_eq!(loaded.content, "<b>hi</b>");
        assert!(loaded.updated_at.is_none());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<PadDocument>::new(temp_dir.path().join("missing.toml"));

        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pad_2.toml");
        fs::write(&path, "content = [unterminated").unwrap();

        let err = AtomicTomlFile::<PadDocument>::new(path).load().unwrap_err();
        assert!(matches!(err, PadError::Serialization { .. }));
    }

    #[test]
    fn test_update_creates_then_modifies() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<PadDocument>::new(temp_dir.path().join("nested/pad_3.toml"));

        file.update(PadDocument::default(), |doc| {
            doc.content.push_str("one");
            Ok(())
        })
        .unwrap();
        file.update(PadDocument::default(), |doc| {
            doc.content.push_str(" two");
            Ok(())
        })
        .unwrap();

        assert_eq!(file.load().unwrap().unwrap().content, "one two");
    }

    #[test]
    fn test_failed_update_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<PadDocument>::new(temp_dir.path().join("pad_4.toml"));
        file.save(&document("keep")).unwrap();

        let result = file.update(PadDocument::default(), |doc| {
            doc.content = "lost".to_string();
            Err(PadError::internal("abort"))
        });

        assert!(result.is_err());
        assert_eq!(file.load().unwrap().unwrap().content, "keep");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pad_5.toml");
        let file = AtomicTomlFile::<PadDocument>::new(path.clone());

        file.save(&document("x")).unwrap();

        assert!(!temp_dir.path().join(".pad_5.toml.tmp").exists());
        assert!(path.exists());
    }
}
