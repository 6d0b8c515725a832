//! File-based History Store Adapter
//!
//! Stores the bytes of each key in `{base_path}/{key}.json`.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::ports::{validate_key, HistoryStore, StoreError};

/// File-based storage for serialized history.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write bytes to `{key}.json.tmp`
/// 2. Sync to disk
/// 3. Rename to `{key}.json`
///
/// A crash or failed write leaves the previous file in place.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    base_path: PathBuf,
}

impl FileHistoryStore {
    /// Create a new file store rooted at `base_path`.
    ///
    /// The directory is created on first save.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the file holding `key`.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json.tmp", key))
    }

    /// Best-effort removal of a temp file left by a failed save.
    fn discard_temp(path: &Path) {
        if let Err(e) = fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "Could not remove temp file");
        }
    }

    fn map_io(path: &Path, action: &str, e: std::io::Error) -> StoreError {
        match e.kind() {
            ErrorKind::PermissionDenied => StoreError::permission_denied(path.display().to_string()),
            _ => StoreError::io(format!("Failed to {} {}: {}", action, path.display(), e)),
        }
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_key(key)?;
        let path = self.key_path(key);

        match fs::read(&path) {
            Ok(bytes) => {
                tracing::debug!(key, bytes = bytes.len(), "Loaded history file");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(key, "No history file yet");
                Ok(None)
            }
            Err(e) => Err(Self::map_io(&path, "read", e)),
        }
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        validate_key(key)?;

        fs::create_dir_all(&self.base_path)
            .map_err(|e| Self::map_io(&self.base_path, "create directory", e))?;

        let temp_path = self.temp_path(key);
        let final_path = self.key_path(key);

        let mut file =
            fs::File::create(&temp_path).map_err(|e| Self::map_io(&temp_path, "create", e))?;
        let written = file.write_all(bytes).and_then(|()| file.sync_all());
        drop(file);
        if let Err(e) = written {
            Self::discard_temp(&temp_path);
            return Err(Self::map_io(&temp_path, "write", e));
        }

        if let Err(e) = fs::rename(&temp_path, &final_path) {
            Self::discard_temp(&temp_path);
            return Err(StoreError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            )));
        }

        tracing::debug!(key, bytes = bytes.len(), path = %final_path.display(), "Saved history file");
        Ok(())
    }
}
