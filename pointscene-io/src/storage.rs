//! Key-value snapshot storage
//!
//! A [`SnapshotStorage`] holds named text entries. The editor keeps exactly
//! one entry (its serialized point collection) and overwrites it after every
//! change, so backends only need whole-value get/set/remove.

use crate::error::{StorageError, StorageResult};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Trait for backends that persist named snapshot strings
pub trait SnapshotStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` if nothing is stored
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete the value under `key`; deleting a missing key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Get the backend name, for diagnostics
    fn backend_name(&self) -> &'static str;
}

/// In-process storage.
///
/// Clones share the same entries, so a store can be dropped and rebuilt over
/// a clone to simulate a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries().remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

/// Configuration for [`FileStorage`]
#[derive(Debug, Clone)]
pub struct FileStorageOptions {
    /// File extension appended to each key
    pub extension: String,
    /// Whether to create the storage directory on first write
    pub create_dirs: bool,
}

impl Default for FileStorageOptions {
    fn default() -> Self {
        Self {
            extension: "json".to_string(),
            create_dirs: true,
        }
    }
}

impl FileStorageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extension<S: Into<String>>(mut self, extension: S) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }
}

/// Storage with one file per key inside a directory.
///
/// Writes land in a temporary sibling file first and are renamed over the
/// target, so a reader only ever sees the last complete snapshot.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
    options: FileStorageOptions,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self::with_options(root, FileStorageOptions::default())
    }

    pub fn with_options<P: AsRef<Path>>(root: P, options: FileStorageOptions) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            options,
        }
    }

    /// Resolve the file backing `key`.
    ///
    /// Keys must be non-empty and may not contain path separators or `..`.
    pub fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
            });
        }

        let file_name = if self.options.extension.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", key, self.options.extension)
        };
        Ok(self.root.join(file_name))
    }
}

impl SnapshotStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        if self.options.create_dirs {
            fs::create_dir_all(&self.root)?;
        }

        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, value).map_err(|e| StorageError::WriteError {
            message: format!("{}: {}", tmp.display(), e),
        })?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::WriteError {
                message: format!("{}: {}", path.display(), e),
            });
        }

        debug!(path = %path.display(), bytes = value.len(), "wrote snapshot file");
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
