//! Snapshot persistence for pointscene
//!
//! This crate provides the key-value backends that hold the editor's
//! persisted state and the JSON codec that turns a point collection into a
//! snapshot string and back.

pub mod storage;
pub mod snapshot;
pub mod error;

pub use error::*;
pub use snapshot::{PersistedSnapshot, SnapshotCodec, DEFAULT_SNAPSHOT_VERSION};
pub use storage::{FileStorage, FileStorageOptions, MemoryStorage, SnapshotStorage};

use pointscene_core::PointCollection;

/// Read and decode the snapshot under `key`.
///
/// Returns `Ok(None)` when nothing is stored.
pub fn load_collection(
    storage: &dyn SnapshotStorage,
    key: &str,
    codec: &SnapshotCodec,
) -> StorageResult<Option<PointCollection>> {
    match storage.get(key)? {
        Some(text) => codec.decode(&text).map(Some),
        None => Ok(None),
    }
}

/// Encode `collection` and overwrite the snapshot under `key`
pub fn save_collection(
    storage: &dyn SnapshotStorage,
    key: &str,
    codec: &SnapshotCodec,
    collection: &PointCollection,
) -> StorageResult<()> {
    let text = codec.encode(collection)?;
    storage.set(key, &text)
}
