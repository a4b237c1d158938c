//! Store configuration

use pointscene_io::{SnapshotCodec, DEFAULT_SNAPSHOT_VERSION};

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "points";

/// Configuration for [`PointStore`](crate::PointStore)
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Name of the key-value entry holding the snapshot
    pub storage_key: String,
    /// Version stamped into written snapshots; snapshots with any other
    /// version are ignored on load
    pub snapshot_version: u32,
    /// Whether every mutation rewrites the snapshot.
    ///
    /// With `false` the stored snapshot no longer tracks each edit and a
    /// restart loses everything since the last [`PointStore::persist`]
    /// call.
    ///
    /// [`PointStore::persist`]: crate::PointStore::persist
    pub persist_on_mutation: bool,
    /// Whether snapshots are written as indented JSON
    pub pretty_snapshots: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            snapshot_version: DEFAULT_SNAPSHOT_VERSION,
            persist_on_mutation: true,
            pretty_snapshots: false,
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_storage_key<S: Into<String>>(mut self, key: S) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_snapshot_version(mut self, version: u32) -> Self {
        self.snapshot_version = version;
        self
    }

    pub fn with_persist_on_mutation(mut self, persist: bool) -> Self {
        self.persist_on_mutation = persist;
        self
    }

    pub fn with_pretty_snapshots(mut self, pretty: bool) -> Self {
        self.pretty_snapshots = pretty;
        self
    }

    /// Codec matching this configuration
    pub fn codec(&self) -> SnapshotCodec {
        SnapshotCodec::new(self.snapshot_version).with_pretty(self.pretty_snapshots)
    }
}
