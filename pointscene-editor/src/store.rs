//! The point store: single owner of the editable point collection
//!
//! All edits go through [`PointStore`]. After each edit the store rewrites
//! its snapshot in the configured [`SnapshotStorage`] and then hands the new
//! immutable [`PointSnapshot`] to every subscriber.

use crate::config::StoreConfig;
use pointscene_algorithms::{compute_centroid, compute_line_segments, SceneModel};
use pointscene_core::{LineSegment, Point, PointCollection, PointPatch, PointSnapshot, Result};
use pointscene_io::{load_collection, save_collection, MemoryStorage, SnapshotCodec, SnapshotStorage};
use std::fmt;
use tracing::{debug, info, warn};

/// Handle returned by [`PointStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&PointSnapshot)>;

/// Ordered, persistent point collection with change notifications
pub struct PointStore {
    points: PointCollection,
    snapshot: PointSnapshot,
    storage: Box<dyn SnapshotStorage>,
    codec: SnapshotCodec,
    config: StoreConfig,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl PointStore {
    /// Open a store over `storage` with the default configuration
    pub fn new<S: SnapshotStorage + 'static>(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    /// A store backed by fresh in-memory storage
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Open a store, rehydrating from the snapshot under the configured key.
    ///
    /// A missing, unreadable or malformed snapshot leaves the store empty.
    pub fn with_config<S: SnapshotStorage + 'static>(storage: S, config: StoreConfig) -> Self {
        let codec = config.codec();
        let points = match load_collection(&storage, &config.storage_key, &codec) {
            Ok(Some(points)) => points,
            Ok(None) => PointCollection::new(),
            Err(e) => {
                warn!(
                    key = %config.storage_key,
                    backend = storage.backend_name(),
                    error = %e,
                    "ignoring unusable snapshot, starting empty"
                );
                PointCollection::new()
            }
        };

        info!(
            key = %config.storage_key,
            backend = storage.backend_name(),
            points = points.len(),
            "point store opened"
        );

        Self {
            snapshot: PointSnapshot::new(&points),
            points,
            storage: Box::new(storage),
            codec,
            config,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &dyn SnapshotStorage {
        self.storage.as_ref()
    }

    /// Current points in display order
    pub fn points(&self) -> &[Point] {
        self.points.as_slice()
    }

    /// Immutable snapshot of the current points
    pub fn snapshot(&self) -> PointSnapshot {
        self.snapshot.clone()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Append `point` at the end of the collection
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
        debug!(index = self.points.len() - 1, %point, "point added");
        self.commit();
    }

    /// Merge `patch` over the point at `index`.
    ///
    /// An out-of-range index is ignored: nothing changes, nothing is written
    /// and no subscriber is notified. Returns whether a point was updated.
    pub fn update_point(&mut self, index: usize, patch: PointPatch) -> bool {
        if !self.points.update(index, &patch) {
            debug!(index, len = self.points.len(), "update ignored, index out of range");
            return false;
        }
        debug!(index, point = %self.points[index], "point updated");
        self.commit();
        true
    }

    /// Remove the point at `index`, shifting later points down by one.
    ///
    /// An out-of-range index is ignored. Returns whether a point was removed.
    pub fn remove_point(&mut self, index: usize) -> bool {
        match self.points.remove(index) {
            Some(point) => {
                debug!(index, %point, "point removed");
                self.commit();
                true
            }
            None => {
                debug!(index, len = self.points.len(), "remove ignored, index out of range");
                false
            }
        }
    }

    /// Centroid of the current points; `None` below two points
    pub fn centroid(&self) -> Option<Point> {
        compute_centroid(self.points.as_slice())
    }

    /// Segments from the centroid to each current point
    pub fn line_segments(&self) -> Vec<LineSegment> {
        compute_line_segments(self.points.as_slice(), self.centroid())
    }

    /// Everything a renderer needs for the current points
    pub fn scene(&self) -> SceneModel {
        SceneModel::derive(self.points.as_slice())
    }

    /// Register `listener` to receive the new snapshot after each change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&PointSnapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a subscription. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Write the current points to storage, overwriting the previous snapshot
    pub fn persist(&self) -> Result<()> {
        save_collection(
            self.storage.as_ref(),
            &self.config.storage_key,
            &self.codec,
            &self.points,
        )?;
        debug!(key = %self.config.storage_key, points = self.points.len(), "snapshot written");
        Ok(())
    }

    fn commit(&mut self) {
        self.snapshot = PointSnapshot::new(&self.points);

        if self.config.persist_on_mutation {
            if let Err(e) = self.persist() {
                warn!(
                    key = %self.config.storage_key,
                    error = %e,
                    "failed to write snapshot, keeping in-memory state"
                );
            }
        }

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.snapshot);
        }
    }
}

impl fmt::Debug for PointStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointStore")
            .field("points", &self.points)
            .field("backend", &self.storage.backend_name())
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store_with(points: &[Point]) -> PointStore {
        let mut store = PointStore::in_memory();
        for p in points {
            store.add_point(*p);
        }
        store
    }

    #[test]
    fn test_add_appends() {
        let mut store = store_with(&[Point::new(0.0, 0.0, 0.0)]);
        let p = Point::new(4.0, 5.0, 6.0);
        store.add_point(p);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1), Some(p));
    }

    #[test]
    fn test_update_keeps_unspecified_fields() {
        let mut store = store_with(&[Point::new(1.0, 2.0, 3.0), Point::new(4.0, 5.0, 6.0)]);
        assert!(store.update_point(1, PointPatch::new().with_x(10.0)));
        assert_eq!(store.points(), &[Point::new(1.0, 2.0, 3.0), Point::new(10.0, 5.0, 6.0)]);
    }

    #[test]
    fn test_out_of_range_edits_are_noops() {
        let mut store = store_with(&[Point::new(1.0, 2.0, 3.0)]);
        let before = store.snapshot();
        let stored_before = store.storage().get("points").unwrap();

        assert!(!store.update_point(1, PointPatch::new().with_x(0.0)));
        assert!(!store.remove_point(1));
        assert!(!store.remove_point(usize::MAX));

        assert_eq!(store.snapshot(), before);
        assert_eq!(store.storage().get("points").unwrap(), stored_before);
    }

    #[test]
    fn test_remove_shifts_down() {
        let mut store = store_with(&[
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
        ]);
        assert!(store.remove_point(0));
        assert_eq!(store.points(), &[Point::new(1.0, 0.0, 0.0), Point::new(2.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_subscribers_receive_latest_snapshot() {
        let mut store = PointStore::in_memory();
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = Rc::clone(&seen);
        store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.len()));

        store.add_point(Point::new(1.0, 1.0, 1.0));
        store.add_point(Point::new(2.0, 2.0, 2.0));
        store.remove_point(5);
        store.remove_point(0);

        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn test_listeners_run_in_order_after_write() {
        let storage = MemoryStorage::new();
        let mut store = PointStore::new(storage.clone());
        let log: Rc<RefCell<Vec<(&str, usize, usize)>>> = Rc::default();

        for tag in ["first", "second"] {
            let sink = Rc::clone(&log);
            let stored = storage.clone();
            store.subscribe(move |snapshot| {
                let text = stored.get("points").unwrap().unwrap();
                let written = SnapshotCodec::default().decode(&text).unwrap();
                sink.borrow_mut().push((tag, snapshot.len(), written.len()));
            });
        }

        store.add_point(Point::new(1.0, 2.0, 3.0));
        store.add_point(Point::new(4.0, 5.0, 6.0));
        store.remove_point(0);

        assert_eq!(
            *log.borrow(),
            vec![
                ("first", 1, 1),
                ("second", 1, 1),
                ("first", 2, 2),
                ("second", 2, 2),
                ("first", 1, 1),
                ("second", 1, 1),
            ]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = PointStore::in_memory();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.add_point(Point::origin());
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_point(Point::origin());

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_snapshot_survives_later_edits() {
        let mut store = store_with(&[Point::new(1.0, 1.0, 1.0)]);
        let held = store.snapshot();
        store.update_point(0, PointPatch::new().with_y(9.0));
        assert_eq!(held[0], Point::new(1.0, 1.0, 1.0));
        assert_eq!(store.get(0), Some(Point::new(1.0, 9.0, 1.0)));
    }

    #[test]
    fn test_persist_disabled_writes_nothing_until_flushed() {
        let storage = MemoryStorage::new();
        let config = StoreConfig::new().with_persist_on_mutation(false);
        let mut store = PointStore::with_config(storage.clone(), config);

        store.add_point(Point::new(1.0, 2.0, 3.0));
        assert!(storage.is_empty());

        store.persist().unwrap();
        assert!(storage.get("points").unwrap().is_some());
    }

    #[test]
    fn test_non_finite_point_keeps_previous_snapshot() {
        let storage = MemoryStorage::new();
        let mut store = PointStore::new(storage.clone());
        store.add_point(Point::new(1.0, 1.0, 1.0));
        let written = storage.get("points").unwrap();

        store.add_point(Point::new(f64::INFINITY, 0.0, 0.0));

        assert_eq!(store.len(), 2);
        assert_eq!(storage.get("points").unwrap(), written);
        assert!(store.persist().is_err());
    }
}
