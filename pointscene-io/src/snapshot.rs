//! JSON snapshot codec
//!
//! A snapshot is a versioned envelope around the point record:
//!
//! ```json
//! {"state": {"points": [{"x": 1.0, "y": 2.0, "z": 3.0}]}, "version": 0}
//! ```

use crate::error::{StorageError, StorageResult};
use pointscene_core::PointCollection;
use serde::{Deserialize, Serialize};

/// Version written by default
pub const DEFAULT_SNAPSHOT_VERSION: u32 = 0;

/// On-disk shape of a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSnapshot {
    pub state: PointCollection,
    pub version: u32,
}

/// Encodes and decodes point collections as JSON snapshots
#[derive(Debug, Clone, Copy)]
pub struct SnapshotCodec {
    version: u32,
    pretty: bool,
}

impl Default for SnapshotCodec {
    fn default() -> Self {
        Self::new(DEFAULT_SNAPSHOT_VERSION)
    }
}

impl SnapshotCodec {
    pub fn new(version: u32) -> Self {
        Self {
            version,
            pretty: false,
        }
    }

    /// Emit indented JSON instead of a single line
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Serialize `collection` into a snapshot string.
    ///
    /// Fails on non-finite coordinates, which JSON cannot represent.
    pub fn encode(&self, collection: &PointCollection) -> StorageResult<String> {
        if let Some(index) = collection.iter().position(|p| !p.is_finite()) {
            return Err(StorageError::NonFinitePoint { index });
        }

        let envelope = PersistedSnapshotRef {
            state: collection,
            version: self.version,
        };
        let encoded = if self.pretty {
            serde_json::to_string_pretty(&envelope)
        } else {
            serde_json::to_string(&envelope)
        };
        encoded.map_err(|e| StorageError::WriteError {
            message: e.to_string(),
        })
    }

    /// Parse and validate a snapshot string.
    ///
    /// The envelope must carry this codec's version and every point must
    /// have three finite numeric coordinates.
    pub fn decode(&self, text: &str) -> StorageResult<PointCollection> {
        let snapshot: PersistedSnapshot =
            serde_json::from_str(text).map_err(|e| StorageError::ParseError {
                message: e.to_string(),
            })?;

        if snapshot.version != self.version {
            return Err(StorageError::VersionMismatch {
                found: snapshot.version,
                expected: self.version,
            });
        }
        if let Some(index) = snapshot.state.iter().position(|p| !p.is_finite()) {
            return Err(StorageError::NonFinitePoint { index });
        }

        Ok(snapshot.state)
    }
}

/// Borrowing twin of [`PersistedSnapshot`] so encoding does not clone
#[derive(Serialize)]
struct PersistedSnapshotRef<'a> {
    state: &'a PointCollection,
    version: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointscene_core::Point;

    fn sample() -> PointCollection {
        PointCollection::from_points(vec![
            Point::new(1.0, 1.0, 1.0),
            Point::new(3.0, -1.5, 0.25),
        ])
    }

    #[test]
    fn test_roundtrip_preserves_order_and_values() {
        let codec = SnapshotCodec::default();
        let text = codec.encode(&sample()).unwrap();
        assert_eq!(codec.decode(&text).unwrap(), sample());
    }

    #[test]
    fn test_roundtrip_is_bit_exact() {
        let collection = PointCollection::from_points(vec![
            Point::new(180.17933438838418, -0.1 + 0.2, 1.0715660391465826e-75),
            Point::new(f64::MAX, f64::MIN_POSITIVE, -5e-324),
            Point::new(1.0 / 3.0, std::f64::consts::PI, -987.6543210987654),
        ]);

        for codec in [SnapshotCodec::default(), SnapshotCodec::default().with_pretty(true)] {
            let decoded = codec.decode(&codec.encode(&collection).unwrap()).unwrap();
            for (a, b) in collection.iter().zip(decoded.iter()) {
                assert_eq!(a.x.to_bits(), b.x.to_bits());
                assert_eq!(a.y.to_bits(), b.y.to_bits());
                assert_eq!(a.z.to_bits(), b.z.to_bits());
            }
            assert_eq!(decoded, collection);
        }
    }

    #[test]
    fn test_envelope_layout() {
        let text = SnapshotCodec::default()
            .encode(&PointCollection::from_points(vec![Point::new(1.0, 2.0, 3.0)]))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "state": {"points": [{"x": 1.0, "y": 2.0, "z": 3.0}]},
                "version": 0
            })
        );
    }

    #[test]
    fn test_decode_accepts_integer_coordinates() {
        let collection = SnapshotCodec::default()
            .decode(r#"{"state":{"points":[{"x":1,"y":2,"z":3}]},"version":0}"#)
            .unwrap();
        assert_eq!(collection.as_slice(), &[Point::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn test_decode_rejects_malformed_shapes() {
        let codec = SnapshotCodec::default();
        let bad = [
            "",
            "not json",
            "null",
            r#"{"points": []}"#,
            r#"{"state": {"points": [{"x": 1, "y": 2}]}, "version": 0}"#,
            r#"{"state": {"points": [{"x": "1", "y": 2, "z": 3}]}, "version": 0}"#,
            r#"{"state": {"points": [{"x": null, "y": 2, "z": 3}]}, "version": 0}"#,
            r#"{"state": {"points": {"x": 1}}, "version": 0}"#,
            r#"{"state": {}, "version": 0}"#,
        ];
        for text in bad {
            assert!(
                matches!(codec.decode(text), Err(StorageError::ParseError { .. })),
                "expected parse error for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_decode_rejects_other_versions() {
        let text = SnapshotCodec::new(1).encode(&sample()).unwrap();
        assert!(matches!(
            SnapshotCodec::new(0).decode(&text),
            Err(StorageError::VersionMismatch { found: 1, expected: 0 })
        ));
    }

    #[test]
    fn test_encode_rejects_non_finite() {
        let collection = PointCollection::from_points(vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(f64::NAN, 0.0, 0.0),
        ]);
        assert!(matches!(
            SnapshotCodec::default().encode(&collection),
            Err(StorageError::NonFinitePoint { index: 1 })
        ));
    }

    #[test]
    fn test_pretty_output_decodes() {
        let codec = SnapshotCodec::default().with_pretty(true);
        let text = codec.encode(&sample()).unwrap();
        assert!(text.contains('\n'));
        assert_eq!(codec.decode(&text).unwrap(), sample());
    }
}
