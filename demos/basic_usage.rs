//! Basic usage example for pointscene
//!
//! This example walks through one editing session:
//! - Adding points through the edit form
//! - Editing and removing points
//! - Reading the derived centroid and segments
//! - Reopening the store over the same storage

use pointscene_algorithms::CentroidGeometry;
use pointscene_core::{Axis, Point, PointPatch};
use pointscene_editor::{PointForm, PointStore};
use pointscene_io::MemoryStorage;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("pointscene Example");
    println!("==================");

    let storage = MemoryStorage::new();
    let mut store = PointStore::new(storage.clone());

    store.subscribe(|snapshot| {
        println!(
            "  -> {} point(s), centroid: {}",
            snapshot.len(),
            describe(snapshot.centroid())
        );
    });

    println!("\nAdding points:");
    let mut form = PointForm::new();
    for (x, y, z) in [("1", "1", "1"), ("3", "1", "1")] {
        form.set(Axis::X, x);
        form.set(Axis::Y, y);
        form.set(Axis::Z, z);
        let point = form.submit_add(&mut store)?;
        println!("- added {}", point);
    }

    println!("\nRejected input:");
    form.set(Axis::X, "one");
    form.set(Axis::Y, "");
    form.set(Axis::Z, "2");
    if let Err(e) = form.validate() {
        println!("- {}", e);
    }

    println!("\nEditing point 1:");
    store.update_point(1, PointPatch::new().with_y(4.0));

    println!("\nScene:");
    print_scene(&store);

    println!("\nRemoving point 0:");
    store.remove_point(0);
    print_scene(&store);

    println!("\nReopening over the same storage:");
    let reopened = PointStore::new(storage);
    println!("- restored points: {:?}", reopened.points());

    Ok(())
}

fn describe(point: Option<Point>) -> String {
    point.map_or_else(|| "none".to_string(), |p| p.to_string())
}

fn print_scene(store: &PointStore) {
    let scene = store.scene();
    for p in &scene.points {
        println!("- [{}] {} (key {})", p.index, p.position, p.key);
    }
    println!("- centroid: {}", describe(scene.centroid));
    for segment in &scene.segments {
        println!("- segment {} -> {}", segment.start, segment.end);
    }
}
