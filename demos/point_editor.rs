//! Command-line point editor over a file-backed store
//!
//! Run with: cargo run -p pointscene-demos --bin point_editor -- --store-dir ./scene add 1 2 3

use anyhow::Context;
use clap::{Parser, Subcommand};
use pointscene_core::Axis;
use pointscene_editor::{validate_patch, PointForm, PointStore, StoreConfig, DEFAULT_STORAGE_KEY};
use pointscene_io::FileStorage;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// CLI arguments for the point editor.
#[derive(Parser, Debug)]
#[command(name = "point-editor")]
#[command(about = "Add, edit and remove 3D points; prints the centroid and connecting segments")]
struct Args {
    /// Directory holding the snapshot file.
    #[arg(long, default_value = ".pointscene")]
    store_dir: PathBuf,

    /// Name of the snapshot entry.
    #[arg(long, default_value = DEFAULT_STORAGE_KEY)]
    key: String,

    /// Print the scene as JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Append a point
    Add {
        #[arg(allow_hyphen_values = true)]
        x: String,
        #[arg(allow_hyphen_values = true)]
        y: String,
        #[arg(allow_hyphen_values = true)]
        z: String,
    },
    /// Change some coordinates of the point at INDEX
    Update {
        index: usize,
        #[arg(long, allow_hyphen_values = true)]
        x: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        y: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        z: Option<String>,
    },
    /// Remove the point at INDEX
    Remove { index: usize },
    /// Print points, centroid and segments
    List,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config = StoreConfig::new()
        .with_storage_key(args.key.clone())
        .with_pretty_snapshots(true);
    let mut store = PointStore::with_config(FileStorage::new(&args.store_dir), config);

    let edited = match args.command {
        Command::Add { x, y, z } => {
            let mut form = PointForm::new();
            form.set(Axis::X, x);
            form.set(Axis::Y, y);
            form.set(Axis::Z, z);
            let point = form.submit_add(&mut store)?;
            println!("added [{}] {}", store.len() - 1, point);
            true
        }
        Command::Update { index, x, y, z } => {
            let patch = validate_patch([x.as_deref(), y.as_deref(), z.as_deref()])?;
            let updated = store.update_point(index, patch);
            match store.get(index) {
                Some(point) if updated => println!("updated [{}] {}", index, point),
                _ => println!("no point at index {}", index),
            }
            updated
        }
        Command::Remove { index } => {
            let removed = store.remove_point(index);
            if removed {
                println!("removed [{}]", index);
            } else {
                println!("no point at index {}", index);
            }
            removed
        }
        Command::List => false,
    };

    // The store only logs failed writes; flush once more to report them.
    if edited {
        store
            .persist()
            .with_context(|| format!("writing snapshot to {}", args.store_dir.display()))?;
    }

    let scene = store.scene();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&scene)?);
        return Ok(());
    }

    if scene.is_empty() {
        println!("no points");
        return Ok(());
    }
    for p in &scene.points {
        println!("[{}] {}", p.index, p.position);
    }
    match scene.centroid {
        Some(centroid) => {
            println!("centroid {}", centroid);
            for segment in &scene.segments {
                println!("  {} -> {} (length {:.3})", segment.start, segment.end, segment.length());
            }
        }
        None => println!("centroid undefined (needs at least 2 points)"),
    }

    Ok(())
}
