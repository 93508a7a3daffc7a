//! Runs the editor's Process step headless and prints what it produced.
//!
//! Usage:
//! ```text
//! cargo run --example process                              # built-in sample map
//! cargo run --example process -- map.json                  # load a map data file
//! cargo run --example process -- map.json triangles.json   # also save the triangles
//! ```

use polyear::io::{load_map_data, save_triangles};
use polyear::math::Point2;
use polyear::operations::editing::{InsertVertex, MakeQuad, MoveVertex};
use polyear::overlay::{overlay, OverlayKind};
use polyear::physics::{FixtureBuilder, FixtureSet};
use polyear::tessellation::Triangle;
use polyear::{EditorConfig, FixtureParams, PolyearError, PolygonKey, PolygonRegistry, Process};
use tracing::info;

/// Stand-in physics world that only logs what it is asked to build.
#[derive(Default)]
struct LoggingWorld {
    next: u64,
}

impl FixtureBuilder for LoggingWorld {
    type Handle = u64;

    fn build(&mut self, key: PolygonKey, triangles: &[Triangle], params: &FixtureParams) -> Vec<u64> {
        info!(
            %key,
            triangles = triangles.len(),
            density = params.density,
            friction = params.friction,
            "building fixtures"
        );
        triangles
            .iter()
            .map(|_| {
                self.next += 1;
                self.next
            })
            .collect()
    }

    fn destroy(&mut self, handle: u64) {
        tracing::trace!(handle, "fixture destroyed");
    }
}

/// Two quads, one of them pulled into a pentagon, and a bowtie.
fn sample_map(registry: &mut PolygonRegistry, config: &EditorConfig) -> Result<(), PolyearError> {
    MakeQuad::new(Point2::new(0.0, 0.0))
        .with_config(config)
        .execute(registry);

    let key = MakeQuad::new(Point2::new(3.0, 0.0))
        .with_config(config)
        .execute(registry);
    let top_left = registry.polygon(key)?.ring()[1];
    registry.select_vertex(top_left)?;
    InsertVertex::new(Point2::new(3.5, 1.0)).execute(registry)?;
    MoveVertex::new(Point2::new(3.5, 1.8)).execute(registry)?;

    registry.add_polygon(&[
        Point2::new(6.0, 0.0),
        Point2::new(7.0, 1.0),
        Point2::new(7.0, 0.0),
        Point2::new(6.0, 1.0),
    ]);
    Ok(())
}

fn main() -> Result<(), PolyearError> {
    // Default: WARN for everything, INFO for polyear and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polyear=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("process=info".parse().unwrap_or_default())
        .add_directive("polyear=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let config = EditorConfig::default();
    let mut registry = PolygonRegistry::new();
    match args.next() {
        Some(path) => {
            let loaded = load_map_data(&path, &mut registry)?;
            info!(%path, loaded, "map data loaded");
        }
        None => sample_map(&mut registry, &config)?,
    }

    let mut fixtures = FixtureSet::new();
    let mut world = LoggingWorld::default();
    let report = Process::new(config.fixture).execute(&mut registry, &mut fixtures, &mut world);

    for (key, status) in &report.statuses {
        println!("{key}: {status:?}");
    }
    let failed_outlines = overlay(&registry)
        .iter()
        .filter(|line| line.kind == OverlayKind::FailedOutline)
        .count();
    println!(
        "{} triangles, {} fixtures, {} failed outline segments",
        report.triangle_count(),
        report.fixtures,
        failed_outlines
    );

    if let Some(path) = args.next() {
        save_triangles(&path, &registry)?;
        info!(%path, "triangles saved");
    }
    Ok(())
}
