#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use approx::assert_relative_eq;
use polyear::io::{load_map_data, save_map_data, save_triangles, TriangleData};
use polyear::math::Point2;
use polyear::overlay::{overlay, OverlayKind};
use polyear::physics::{FixtureBuilder, FixtureSet};
use polyear::registry::Highlight;
use polyear::tessellation::{triangulate, Triangle};
use polyear::{FixtureParams, PersistenceError, PolygonKey, PolygonRegistry, PolygonStatus, Process};

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

/// Records every build and destroy call, one handle per triangle.
#[derive(Default)]
struct Recorder {
    next: usize,
    live: Vec<(usize, PolygonKey)>,
    params_seen: Vec<FixtureParams>,
}

impl FixtureBuilder for Recorder {
    type Handle = usize;

    fn build(&mut self, key: PolygonKey, triangles: &[Triangle], params: &FixtureParams) -> Vec<usize> {
        self.params_seen.push(*params);
        triangles
            .iter()
            .map(|_| {
                self.next += 1;
                self.live.push((self.next, key));
                self.next
            })
            .collect()
    }

    fn destroy(&mut self, handle: usize) {
        self.live.retain(|&(h, _)| h != handle);
    }
}

fn sample_registry() -> (PolygonRegistry, [PolygonKey; 4]) {
    let mut registry = PolygonRegistry::new();
    let square = registry.add_polygon(&[p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)]);
    let bowtie = registry.add_polygon(&[p(3.0, 0.0), p(4.0, 1.0), p(4.0, 0.0), p(3.0, 1.0)]);
    let stub = registry.add_polygon(&[p(6.0, 0.0), p(7.0, 0.0)]);
    let l_shape = registry.add_polygon(&[
        p(10.0, 0.0),
        p(12.0, 0.0),
        p(12.0, 1.0),
        p(11.0, 1.0),
        p(11.0, 2.0),
        p(10.0, 2.0),
    ]);
    (registry, [square, bowtie, stub, l_shape])
}

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("polyear-{}-{name}", std::process::id()))
}

#[test]
fn failure_is_isolated_to_its_polygon() {
    let (mut registry, [square, bowtie, stub, l_shape]) = sample_registry();
    let mut fixtures = FixtureSet::new();
    let mut builder = Recorder::default();

    let report = Process::default().execute(&mut registry, &mut fixtures, &mut builder);
    assert_eq!(
        report.statuses,
        vec![
            (square, PolygonStatus::Triangulated(2)),
            (bowtie, PolygonStatus::Failed),
            (stub, PolygonStatus::Incomplete),
            (l_shape, PolygonStatus::Triangulated(4)),
        ]
    );
    assert_eq!(report.failed().collect::<Vec<_>>(), vec![bowtie]);
    assert_eq!(report.triangle_count(), 6);
    assert_eq!(report.fixtures, 6);

    assert_eq!(fixtures.handles_for(bowtie).count(), 0);
    assert_eq!(fixtures.handles_for(stub).count(), 0);
    assert_eq!(fixtures.handles_for(l_shape).count(), 4);
    assert!(builder.live.iter().all(|&(_, k)| k == square || k == l_shape));
    assert!(builder
        .params_seen
        .iter()
        .all(|params| *params == FixtureParams::default()));

    let bowtie_vertex = registry.polygon(bowtie).unwrap().ring()[0];
    assert_eq!(
        registry.highlight(bowtie_vertex).unwrap(),
        Highlight::InFailedPolygon
    );
    assert!(overlay(&registry)
        .iter()
        .any(|line| line.kind == OverlayKind::FailedOutline));
}

#[test]
fn editing_after_process_rebuilds_cleanly() {
    let (mut registry, [_, bowtie, ..]) = sample_registry();
    let mut fixtures = FixtureSet::new();
    let mut builder = Recorder::default();
    let process = Process::new(FixtureParams {
        friction: 0.4,
        ..FixtureParams::default()
    });

    process.execute(&mut registry, &mut fixtures, &mut builder);
    registry.remove_polygon(bowtie).unwrap();
    let report = process.execute(&mut registry, &mut fixtures, &mut builder);

    assert_eq!(report.failed().count(), 0);
    assert_eq!(builder.live.len(), 6);
    assert_eq!(fixtures.len(), 6);
    assert!(builder.params_seen.iter().all(|params| (params.friction - 0.4).abs() < 1e-12));

    fixtures.clear(&mut builder);
    assert!(builder.live.is_empty());
}

#[test]
fn save_and_load_round_trip() {
    let (mut registry, keys) = sample_registry();
    let mut fixtures = FixtureSet::new();
    let mut builder = Recorder::default();
    Process::default().execute(&mut registry, &mut fixtures, &mut builder);

    let map_path = scratch_file("map.json");
    let triangles_path = scratch_file("triangles.json");
    save_map_data(&map_path, &registry).unwrap();
    save_triangles(&triangles_path, &registry).unwrap();

    let mut reloaded = PolygonRegistry::new();
    assert_eq!(load_map_data(&map_path, &mut reloaded).unwrap(), 4);
    assert_eq!(reloaded.current_polygon(), Some(keys[3]));
    for key in keys {
        assert_eq!(
            registry.ring_positions(key).unwrap(),
            reloaded.ring_positions(key).unwrap()
        );
    }

    // the saved triangles match a fresh triangulation of each saved ring
    let json = std::fs::read_to_string(&triangles_path).unwrap();
    let data = TriangleData::from_json(&json).unwrap();
    assert_eq!(data.triangles.len(), 4);
    for (key, saved) in keys.iter().zip(&data.triangles) {
        let ring = reloaded.ring_positions(*key).unwrap();
        let expected = triangulate(&ring).unwrap_or_default();
        let saved: Vec<Triangle> = saved.iter().copied().map(Triangle::from).collect();
        assert_eq!(saved.as_slice(), expected.as_slice());
    }
    let area: f64 = data.triangles[3]
        .iter()
        .copied()
        .map(|r| Triangle::from(r).area())
        .sum();
    assert_relative_eq!(area, 3.0);

    std::fs::remove_file(map_path).unwrap();
    std::fs::remove_file(triangles_path).unwrap();
}

#[test]
fn missing_file_keeps_registry() {
    let (mut registry, _) = sample_registry();
    let result = load_map_data(scratch_file("does-not-exist.json"), &mut registry);
    assert!(matches!(result, Err(PersistenceError::Io(_))));
    assert_eq!(registry.len(), 4);
}
