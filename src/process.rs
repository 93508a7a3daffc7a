//! The editor's "Process" trigger: triangulate every polygon, then replace
//! every collision fixture.

use tracing::{debug, warn};

use crate::config::FixtureParams;
use crate::error::TriangulationError;
use crate::physics::{FixtureBuilder, FixtureSet};
use crate::registry::{PolygonKey, PolygonRegistry, PolygonStatus};
use crate::tessellation::{EarClip, TriangleSet};

/// Per-polygon outcome of one Process run, in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessReport {
    pub statuses: Vec<(PolygonKey, PolygonStatus)>,
    /// Fixtures alive after the run.
    pub fixtures: usize,
}

impl ProcessReport {
    /// Polygons whose triangulation failed.
    pub fn failed(&self) -> impl Iterator<Item = PolygonKey> + '_ {
        self.statuses
            .iter()
            .filter(|(_, s)| *s == PolygonStatus::Failed)
            .map(|&(k, _)| k)
    }

    /// Total number of triangles produced.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.statuses
            .iter()
            .map(|(_, s)| match s {
                PolygonStatus::Triangulated(n) => *n,
                _ => 0,
            })
            .sum()
    }
}

/// Replaces every polygon's triangle set with a fresh ear-clipping result.
///
/// A polygon that cannot be triangulated gets an empty set and a status
/// saying why; the others are unaffected.
pub fn triangulate_all(registry: &mut PolygonRegistry) -> Vec<(PolygonKey, PolygonStatus)> {
    let results: Vec<_> = registry
        .polygons()
        .map(|(key, polygon)| {
            let ring = registry.positions_of(polygon);
            let (triangles, status) = match EarClip::new(&ring).execute() {
                Ok(set) => {
                    let n = set.len();
                    (set, PolygonStatus::Triangulated(n))
                }
                Err(TriangulationError::DegenerateInput { len }) => {
                    debug!(%key, len, "polygon incomplete, skipped");
                    (TriangleSet::default(), PolygonStatus::Incomplete)
                }
                Err(err @ TriangulationError::UnresolvableEar { .. }) => {
                    warn!(%key, error = %err, "polygon triangulation failed");
                    (TriangleSet::default(), PolygonStatus::Failed)
                }
            };
            (key, triangles, status)
        })
        .collect();

    results
        .into_iter()
        .filter_map(|(key, triangles, status)| {
            registry.set_result(key, triangles, status).ok()?;
            Some((key, status))
        })
        .collect()
}

/// Runs triangulation over the whole registry and rebuilds fixtures.
pub struct Process {
    params: FixtureParams,
}

impl Process {
    /// Creates a new `Process` operation with the given fixture material.
    #[must_use]
    pub fn new(params: FixtureParams) -> Self {
        Self { params }
    }

    /// Executes the run. Old fixtures are destroyed before new ones are
    /// built; polygons with no triangles get no fixtures.
    pub fn execute<B>(
        &self,
        registry: &mut PolygonRegistry,
        fixtures: &mut FixtureSet<B::Handle>,
        builder: &mut B,
    ) -> ProcessReport
    where
        B: FixtureBuilder,
    {
        let statuses = triangulate_all(registry);
        let fixtures = fixtures.rebuild(builder, registry, &self.params);
        let report = ProcessReport { statuses, fixtures };
        debug!(
            polygons = report.statuses.len(),
            triangles = report.triangle_count(),
            failed = report.failed().count(),
            "process finished"
        );
        report
    }
}

impl Default for Process {
    fn default() -> Self {
        Self::new(FixtureParams::default())
    }
}
