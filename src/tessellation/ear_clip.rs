use tracing::trace;

use crate::error::TriangulationError;
use crate::math::polygon_2d::{point_in_closed_triangle, signed_area_2d, turn};
use crate::math::Point2;

use super::{Triangle, TriangleSet};

/// Working copy of one ring vertex for a single clipping pass.
#[derive(Debug, Clone, Copy)]
struct RingNode {
    point: Point2,
    prev: usize,
    next: usize,
    /// Already cut into an emitted triangle.
    processed: bool,
    /// Part of the candidate ear, skipped by the emptiness test.
    evaluated: bool,
}

/// Doubly-linked ring over node indices. Clipping a node unlinks it, so
/// `prev`/`next` always point at the nearest unprocessed neighbours.
struct WorkingRing {
    nodes: Vec<RingNode>,
}

impl WorkingRing {
    fn new(points: &[Point2]) -> Self {
        let n = points.len();
        let nodes = points
            .iter()
            .enumerate()
            .map(|(i, &point)| RingNode {
                point,
                prev: (i + n - 1) % n,
                next: (i + 1) % n,
                processed: false,
                evaluated: false,
            })
            .collect();
        Self { nodes }
    }

    fn unlink(&mut self, i: usize) {
        let RingNode { prev, next, .. } = self.nodes[i];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[i].processed = true;
    }

    fn set_evaluated(&mut self, ids: [usize; 3], value: bool) {
        for i in ids {
            self.nodes[i].evaluated = value;
        }
    }

    /// No live node outside the candidate lies inside `abc` or on its
    /// boundary. Nodes sitting exactly on a corner are duplicates of it and
    /// never block.
    fn ear_is_empty(&self, a: &Point2, b: &Point2, c: &Point2) -> bool {
        !self
            .nodes
            .iter()
            .filter(|n| !n.processed && !n.evaluated)
            .filter(|n| n.point != *a && n.point != *b && n.point != *c)
            .any(|n| point_in_closed_triangle(&n.point, a, b, c))
    }

    fn live_points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.nodes.iter().filter(|n| !n.processed).map(|n| n.point)
    }
}

/// Decomposes a simple polygon ring into triangles by ear clipping.
///
/// Starting at the first vertex, the cursor walks the ring. At each stop the
/// vertex and its nearest live neighbours form a candidate ear; it is clipped
/// when the vertex is convex with respect to the ring's winding and no other
/// live vertex lies inside it. The cursor then moves to the next
/// neighbour whether or not a cut happened. When three vertices remain they
/// form the last triangle.
///
/// Both tests are exact sign tests without tolerance. Collinear vertices are
/// never ear tips, and a vertex touching the candidate's boundary (say a
/// reflex corner lying on the would-be diagonal) blocks it. A ring of `n`
/// vertices yields `n - 2` triangles.
pub struct EarClip<'a> {
    ring: &'a [Point2],
}

impl<'a> EarClip<'a> {
    /// Creates a new `EarClip` operation over ring positions in order.
    #[must_use]
    pub fn new(ring: &'a [Point2]) -> Self {
        Self { ring }
    }

    /// Executes the clipping pass.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::DegenerateInput`] for rings of fewer than
    /// 3 vertices, and [`TriangulationError::UnresolvableEar`] when a full lap
    /// of the remaining ring finds no ear (self-intersecting or zero-area
    /// input).
    pub fn execute(&self) -> Result<TriangleSet, TriangulationError> {
        let n = self.ring.len();
        if n < 3 {
            return Err(TriangulationError::DegenerateInput { len: n });
        }
        let mut triangles = TriangleSet::with_capacity(n - 2);
        if n == 3 {
            triangles.push(Triangle::new(self.ring[0], self.ring[1], self.ring[2]));
            return Ok(triangles);
        }

        // +1 for counter-clockwise, -1 for clockwise, 0 when the ring has no area
        let winding = signum(signed_area_2d(self.ring));
        let mut ring = WorkingRing::new(self.ring);
        let mut p = 0;
        let mut remaining = n;
        let mut misses = 0;

        while remaining > 3 {
            let RingNode { prev, next, .. } = ring.nodes[p];
            ring.set_evaluated([prev, p, next], true);

            let a = ring.nodes[prev].point;
            let b = ring.nodes[p].point;
            let c = ring.nodes[next].point;
            let convex = turn(&a, &b, &c) * winding > 0.0;

            if convex && ring.ear_is_empty(&a, &b, &c) {
                triangles.push(Triangle::new(a, b, c));
                ring.unlink(p);
                remaining -= 1;
                misses = 0;
            } else {
                misses += 1;
            }

            ring.set_evaluated([prev, p, next], false);
            p = next;

            // A lap without a cut leaves the ring unchanged, so no later lap can cut either.
            if misses >= remaining {
                trace!(remaining, "ear clipping stalled");
                return Err(TriangulationError::UnresolvableEar { remaining });
            }
        }

        let last: Vec<Point2> = ring.live_points().collect();
        triangles.push(Triangle::new(last[0], last[1], last[2]));
        Ok(triangles)
    }
}

fn signum(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Triangulates a ring, treating rings of fewer than 3 vertices as
/// incomplete polygons with no triangles.
///
/// # Errors
///
/// Returns [`TriangulationError::UnresolvableEar`] when no ear can be found.
pub fn triangulate(ring: &[Point2]) -> Result<TriangleSet, TriangulationError> {
    match EarClip::new(ring).execute() {
        Err(TriangulationError::DegenerateInput { .. }) => Ok(TriangleSet::default()),
        other => other,
    }
}
