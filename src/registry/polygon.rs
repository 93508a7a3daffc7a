use std::fmt;
use std::str::FromStr;

use super::vertex::VertexId;
use crate::error::EditError;
use crate::tessellation::TriangleSet;

const KEY_PREFIX: &str = "Polygon";

/// Registry key of a polygon, displayed as `Polygon<N>`.
///
/// Keys are handed out sequentially, so ordering keys orders polygons by
/// creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolygonKey(u32);

impl PolygonKey {
    pub(crate) fn new(index: u32) -> Self {
        Self(index)
    }

    /// Sequence number of this key.
    #[must_use]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PolygonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{KEY_PREFIX}{}", self.0)
    }
}

impl FromStr for PolygonKey {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(KEY_PREFIX)
            .and_then(|n| n.parse().ok())
            .map(Self)
            .ok_or_else(|| EditError::UnknownKey(s.to_owned()))
    }
}

/// Outcome of the last Process run for a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonStatus {
    /// Not processed since it was created or loaded.
    #[default]
    Pending,
    /// Decomposed into the given number of triangles.
    Triangulated(usize),
    /// Fewer than 3 vertices; produced no triangles.
    Incomplete,
    /// No ear could be clipped; produced no triangles.
    Failed,
}

/// An ordered, cyclic ring of vertices. The last vertex connects back to
/// the first.
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    ring: Vec<VertexId>,
    triangles: TriangleSet,
    status: PolygonStatus,
}

impl Polygon {
    pub(crate) fn from_ring(ring: Vec<VertexId>) -> Self {
        Self {
            ring,
            ..Self::default()
        }
    }

    /// Vertex ids in ring order.
    #[must_use]
    pub fn ring(&self) -> &[VertexId] {
        &self.ring
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// A ring needs at least 3 vertices to enclose an area.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.ring.len() >= 3
    }

    #[must_use]
    pub fn contains(&self, id: VertexId) -> bool {
        self.ring.contains(&id)
    }

    /// Ring index of `id`, if it belongs to this polygon.
    #[must_use]
    pub fn position_of(&self, id: VertexId) -> Option<usize> {
        self.ring.iter().position(|&v| v == id)
    }

    /// Triangles produced by the last Process run.
    #[must_use]
    pub fn triangles(&self) -> &TriangleSet {
        &self.triangles
    }

    #[must_use]
    pub fn status(&self) -> PolygonStatus {
        self.status
    }

    /// Inserts `id` right after `anchor`. Returns `false` if `anchor` is not
    /// in the ring.
    pub(crate) fn insert_after(&mut self, anchor: VertexId, id: VertexId) -> bool {
        match self.position_of(anchor) {
            Some(i) => {
                self.ring.insert(i + 1, id);
                true
            }
            None => false,
        }
    }

    /// Removes `id` from the ring, keeping the order of the others.
    pub(crate) fn remove(&mut self, id: VertexId) -> bool {
        match self.position_of(id) {
            Some(i) => {
                self.ring.remove(i);
                true
            }
            None => false,
        }
    }

    pub(crate) fn take_ring(&mut self) -> Vec<VertexId> {
        std::mem::take(&mut self.ring)
    }

    pub(crate) fn set_result(&mut self, triangles: TriangleSet, status: PolygonStatus) {
        self.triangles = triangles;
        self.status = status;
    }
}
