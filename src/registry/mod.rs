pub mod polygon;
pub mod vertex;

pub use polygon::{Polygon, PolygonKey, PolygonStatus};
pub use vertex::{Vertex, VertexId};

use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::error::EditError;
use crate::math::Point2;
use crate::tessellation::TriangleSet;

/// How the editor should draw a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Normal,
    /// Member of the current polygon.
    InSelectedPolygon,
    /// The current vertex.
    Selected,
    /// Member of a polygon whose last triangulation failed.
    InFailedPolygon,
}

/// Owns every polygon and vertex of an editing session, plus the selection.
///
/// Vertices live in a single arena so ids stay unique across polygons and a
/// hit-tested vertex can be traced back to its owner. At most one polygon
/// and one vertex are current at a time, and the current vertex always
/// belongs to the current polygon.
#[derive(Debug, Default)]
pub struct PolygonRegistry {
    vertices: SlotMap<VertexId, Vertex>,
    polygons: BTreeMap<PolygonKey, Polygon>,
    next_key: u32,
    current_polygon: Option<PolygonKey>,
    current_vertex: Option<VertexId>,
}

impl PolygonRegistry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Polygon operations ---

    /// Inserts a polygon with the given ring and returns its key. The
    /// selection is left unchanged.
    pub fn add_polygon(&mut self, positions: &[Point2]) -> PolygonKey {
        let ring = positions
            .iter()
            .map(|&p| self.vertices.insert(Vertex::new(p)))
            .collect();
        let key = PolygonKey::new(self.next_key);
        self.next_key += 1;
        self.polygons.insert(key, Polygon::from_ring(ring));
        key
    }

    /// Returns a reference to the polygon, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownKey`] if no polygon has this key.
    pub fn polygon(&self, key: PolygonKey) -> Result<&Polygon, EditError> {
        self.polygons
            .get(&key)
            .ok_or_else(|| EditError::UnknownKey(key.to_string()))
    }

    pub(crate) fn polygon_mut(&mut self, key: PolygonKey) -> Result<&mut Polygon, EditError> {
        self.polygons
            .get_mut(&key)
            .ok_or_else(|| EditError::UnknownKey(key.to_string()))
    }

    /// Iterates polygons in key (creation) order.
    pub fn polygons(&self) -> impl Iterator<Item = (PolygonKey, &Polygon)> {
        self.polygons.iter().map(|(&k, p)| (k, p))
    }

    pub fn keys(&self) -> impl Iterator<Item = PolygonKey> + '_ {
        self.polygons.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Ring positions of a polygon, in order.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownKey`] if no polygon has this key.
    pub fn ring_positions(&self, key: PolygonKey) -> Result<Vec<Point2>, EditError> {
        let polygon = self.polygon(key)?;
        Ok(self.positions_of(polygon))
    }

    pub(crate) fn positions_of(&self, polygon: &Polygon) -> Vec<Point2> {
        polygon
            .ring()
            .iter()
            .filter_map(|&id| self.vertices.get(id).map(|v| v.position))
            .collect()
    }

    /// Finds the polygon whose ring contains `id` by scanning every polygon.
    #[must_use]
    pub fn owner_of(&self, id: VertexId) -> Option<PolygonKey> {
        self.polygons
            .iter()
            .find(|(_, p)| p.contains(id))
            .map(|(&k, _)| k)
    }

    /// Detaches and destroys all member vertices, then erases the entry.
    /// Clears the selection if it pointed into this polygon.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownKey`] if no polygon has this key.
    pub fn remove_polygon(&mut self, key: PolygonKey) -> Result<(), EditError> {
        let mut polygon = self
            .polygons
            .remove(&key)
            .ok_or_else(|| EditError::UnknownKey(key.to_string()))?;
        for id in polygon.take_ring() {
            self.vertices.remove(id);
        }
        if self.current_polygon == Some(key) {
            self.current_polygon = None;
            self.current_vertex = None;
        }
        Ok(())
    }

    /// Removes the polygon owning `id`, as returned by a hit test.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownVertex`] if no polygon contains `id`.
    pub fn remove_polygon_of(&mut self, id: VertexId) -> Result<PolygonKey, EditError> {
        let key = self.owner_of(id).ok_or(EditError::UnknownVertex)?;
        self.remove_polygon(key)?;
        Ok(key)
    }

    /// Drops every polygon and vertex and restarts key numbering.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // --- Vertex operations ---

    /// Returns a reference to the vertex, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownVertex`] if the vertex was removed.
    pub fn vertex(&self, id: VertexId) -> Result<&Vertex, EditError> {
        self.vertices.get(id).ok_or(EditError::UnknownVertex)
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex, EditError> {
        self.vertices.get_mut(id).ok_or(EditError::UnknownVertex)
    }

    /// Iterates every live vertex with its id.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices.iter()
    }

    pub(crate) fn insert_vertex_after(
        &mut self,
        key: PolygonKey,
        anchor: VertexId,
        position: Point2,
    ) -> Result<VertexId, EditError> {
        let polygon = self
            .polygons
            .get(&key)
            .ok_or_else(|| EditError::UnknownKey(key.to_string()))?;
        if !polygon.contains(anchor) {
            return Err(EditError::UnknownVertex);
        }
        let id = self.vertices.insert(Vertex::new(position));
        self.polygon_mut(key)?.insert_after(anchor, id);
        Ok(id)
    }

    pub(crate) fn remove_vertex(&mut self, key: PolygonKey, id: VertexId) -> Result<(), EditError> {
        if !self.polygon_mut(key)?.remove(id) {
            return Err(EditError::UnknownVertex);
        }
        self.vertices.remove(id);
        if self.current_vertex == Some(id) {
            self.current_vertex = None;
        }
        Ok(())
    }

    pub(crate) fn set_result(
        &mut self,
        key: PolygonKey,
        triangles: TriangleSet,
        status: PolygonStatus,
    ) -> Result<(), EditError> {
        self.polygon_mut(key)?.set_result(triangles, status);
        Ok(())
    }

    // --- Selection ---

    #[must_use]
    pub fn current_polygon(&self) -> Option<PolygonKey> {
        self.current_polygon
    }

    #[must_use]
    pub fn current_vertex(&self) -> Option<VertexId> {
        self.current_vertex
    }

    /// Makes `key` the current polygon. A current vertex outside it is
    /// deselected.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownKey`] if no polygon has this key.
    pub fn select_polygon(&mut self, key: PolygonKey) -> Result<(), EditError> {
        let polygon = self.polygon(key)?;
        if let Some(v) = self.current_vertex {
            if !polygon.contains(v) {
                self.clear_current_vertex();
            }
        }
        self.current_polygon = Some(key);
        Ok(())
    }

    /// Clears the current polygon, and with it the current vertex.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoSelection`] if no polygon is current.
    pub fn deselect_polygon(&mut self) -> Result<(), EditError> {
        if self.current_polygon.take().is_none() {
            return Err(EditError::NoSelection("polygon"));
        }
        self.clear_current_vertex();
        Ok(())
    }

    /// Makes `id` the current vertex and its owner the current polygon.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownVertex`] if `id` belongs to no polygon.
    pub fn select_vertex(&mut self, id: VertexId) -> Result<(), EditError> {
        let owner = self.owner_of(id).ok_or(EditError::UnknownVertex)?;
        self.clear_current_vertex();
        self.vertex_mut(id)?.selected = true;
        self.current_vertex = Some(id);
        self.current_polygon = Some(owner);
        Ok(())
    }

    /// Clears the current vertex.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoSelection`] if no vertex is current.
    pub fn deselect_vertex(&mut self) -> Result<(), EditError> {
        if self.current_vertex.is_none() {
            return Err(EditError::NoSelection("vertex"));
        }
        self.clear_current_vertex();
        Ok(())
    }

    fn clear_current_vertex(&mut self) {
        if let Some(id) = self.current_vertex.take() {
            if let Some(v) = self.vertices.get_mut(id) {
                v.selected = false;
            }
        }
    }

    /// Current polygon and current vertex together, as the editing
    /// operations need them.
    pub(crate) fn anchor(&self) -> Result<(PolygonKey, VertexId), EditError> {
        let key = self
            .current_polygon
            .ok_or(EditError::NoSelection("polygon"))?;
        let id = self.current_vertex.ok_or(EditError::NoSelection("vertex"))?;
        Ok((key, id))
    }

    /// How the vertex should be drawn.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownVertex`] if `id` belongs to no polygon.
    pub fn highlight(&self, id: VertexId) -> Result<Highlight, EditError> {
        if self.vertex(id)?.selected {
            return Ok(Highlight::Selected);
        }
        let owner = self.owner_of(id).ok_or(EditError::UnknownVertex)?;
        if self.current_polygon == Some(owner) {
            return Ok(Highlight::InSelectedPolygon);
        }
        if self.polygon(owner)?.status() == PolygonStatus::Failed {
            return Ok(Highlight::InFailedPolygon);
        }
        Ok(Highlight::Normal)
    }
}
