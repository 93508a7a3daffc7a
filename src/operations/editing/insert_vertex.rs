use crate::error::EditError;
use crate::math::Point2;
use crate::registry::{PolygonRegistry, VertexId};

/// Inserts a vertex right after the current vertex of the current polygon
/// and makes it the current vertex.
pub struct InsertVertex {
    position: Point2,
}

impl InsertVertex {
    /// Creates a new `InsertVertex` operation.
    #[must_use]
    pub fn new(position: Point2) -> Self {
        Self { position }
    }

    /// Executes the insertion, returning the new vertex id.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoSelection`] if there is no current polygon or
    /// no current vertex. The registry is left unchanged.
    pub fn execute(&self, registry: &mut PolygonRegistry) -> Result<VertexId, EditError> {
        let (key, anchor) = registry.anchor()?;
        let id = registry.insert_vertex_after(key, anchor, self.position)?;
        registry.select_vertex(id)?;
        Ok(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn inserts_after_anchor() {
        let mut registry = PolygonRegistry::new();
        let key = registry.add_polygon(&[p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)]);
        let anchor = registry.polygon(key).unwrap().ring()[1];
        registry.select_vertex(anchor).unwrap();

        let id = InsertVertex::new(p(0.5, 1.5)).execute(&mut registry).unwrap();
        let ring = registry.ring_positions(key).unwrap();
        assert_eq!(ring[2], p(0.5, 1.5));
        assert_eq!(ring.len(), 5);
        assert_eq!(registry.current_vertex(), Some(id));
        assert!(!registry.vertex(anchor).unwrap().selected);
    }

    #[test]
    fn inserting_after_last_vertex_appends() {
        let mut registry = PolygonRegistry::new();
        let key = registry.add_polygon(&[p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)]);
        let last = registry.polygon(key).unwrap().ring()[2];
        registry.select_vertex(last).unwrap();
        InsertVertex::new(p(0.5, -0.5)).execute(&mut registry).unwrap();
        assert_eq!(registry.ring_positions(key).unwrap()[3], p(0.5, -0.5));
    }

    #[test]
    fn requires_selection() {
        let mut registry = PolygonRegistry::new();
        let key = registry.add_polygon(&[p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)]);
        assert_eq!(
            InsertVertex::new(p(2.0, 2.0)).execute(&mut registry),
            Err(EditError::NoSelection("polygon"))
        );
        registry.select_polygon(key).unwrap();
        assert_eq!(
            InsertVertex::new(p(2.0, 2.0)).execute(&mut registry),
            Err(EditError::NoSelection("vertex"))
        );
        assert_eq!(registry.polygon(key).unwrap().len(), 3);
    }
}
