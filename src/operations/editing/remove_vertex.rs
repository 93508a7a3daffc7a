use crate::error::EditError;
use crate::math::Point2;
use crate::registry::{PolygonRegistry, VertexId};

/// Removes a vertex from the current polygon's ring.
///
/// By default the current vertex is removed. With [`RemoveVertex::picked`]
/// a hit-tested vertex is selected first and then removed, which is how the
/// editor's remove tool works; it only acts on the current polygon.
#[derive(Default)]
pub struct RemoveVertex {
    target: Option<VertexId>,
}

impl RemoveVertex {
    /// Creates a new `RemoveVertex` operation for the current vertex.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets a vertex returned by a hit test instead.
    #[must_use]
    pub fn picked(mut self, id: VertexId) -> Self {
        self.target = Some(id);
        self
    }

    /// Executes the removal, returning the removed vertex's position.
    /// Clears the current vertex.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoSelection`] without a current polygon or
    /// vertex, and [`EditError::UnknownVertex`] if a picked vertex is not
    /// part of the current polygon.
    pub fn execute(&self, registry: &mut PolygonRegistry) -> Result<Point2, EditError> {
        if let Some(id) = self.target {
            let current = registry
                .current_polygon()
                .ok_or(EditError::NoSelection("polygon"))?;
            if !registry.polygon(current)?.contains(id) {
                return Err(EditError::UnknownVertex);
            }
            registry.select_vertex(id)?;
        }
        let (key, id) = registry.anchor()?;
        let position = registry.vertex(id)?.position;
        registry.remove_vertex(key, id)?;
        Ok(position)
    }
}
