use crate::error::EditError;
use crate::math::polygon_2d::snap_to_grid;
use crate::math::Point2;
use crate::registry::PolygonRegistry;

/// Moves the current vertex, leaving ring order alone.
pub struct MoveVertex {
    position: Point2,
    grid_step: Option<f64>,
}

impl MoveVertex {
    /// Creates a new `MoveVertex` operation.
    #[must_use]
    pub fn new(position: Point2) -> Self {
        Self {
            position,
            grid_step: None,
        }
    }

    /// Snaps the target position to the editing grid.
    #[must_use]
    pub fn snapped(mut self, grid_step: Option<f64>) -> Self {
        self.grid_step = grid_step;
        self
    }

    /// Executes the move.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoSelection`] if there is no current vertex.
    pub fn execute(&self, registry: &mut PolygonRegistry) -> Result<(), EditError> {
        let id = registry
            .current_vertex()
            .ok_or(EditError::NoSelection("vertex"))?;
        let position = match self.grid_step {
            Some(step) => snap_to_grid(&self.position, step),
            None => self.position,
        };
        registry.vertex_mut(id)?.position = position;
        Ok(())
    }
}
