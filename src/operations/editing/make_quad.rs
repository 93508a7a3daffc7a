use crate::config::EditorConfig;
use crate::math::polygon_2d::snap_to_grid;
use crate::math::Point2;
use crate::registry::{PolygonKey, PolygonRegistry};

/// Creates a square polygon at the cursor and makes it current.
///
/// The ring runs origin, `+y`, `+x+y`, `+x` (clockwise with y up).
pub struct MakeQuad {
    origin: Point2,
    size: f64,
    grid_step: Option<f64>,
}

impl MakeQuad {
    /// Creates a new `MakeQuad` operation for a unit square at `origin`.
    #[must_use]
    pub fn new(origin: Point2) -> Self {
        let config = EditorConfig::default();
        Self {
            origin,
            size: config.quad_size,
            grid_step: config.grid_step,
        }
    }

    /// Takes the square size and grid snapping from editor settings.
    #[must_use]
    pub fn with_config(mut self, config: &EditorConfig) -> Self {
        self.size = config.quad_size;
        self.grid_step = config.grid_step;
        self
    }

    /// Executes the operation, returning the new polygon's key.
    pub fn execute(&self, registry: &mut PolygonRegistry) -> PolygonKey {
        let o = match self.grid_step {
            Some(step) => snap_to_grid(&self.origin, step),
            None => self.origin,
        };
        let s = self.size;
        let key = registry.add_polygon(&[
            o,
            Point2::new(o.x, o.y + s),
            Point2::new(o.x + s, o.y + s),
            Point2::new(o.x + s, o.y),
        ]);
        // deselect first so the previous polygon's vertex selection is dropped
        let _ = registry.deselect_polygon();
        let _ = registry.select_polygon(key);
        key
    }
}
