use crate::config::EditorConfig;
use crate::math::Point2;
use crate::registry::{PolygonRegistry, VertexId};

/// Resolves a world-space point to the vertex under it.
///
/// In the editor this is the physics world's point query against the small
/// collision shape each vertex carries.
pub trait VertexPicker {
    fn pick(&self, registry: &PolygonRegistry, point: &Point2) -> Option<VertexId>;
}

/// Treats every vertex as a circle of fixed radius and returns the nearest
/// one containing the point.
#[derive(Debug, Clone, Copy)]
pub struct RadiusPicker {
    radius: f64,
}

impl RadiusPicker {
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    #[must_use]
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.pick_radius)
    }
}

impl Default for RadiusPicker {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl VertexPicker for RadiusPicker {
    fn pick(&self, registry: &PolygonRegistry, point: &Point2) -> Option<VertexId> {
        let r2 = self.radius * self.radius;
        registry
            .vertices()
            .map(|(id, v)| (id, (v.position - *point).norm_squared()))
            .filter(|&(_, d2)| d2 <= r2)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}
