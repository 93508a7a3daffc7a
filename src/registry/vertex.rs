use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the polygon registry.
    pub struct VertexId;
}

/// A ring vertex as the editor sees it.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// World-space position.
    pub position: Point2,
    /// Whether this is the registry's current vertex.
    pub selected: bool,
}

impl Vertex {
    /// Creates an unselected vertex at the given point.
    #[must_use]
    pub fn new(position: Point2) -> Self {
        Self {
            position,
            selected: false,
        }
    }
}
