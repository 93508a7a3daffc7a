use crate::error::EditError;
use crate::registry::{PolygonKey, PolygonRegistry, VertexId};

enum Target {
    Key(PolygonKey),
    Vertex(VertexId),
}

/// Deletes a whole polygon and its vertices, addressed either by key or by
/// any of its vertices (what a hit test returns).
pub struct RemovePolygon {
    target: Target,
}

impl RemovePolygon {
    /// Creates a new `RemovePolygon` operation for the polygon with `key`.
    #[must_use]
    pub fn new(key: PolygonKey) -> Self {
        Self {
            target: Target::Key(key),
        }
    }

    /// Creates a new `RemovePolygon` operation for the polygon owning `id`.
    #[must_use]
    pub fn owning(id: VertexId) -> Self {
        Self {
            target: Target::Vertex(id),
        }
    }

    /// Executes the removal, returning the removed polygon's key.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownKey`] or [`EditError::UnknownVertex`] if
    /// the target does not exist.
    pub fn execute(&self, registry: &mut PolygonRegistry) -> Result<PolygonKey, EditError> {
        match self.target {
            Target::Key(key) => registry.remove_polygon(key).map(|()| key),
            Target::Vertex(id) => registry.remove_polygon_of(id),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::operations::editing::MakeQuad;

    #[test]
    fn removes_by_key_and_by_vertex() {
        let mut registry = PolygonRegistry::new();
        let a = MakeQuad::new(Point2::origin()).execute(&mut registry);
        let b = MakeQuad::new(Point2::new(3.0, 0.0)).execute(&mut registry);
        let c = MakeQuad::new(Point2::new(6.0, 0.0)).execute(&mut registry);

        assert_eq!(RemovePolygon::new(a).execute(&mut registry).unwrap(), a);
        let id = registry.polygon(b).unwrap().ring()[3];
        assert_eq!(RemovePolygon::owning(id).execute(&mut registry).unwrap(), b);

        assert_eq!(registry.keys().collect::<Vec<_>>(), vec![c]);
        assert_eq!(registry.vertices().count(), 4);
        assert_eq!(registry.current_polygon(), Some(c));
    }

    #[test]
    fn unknown_target_is_noop() {
        let mut registry = PolygonRegistry::new();
        let a = MakeQuad::new(Point2::origin()).execute(&mut registry);
        RemovePolygon::new(a).execute(&mut registry).unwrap();
        assert!(matches!(
            RemovePolygon::new(a).execute(&mut registry),
            Err(EditError::UnknownKey(_))
        ));
        assert_eq!(registry.current_polygon(), None);
    }
}
