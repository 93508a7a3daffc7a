use tracing::debug;

use crate::config::FixtureParams;
use crate::registry::{PolygonKey, PolygonRegistry};
use crate::tessellation::Triangle;

/// Physics-engine side of the Process trigger.
///
/// `build` turns one polygon's triangle soup into convex collision fixtures
/// and returns handles that can later be passed to `destroy`.
pub trait FixtureBuilder {
    type Handle;

    fn build(
        &mut self,
        key: PolygonKey,
        triangles: &[Triangle],
        params: &FixtureParams,
    ) -> Vec<Self::Handle>;

    fn destroy(&mut self, handle: Self::Handle);
}

/// Live fixture handles, grouped by the polygon they were built from.
#[derive(Debug)]
pub struct FixtureSet<H> {
    handles: Vec<(PolygonKey, H)>,
}

impl<H> Default for FixtureSet<H> {
    fn default() -> Self {
        Self {
            handles: Vec::new(),
        }
    }
}

impl<H> FixtureSet<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live fixtures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Handles built for one polygon.
    pub fn handles_for(&self, key: PolygonKey) -> impl Iterator<Item = &H> {
        self.handles
            .iter()
            .filter(move |(k, _)| *k == key)
            .map(|(_, h)| h)
    }

    /// Destroys every live fixture.
    pub fn clear<B>(&mut self, builder: &mut B)
    where
        B: FixtureBuilder<Handle = H>,
    {
        for (_, handle) in self.handles.drain(..) {
            builder.destroy(handle);
        }
    }

    /// Destroys every live fixture, then builds new ones from each
    /// polygon's current triangle set. Polygons without triangles get no
    /// fixtures. Returns the number of fixtures built.
    pub fn rebuild<B>(
        &mut self,
        builder: &mut B,
        registry: &PolygonRegistry,
        params: &FixtureParams,
    ) -> usize
    where
        B: FixtureBuilder<Handle = H>,
    {
        let destroyed = self.handles.len();
        self.clear(builder);
        for (key, polygon) in registry.polygons() {
            let triangles = polygon.triangles();
            if triangles.is_empty() {
                continue;
            }
            let built = builder.build(key, triangles.as_slice(), params);
            self.handles.extend(built.into_iter().map(|h| (key, h)));
        }
        debug!(destroyed, built = self.handles.len(), "fixtures rebuilt");
        self.handles.len()
    }
}
