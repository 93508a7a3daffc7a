//! Debug lines for the host renderer: polygon outlines and triangle edges.

use crate::math::Point2;
use crate::registry::{PolygonRegistry, PolygonStatus};

/// What an overlay line depicts; the host picks a colour per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Outline,
    /// Outline of a polygon whose last triangulation failed.
    FailedOutline,
    TriangleEdge,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLine {
    pub from: Point2,
    pub to: Point2,
    pub kind: OverlayKind,
}

/// Builds the overlay for every polygon: ring edges including the closing
/// edge, then the edges of each stored triangle.
#[must_use]
pub fn overlay(registry: &PolygonRegistry) -> Vec<OverlayLine> {
    let mut lines = Vec::new();
    for (key, polygon) in registry.polygons() {
        let kind = if polygon.status() == PolygonStatus::Failed {
            OverlayKind::FailedOutline
        } else {
            OverlayKind::Outline
        };
        let ring = registry.ring_positions(key).unwrap_or_default();
        if ring.len() >= 2 {
            for (i, &from) in ring.iter().enumerate() {
                let to = ring[(i + 1) % ring.len()];
                lines.push(OverlayLine { from, to, kind });
            }
        }
        for t in polygon.triangles() {
            for (from, to) in [(t.p1, t.p2), (t.p2, t.p3), (t.p3, t.p1)] {
                lines.push(OverlayLine {
                    from,
                    to,
                    kind: OverlayKind::TriangleEdge,
                });
            }
        }
    }
    lines
}
