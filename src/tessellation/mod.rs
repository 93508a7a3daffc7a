mod ear_clip;

pub use ear_clip::{triangulate, EarClip};

use crate::math::polygon_2d::triangle_area;
use crate::math::Point2;

/// One clipped ear. Holds copies of the vertex positions, so it stays valid
/// after the source ring is edited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
}

impl Triangle {
    #[must_use]
    pub fn new(p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p1, p2, p3 }
    }

    #[must_use]
    pub fn points(&self) -> [Point2; 3] {
        [self.p1, self.p2, self.p3]
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        triangle_area(&self.p1, &self.p2, &self.p3)
    }

    #[must_use]
    pub fn centroid(&self) -> Point2 {
        Point2::from((self.p1.coords + self.p2.coords + self.p3.coords) / 3.0)
    }
}

/// Ordered triangles decomposing one polygon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleSet {
    triangles: Vec<Triangle>,
}

impl TriangleSet {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Sum of the triangle areas.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }
}

impl FromIterator<Triangle> for TriangleSet {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TriangleSet {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
