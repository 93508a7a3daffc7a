use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::math::Point2;
use crate::registry::PolygonRegistry;
use crate::tessellation::Triangle;

/// One saved ring vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    #[serde(rename = "x_")]
    pub x: f64,
    #[serde(rename = "y_")]
    pub y: f64,
}

impl From<Point2> for VertexRecord {
    fn from(p: Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<VertexRecord> for Point2 {
    fn from(r: VertexRecord) -> Self {
        Point2::new(r.x, r.y)
    }
}

/// Editor-only map data: every polygon's vertex ring, in key order.
///
/// Older files spell the key `poligons`; both spellings load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    #[serde(alias = "poligons", default)]
    pub polygons: Vec<Vec<VertexRecord>>,
}

impl MapData {
    /// Snapshots the registry's rings.
    #[must_use]
    pub fn from_registry(registry: &PolygonRegistry) -> Self {
        let polygons = registry
            .polygons()
            .map(|(key, _)| {
                registry
                    .ring_positions(key)
                    .unwrap_or_default()
                    .into_iter()
                    .map(VertexRecord::from)
                    .collect()
            })
            .collect();
        Self { polygons }
    }

    /// Replaces the registry's contents with these rings. Keys restart at
    /// `Polygon0` in file order and the last polygon becomes current.
    /// Returns the number of polygons loaded.
    pub fn apply(&self, registry: &mut PolygonRegistry) -> usize {
        registry.clear();
        let mut last = None;
        for ring in &self.polygons {
            let positions: Vec<Point2> = ring.iter().copied().map(Point2::from).collect();
            last = Some(registry.add_polygon(&positions));
        }
        if let Some(key) = last {
            let _ = registry.select_polygon(key);
        }
        self.polygons.len()
    }

    /// Parses map data from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Json`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes map data to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One saved triangle, flattened the way the scene file stores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleRecord {
    #[serde(rename = "p1_x_")]
    pub p1_x: f64,
    #[serde(rename = "p1_y_")]
    pub p1_y: f64,
    #[serde(rename = "p2_x_")]
    pub p2_x: f64,
    #[serde(rename = "p2_y_")]
    pub p2_y: f64,
    #[serde(rename = "p3_x_")]
    pub p3_x: f64,
    #[serde(rename = "p3_y_")]
    pub p3_y: f64,
}

impl From<&Triangle> for TriangleRecord {
    fn from(t: &Triangle) -> Self {
        Self {
            p1_x: t.p1.x,
            p1_y: t.p1.y,
            p2_x: t.p2.x,
            p2_y: t.p2.y,
            p3_x: t.p3.x,
            p3_y: t.p3.y,
        }
    }
}

impl From<TriangleRecord> for Triangle {
    fn from(r: TriangleRecord) -> Self {
        Triangle::new(
            Point2::new(r.p1_x, r.p1_y),
            Point2::new(r.p2_x, r.p2_y),
            Point2::new(r.p3_x, r.p3_y),
        )
    }
}

/// The `triangles` section of the scene file: one entry per polygon, in the
/// same order as [`MapData::polygons`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleData {
    #[serde(default)]
    pub triangles: Vec<Vec<TriangleRecord>>,
}

impl TriangleData {
    /// Snapshots each polygon's last triangle set.
    #[must_use]
    pub fn from_registry(registry: &PolygonRegistry) -> Self {
        let triangles = registry
            .polygons()
            .map(|(_, polygon)| polygon.triangles().iter().map(TriangleRecord::from).collect())
            .collect();
        Self { triangles }
    }

    /// Parses triangle data from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Json`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes triangle data to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Loads a map data file into the registry, replacing its contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed. The registry is
/// untouched in that case.
pub fn load_map_data(
    path: impl AsRef<Path>,
    registry: &mut PolygonRegistry,
) -> Result<usize, PersistenceError> {
    let json = fs::read_to_string(path)?;
    let data = MapData::from_json(&json)?;
    Ok(data.apply(registry))
}

/// Writes the registry's rings to a map data file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_map_data(
    path: impl AsRef<Path>,
    registry: &PolygonRegistry,
) -> Result<(), PersistenceError> {
    fs::write(path, MapData::from_registry(registry).to_json()?)?;
    Ok(())
}

/// Writes every polygon's triangle set to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_triangles(
    path: impl AsRef<Path>,
    registry: &PolygonRegistry,
) -> Result<(), PersistenceError> {
    fs::write(path, TriangleData::from_registry(registry).to_json()?)?;
    Ok(())
}
