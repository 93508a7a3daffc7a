use serde::{Deserialize, Serialize};

/// Physical material applied to every collision fixture built from a
/// polygon's triangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureParams {
    pub density: f64,
    pub friction: f64,
    pub restitution: f64,
    /// Collision category bits assigned to polygon fixtures.
    pub category_bits: u16,
}

impl Default for FixtureParams {
    fn default() -> Self {
        Self {
            density: 1.0,
            friction: 0.0,
            restitution: 0.1,
            category_bits: 0x8000,
        }
    }
}

/// Editor-wide settings.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial settings file is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Side length of the square created by a new polygon.
    pub quad_size: f64,
    /// Grid step that new polygon origins snap to. `None` disables snapping.
    pub grid_step: Option<f64>,
    /// Radius of the circle that makes a vertex pickable.
    pub pick_radius: f64,
    pub fixture: FixtureParams,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            quad_size: 1.0,
            grid_step: None,
            pick_radius: 0.1,
            fixture: FixtureParams::default(),
        }
    }
}

impl EditorConfig {
    /// Parses settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or a field has the
    /// wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
