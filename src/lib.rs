//! Polygon authoring and ear-clipping triangulation for a 2D map editor.
//!
//! ```text
//! registry       polygons, vertices and the current selection
//! operations     editing operations (create, insert, move, remove)
//! tessellation   ear clipping into triangle sets
//! physics        vertex picking and the fixture builder seam
//! process        the "Process" trigger: triangulate, then rebuild fixtures
//! overlay        debug line segments for outlines and triangle edges
//! io             map data and triangle JSON files
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod operations;
pub mod overlay;
pub mod physics;
pub mod process;
pub mod registry;
pub mod tessellation;

pub use config::{EditorConfig, FixtureParams};
pub use error::{EditError, PersistenceError, PolyearError, Result, TriangulationError};
pub use process::{Process, ProcessReport};
pub use registry::{PolygonKey, PolygonRegistry, PolygonStatus, VertexId};
