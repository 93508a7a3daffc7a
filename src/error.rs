use thiserror::Error;

/// Top-level error type for the polyear editing core.
#[derive(Debug, Error)]
pub enum PolyearError {
    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Triangulation(#[from] TriangulationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Errors raised by registry and geometry-editor operations.
///
/// Every operation that returns one of these leaves the registry untouched,
/// so callers driving the editor from input events may discard them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no current {0} selected")]
    NoSelection(&'static str),

    #[error("unknown polygon key: {0}")]
    UnknownKey(String),

    #[error("vertex does not belong to any polygon")]
    UnknownVertex,
}

/// Errors raised while decomposing a polygon ring into triangles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    #[error("degenerate input: ring has {len} vertices, at least 3 required")]
    DegenerateInput { len: usize },

    #[error("no valid ear found with {remaining} vertices remaining")]
    UnresolvableEar { remaining: usize },
}

/// Errors raised while reading or writing editor data files.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`PolyearError`].
pub type Result<T> = std::result::Result<T, PolyearError>;
