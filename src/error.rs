use thiserror::Error;

/// Top-level error type for polycover.
#[derive(Debug, Error)]
pub enum PolycoverError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Coverage(#[from] CoverageError),
}

/// Errors related to the input geometry model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("ring has {len} points, at least {min} are required")]
    RingTooShort { len: usize, min: usize },

    #[error("ring is not closed")]
    RingNotClosed,
}

/// Errors raised while building coverage edges.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoverageError {
    /// Every point scanned from `index` is coincident with the reference point.
    #[error("edge does not contain distinct points (scan from index {index} over {len} points)")]
    DegenerateEdge { index: usize, len: usize },

    #[error("index {index} is out of range for ring of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience type alias for results using [`PolycoverError`].
pub type Result<T> = std::result::Result<T, PolycoverError>;
