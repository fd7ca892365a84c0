use thiserror::Error;

/// Top-level error type for territory geometry.
#[derive(Debug, Error)]
pub enum TerritoryError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Errors raised while validating [`GeometryParams`](crate::GeometryParams).
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be finite and positive, got {0}")]
    InvalidCellSize(f64),

    #[error("subdivision factor must be at least 1")]
    ZeroSubdivisions,

    #[error("tolerance {name} must be finite and non-negative, got {value}")]
    InvalidTolerance { name: &'static str, value: f64 },

    #[error("trace point cap {0} is below the minimum closed ring size of {min}", min = crate::geometry::MIN_RING_VERTICES)]
    TraceCapTooSmall(usize),
}

/// Failures of the precise boundary walk.
///
/// Never returned from the public tracer: each variant triggers the
/// bounding-rectangle fallback instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    #[error("supersampled grid has no occupied samples")]
    EmptySubGrid,

    #[error("boundary walk reached a sample with no occupied neighbour at ({x}, {z})")]
    DeadEnd { x: i64, z: i64 },

    #[error("boundary collapsed to {distinct} distinct points")]
    Degenerate { distinct: usize },

    #[error("ring has {0} vertices after simplification")]
    TooFewVertices(usize),
}

/// Convenience type alias for results using [`TerritoryError`].
pub type Result<T> = std::result::Result<T, TerritoryError>;
