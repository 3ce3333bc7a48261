use thiserror::Error;

/// Top-level error type for the Minkowski sum kernel.
#[derive(Debug, Error)]
pub enum MinkowskiError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while validating input geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 distinct vertices, found {found}")]
    TooFewVertices { found: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("polygon ring is self-intersecting")]
    SelfIntersecting,
}

/// Errors raised by the sum algorithms themselves.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("segment break-up did not converge after {iterations} iterations")]
    DidNotConverge { iterations: usize },

    #[error("arrangement invalid: {0}")]
    ArrangementInvalid(String),

    #[error("no tie-free rotation found after {attempts} attempts")]
    TieBreakExhausted { attempts: usize },
}

/// Convenience type alias for results using [`MinkowskiError`].
pub type Result<T> = std::result::Result<T, MinkowskiError>;
