use thiserror::Error;

/// Top-level error type for the hgeom kernel.
#[derive(Debug, Error)]
pub enum HgeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

/// Errors raised while constructing primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    #[error("point at infinity (w = {0})")]
    PointAtInfinity(f64),
}

/// Errors raised by [`Homogr`](crate::operations::transform::Homogr) operations.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("singular matrix (determinant = {determinant})")]
    SingularMatrix { determinant: f64 },

    #[error("unsupported transform: {0}")]
    UnsupportedTransform(String),
}

/// Errors raised while ingesting foreign polygon data.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("malformed ring: closed ring needs at least 3 distinct points, got {distinct}")]
    MalformedRing { distinct: usize },
}

impl HgeomError {
    /// Returns `true` for the degenerate-input family of errors.
    #[must_use]
    pub fn is_degenerate_input(&self) -> bool {
        matches!(self, Self::Geometry(_))
    }
}

/// Convenience type alias for results using [`HgeomError`].
pub type Result<T> = std::result::Result<T, HgeomError>;
