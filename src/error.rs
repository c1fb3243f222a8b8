use thiserror::Error;

/// Top-level error type for the worldmath helpers.
#[derive(Debug, Error)]
pub enum WorldMathError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors caused by degenerate geometric input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("{quantity} spans an empty range")]
    ZeroRange { quantity: &'static str },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors caused by malformed arguments.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("polygon coordinate arrays differ in length: {xs} x values, {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },
}

/// Convenience type alias for results using [`WorldMathError`].
pub type Result<T> = std::result::Result<T, WorldMathError>;
