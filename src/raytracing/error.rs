use thiserror::Error;

/// Invalid static scene data, reported while the scene is being built.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("vector has zero or non-finite length and cannot be normalized")]
    DegenerateVector,

    #[error("sphere radius must be positive and finite, got {radius}")]
    DegenerateSphere { radius: f64 },

    #[error("plane normal must be a non-zero finite vector")]
    DegeneratePlane,

    #[error("reflectivity must be in [0, 1], got {0}")]
    InvalidReflectivity(f64),
}
