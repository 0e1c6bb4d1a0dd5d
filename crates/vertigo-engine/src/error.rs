use thiserror::Error;

/// Shape construction failure.
///
/// Not retryable: the caller has to rebuild the shape with valid parameters.
/// Transform operations and collision queries never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("a circle must have 3 or more sides, not {sides}")]
    InvalidSides { sides: u32 },
}
