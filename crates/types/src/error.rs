//! Error raised when loose input cannot form a geometric value.

/// Conversion failure for coordinate input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Input is not a well-formed `[lat, lon]` pair.
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}
