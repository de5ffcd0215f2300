//! Error types for the bluecone engine.

use bluecone_types::GeometryError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BlueconeError>;

#[derive(Debug, thiserror::Error)]
pub enum BlueconeError {
    /// Malformed or out-of-range input: a coordinate that is not a
    /// `[lat, lon]` pair, a non-positive radius, an angle outside (0, 360].
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<GeometryError> for BlueconeError {
    fn from(err: GeometryError) -> Self {
        match err {
            GeometryError::InvalidCoordinates(msg) => Self::InvalidArgument(msg),
        }
    }
}

impl BlueconeError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
