//! Error types for QuakeMap

use thiserror::Error;

/// Main error type for QuakeMap operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid point coordinates: expected at least {expected}, got {got}")]
    InvalidCoordinates { expected: usize, got: usize },
}

/// Result type alias for QuakeMap operations
pub type Result<T> = std::result::Result<T, Error>;
