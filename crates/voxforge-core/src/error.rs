//! Error types for VoxForge

use thiserror::Error;

/// The main error type for VoxForge operations.
///
/// Generation itself is infallible: a well-formed seed and category
/// always produce a model. The only fallible surface is parsing a
/// category tag from text.
#[derive(Debug, Error)]
pub enum VoxforgeError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Result type alias using VoxforgeError
pub type Result<T> = std::result::Result<T, VoxforgeError>;
