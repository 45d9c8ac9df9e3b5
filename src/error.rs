//! Error types
//!
//! Rendering itself cannot fail; errors only come from validating input
//! (numbers, block glyphs) and from writing to the output sink.

/// Error type for display operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Negative numbers cannot be displayed: {0}")]
    InvalidInput(String),

    #[error("Not a decimal number: {0:?}")]
    Parse(String),

    #[error("Block character {0:?} must occupy exactly one column")]
    InvalidBlockChar(char),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for display operations
pub type Result<T> = std::result::Result<T, Error>;
