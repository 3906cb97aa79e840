//! Error types for bellows layout.

use thiserror::Error;

/// Errors that can occur while loading or laying out a bellows face.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Configuration violates a structural invariant.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Deserialized scene has primitives in the wrong layer or stroke.
    #[error("invalid scene: {0}")]
    InvalidScene(String),

    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for the expected shape.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
