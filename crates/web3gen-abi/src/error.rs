//! Error types for ABI loading and interpretation

use thiserror::Error;

/// Result type alias for ABI operations
pub type Result<T> = std::result::Result<T, AbiError>;

/// Errors that can occur while loading or interpreting a contract ABI
#[derive(Debug, Error)]
pub enum AbiError {
    /// The ABI document could not be parsed or is structurally invalid
    #[error("Malformed ABI: {0}")]
    MalformedAbi(String),

    /// An ABI type string is outside the supported grammar
    #[error("Unsupported ABI type: {0}")]
    UnsupportedType(String),

    /// Reading the ABI document from disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AbiError {
    /// Create a MalformedAbi error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedAbi(msg.into())
    }

    /// Create an UnsupportedType error
    pub fn unsupported(ty: impl Into<String>) -> Self {
        Self::UnsupportedType(ty.into())
    }
}
