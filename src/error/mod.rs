//! Error handling for `heirloom`.

use std::{fmt, io};

/// Specialized error type for the storage boundary
///
/// The genealogy builder itself never fails; errors only arise from the
/// storage collaborator and snapshot loading.
#[derive(Debug)]
pub enum HeirloomError {
    /// Error opening or reading a snapshot file
    IoError(io::Error),
    /// Error decoding JSON rows
    JsonError(serde_json::Error),
    /// Error reported by the storage collaborator
    StorageError(String),
    /// Input rejected before reaching the storage collaborator
    InvalidInput(String),
}

impl HeirloomError {
    /// Create a storage error with a message
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageError(message.into())
    }

    /// Create an invalid-input error with a message
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<io::Error> for HeirloomError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error)
    }
}

impl From<serde_json::Error> for HeirloomError {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonError(error)
    }
}

impl fmt::Display for HeirloomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::JsonError(e) => write!(f, "JSON error: {e}"),
            Self::StorageError(msg) => write!(f, "Storage error: {msg}"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for HeirloomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(e) => Some(e),
            Self::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for `heirloom` operations
pub type Result<T> = std::result::Result<T, HeirloomError>;
