//! Descriptor error types.

use std::path::PathBuf;

/// Errors that can occur while loading or serializing module descriptors.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading/writing descriptor files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Descriptor file not found.
    #[error("module descriptor not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Structurally invalid descriptor content.
    #[error("invalid module descriptor: {detail}")]
    InvalidDescriptor {
        /// Description of the problem.
        detail: String,
    },

    /// Semver parse error in the module version field.
    #[error("invalid module version: {0}")]
    SemverVersion(#[from] semver::Error),
}

/// Result type for descriptor operations.
pub type Result<T> = std::result::Result<T, DescriptorError>;
