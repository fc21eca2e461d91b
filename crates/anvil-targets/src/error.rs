//! Error types for target platform operations.

/// Errors that can occur when resolving target platforms.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// Platform name not in the supported set.
    #[error("unknown target platform: '{name}' (supported: {supported})")]
    UnknownPlatform {
        /// The name that failed to parse.
        name: String,
        /// Comma-separated list of supported platform names.
        supported: String,
    },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
